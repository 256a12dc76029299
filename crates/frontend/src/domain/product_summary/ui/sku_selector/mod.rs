//! Minimal SKU selector widget: one option list per variant axis, or a
//! single list of items when the product has no specifications.

pub mod variations;

use crate::shared::css_handles::CustomClasses;
use contracts::domain::product_summary::{Item, SkuSpecification};
use contracts::shared::sku_selector_settings::SkuSelectorSettings;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};
use variations::{is_value_available, item_for_choice, item_label, split_visible, visible_axes};

#[component]
pub fn SkuSelector(
    /// Items in display order
    #[prop(into)]
    items: Signal<Vec<Item>>,
    /// Specifications in display order
    #[prop(into)]
    sku_specifications: Signal<Vec<SkuSpecification>>,
    #[prop(into)]
    selected_item: Signal<Option<Item>>,
    /// Receives the picked item id, or `None` when the selection is cleared
    on_sku_selected: Callback<Option<String>>,
    settings: StoredValue<SkuSelectorSettings>,
    classes: StoredValue<CustomClasses>,
) -> impl IntoView {
    let class = move |slot: &str| classes.with_value(|c| c.class(slot, &[]));

    view! {
        <div class=class("skuSelectorContainer")>
            {move || {
                let axes = settings.with_value(|s| visible_axes(&sku_specifications.get(), s));
                if axes.is_empty() {
                    view! {
                        <ItemOptions
                            items=items
                            selected_item=selected_item
                            on_sku_selected=on_sku_selected
                            settings=settings
                            classes=classes
                        />
                    }
                    .into_any()
                } else {
                    axes.into_iter()
                        .map(|spec| {
                            view! {
                                <VariationAxis
                                    spec=spec
                                    items=items
                                    selected_item=selected_item
                                    on_sku_selected=on_sku_selected
                                    settings=settings
                                    classes=classes
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

/// Option list of one variant axis
#[component]
fn VariationAxis(
    spec: SkuSpecification,
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] selected_item: Signal<Option<Item>>,
    on_sku_selected: Callback<Option<String>>,
    settings: StoredValue<SkuSelectorSettings>,
    classes: StoredValue<CustomClasses>,
) -> impl IntoView {
    let axis = StoredValue::new(spec.field.name.clone());
    let values = StoredValue::new(spec.values);
    let expanded = RwSignal::new(false);
    let class = move |slot: &str, modifiers: &[&str]| classes.with_value(|c| c.class(slot, modifiers));

    let selected_value = move || {
        let axis_name = axis.get_value();
        selected_item.with(|selected| {
            selected
                .as_ref()
                .and_then(|item| item.variation_value(&axis_name))
                .map(str::to_string)
        })
    };

    let pick = move |value: String| {
        let axis_name = axis.get_value();
        let current = selected_item.get_untracked();
        let already_selected =
            current.as_ref().and_then(|item| item.variation_value(&axis_name)) == Some(value.as_str());
        if already_selected {
            on_sku_selected.run(None);
            return;
        }

        let picked = items.with_untracked(|items| {
            item_for_choice(items, current.as_ref(), &axis_name, &value)
                .map(|item| item.item_id.clone())
        });
        match picked {
            Some(item_id) => on_sku_selected.run(Some(item_id)),
            None => log::warn!("no item offers {} = {}", axis_name, value),
        }
    };

    let options = move || {
        let axis_name = axis.get_value();
        let (max_items, hide_impossible) =
            settings.with_value(|s| (s.max_items, s.hide_impossible_combinations));
        let available: Vec<(String, bool)> = items.with(|items| {
            values.with_value(|values| {
                values
                    .iter()
                    .map(|v| (v.name.clone(), is_value_available(items, &axis_name, &v.name)))
                    .filter(|(_, available)| !hide_impossible || *available)
                    .collect()
            })
        });
        split_visible(available, max_items, expanded.get())
    };

    view! {
        <div class=class("skuSelectorSubcontainer", &[])>
            <Show when=move || settings.with_value(|s| s.show_variations_labels)>
                <div class=class("skuSelectorNameContainer", &[])>
                    <span class=class("skuSelectorName", &[])>{move || axis.get_value()}</span>
                    <span class=class("skuSelectorNameSeparator", &[])>":"</span>
                </div>
            </Show>
            <div class=class("skuSelectorOptionsList", &[])>
                {move || {
                    let (shown, hidden) = options();
                    let selected = selected_value();
                    let buttons = shown
                        .into_iter()
                        .map(|(name, available)| {
                            let is_selected = selected.as_deref() == Some(name.as_str());
                            let mut modifiers = Vec::new();
                            if is_selected {
                                modifiers.push("selected");
                            }
                            if !available {
                                modifiers.push("unavailable");
                            }
                            let value = name.clone();
                            view! {
                                <div class=class("frameAround", &modifiers)>
                                    <button
                                        class=class("skuSelectorItem", &modifiers)
                                        on:click=move |_| pick(value.clone())
                                    >
                                        <div class=class("skuSelectorInternalBox", &[])>
                                            <span class=class("skuSelectorItemTextValue", &[])>
                                                {name}
                                            </span>
                                        </div>
                                    </button>
                                </div>
                            }
                        })
                        .collect_view();

                    let see_more = (hidden > 0).then(|| {
                        let label = settings.with_value(|s| s.see_more_text(hidden));
                        view! {
                            <div class=class("seeMoreButton", &[])>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| expanded.set(true)
                                >
                                    {label}
                                </Button>
                            </div>
                        }
                    });

                    view! { {buttons} {see_more} }
                }}
            </div>
        </div>
    }
}

/// Option list of items, used when the product has no specifications
#[component]
fn ItemOptions(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] selected_item: Signal<Option<Item>>,
    on_sku_selected: Callback<Option<String>>,
    settings: StoredValue<SkuSelectorSettings>,
    classes: StoredValue<CustomClasses>,
) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let class = move |slot: &str, modifiers: &[&str]| classes.with_value(|c| c.class(slot, modifiers));

    let pick = move |item_id: String| {
        let already_selected = selected_item
            .with_untracked(|selected| selected.as_ref().map(|i| i.item_id == item_id))
            .unwrap_or(false);
        if already_selected {
            on_sku_selected.run(None);
        } else {
            on_sku_selected.run(Some(item_id));
        }
    };

    view! {
        <div class=class("skuSelectorOptionsList", &[])>
            {move || {
                let max_items = settings.with_value(|s| s.max_items);
                let (shown, hidden) = split_visible(items.get(), max_items, expanded.get());
                let selected_id = selected_item.with(|s| s.as_ref().map(|i| i.item_id.clone()));

                let buttons = shown
                    .into_iter()
                    .map(|item| {
                        let modifiers: &[&str] = if selected_id.as_deref() == Some(item.item_id.as_str()) {
                            &["selected"]
                        } else {
                            &[]
                        };
                        let label = item_label(&item);
                        let item_id = item.item_id.clone();
                        view! {
                            <div class=class("frameAround", modifiers)>
                                <button
                                    class=class("skuSelectorItem", modifiers)
                                    on:click=move |_| pick(item_id.clone())
                                >
                                    <span class=class("skuSelectorItemTextValue", &[])>{label}</span>
                                </button>
                            </div>
                        }
                    })
                    .collect_view();

                let see_more = (hidden > 0).then(|| {
                    let label = settings.with_value(|s| s.see_more_text(hidden));
                    view! {
                        <div class=class("seeMoreButton", &[])>
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| expanded.set(true)
                            >
                                {label}
                            </Button>
                        </div>
                    }
                });

                view! { {buttons} {see_more} }
            }}
        </div>
    }
}
