use super::sku_selector::SkuSelector;
use crate::domain::product_summary::context::use_product_summary;
use crate::shared::css_handles::{
    sku_selector_classes, CssHandles, CONTAINER_HANDLE, PRODUCT_SUMMARY_NAMESPACE,
};
use contracts::domain::product_summary::{
    handle_sku_selected, order_items, order_product, Item, OrderingOptions, Product,
    ProductSummaryDispatch, ProductView,
};
use contracts::shared::sku_selector_settings::SkuSelectorSettings;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Display order of `product`, or its catalog order when ordering fails
pub fn ordered_view(product: &Product, options: &OrderingOptions) -> ProductView {
    order_product(product, options).unwrap_or_else(|err| {
        log::warn!(
            "variant ordering failed for product {}, keeping catalog order: {}",
            product.product_id,
            err
        );
        ProductView::unsorted(product)
    })
}

/// Caller-supplied items in display order, or as given when ordering fails
pub fn ordered_items(items: &[Item], options: &OrderingOptions) -> Vec<Item> {
    order_items(items, options).unwrap_or_else(|err| {
        log::warn!("item ordering failed, keeping given order: {}", err);
        items.to_vec()
    })
}

/// Resolve and dispatch a picked SKU, then hand its id to `notify`.
///
/// A selection that cannot be resolved is logged and dropped: nothing is
/// dispatched and `notify` is not called. Clearing never notifies.
pub fn select_sku<D, F>(
    dispatch: &D,
    items: &[Item],
    current: &Product,
    sku_id: Option<String>,
    notify: F,
) where
    D: ProductSummaryDispatch + ?Sized,
    F: FnOnce(String),
{
    match handle_sku_selected(dispatch, items, current, sku_id.as_deref()) {
        Ok(()) => {
            if let Some(sku_id) = sku_id {
                notify(sku_id);
            }
        }
        Err(err) => log::warn!("SKU selection ignored: {}", err),
    }
}

/// SKU selector of a product summary card.
///
/// Orders the product's variants for display and writes the picked SKU back
/// to the product-summary context. Ordering failures fall back to catalog
/// order; selections that cannot be resolved are ignored. Both are logged.
#[component]
pub fn ProductSummarySkuSelector(
    /// Display and ordering settings
    #[prop(optional)]
    settings: Option<SkuSelectorSettings>,
    /// Items to offer instead of the context product's items
    #[prop(optional, into)]
    sku_items: Option<Signal<Vec<Item>>>,
    /// Selected item to show instead of the context product's selection
    #[prop(optional, into)]
    sku_selected: Option<Signal<Option<Item>>>,
    /// Called with the item id after a selection has been applied
    #[prop(optional)]
    on_sku_selected: Option<Callback<String>>,
    /// Extra classes per CSS handle
    #[prop(optional)]
    classes: Option<BTreeMap<String, String>>,
) -> impl IntoView {
    let ctx = use_product_summary();
    let settings = settings.unwrap_or_default();
    let ordering = StoredValue::new(settings.ordering_options());
    let settings = StoredValue::new(settings);

    let handles = CssHandles::with_custom(PRODUCT_SUMMARY_NAMESPACE, &classes.unwrap_or_default());
    let container_class = handles.get(CONTAINER_HANDLE).to_string();
    let widget_classes = StoredValue::new(sku_selector_classes(&handles));

    let ordered = Memo::new(move |_| {
        let mut view = ordering.with_value(|options| {
            ctx.state.with(|state| ordered_view(&state.product, options))
        });
        if let Some(items) = sku_items {
            view.items =
                ordering.with_value(|options| items.with(|items| ordered_items(items, options)));
        }
        view
    });

    let selected_item = Signal::derive(move || match sku_selected {
        Some(selected) => selected.get(),
        None => ctx.state.with(|state| state.product.selected_item.clone()),
    });

    let on_select = Callback::new(move |sku_id: Option<String>| {
        let items = ordered.with_untracked(|view| view.items.clone());
        let current = ctx.product_untracked();
        select_sku(&ctx, &items, &current, sku_id, |sku_id| {
            if let Some(callback) = on_sku_selected {
                callback.run(sku_id);
            }
        });
    });

    let stop_bubbling_up = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    view! {
        <div class=container_class on:click=stop_bubbling_up>
            <SkuSelector
                items=Signal::derive(move || ordered.with(|view| view.items.clone()))
                sku_specifications=Signal::derive(move || {
                    ordered.with(|view| view.sku_specifications.clone())
                })
                selected_item=selected_item
                on_sku_selected=on_select
                settings=settings
                classes=widget_classes
            />
        </div>
    }
}
