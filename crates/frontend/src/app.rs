use crate::domain::product_summary::provide_product_summary;
use crate::domain::product_summary::ui::product_summary_sku_selector::ordered_view;
use crate::domain::product_summary::ui::ProductSummarySkuSelector;
use crate::shared::query_sync::{current_search, parse_sku_query, sync_query_to_url};
use contracts::domain::product_summary::{handle_sku_selected, order_product, Product};
use contracts::shared::sku_selector_settings::{InitialSelection, SkuSelectorSettings};
use leptos::prelude::*;

const DEMO_PRODUCT: &str = include_str!("../assets/demo_product.json");
const SKU_SELECTOR_SETTINGS: &str = include_str!("../assets/sku_selector.toml");

/// SKU to select on mount: `skuId` from the URL, otherwise the first
/// displayed item when a complete initial selection is configured
fn initial_sku(product: &Product, settings: &SkuSelectorSettings, search: &str) -> Option<String> {
    if let Some(sku_id) = parse_sku_query(search) {
        return Some(sku_id);
    }
    if settings.initial_selection != InitialSelection::Complete {
        return None;
    }
    order_product(product, &settings.ordering_options())
        .ok()
        .and_then(|view| view.items.first().map(|item| item.item_id.clone()))
}

#[component]
pub fn App() -> impl IntoView {
    let product = Product::from_json(DEMO_PRODUCT).unwrap_or_else(|err| {
        log::error!("failed to parse demo product: {}", err);
        Product::default()
    });
    let settings = SkuSelectorSettings::load_from_str(SKU_SELECTOR_SETTINGS).unwrap_or_else(|err| {
        log::warn!("invalid SKU selector settings, using defaults: {}", err);
        SkuSelectorSettings::default()
    });

    let ctx = provide_product_summary(product.clone());

    if let Some(sku_id) = initial_sku(&product, &settings, &current_search()) {
        let items = ordered_view(&product, &settings.ordering_options()).items;
        if let Err(err) = handle_sku_selected(&ctx, &items, &product, Some(&sku_id)) {
            log::warn!("initial SKU {} not applied: {}", sku_id, err);
        }
    }

    // Mirror the product query in the page URL
    Effect::new(move |_| {
        let query = ctx.query();
        sync_query_to_url(&query);
    });

    let product_name = product.product_name;
    let selected_summary = move || {
        ctx.state.with(|state| {
            state.product.sku.as_ref().map(|sku| {
                format!(
                    "{}: {:.2} ({})",
                    sku.item.name, sku.seller.commertial_offer.price, sku.seller.seller_name
                )
            })
        })
    };

    view! {
        <main class="product-summary">
            <h2 class="product-summary__name">{product_name}</h2>
            <ProductSummarySkuSelector settings=settings />
            <p class="product-summary__selected">{selected_summary}</p>
        </main>
    }
}
