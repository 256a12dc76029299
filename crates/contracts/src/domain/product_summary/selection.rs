//! Selection resolver: turns a picked SKU id into the next product state

use super::aggregate::{Item, Product, Seller, Sku};
use super::error::{ProductSummaryError, ProductSummaryResult};
use super::seller::default_seller_policy;
use serde::{Deserialize, Serialize};

/// Query parameter carrying the selected SKU
pub const SKU_QUERY_KEY: &str = "skuId";

/// Product state and query string produced by one selection event.
///
/// Both parts belong to the same transition and are applied together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionUpdate {
    pub product: Product,
    pub query: String,
}

impl SelectionUpdate {
    pub fn is_cleared(&self) -> bool {
        self.query.is_empty()
    }
}

/// `skuId=<id>`
pub fn sku_query(item_id: &str) -> String {
    format!("{}={}", SKU_QUERY_KEY, item_id)
}

/// Resolve a selection with the default-seller policy of the storefront
pub fn resolve_selection(
    items: &[Item],
    current: &Product,
    selected_id: Option<&str>,
) -> ProductSummaryResult<SelectionUpdate> {
    resolve_selection_with(items, current, selected_id, default_seller_policy)
}

/// Resolve a selection with a custom default-seller policy.
///
/// `None` clears the selection. An id that matches no item, an item
/// without images or without sellers is an error and yields no update.
pub fn resolve_selection_with<P>(
    items: &[Item],
    current: &Product,
    selected_id: Option<&str>,
    seller_policy: P,
) -> ProductSummaryResult<SelectionUpdate>
where
    P: Fn(&[Seller]) -> ProductSummaryResult<Seller>,
{
    let Some(sku_id) = selected_id else {
        log::debug!("selection cleared for product {}", current.product_id);
        return Ok(SelectionUpdate {
            product: current.without_selection(),
            query: String::new(),
        });
    };

    let selected_item = items
        .iter()
        .find(|item| item.item_id == sku_id)
        .ok_or_else(|| ProductSummaryError::ItemNotFound(sku_id.to_string()))?;

    let image = selected_item
        .images
        .first()
        .cloned()
        .ok_or_else(|| ProductSummaryError::EmptyImageSet(sku_id.to_string()))?;

    if selected_item.sellers.is_empty() {
        return Err(ProductSummaryError::EmptySellerSet(sku_id.to_string()));
    }
    let seller = seller_policy(&selected_item.sellers).map_err(|err| match err {
        ProductSummaryError::EmptySellerSet(id) if id.is_empty() => {
            ProductSummaryError::EmptySellerSet(sku_id.to_string())
        }
        other => other,
    })?;

    log::debug!(
        "sku {} selected, default seller {}",
        sku_id,
        seller.seller_id
    );

    let sku = Sku {
        item: selected_item.clone(),
        image,
        seller,
    };

    Ok(SelectionUpdate {
        product: Product {
            selected_item: Some(selected_item.clone()),
            sku: Some(sku),
            ..current.clone()
        },
        query: sku_query(sku_id),
    })
}
