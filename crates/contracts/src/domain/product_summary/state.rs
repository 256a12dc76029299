//! Product-summary state and its update channel

use super::aggregate::{Item, Product};
use super::error::ProductSummaryResult;
use super::selection::{resolve_selection, sku_query, SelectionUpdate};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Storefront dispatch actions, `{ "type": "SET_PRODUCT", "args": { .. } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "args", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSummaryAction {
    SetProduct { product: Product },
    SetProductQuery { query: String },
}

impl SelectionUpdate {
    /// The update as the two storefront actions: product first, query second
    pub fn into_actions(self) -> [ProductSummaryAction; 2] {
        [
            ProductSummaryAction::SetProduct {
                product: self.product,
            },
            ProductSummaryAction::SetProductQuery { query: self.query },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductSummaryState {
    pub product: Product,
    pub query: String,
}

/// Query matching the product's selected item, empty when nothing is selected
fn query_for(product: &Product) -> String {
    product
        .selected_item
        .as_ref()
        .map(|item| sku_query(&item.item_id))
        .unwrap_or_default()
}

impl ProductSummaryState {
    pub fn new(product: Product) -> Self {
        let query = query_for(&product);
        Self { product, query }
    }

    /// Apply a single storefront action.
    ///
    /// `SetProduct` also resets the query to the new product's selection;
    /// a following `SetProductQuery` may replace it.
    pub fn reduce(&mut self, action: ProductSummaryAction) {
        match action {
            ProductSummaryAction::SetProduct { product } => {
                self.query = query_for(&product);
                self.product = product;
            }
            ProductSummaryAction::SetProductQuery { query } => self.query = query,
        }
    }

    /// Apply both parts of a selection in one transition
    pub fn apply(&mut self, update: SelectionUpdate) {
        for action in update.into_actions() {
            self.reduce(action);
        }
    }

    pub fn selected_item_id(&self) -> Option<&str> {
        self.product
            .selected_item
            .as_ref()
            .map(|item| item.item_id.as_str())
    }
}

/// Explicit update channel for product-summary state
pub trait ProductSummaryDispatch {
    fn dispatch(&self, update: SelectionUpdate);
}

impl ProductSummaryDispatch for RefCell<ProductSummaryState> {
    fn dispatch(&self, update: SelectionUpdate) {
        self.borrow_mut().apply(update);
    }
}

/// Resolve a picked SKU against `items` and hand the result to `dispatch`.
///
/// Nothing is dispatched when resolution fails.
pub fn handle_sku_selected<D>(
    dispatch: &D,
    items: &[Item],
    current: &Product,
    selected_id: Option<&str>,
) -> ProductSummaryResult<()>
where
    D: ProductSummaryDispatch + ?Sized,
{
    let update = resolve_selection(items, current, selected_id)?;
    dispatch.dispatch(update);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product_summary::aggregate::{Image, Seller};
    use crate::domain::product_summary::error::ProductSummaryError;

    fn product() -> Product {
        Product {
            product_id: "P1".into(),
            items: vec![Item {
                item_id: "42".into(),
                images: vec![Image::default()],
                sellers: vec![Seller::default()],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_actions_are_ordered() {
        let product = product();
        let update = resolve_selection(&product.items, &product, Some("42")).unwrap();
        let [first, second] = update.into_actions();
        assert!(matches!(first, ProductSummaryAction::SetProduct { .. }));
        assert_eq!(
            second,
            ProductSummaryAction::SetProductQuery {
                query: "skuId=42".into()
            }
        );
    }

    #[test]
    fn test_action_wire_shape() {
        let action = ProductSummaryAction::SetProductQuery {
            query: "skuId=1".into(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "SET_PRODUCT_QUERY", "args": { "query": "skuId=1" } })
        );
    }

    #[test]
    fn test_dispatch_applies_product_and_query() {
        let product = product();
        let state = RefCell::new(ProductSummaryState::new(product.clone()));

        handle_sku_selected(&state, &product.items, &product, Some("42")).unwrap();
        assert_eq!(state.borrow().query, "skuId=42");
        assert_eq!(state.borrow().selected_item_id(), Some("42"));

        let current = state.borrow().product.clone();
        handle_sku_selected(&state, &product.items, &current, None).unwrap();
        assert_eq!(state.borrow().query, "");
        assert_eq!(state.borrow().selected_item_id(), None);
    }

    #[test]
    fn test_query_follows_preselected_item() {
        let mut product = product();
        product.selected_item = Some(product.items[0].clone());
        let state = ProductSummaryState::new(product.clone());
        assert_eq!(state.query, "skuId=42");

        let mut state = ProductSummaryState::default();
        state.reduce(ProductSummaryAction::SetProduct { product });
        assert_eq!(state.query, "skuId=42");

        state.reduce(ProductSummaryAction::SetProduct {
            product: Product::default(),
        });
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_failed_selection_leaves_state_untouched() {
        let product = product();
        let state = RefCell::new(ProductSummaryState::new(product.clone()));
        handle_sku_selected(&state, &product.items, &product, Some("42")).unwrap();
        let before = state.borrow().clone();

        let err = handle_sku_selected(&state, &product.items, &product, Some("missing-id"))
            .unwrap_err();
        assert_eq!(err, ProductSummaryError::ItemNotFound("missing-id".into()));
        assert_eq!(*state.borrow(), before);
    }
}
