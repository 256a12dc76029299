use contracts::domain::product_summary::{
    Product, ProductSummaryDispatch, ProductSummaryState, SelectionUpdate,
};
use leptos::prelude::*;

/// Product-summary state shared by the blocks of one product card
#[derive(Clone, Copy)]
pub struct ProductSummaryContext {
    pub state: RwSignal<ProductSummaryState>,
}

impl ProductSummaryContext {
    pub fn new(product: Product) -> Self {
        Self {
            state: RwSignal::new(ProductSummaryState::new(product)),
        }
    }

    pub fn product_untracked(&self) -> Product {
        self.state.with_untracked(|state| state.product.clone())
    }

    pub fn query(&self) -> String {
        self.state.with(|state| state.query.clone())
    }
}

impl ProductSummaryDispatch for ProductSummaryContext {
    /// Product and query are written in a single signal update, so
    /// subscribers never observe one without the other.
    fn dispatch(&self, update: SelectionUpdate) {
        self.state.update(|state| state.apply(update));
    }
}

pub fn provide_product_summary(product: Product) -> ProductSummaryContext {
    let context = ProductSummaryContext::new(product);
    provide_context(context);
    context
}

pub fn use_product_summary() -> ProductSummaryContext {
    use_context::<ProductSummaryContext>()
        .expect("ProductSummaryContext not found. Call provide_product_summary first.")
}
