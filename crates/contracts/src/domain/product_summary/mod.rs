pub mod aggregate;
pub mod error;
pub mod ordering;
pub mod selection;
pub mod seller;
pub mod sizes;
pub mod state;

pub use aggregate::{
    CommercialOffer, Image, Item, Product, ReferenceId, Seller, Sku, SkuSpecification,
    SpecificationField, VariantValue, Variation,
};
pub use error::{ProductSummaryError, ProductSummaryResult};
pub use ordering::{
    order_items, order_product, order_values, OrderingOptions, ProductView, SortMode,
    UnparsedPolicy,
};
pub use selection::{resolve_selection, resolve_selection_with, sku_query, SelectionUpdate};
pub use seller::{default_seller_policy, get_default_seller};
pub use sizes::SizeOrder;
pub use state::{
    handle_sku_selected, ProductSummaryAction, ProductSummaryDispatch, ProductSummaryState,
};
