pub mod context;
pub mod ui;

pub use context::{provide_product_summary, use_product_summary, ProductSummaryContext};
