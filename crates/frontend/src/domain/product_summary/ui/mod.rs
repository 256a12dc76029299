pub mod product_summary_sku_selector;
pub mod sku_selector;

pub use product_summary_sku_selector::ProductSummarySkuSelector;
pub use sku_selector::SkuSelector;
