pub mod product_summary;
