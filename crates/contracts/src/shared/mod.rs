pub mod sku_selector_settings;
