pub mod css_handles;
pub mod query_sync;
