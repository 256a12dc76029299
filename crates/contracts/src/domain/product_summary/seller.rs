use super::aggregate::Seller;
use super::error::{ProductSummaryError, ProductSummaryResult};

/// Seller flagged as default, otherwise the first one
pub fn get_default_seller(sellers: &[Seller]) -> Option<&Seller> {
    sellers
        .iter()
        .find(|seller| seller.seller_default)
        .or_else(|| sellers.first())
}

/// Default-seller policy used by the selection resolver.
///
/// The error carries no item id; `resolve_selection_with` fills in the id of
/// the item being selected.
pub fn default_seller_policy(sellers: &[Seller]) -> ProductSummaryResult<Seller> {
    get_default_seller(sellers)
        .cloned()
        .ok_or_else(|| ProductSummaryError::EmptySellerSet(String::new()))
}
