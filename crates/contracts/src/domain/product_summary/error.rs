use thiserror::Error;

/// Errors of SKU ordering and selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductSummaryError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item {0} has no images")]
    EmptyImageSet(String),

    #[error("Item {0} has no sellers")]
    EmptySellerSet(String),

    #[error("Variant value is neither a known size nor a number: {0}")]
    MalformedVariantValue(String),
}

pub type ProductSummaryResult<T> = Result<T, ProductSummaryError>;
