//! Canonical size order used to sort size-like variant axes

/// Known size tokens in display order. International and Brazilian
/// families are interleaved so that each family is ascending on its own.
pub const CANONICAL_SIZES: &[&str] = &[
    "XXXS", "XXS", "XS", "PP", "S", "P", "M", "L", "G", "XL", "GG", "XXL", "XG", "XXXL", "XGG",
    "EG", "EGG", "U", "UN",
];

/// Index returned for names missing from the table
pub const MISSING_INDEX: i64 = -1;

/// Ordered table of size tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeOrder {
    tokens: Vec<String>,
}

impl SizeOrder {
    /// The built-in storefront table
    pub fn canonical() -> Self {
        Self::from_tokens(CANONICAL_SIZES.iter().copied())
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.iter().any(|t| t == name)
    }

    /// Position of the first occurrence of `name`, or [`MISSING_INDEX`]
    pub fn index_of(&self, name: &str) -> i64 {
        self.tokens
            .iter()
            .position(|t| t == name)
            .map(|i| i as i64)
            .unwrap_or(MISSING_INDEX)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl Default for SizeOrder {
    fn default() -> Self {
        Self::canonical()
    }
}
