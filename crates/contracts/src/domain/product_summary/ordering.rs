//! Variant ordering engine
//!
//! Axes whose first value is a known size are ordered by the size table,
//! everything else is ordered numerically. Sorting is stable and always
//! produces new collections; the catalog lists are never reordered in place.

use super::aggregate::{Item, Product, SkuSpecification, VariantValue};
use super::error::{ProductSummaryError, ProductSummaryResult};
use super::sizes::{SizeOrder, MISSING_INDEX};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Placement of names that are not numbers when an axis is ordered numerically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnparsedPolicy {
    /// After every numeric name, keeping input order
    #[default]
    Last,
    /// Before every numeric name, keeping input order
    First,
    /// Fail with [`ProductSummaryError::MalformedVariantValue`]
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderingOptions {
    pub sizes: SizeOrder,
    pub unparsed: UnparsedPolicy,
}

impl OrderingOptions {
    pub fn with_policy(unparsed: UnparsedPolicy) -> Self {
        Self {
            sizes: SizeOrder::canonical(),
            unparsed,
        }
    }
}

/// Comparison rule picked for an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    SizeTable,
    Numeric,
}

/// Ordered copy of the lists the selector displays
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub items: Vec<Item>,
    pub sku_specifications: Vec<SkuSpecification>,
}

impl ProductView {
    /// Unsorted passthrough of the product lists
    pub fn unsorted(product: &Product) -> Self {
        Self {
            items: product.items.clone(),
            sku_specifications: product.sku_specifications.clone(),
        }
    }
}

/// Leading-number parse: `"42"` -> 42, `"10.5 cm"` -> 10.5, `"XL"` -> None.
///
/// Leading whitespace is skipped and parsing stops at the first character
/// that cannot continue a decimal literal.
pub fn parse_leading_number(name: &str) -> Option<f64> {
    let s = name.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Mode for an axis: decided by its first entry only
pub fn sort_mode(first: Option<&str>, sizes: &SizeOrder) -> SortMode {
    match first {
        Some(name) if sizes.contains(name) => SortMode::SizeTable,
        _ => SortMode::Numeric,
    }
}

/// Stable order of `keys`, returned as indices into `keys`.
/// `None` keys stand for entries without a name (items lacking variations).
fn ordered_indices(
    keys: &[Option<&str>],
    options: &OrderingOptions,
    describe: impl Fn(usize) -> String,
) -> ProductSummaryResult<Vec<usize>> {
    let mut indices: Vec<usize> = (0..keys.len()).collect();
    let first = keys.first().copied().flatten();

    match sort_mode(first, &options.sizes) {
        SortMode::SizeTable => {
            log::debug!("ordering {} entries by size table", keys.len());
            let ranks: Vec<i64> = keys
                .iter()
                .map(|k| k.map_or(MISSING_INDEX, |name| options.sizes.index_of(name)))
                .collect();
            indices.sort_by_key(|&i| ranks[i]);
        }
        SortMode::Numeric => {
            log::debug!("ordering {} entries numerically", keys.len());
            let numbers: Vec<Option<f64>> = keys
                .iter()
                .map(|k| k.and_then(parse_leading_number))
                .collect();

            if options.unparsed == UnparsedPolicy::Reject {
                if let Some(i) = numbers.iter().position(Option::is_none) {
                    return Err(ProductSummaryError::MalformedVariantValue(describe(i)));
                }
            }

            let unparsed_first = options.unparsed == UnparsedPolicy::First;
            indices.sort_by(|&a, &b| match (numbers[a], numbers[b]) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (None, None) => Ordering::Equal,
                (None, Some(_)) if unparsed_first => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) if unparsed_first => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
            });
        }
    }

    Ok(indices)
}

/// Ordered copy of a variant axis.
///
/// Ordering twice gives the same result only when the axis is homogeneous.
/// On a mixed axis an unknown size can move to the front and switch the
/// mode of the next pass.
pub fn order_values(
    values: &[VariantValue],
    options: &OrderingOptions,
) -> ProductSummaryResult<Vec<VariantValue>> {
    let keys: Vec<Option<&str>> = values.iter().map(|v| Some(v.name.as_str())).collect();
    let indices = ordered_indices(&keys, options, |i| values[i].name.clone())?;
    Ok(indices.into_iter().map(|i| values[i].clone()).collect())
}

/// Ordered copy of an item list, keyed on each item's first variation value
pub fn order_items(items: &[Item], options: &OrderingOptions) -> ProductSummaryResult<Vec<Item>> {
    let keys: Vec<Option<&str>> = items.iter().map(Item::first_variation_value).collect();
    let indices = ordered_indices(&keys, options, |i| {
        let item = &items[i];
        match item.first_variation_value() {
            Some(value) => value.to_string(),
            None => format!("<no variation> (item {})", item.item_id),
        }
    })?;
    Ok(indices.into_iter().map(|i| items[i].clone()).collect())
}

/// Ordered view of what the selector displays.
///
/// With specifications, only the first axis is ordered and the items pass
/// through. Without specifications and with several items, the items are
/// ordered instead.
pub fn order_product(
    product: &Product,
    options: &OrderingOptions,
) -> ProductSummaryResult<ProductView> {
    let mut view = ProductView::unsorted(product);

    if let Some(first_axis) = view.sku_specifications.first_mut() {
        first_axis.values = order_values(&first_axis.values, options)?;
    } else if view.items.len() > 1 {
        view.items = order_items(&view.items, options)?;
    }

    Ok(view)
}
