//! Keeps the `skuId` parameter of the page URL in sync with the product query

use contracts::domain::product_summary::selection::SKU_QUERY_KEY;
use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Default, Deserialize, Serialize)]
struct SkuQuery {
    #[serde(rename = "skuId", skip_serializing_if = "Option::is_none")]
    sku_id: Option<String>,
}

/// SKU id from a location search (`"?skuId=42&x=1"` -> `Some("42")`)
pub fn parse_sku_query(search: &str) -> Option<String> {
    serde_qs::from_str::<SkuQuery>(search.trim_start_matches('?'))
        .ok()
        .and_then(|q| q.sku_id)
        .filter(|id| !id.is_empty())
}

fn is_sku_pair(pair: &str) -> bool {
    pair.split('=').next() == Some(SKU_QUERY_KEY)
}

/// Location search with `skuId` replaced by the one in `query`.
///
/// Other pairs are copied verbatim and keep their order, so repeated and
/// bracketed keys survive. An empty query removes `skuId`.
pub fn merge_sku_query(current_search: &str, query: &str) -> String {
    let mut pairs: Vec<String> = current_search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty() && !is_sku_pair(pair))
        .map(str::to_string)
        .collect();

    if let Some(sku_id) = parse_sku_query(query) {
        match serde_qs::to_string(&SkuQuery {
            sku_id: Some(sku_id),
        }) {
            Ok(encoded) => pairs.push(encoded),
            Err(err) => log::warn!("failed to encode product query {}: {}", query, err),
        }
    }

    if pairs.is_empty() {
        return String::new();
    }
    format!("?{}", pairs.join("&"))
}

pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Replace the URL search with one carrying `query`, if it changed
pub fn sync_query_to_url(query: &str) {
    let Some(w) = window() else {
        return;
    };
    let current = current_search();
    let next = merge_sku_query(&current, query);
    if current == next {
        return;
    }

    let new_url = if next.is_empty() {
        w.location().pathname().unwrap_or_default()
    } else {
        next
    };
    if let Ok(history) = w.history() {
        if let Err(err) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
        {
            log::warn!("failed to update URL with product query: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sku_query() {
        assert_eq!(parse_sku_query("?skuId=42"), Some("42".to_string()));
        assert_eq!(parse_sku_query("active=x&skuId=7"), Some("7".to_string()));
        assert_eq!(parse_sku_query("?skuId="), None);
        assert_eq!(parse_sku_query("?active=x"), None);
        assert_eq!(parse_sku_query(""), None);
    }

    #[test]
    fn test_merge_sku_query() {
        assert_eq!(merge_sku_query("", "skuId=42"), "?skuId=42");
        assert_eq!(merge_sku_query("?skuId=1", "skuId=42"), "?skuId=42");
        assert_eq!(merge_sku_query("?active=a&skuId=1", ""), "?active=a");
        assert_eq!(merge_sku_query("?skuId=1", ""), "");
        assert_eq!(merge_sku_query("?active=a", "skuId=3"), "?active=a&skuId=3");
        assert_eq!(merge_sku_query("?skuId=1&b=2", "skuId=5"), "?b=2&skuId=5");
    }

    #[test]
    fn test_merge_keeps_repeated_and_bracket_keys() {
        assert_eq!(
            merge_sku_query("?color=a&color=b&skuId=1", "skuId=42"),
            "?color=a&color=b&skuId=42"
        );
        assert_eq!(
            merge_sku_query("?utm[source]=x&skuId=1", "skuId=42"),
            "?utm[source]=x&skuId=42"
        );
        assert_eq!(
            merge_sku_query("?color=a&color=b&skuId=1", ""),
            "?color=a&color=b"
        );
        // keys that merely start with skuId are not touched
        assert_eq!(merge_sku_query("?skuIds=1", "skuId=2"), "?skuIds=1&skuId=2");
    }
}
