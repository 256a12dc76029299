//! CSS handles of the SKU selector block
//!
//! Every styleable element gets a stable class `<namespace>-<handle>`. The
//! selector widget receives them as custom classes, paired with the
//! store-components class of the same slot.

use std::collections::BTreeMap;

pub const PRODUCT_SUMMARY_NAMESPACE: &str = "vtex-product-summary-2-x";
pub const STORE_COMPONENTS_NAMESPACE: &str = "vtex-store-components-3-x";

/// Handle of the outer container, the only one not forwarded to the widget
pub const CONTAINER_HANDLE: &str = "SKUSelectorContainer";

pub const CSS_HANDLES: [&str; 17] = [
    CONTAINER_HANDLE,
    "frameAround",
    "seeMoreButton",
    "skuSelectorContainer",
    "skuSelectorInternalBox",
    "skuSelectorItemImageValue",
    "skuSelectorItemImage",
    "skuSelectorItemTextValue",
    "skuSelectorItem",
    "skuSelectorNameContainer",
    "skuSelectorNameSeparator",
    "skuSelectorName",
    "skuSelectorOptionsList",
    "skuSelectorSelectorImageValue",
    "skuSelectorSubcontainer",
    "skuSelectorTextContainer",
    "valueWrapper",
];

/// Resolved class names per handle
#[derive(Debug, Clone, PartialEq)]
pub struct CssHandles {
    handles: BTreeMap<&'static str, String>,
}

impl CssHandles {
    pub fn new(namespace: &str) -> Self {
        Self::with_custom(namespace, &BTreeMap::new())
    }

    /// Handles with extra classes supplied by the block user
    pub fn with_custom(namespace: &str, custom: &BTreeMap<String, String>) -> Self {
        let handles = CSS_HANDLES
            .iter()
            .map(|&handle| {
                let base = format!("{}-{}", namespace, handle);
                let class = match custom.get(handle).map(|c| c.trim()) {
                    Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
                    _ => base,
                };
                (handle, class)
            })
            .collect();
        Self { handles }
    }

    pub fn get(&self, handle: &str) -> &str {
        self.handles.get(handle).map(String::as_str).unwrap_or_default()
    }
}

impl Default for CssHandles {
    fn default() -> Self {
        Self::new(PRODUCT_SUMMARY_NAMESPACE)
    }
}

/// One class entry of a slot. With `apply_modifiers`, every class name also
/// gets a `<name>--<modifier>` variant for each active modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomClass {
    pub name: String,
    pub apply_modifiers: bool,
}

impl CustomClass {
    pub fn render(&self, modifiers: &[&str]) -> String {
        let mut classes = Vec::new();
        for name in self.name.split_whitespace() {
            classes.push(name.to_string());
            if self.apply_modifiers {
                classes.extend(
                    modifiers
                        .iter()
                        .filter(|m| !m.is_empty())
                        .map(|m| format!("{}--{}", name, m)),
                );
            }
        }
        classes.join(" ")
    }
}

/// Slot name -> class entries, as consumed by the selector widget
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomClasses(BTreeMap<&'static str, Vec<CustomClass>>);

impl CustomClasses {
    pub fn slot(&self, slot: &str) -> &[CustomClass] {
        self.0.get(slot).map(Vec::as_slice).unwrap_or_default()
    }

    /// Class attribute for `slot` with the given modifiers
    pub fn class(&self, slot: &str, modifiers: &[&str]) -> String {
        self.slot(slot)
            .iter()
            .map(|c| c.render(modifiers))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Widget classes: each slot gets `"<handle class> <store-components class>"`
pub fn sku_selector_classes(handles: &CssHandles) -> CustomClasses {
    let slots = CSS_HANDLES
        .iter()
        .copied()
        .filter(|&handle| handle != CONTAINER_HANDLE)
        .map(|slot| {
            let entry = CustomClass {
                name: format!(
                    "{} {}-{}",
                    handles.get(slot),
                    STORE_COMPONENTS_NAMESPACE,
                    slot
                ),
                apply_modifiers: true,
            };
            (slot, vec![entry])
        })
        .collect();
    CustomClasses(slots)
}
