//! SKU selector settings
//!
//! Display options of the selector block plus the ordering rules. Every field
//! has a default, so a settings document only lists what it overrides.

use crate::domain::product_summary::ordering::{OrderingOptions, UnparsedPolicy};
use crate::domain::product_summary::sizes::SizeOrder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value that is either fixed or given per breakpoint (`desktop`, `mobile`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    Single(T),
    Breakpoints(BTreeMap<String, T>),
}

impl<T> ResponsiveValue<T> {
    /// Value for `breakpoint`, falling back to `desktop`, then to any entry
    pub fn for_breakpoint(&self, breakpoint: &str) -> Option<&T> {
        match self {
            ResponsiveValue::Single(value) => Some(value),
            ResponsiveValue::Breakpoints(map) => map
                .get(breakpoint)
                .or_else(|| map.get("desktop"))
                .or_else(|| map.values().next()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Always,
    /// Hide axes that offer a single value
    MoreThanOne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowValueForVariation {
    #[default]
    None,
    Image,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialSelection {
    #[default]
    Complete,
    Image,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Select,
    #[default]
    Default,
    Slider,
}

/// Ordering rules for variant axes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingSettings {
    pub unparsed: UnparsedPolicy,
    /// Replaces the built-in size table when set
    pub size_order: Option<Vec<String>>,
}

impl OrderingSettings {
    pub fn to_options(&self) -> OrderingOptions {
        let sizes = match &self.size_order {
            Some(tokens) => SizeOrder::from_tokens(tokens.iter().cloned()),
            None => SizeOrder::canonical(),
        };
        OrderingOptions {
            sizes,
            unparsed: self.unparsed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkuSelectorSettings {
    pub max_items: usize,
    pub visibility: Visibility,
    /// `{quantity}` is replaced with the number of hidden values
    pub see_more_label: String,
    pub hide_impossible_combinations: bool,
    pub show_value_name_for_image_variation: bool,
    pub show_value_for_variation: ShowValueForVariation,
    pub image_height: Option<ResponsiveValue<u32>>,
    pub image_width: Option<ResponsiveValue<u32>>,
    pub thumbnail_image: Option<String>,
    /// Names of the variations to show; empty shows all
    pub visible_variations: Vec<String>,
    pub show_variations_labels: bool,
    pub variations_spacing: Option<u32>,
    pub show_variations_error_message: bool,
    pub initial_selection: InitialSelection,
    pub display_mode: ResponsiveValue<DisplayMode>,
    pub slider_display_threshold: usize,
    pub slider_arrow_size: u32,
    pub slider_items_per_page: ResponsiveValue<u32>,
    pub ordering: OrderingSettings,
}

impl Default for SkuSelectorSettings {
    fn default() -> Self {
        Self {
            max_items: 10,
            visibility: Visibility::Always,
            see_more_label: "See {quantity} more".to_string(),
            hide_impossible_combinations: true,
            show_value_name_for_image_variation: false,
            show_value_for_variation: ShowValueForVariation::None,
            image_height: None,
            image_width: None,
            thumbnail_image: None,
            visible_variations: Vec::new(),
            show_variations_labels: true,
            variations_spacing: None,
            show_variations_error_message: true,
            initial_selection: InitialSelection::Complete,
            display_mode: ResponsiveValue::Single(DisplayMode::Default),
            slider_display_threshold: 3,
            slider_arrow_size: 12,
            slider_items_per_page: ResponsiveValue::Breakpoints(BTreeMap::from([
                ("desktop".to_string(), 3),
                ("mobile".to_string(), 2),
            ])),
            ordering: OrderingSettings::default(),
        }
    }
}

/// Default settings embedded in the binary
pub const DEFAULT_SETTINGS: &str = r#"
max_items = 10
visibility = "always"
see_more_label = "See {quantity} more"
hide_impossible_combinations = true
show_value_name_for_image_variation = false
show_value_for_variation = "none"
visible_variations = []
show_variations_labels = true
show_variations_error_message = true
initial_selection = "complete"
display_mode = "default"
slider_display_threshold = 3
slider_arrow_size = 12
slider_items_per_page = { desktop = 3, mobile = 2 }

[ordering]
unparsed = "last"
"#;

impl SkuSelectorSettings {
    pub fn load_from_str(contents: &str) -> anyhow::Result<Self> {
        let settings: SkuSelectorSettings = toml::from_str(contents)?;
        Ok(settings)
    }

    pub fn default_embedded() -> anyhow::Result<Self> {
        Self::load_from_str(DEFAULT_SETTINGS)
    }

    /// Label of the "see more" button for `hidden` values
    pub fn see_more_text(&self, hidden: usize) -> String {
        self.see_more_label
            .replace("{quantity}", &hidden.to_string())
    }

    /// Whether a variation is listed in `visible_variations`
    /// (case-insensitive; an empty list shows everything)
    pub fn is_variation_visible(&self, name: &str) -> bool {
        self.visible_variations.is_empty()
            || self
                .visible_variations
                .iter()
                .any(|v| v.trim().eq_ignore_ascii_case(name.trim()))
    }

    pub fn ordering_options(&self) -> OrderingOptions {
        self.ordering.to_options()
    }
}
