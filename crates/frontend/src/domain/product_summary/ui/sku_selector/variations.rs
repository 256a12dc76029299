use contracts::domain::product_summary::{Item, SkuSpecification};
use contracts::shared::sku_selector_settings::{SkuSelectorSettings, Visibility};

/// Whether any item carries `value` on `axis`
pub fn is_value_available(items: &[Item], axis: &str, value: &str) -> bool {
    items
        .iter()
        .any(|item| item.variation_value(axis) == Some(value))
}

/// Item matching `value` on `axis` while keeping the other variations of the
/// current selection. Falls back to the first item with `value` on `axis`.
pub fn item_for_choice<'a>(
    items: &'a [Item],
    selected: Option<&Item>,
    axis: &str,
    value: &str,
) -> Option<&'a Item> {
    let wanted: Vec<(&str, &str)> = selected
        .map(|item| {
            item.variations
                .iter()
                .filter(|v| v.name != axis)
                .filter_map(|v| v.values.first().map(|x| (v.name.as_str(), x.as_str())))
                .collect()
        })
        .unwrap_or_default();

    let mut fallback = None;
    for item in items
        .iter()
        .filter(|item| item.variation_value(axis) == Some(value))
    {
        if wanted
            .iter()
            .all(|&(name, wanted_value)| item.variation_value(name) == Some(wanted_value))
        {
            return Some(item);
        }
        fallback.get_or_insert(item);
    }
    fallback
}

/// Axes to render according to `visible_variations` and `visibility`
pub fn visible_axes(
    specifications: &[SkuSpecification],
    settings: &SkuSelectorSettings,
) -> Vec<SkuSpecification> {
    specifications
        .iter()
        .filter(|spec| settings.is_variation_visible(&spec.field.name))
        .filter(|spec| settings.visibility == Visibility::Always || spec.values.len() > 1)
        .cloned()
        .collect()
}

/// First `max_items` entries unless expanded, plus the number left out
pub fn split_visible<T>(mut values: Vec<T>, max_items: usize, expanded: bool) -> (Vec<T>, usize) {
    if expanded || max_items == 0 || values.len() <= max_items {
        return (values, 0);
    }
    let hidden = values.len() - max_items;
    values.truncate(max_items);
    (values, hidden)
}

/// Label of an item when the product has no specifications
pub fn item_label(item: &Item) -> String {
    item.first_variation_value()
        .map(str::to_string)
        .unwrap_or_else(|| item.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product_summary::Variation;

    fn item(id: &str, size: &str, color: &str) -> Item {
        Item {
            item_id: id.to_string(),
            name: format!("Shirt {} {}", color, size),
            variations: vec![
                Variation {
                    name: "Size".into(),
                    values: vec![size.into()],
                },
                Variation {
                    name: "Color".into(),
                    values: vec![color.into()],
                },
            ],
            ..Default::default()
        }
    }

    fn catalog() -> Vec<Item> {
        vec![
            item("1", "S", "Blue"),
            item("2", "M", "Blue"),
            item("3", "S", "Red"),
            item("4", "M", "Red"),
            item("5", "L", "Red"),
        ]
    }

    #[test]
    fn test_choice_keeps_other_variations() {
        let items = catalog();
        let selected = items[2].clone(); // S / Red
        let picked = item_for_choice(&items, Some(&selected), "Size", "M").unwrap();
        assert_eq!(picked.item_id, "4");
    }

    #[test]
    fn test_choice_falls_back_to_first_match() {
        let items = catalog();
        let selected = items[0].clone(); // S / Blue, no L / Blue exists
        let picked = item_for_choice(&items, Some(&selected), "Size", "L").unwrap();
        assert_eq!(picked.item_id, "5");
    }

    #[test]
    fn test_choice_without_selection() {
        let items = catalog();
        let picked = item_for_choice(&items, None, "Color", "Red").unwrap();
        assert_eq!(picked.item_id, "3");
        assert!(item_for_choice(&items, None, "Color", "Green").is_none());
    }

    #[test]
    fn test_availability() {
        let items = catalog();
        assert!(is_value_available(&items, "Size", "L"));
        assert!(!is_value_available(&items, "Size", "XL"));
    }

    #[test]
    fn test_visible_axes() {
        let specs = vec![
            SkuSpecification::new("Size", &["S", "M"]),
            SkuSpecification::new("Color", &["Blue"]),
        ];
        let mut settings = SkuSelectorSettings::default();
        assert_eq!(visible_axes(&specs, &settings).len(), 2);

        settings.visibility = Visibility::MoreThanOne;
        let axes = visible_axes(&specs, &settings);
        assert_eq!(axes.len(), 1);
        assert_eq!(axes[0].field.name, "Size");

        settings.visibility = Visibility::Always;
        settings.visible_variations = vec!["color".into()];
        let axes = visible_axes(&specs, &settings);
        assert_eq!(axes.len(), 1);
        assert_eq!(axes[0].field.name, "Color");
    }

    #[test]
    fn test_split_visible() {
        assert_eq!(split_visible(vec![1, 2, 3], 2, false), (vec![1, 2], 1));
        assert_eq!(split_visible(vec![1, 2, 3], 2, true), (vec![1, 2, 3], 0));
        assert_eq!(split_visible(vec![1, 2], 2, false), (vec![1, 2], 0));
        assert_eq!(split_visible(vec![1, 2], 0, false), (vec![1, 2], 0));
    }

    #[test]
    fn test_item_label() {
        let items = catalog();
        assert_eq!(item_label(&items[0]), "S");
        let bare = Item {
            item_id: "9".into(),
            name: "One size".into(),
            ..Default::default()
        };
        assert_eq!(item_label(&bare), "One size");
    }
}
