use serde::{Deserialize, Serialize};

/// One candidate value of a variant axis ("M", "42", "Blue")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantValue {
    pub name: String,
}

impl VariantValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecificationField {
    pub name: String,
}

/// Variant axis of a product: a named dimension with its values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuSpecification {
    pub field: SpecificationField,
    pub values: Vec<VariantValue>,
}

impl SkuSpecification {
    pub fn new(name: impl Into<String>, values: &[&str]) -> Self {
        Self {
            field: SpecificationField { name: name.into() },
            values: values.iter().map(|v| VariantValue::new(*v)).collect(),
        }
    }
}

/// Variation of a single item, e.g. `{ name: "Size", values: ["M"] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferenceId {
    #[serde(rename = "Key", default)]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub cache_id: String,
    pub image_id: String,
    pub image_label: String,
    pub image_tag: String,
    pub image_text: String,
    pub image_url: String,
}

/// Commercial conditions of a seller offer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommercialOffer {
    #[serde(rename = "Price", default)]
    pub price: f64,
    #[serde(rename = "ListPrice", default)]
    pub list_price: f64,
    #[serde(rename = "AvailableQuantity", default)]
    pub available_quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub seller_id: String,
    #[serde(default)]
    pub seller_name: String,
    #[serde(default)]
    pub seller_default: bool,
    #[serde(default)]
    pub commertial_offer: CommercialOffer,
}

/// Purchasable SKU of a product
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ean: String,
    #[serde(default)]
    pub reference_id: Vec<ReferenceId>,
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub variations: Vec<Variation>,
}

impl Item {
    /// First value of the first variation, the key items are ordered by
    /// when the product carries no specifications.
    pub fn first_variation_value(&self) -> Option<&str> {
        self.variations
            .first()
            .and_then(|v| v.values.first())
            .map(String::as_str)
    }

    /// Value of the named variation, if the item has one.
    pub fn variation_value(&self, name: &str) -> Option<&str> {
        self.variations
            .iter()
            .find(|v| v.name == name)
            .and_then(|v| v.values.first())
            .map(String::as_str)
    }
}

/// Selected item summary: the item with its primary image and default seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    #[serde(flatten)]
    pub item: Item,
    pub image: Image,
    pub seller: Seller,
}

/// Product snapshot held by the product-summary context
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub link_text: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub sku_specifications: Vec<SkuSpecification>,
    #[serde(default)]
    pub selected_item: Option<Item>,
    #[serde(default)]
    pub sku: Option<Sku>,
}

impl Product {
    /// Parse a catalog product document
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.item_id == item_id)
    }

    /// Copy of the product with the selection cleared
    pub fn without_selection(&self) -> Self {
        Self {
            selected_item: None,
            sku: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_PRODUCT: &str = r#"{
        "productId": "100",
        "productName": "Running Shirt",
        "linkText": "running-shirt",
        "items": [
            {
                "itemId": "1",
                "name": "Running Shirt M",
                "ean": "7890000000011",
                "referenceId": [{ "Key": "RefId", "Value": "RS-M" }],
                "sellers": [{
                    "sellerId": "1",
                    "sellerName": "Main Store",
                    "sellerDefault": true,
                    "commertialOffer": { "Price": 49.9, "ListPrice": 59.9, "AvailableQuantity": 3 }
                }],
                "images": [{ "imageId": "11", "imageUrl": "https://cdn/1.jpg" }],
                "variations": [{ "name": "Size", "values": ["M"] }]
            }
        ],
        "skuSpecifications": [
            { "field": { "name": "Size" }, "values": [{ "name": "M" }] }
        ]
    }"#;

    #[test]
    fn test_parse_catalog_product() {
        let product = Product::from_json(CATALOG_PRODUCT).unwrap();
        assert_eq!(product.product_id, "100");
        assert_eq!(product.items.len(), 1);

        let item = &product.items[0];
        assert_eq!(item.reference_id[0].value, "RS-M");
        assert!(item.sellers[0].seller_default);
        assert_eq!(item.sellers[0].commertial_offer.available_quantity, 3);
        assert_eq!(item.images[0].image_url, "https://cdn/1.jpg");
        assert_eq!(item.first_variation_value(), Some("M"));
        assert_eq!(item.variation_value("Size"), Some("M"));
        assert_eq!(item.variation_value("Color"), None);
        assert!(product.selected_item.is_none());
    }

    #[test]
    fn test_find_item_and_clear_selection() {
        let mut product = Product::from_json(CATALOG_PRODUCT).unwrap();
        assert!(product.find_item("1").is_some());
        assert!(product.find_item("2").is_none());

        product.selected_item = Some(product.items[0].clone());
        let cleared = product.without_selection();
        assert!(cleared.selected_item.is_none());
        assert!(cleared.sku.is_none());
        assert_eq!(cleared.items, product.items);
    }

    #[test]
    fn test_item_without_variations() {
        let item = Item {
            item_id: "9".into(),
            ..Default::default()
        };
        assert_eq!(item.first_variation_value(), None);
    }
}
