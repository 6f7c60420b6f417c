// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Product model
//!
//! Mirrors one entry of the makeup API's `products.json` array. Decoding
//! is lenient: `null` strings become empty, and `price` accepts strings,
//! numbers or nothing at all.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Price shown when a product has no usable price.
pub const PRICE_FALLBACK: &str = "0.00";

/// A catalog entry, read-only to the app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier, used as the list key
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub brand: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// String-encoded decimal, displayed as-is
    #[serde(
        default,
        deserialize_with = "lenient_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_link: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_type: String,
}

impl Product {
    /// Create a product with only an id and a name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            brand: String::new(),
            name: name.into(),
            price: None,
            image_link: String::new(),
            product_type: String::new(),
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_image_link(mut self, link: impl Into<String>) -> Self {
        self.image_link = link.into();
        self
    }

    pub fn with_product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = product_type.into();
        self
    }

    /// Price text for display, falling back to `0.00` when empty or absent.
    pub fn display_price(&self) -> &str {
        match self.price.as_deref() {
            Some(price) if !price.is_empty() => price,
            _ => PRICE_FALLBACK,
        }
    }

    /// Whether the (lower-cased) needle occurs in the product name.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_product() {
        let product: Product = serde_json::from_value(json!({
            "id": 1048,
            "brand": "colourpop",
            "name": "Lippie Pencil",
            "price": "5.0",
            "image_link": "https://cdn.shopify.com/s/files/1/lippie.png",
            "product_type": "lip_liner",
            "rating": null,
            "tag_list": ["cruelty free"]
        }))
        .unwrap();

        assert_eq!(product.id, 1048);
        assert_eq!(product.brand, "colourpop");
        assert_eq!(product.name, "Lippie Pencil");
        assert_eq!(product.price.as_deref(), Some("5.0"));
        assert_eq!(product.product_type, "lip_liner");
    }

    #[test]
    fn test_decode_nulls_and_missing_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "brand": null,
            "name": "Mystery Gloss",
            "price": null
        }))
        .unwrap();

        assert_eq!(product.brand, "");
        assert!(product.price.is_none());
        assert_eq!(product.image_link, "");
        assert_eq!(product.product_type, "");
    }

    #[test]
    fn test_decode_numeric_price() {
        let product: Product =
            serde_json::from_value(json!({"id": 1, "name": "Blush", "price": 12.5})).unwrap();
        assert_eq!(product.display_price(), "12.5");
    }

    #[test]
    fn test_decode_unexpected_price_type_falls_back() {
        let product: Product =
            serde_json::from_value(json!({"id": 1, "name": "Blush", "price": ["9"]})).unwrap();
        assert_eq!(product.display_price(), PRICE_FALLBACK);
    }

    #[test]
    fn test_decode_requires_id() {
        let result = serde_json::from_value::<Product>(json!({"name": "No id"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_display_price_fallbacks() {
        assert_eq!(Product::new(1, "a").display_price(), "0.00");
        assert_eq!(Product::new(1, "a").with_price("").display_price(), "0.00");
        assert_eq!(Product::new(1, "a").with_price("12.99").display_price(), "12.99");
        assert_eq!(Product::new(1, "a").with_price("call us").display_price(), "call us");
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let product = Product::new(1, "Red Lipstick");
        assert!(product.name_contains("red"));
        assert!(product.name_contains("lipstick"));
        assert!(!product.name_contains("blue"));
    }
}
