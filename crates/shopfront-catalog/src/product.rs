//! Product record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique integer product identifier.
///
/// Using a newtype prevents accidentally mixing product ids with other
/// integer values such as quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create an id from a raw integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A product in the catalog.
///
/// Prices are integer cents; monetary arithmetic never goes through floating
/// point. `in_stock` and `stock` are both optional in the source data, so
/// availability is always read through [`Product::is_available`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Price in the smallest currency unit (cents).
    pub price_in_cents: i64,
    /// Opaque image reference.
    pub image_url: String,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Display category.
    #[serde(default)]
    pub category: Option<String>,
    /// Availability flag. Absent means available.
    #[serde(default)]
    pub in_stock: Option<bool>,
    /// Remaining stock count, when the source tracks it.
    #[serde(default)]
    pub stock: Option<i64>,
}

impl Product {
    /// Check whether the product can be added to a cart.
    ///
    /// The source data carries two availability shapes (`in_stock` flag and
    /// `stock` count); a product is purchasable only if neither marks it
    /// unavailable.
    pub fn is_available(&self) -> bool {
        self.in_stock.unwrap_or(true) && self.stock.map_or(true, |s| s > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(in_stock: Option<bool>, stock: Option<i64>) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Test Product".to_string(),
            price_in_cents: 1000,
            image_url: "https://example.com/test.jpg".to_string(),
            description: None,
            category: None,
            in_stock,
            stock,
        }
    }

    #[test]
    fn test_available_by_default() {
        assert!(product(None, None).is_available());
    }

    #[test]
    fn test_in_stock_flag_controls_availability() {
        assert!(product(Some(true), None).is_available());
        assert!(!product(Some(false), None).is_available());
    }

    #[test]
    fn test_zero_stock_is_unavailable() {
        assert!(!product(Some(true), Some(0)).is_available());
        assert!(product(Some(true), Some(3)).is_available());
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{
            "id": 1,
            "name": "Test Product",
            "price_in_cents": 1000,
            "image_url": "https://example.com/test.jpg"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId::new(1));
        assert_eq!(p.price_in_cents, 1000);
        assert!(p.is_available());
    }
}
