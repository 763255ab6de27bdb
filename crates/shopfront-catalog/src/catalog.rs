//! The immutable catalog reader.

use crate::error::CatalogError;
use crate::product::{Product, ProductId};
use std::fs;
use std::path::Path;

/// An immutable, read-only list of products loaded once per session.
///
/// There is no pagination, filtering, or search here; consumers receive the
/// full list and do any narrowing themselves.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from a JSON array of product records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        tracing::info!(count = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// Load the catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All products, in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
