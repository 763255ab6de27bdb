//! Read-only product catalog for the shopfront storefront.
//!
//! The catalog is loaded once per session from a static JSON document and is
//! immutable afterwards. Consumers read product records and look them up by
//! id; nothing in this crate can mutate the product list.

mod catalog;
mod error;
mod product;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use product::{Product, ProductId};
