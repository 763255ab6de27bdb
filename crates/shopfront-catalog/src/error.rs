//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when loading the product catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the catalog source.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog document is not valid product JSON.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
