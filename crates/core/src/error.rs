//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Only construction/validation failures live here. Fetch and transport
/// concerns belong to the layers that do IO.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// A price was negative, NaN or infinite.
    #[error("invalid price: {0}")]
    InvalidPrice(f64),
}
