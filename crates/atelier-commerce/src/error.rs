//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while building or querying the catalog.
///
/// Cart and filter operations never fail; unknown keys are no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog entries share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// A catalog entry failed validation.
    #[error("Invalid product {product_id}: {reason}")]
    InvalidProduct { product_id: String, reason: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    pub(crate) fn invalid(product_id: impl Into<String>, reason: impl Into<String>) -> Self {
        CommerceError::InvalidProduct {
            product_id: product_id.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
