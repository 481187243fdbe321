//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when building or querying the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Deal not found.
    #[error("Deal not found: {0}")]
    DealNotFound(String),

    /// Duplicate deal id at construction.
    #[error("Duplicate deal id: {0}")]
    DuplicateDeal(String),

    /// Deal failed validation at construction.
    #[error("Invalid deal {id}: {reason}")]
    InvalidDeal { id: String, reason: String },

    /// Unknown enum label at a string boundary.
    #[error("Unknown {kind}: {value}")]
    UnknownLabel { kind: &'static str, value: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
