//! Error types for the record collection.

use thiserror::Error;

/// Main error type for collection operations.
///
/// Lookups and mutations never fail; only configuration and JSON input do.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Result type for collection operations.
pub type Result<T> = std::result::Result<T, StoreError>;
