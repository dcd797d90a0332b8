//! Catalogue error types.

use thiserror::Error;

/// Errors that can occur while interpreting catalogue data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Sort key outside of the supported set.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Release date that is neither `YYYY-MM-DD` nor RFC 3339.
    #[error("Invalid release date: {0}")]
    InvalidReleaseDate(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
