//! Catalog client errors

use thiserror::Error;

/// Errors returned by the external catalog client
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Catalog returned status {status} for {path}")]
    Status { status: u16, path: String },

    #[error("Invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),
}

impl CatalogError {
    /// True for 404 responses from the catalog (unknown movie ID)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
