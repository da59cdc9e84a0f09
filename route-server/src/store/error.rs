//! Departure store error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when writing to or seeding the departure store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Record failed validation
    #[error("invalid departure: {0}")]
    Invalid(#[from] DomainError),

    /// Failed to read a seed file
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Seed file is not valid JSON
    #[error("JSON parse error in {path:?}: {message}")]
    Json { path: PathBuf, message: String },
}
