//! Handbook Storage Port - raw byte access to the reference document.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Port for reading the handbook's raw bytes.
///
/// The suggestion path reads the document fresh on every request; extraction
/// caching happens elsewhere and never reuses these bytes.
#[async_trait]
pub trait HandbookStorage: Send + Sync {
    /// Reads the complete file at `path`.
    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StorageError>;

    /// Checks whether `path` exists.
    async fn exists(&self, path: &Path) -> bool;
}

/// Errors from handbook storage access.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The file does not exist.
    #[error("handbook file not found: {path}")]
    NotFound {
        /// The missing path, for display.
        path: String,
    },

    /// Any other I/O failure.
    #[error("storage error: {0}")]
    Io(String),
}

impl StorageError {
    /// Creates a not-found error for the given path.
    pub fn not_found(path: &Path) -> Self {
        Self::NotFound {
            path: path.display().to_string(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }
}
