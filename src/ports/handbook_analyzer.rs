//! Handbook Analyzer Port - document preprocessing interface.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::handbook::HandbookExtract;

/// Port for extracting text and outline information from the handbook.
///
/// Implementations parse the document format; the assembly rules (page
/// markers, outline fallback) live in the domain layer.
#[async_trait]
pub trait HandbookAnalyzer: Send + Sync {
    /// Extracts per-page text and outline data from the document at `path`.
    async fn analyze(&self, path: &Path) -> Result<HandbookExtract, ExtractError>;
}

/// Errors from document preprocessing.
///
/// Both variants are fatal for the extraction: no partial text is returned.
#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    /// The configured document path does not exist.
    #[error("handbook file not found: {path}")]
    NotFound {
        /// The missing path, for display.
        path: String,
    },

    /// The document exists but could not be opened or read.
    #[error("failed to process handbook: {0}")]
    Parse(String),
}

impl ExtractError {
    /// Creates a not-found error for the given path.
    pub fn not_found(path: &Path) -> Self {
        Self::NotFound {
            path: path.display().to_string(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
