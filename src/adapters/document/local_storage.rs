//! Local Filesystem Storage Adapter - Implementation of HandbookStorage.
//!
//! Read-only: the handbook is an immutable input, this adapter never writes.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use crate::ports::{HandbookStorage, StorageError};

/// Local filesystem access to the handbook PDF.
#[derive(Debug, Clone, Default)]
pub struct LocalHandbookStorage;

impl LocalHandbookStorage {
    /// Creates a new storage adapter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HandbookStorage for LocalHandbookStorage {
    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        fs::read(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::not_found(path)
            } else {
                StorageError::io(format!("Failed to read {}: {}", path.display(), e))
            }
        })
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_file_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4 fixture").unwrap();

        let storage = LocalHandbookStorage::new();
        let bytes = storage.read_bytes(file.path()).await.unwrap();
        assert_eq!(bytes, b"%PDF-1.4 fixture");
        assert!(storage.exists(file.path()).await);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let storage = LocalHandbookStorage::new();
        let path = Path::new("does/not/exist.pdf");

        let err = storage.read_bytes(path).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
        assert!(!storage.exists(path).await);
    }
}
