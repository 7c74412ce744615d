//! Handbook document configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Handbook document configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HandbookConfig {
    /// Path to the handbook PDF
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Expiry of the cached extraction result, in seconds
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl HandbookConfig {
    /// Get the cache expiry as Duration
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// File name of the handbook, for display
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Validate handbook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("handbook.path"));
        }
        if self.cache_ttl_secs == 0 {
            return Err(ValidationError::InvalidCacheTtl);
        }
        Ok(())
    }
}

impl Default for HandbookConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("Oeffentliches_Gestalten.pdf")
}

fn default_cache_ttl() -> u64 {
    3600
}
