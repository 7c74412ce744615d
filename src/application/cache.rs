//! Time-bounded cache for document extraction results.
//!
//! Read-through with last-writer-wins semantics: concurrent sessions may race
//! to repopulate an expired entry, but recomputation is pure, so the worst
//! case is redundant work, never corruption. No lock is held across the
//! recomputation itself.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::domain::handbook::HandbookExtract;

/// Cache of extraction results, keyed by document path.
#[derive(Debug)]
pub struct ExtractCache {
    ttl: Duration,
    entries: Mutex<HashMap<PathBuf, CacheEntry>>,
}

#[derive(Debug)]
struct CacheEntry {
    stored_at: Instant,
    value: Arc<HandbookExtract>,
}

impl ExtractCache {
    /// Creates a cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached extract for `path`, unless it has expired.
    pub fn get(&self, path: &Path) -> Option<Arc<HandbookExtract>> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(path)?;
        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        Some(Arc::clone(&entry.value))
    }

    /// Stores an extract for `path`, replacing any previous entry.
    pub fn insert(&self, path: impl Into<PathBuf>, value: Arc<HandbookExtract>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            path.into(),
            CacheEntry {
                stored_at: Instant::now(),
                value,
            },
        );
    }
}
