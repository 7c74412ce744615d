//! GetHandbookOverview - Query handler for the document preprocessor output.
//!
//! Read-through over the extraction cache: within the expiry window repeated
//! calls return the memoized result without touching the document again.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::cache::ExtractCache;
use crate::domain::handbook::HandbookExtract;
use crate::ports::{ExtractError, HandbookAnalyzer};

/// Handler for the handbook overview query.
pub struct GetHandbookOverviewHandler {
    analyzer: Arc<dyn HandbookAnalyzer>,
    cache: Arc<ExtractCache>,
    handbook_path: PathBuf,
}

impl GetHandbookOverviewHandler {
    pub fn new(
        analyzer: Arc<dyn HandbookAnalyzer>,
        cache: Arc<ExtractCache>,
        handbook_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            analyzer,
            cache,
            handbook_path: handbook_path.into(),
        }
    }

    pub async fn handle(&self) -> Result<Arc<HandbookExtract>, ExtractError> {
        if let Some(cached) = self.cache.get(&self.handbook_path) {
            return Ok(cached);
        }

        let extract = Arc::new(self.analyzer.analyze(&self.handbook_path).await?);
        self.cache
            .insert(self.handbook_path.clone(), Arc::clone(&extract));

        tracing::debug!(
            pages = extract.page_count,
            outline = extract.outline.is_some(),
            "handbook extraction refreshed"
        );
        Ok(extract)
    }
}
