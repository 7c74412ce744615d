//! RequestSuggestions - Command handler for one suggestion round-trip.
//!
//! Validates the description, builds the fixed prompt, reads the handbook
//! bytes fresh from storage and performs exactly one provider call. Every
//! failure is returned as a typed [`SuggestionError`] for the boundary to
//! present; nothing is retried.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::advisor::{build_prompt, ProblemDescription};
use crate::domain::foundation::ValidationError;
use crate::ports::{
    HandbookStorage, ProviderError, StorageError, SuggestionProvider, SuggestionRequest,
    SuggestionResponse, PDF_MIME_TYPE,
};

/// Command carrying the raw user input.
#[derive(Debug, Clone)]
pub struct RequestSuggestionsCommand {
    pub problem_description: String,
}

/// Failures of the suggestion use case.
#[derive(Debug, Error)]
pub enum SuggestionError {
    /// The description is missing or below the minimum length.
    #[error("{0}")]
    InvalidDescription(#[from] ValidationError),

    /// No API credential is configured; no network call was attempted.
    #[error("Gemini API key is not configured")]
    NotConfigured,

    /// The handbook could not be read from storage.
    #[error("{0}")]
    Document(#[from] StorageError),

    /// The provider call failed.
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

/// Handler for suggestion requests.
pub struct RequestSuggestionsHandler {
    provider: Option<Arc<dyn SuggestionProvider>>,
    storage: Arc<dyn HandbookStorage>,
    handbook_path: PathBuf,
}

impl RequestSuggestionsHandler {
    pub fn new(
        provider: Option<Arc<dyn SuggestionProvider>>,
        storage: Arc<dyn HandbookStorage>,
        handbook_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            provider,
            storage,
            handbook_path: handbook_path.into(),
        }
    }

    pub async fn handle(
        &self,
        command: RequestSuggestionsCommand,
    ) -> Result<SuggestionResponse, SuggestionError> {
        let problem = ProblemDescription::new(command.problem_description)?;

        let provider = self.provider.as_ref().ok_or(SuggestionError::NotConfigured)?;

        let prompt = build_prompt(&problem);
        // Raw bytes are read fresh per request; the preprocessor cache holds
        // extracted text only and never feeds this path.
        let bytes = self.storage.read_bytes(&self.handbook_path).await?;

        let request = SuggestionRequest::new(prompt).with_document(bytes, PDF_MIME_TYPE);
        let response = provider.suggest(request).await.map_err(|e| {
            tracing::warn!(error = %e, "suggestion request failed");
            e
        })?;

        tracing::info!(
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "suggestions generated"
        );
        Ok(response)
    }
}
