//! Mock Suggestion Provider for testing.
//!
//! Configurable mock implementation of the SuggestionProvider port, allowing
//! tests to run without calling the real Gemini API.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Error injection for failure-path testing
//! - Call recording for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockSuggestionProvider::new().with_text("## Result\nOK");
//!
//! let response = provider.suggest(request).await?;
//! assert_eq!(response.text, "## Result\nOK");
//! assert_eq!(provider.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    FinishReason, ProviderError, ProviderInfo, SuggestionProvider, SuggestionRequest,
    SuggestionResponse, TokenUsage,
};

/// Mock suggestion provider for testing.
///
/// Cloning shares the response queue and call history.
#[derive(Debug, Clone, Default)]
pub struct MockSuggestionProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<SuggestionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion.
    Success { text: String, usage: TokenUsage },
    /// Return an error.
    Error(MockFailure),
}

/// Injectable failure modes.
#[derive(Debug, Clone)]
pub enum MockFailure {
    AuthenticationFailed,
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockFailure> for ProviderError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::AuthenticationFailed => ProviderError::AuthenticationFailed,
            MockFailure::RateLimited { retry_after_secs } => {
                ProviderError::rate_limited(retry_after_secs)
            }
            MockFailure::Unavailable { message } => ProviderError::unavailable(message),
            MockFailure::Network { message } => ProviderError::network(message),
            MockFailure::Timeout { timeout_secs } => ProviderError::Timeout { timeout_secs },
        }
    }
}

impl MockSuggestionProvider {
    /// Creates a new mock provider with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response with the given text.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Success {
                text: text.into(),
                usage: TokenUsage::new(100, 50),
            });
        self
    }

    /// Queues a failure.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(failure));
        self
    }

    /// Number of suggest calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Copies of all recorded requests.
    pub fn recorded_calls(&self) -> Vec<SuggestionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestionProvider for MockSuggestionProvider {
    async fn suggest(
        &self,
        request: SuggestionRequest,
    ) -> Result<SuggestionResponse, ProviderError> {
        self.calls.lock().unwrap().push(request);

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Success { text, usage }) => Ok(SuggestionResponse {
                text,
                model: "mock-model".to_string(),
                usage,
                finish_reason: FinishReason::Stop,
            }),
            Some(MockResponse::Error(failure)) => Err(failure.into()),
            None => Err(ProviderError::unavailable("mock queue exhausted")),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model")
    }
}
