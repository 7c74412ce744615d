//! Suggestion Provider Port - interface to the generative-language service.
//!
//! Abstracts the outbound AI call so the application layer can request
//! suggestions without coupling to a specific vendor API, and so tests can
//! substitute a recording mock.
//!
//! # Design
//!
//! - One synchronous completion per request; no streaming, no retries
//! - The reference document travels as a binary attachment next to the prompt
//! - Error types for the common failure modes (auth, rate limit, network,
//!   malformed response), all caught at the presentation boundary

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// MIME type used when attaching the handbook.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Port for the generative-language service.
///
/// Implementations connect to an external AI service and translate between
/// the provider-specific API and our request/response types.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Generate one suggestion completion.
    ///
    /// Exactly one attempt; any failure is returned to the caller unretried.
    async fn suggest(&self, request: SuggestionRequest)
        -> Result<SuggestionResponse, ProviderError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for a suggestion completion.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    /// The full instructional prompt, description already interpolated.
    pub prompt: String,
    /// Binary reference document sent alongside the prompt.
    pub document: Option<DocumentAttachment>,
}

impl SuggestionRequest {
    /// Creates a request carrying only a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            document: None,
        }
    }

    /// Attaches a binary document.
    pub fn with_document(mut self, bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        self.document = Some(DocumentAttachment {
            bytes,
            mime_type: mime_type.into(),
        });
        self
    }
}

/// Binary content attached to a suggestion request.
#[derive(Debug, Clone)]
pub struct DocumentAttachment {
    /// Raw document bytes.
    pub bytes: Vec<u8>,
    /// MIME type tag for the attachment.
    pub mime_type: String,
}

/// Response from a suggestion completion.
#[derive(Debug, Clone)]
pub struct SuggestionResponse {
    /// Generated markdown text, unmodified.
    pub text: String,
    /// Model that generated the response.
    pub model: String,
    /// Token usage as reported by the provider.
    pub usage: TokenUsage,
    /// Why the model stopped generating.
    pub finish_reason: FinishReason,
}

/// Token usage information, for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt (including the attached document).
    pub prompt_tokens: u32,
    /// Tokens in the completion.
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion).
    pub total_tokens: u32,
}

impl TokenUsage {
    /// Creates new token usage.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }

    /// Creates zero usage.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop (end of response).
    Stop,
    /// Hit the output token limit.
    Length,
    /// Content was filtered for safety.
    ContentFilter,
}

/// Provider information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g. "gemini").
    pub name: String,
    /// Model identifier.
    pub model: String,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Suggestion provider errors.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ProviderError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_attaches_document() {
        let request = SuggestionRequest::new("analysiere das Problem")
            .with_document(vec![0x25, 0x50, 0x44, 0x46], PDF_MIME_TYPE);

        assert_eq!(request.prompt, "analysiere das Problem");
        let document = request.document.unwrap();
        assert_eq!(document.mime_type, "application/pdf");
        assert_eq!(document.bytes, b"%PDF");
    }

    #[test]
    fn request_without_document() {
        let request = SuggestionRequest::new("nur Text");
        assert!(request.document.is_none());
    }

    #[test]
    fn token_usage_calculates_total() {
        let usage = TokenUsage::new(100, 50);
        assert_eq!(usage.prompt_tokens, 100);
        assert_eq!(usage.completion_tokens, 50);
        assert_eq!(usage.total_tokens, 150);
    }

    #[test]
    fn token_usage_zero_is_empty() {
        let usage = TokenUsage::zero();
        assert_eq!(usage.total_tokens, 0);
    }

    #[test]
    fn finish_reason_serializes_snake_case() {
        let json = serde_json::to_string(&FinishReason::Stop).unwrap();
        assert_eq!(json, "\"stop\"");

        let json = serde_json::to_string(&FinishReason::ContentFilter).unwrap();
        assert_eq!(json, "\"content_filter\"");
    }

    #[test]
    fn provider_error_displays_correctly() {
        let err = ProviderError::rate_limited(30);
        assert_eq!(err.to_string(), "rate limited: retry after 30s");

        let err = ProviderError::unavailable("maintenance");
        assert_eq!(err.to_string(), "provider unavailable: maintenance");

        let err = ProviderError::Timeout { timeout_secs: 120 };
        assert_eq!(err.to_string(), "request timed out after 120s");
    }
}
