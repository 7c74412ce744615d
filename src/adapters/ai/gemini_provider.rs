//! Gemini Provider - Implementation of SuggestionProvider for Google's
//! generative-language API.
//!
//! Sends the handbook as an `inline_data` part (base64-encoded PDF) next to
//! the text prompt in a single `generateContent` call. Exactly one attempt per
//! request; every failure is mapped to a [`ProviderError`] and surfaced to the
//! caller.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.5-flash-preview-04-17")
//!     .with_base_url("https://generativelanguage.googleapis.com");
//!
//! let provider = GeminiProvider::new(config);
//! ```

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    FinishReason, ProviderError, ProviderInfo, SuggestionProvider, SuggestionRequest,
    SuggestionResponse, TokenUsage,
};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g. "gemini-2.5-flash-preview-04-17").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash-preview-04-17".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Converts our request to Gemini's wire format.
    ///
    /// The document part precedes the text part, matching the order the
    /// prompt's instructions assume.
    fn to_gemini_request(&self, request: &SuggestionRequest) -> GeminiRequest {
        let mut parts = Vec::new();

        if let Some(document) = &request.document {
            parts.push(GeminiPart::InlineData {
                inline_data: InlineData {
                    mime_type: document.mime_type.clone(),
                    data: BASE64.encode(&document.bytes),
                },
            });
        }

        parts.push(GeminiPart::Text {
            text: request.prompt.clone(),
        });

        GeminiRequest {
            contents: vec![GeminiContent { parts }],
        }
    }

    /// Sends the request, mapping transport failures.
    async fn send_request(&self, request: &SuggestionRequest) -> Result<Response, ProviderError> {
        let gemini_request = self.to_gemini_request(request);

        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ProviderError::network(format!("Connection failed: {}", e))
                } else {
                    ProviderError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ProviderError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(ProviderError::AuthenticationFailed),
            400 => {
                // Gemini reports an invalid key as a 400 INVALID_ARGUMENT
                if error_body.contains("API key") {
                    Err(ProviderError::AuthenticationFailed)
                } else {
                    Err(ProviderError::InvalidRequest(error_body))
                }
            }
            429 => Err(ProviderError::rate_limited(Self::parse_retry_after(
                &error_body,
            ))),
            500..=599 => Err(ProviderError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(ProviderError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses a retry delay from a RESOURCE_EXHAUSTED error body.
    fn parse_retry_after(error_body: &str) -> u32 {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(details) = parsed
                .get("error")
                .and_then(|e| e.get("details"))
                .and_then(|d| d.as_array())
            {
                for detail in details {
                    if let Some(delay) = detail.get("retryDelay").and_then(|d| d.as_str()) {
                        if let Ok(secs) = delay.trim_end_matches('s').parse::<u32>() {
                            return secs;
                        }
                    }
                }
            }
        }
        60 // Default when the body carries no retry info
    }

    /// Parses a successful response into our response type.
    async fn parse_response(&self, response: Response) -> Result<SuggestionResponse, ProviderError> {
        let response = self.handle_response_status(response).await?;

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::parse(format!("Failed to parse response: {}", e)))?;

        let candidate = gemini_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::parse("Response contained no candidates"))?;

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::parse("Response contained no text parts"));
        }

        let finish_reason = map_finish_reason(candidate.finish_reason.as_deref());

        let usage = gemini_response
            .usage_metadata
            .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
            .unwrap_or_default();

        Ok(SuggestionResponse {
            text,
            model: self.config.model.clone(),
            usage,
            finish_reason,
        })
    }
}

#[async_trait]
impl SuggestionProvider for GeminiProvider {
    async fn suggest(
        &self,
        request: SuggestionRequest,
    ) -> Result<SuggestionResponse, ProviderError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

/// Maps Gemini's finishReason strings onto our enum.
fn map_finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("PROHIBITED_CONTENT") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    }
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiPart {
    InlineData { inline_data: InlineData },
    Text { text: String },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiUsage {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
}
