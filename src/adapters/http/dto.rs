//! HTTP DTOs for the advisor endpoints.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of POST /api/suggestions.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionRequestBody {
    /// Free-text description of the team's problem.
    #[serde(default)]
    pub problem_description: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful suggestion response.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponseBody {
    /// Markdown suggestion text, exactly as returned by the model.
    pub suggestions: String,
    /// Model that produced the text.
    pub model: String,
}

/// Sidebar/preview data derived from the document preprocessor.
#[derive(Debug, Clone, Serialize)]
pub struct HandbookOverviewResponse {
    /// File name of the handbook.
    pub source_file: String,
    /// Configured model identifier.
    pub model: String,
    /// Number of pages in the handbook.
    pub page_count: usize,
    /// Rendered table of contents, when one could be derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    /// Non-fatal warning when no usable outline exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_warning: Option<String>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
        }
    }

    pub fn not_configured(message: impl Into<String>) -> Self {
        Self {
            code: "AI_NOT_CONFIGURED".to_string(),
            message: message.into(),
        }
    }

    pub fn extraction_failed(message: impl Into<String>) -> Self {
        Self {
            code: "EXTRACTION_FAILED".to_string(),
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            code: "AI_PROVIDER_ERROR".to_string(),
            message: message.into(),
        }
    }

    pub fn document(message: impl Into<String>) -> Self {
        Self {
            code: "DOCUMENT_ERROR".to_string(),
            message: message.into(),
        }
    }
}
