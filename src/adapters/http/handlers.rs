//! HTTP handlers for the advisor endpoints.
//!
//! These handlers connect Axum routes to the application layer and convert
//! every failure into a user-visible JSON error at this boundary.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    GetHandbookOverviewHandler, RequestSuggestionsCommand, RequestSuggestionsHandler,
    SuggestionError,
};
use crate::ports::ExtractError;

use super::dto::{
    ErrorResponse, HandbookOverviewResponse, SuggestionRequestBody, SuggestionResponseBody,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Advisor API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotConfigured,
    Extraction(String),
    Document(String),
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::validation(msg))
            }
            ApiError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::not_configured(
                    "Gemini API key is not configured. Set HANDBOOK_ADVISOR__AI__GEMINI_API_KEY or config/secrets.toml.",
                ),
            ),
            ApiError::Extraction(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::extraction_failed(msg),
            ),
            ApiError::Document(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::document(msg),
            ),
            ApiError::Upstream(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::upstream(format!("No suggestions produced: {}", msg)),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<SuggestionError> for ApiError {
    fn from(error: SuggestionError) -> Self {
        match error {
            SuggestionError::InvalidDescription(e) => ApiError::Validation(e.to_string()),
            SuggestionError::NotConfigured => ApiError::NotConfigured,
            SuggestionError::Document(e) => ApiError::Document(e.to_string()),
            SuggestionError::Provider(e) => ApiError::Upstream(e.to_string()),
        }
    }
}

impl From<ExtractError> for ApiError {
    fn from(error: ExtractError) -> Self {
        ApiError::Extraction(error.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Static display data about the configured handbook and model.
#[derive(Debug, Clone)]
pub struct HandbookInfo {
    pub source_file: String,
    pub model: String,
}

/// Shared application state for the advisor routes.
#[derive(Clone)]
pub struct AdvisorAppState {
    pub overview_handler: Arc<GetHandbookOverviewHandler>,
    pub suggestions_handler: Arc<RequestSuggestionsHandler>,
    pub info: HandbookInfo,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
///
/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/handbook
///
/// Returns the sidebar/preview data from the (cached) document preprocessor.
/// Works without an API key.
pub async fn get_handbook_overview(
    State(state): State<AdvisorAppState>,
) -> Result<Json<HandbookOverviewResponse>, ApiError> {
    let extract = state.overview_handler.handle().await?;

    Ok(Json(HandbookOverviewResponse {
        source_file: state.info.source_file.clone(),
        model: state.info.model.clone(),
        page_count: extract.page_count,
        outline: extract.outline.clone(),
        outline_warning: extract.outline_warning.clone(),
    }))
}

/// POST /api/suggestions
///
/// Runs one suggestion round-trip for the submitted problem description.
pub async fn post_suggestions(
    State(state): State<AdvisorAppState>,
    Json(body): Json<SuggestionRequestBody>,
) -> Result<Json<SuggestionResponseBody>, ApiError> {
    let command = RequestSuggestionsCommand {
        problem_description: body.problem_description,
    };

    let response = state.suggestions_handler.handle(command).await?;

    Ok(Json(SuggestionResponseBody {
        suggestions: response.text,
        model: response.model,
    }))
}
