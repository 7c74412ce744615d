//! Integration tests for the HTTP layer.
//!
//! The real router, handlers and PDF analyzer are wired against a recording
//! mock provider and a generated fixture PDF, then driven with oneshot
//! requests.

mod common;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use handbook_advisor::adapters::ai::{MockFailure, MockSuggestionProvider};
use handbook_advisor::adapters::document::{LocalHandbookStorage, PdfHandbookAnalyzer};
use handbook_advisor::adapters::http::{advisor_routes, AdvisorAppState, HandbookInfo};
use handbook_advisor::application::handlers::{
    GetHandbookOverviewHandler, RequestSuggestionsHandler,
};
use handbook_advisor::application::ExtractCache;
use handbook_advisor::ports::SuggestionProvider;

use common::{save_pdf_with_outline, save_pdf_with_pages};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Exactly 20 characters, the minimum valid length.
const VALID_20_CHARS: &str = "Team braucht Hilfe!!";
/// One character short of the minimum.
const INVALID_19_CHARS: &str = "Team braucht Hilfe!";

fn app_state(
    handbook_path: &Path,
    provider: Option<Arc<dyn SuggestionProvider>>,
) -> AdvisorAppState {
    let cache = Arc::new(ExtractCache::new(Duration::from_secs(3600)));
    let analyzer = Arc::new(PdfHandbookAnalyzer::new());
    let storage = Arc::new(LocalHandbookStorage::new());
    let path = PathBuf::from(handbook_path);

    AdvisorAppState {
        overview_handler: Arc::new(GetHandbookOverviewHandler::new(
            analyzer,
            cache,
            path.clone(),
        )),
        suggestions_handler: Arc::new(RequestSuggestionsHandler::new(provider, storage, path)),
        info: HandbookInfo {
            source_file: "handbook.pdf".to_string(),
            model: "gemini-2.5-flash-preview-04-17".to_string(),
        },
    }
}

fn suggestion_request(description: &str) -> Request<Body> {
    let body = json!({ "problem_description": description }).to_string();
    Request::builder()
        .method("POST")
        .uri("/api/suggestions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn valid_description_returns_mock_suggestions() {
    assert_eq!(VALID_20_CHARS.chars().count(), 20);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("handbook.pdf");
    save_pdf_with_pages(&path, &["first page"]);

    let provider = MockSuggestionProvider::new().with_text("## Result\nOK");
    let app = advisor_routes(app_state(&path, Some(Arc::new(provider.clone()))));

    let response = app.oneshot(suggestion_request(VALID_20_CHARS)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["suggestions"], "## Result\nOK");
    assert_eq!(body["model"], "mock-model");

    // the provider saw the interpolated prompt plus the raw document bytes
    assert_eq!(provider.call_count(), 1);
    let calls = provider.recorded_calls();
    assert!(calls[0].prompt.contains(VALID_20_CHARS));
    let document = calls[0].document.as_ref().unwrap();
    assert_eq!(document.mime_type, "application/pdf");
    assert!(document.bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn nineteen_characters_are_rejected_without_a_provider_call() {
    assert_eq!(INVALID_19_CHARS.chars().count(), 19);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("handbook.pdf");
    save_pdf_with_pages(&path, &["first page"]);

    let provider = MockSuggestionProvider::new().with_text("unused");
    let app = advisor_routes(app_state(&path, Some(Arc::new(provider.clone()))));

    let response = app
        .oneshot(suggestion_request(INVALID_19_CHARS))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn missing_credential_yields_configuration_error_and_no_calls() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("handbook.pdf");
    save_pdf_with_pages(&path, &["first page"]);

    let app = advisor_routes(app_state(&path, None));

    let response = app.oneshot(suggestion_request(VALID_20_CHARS)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(response).await;
    assert_eq!(body["code"], "AI_NOT_CONFIGURED");
}

#[tokio::test]
async fn provider_failure_surfaces_as_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("handbook.pdf");
    save_pdf_with_pages(&path, &["first page"]);

    let provider = MockSuggestionProvider::new().with_failure(MockFailure::Unavailable {
        message: "quota exceeded".to_string(),
    });
    let app = advisor_routes(app_state(&path, Some(Arc::new(provider.clone()))));

    let response = app.oneshot(suggestion_request(VALID_20_CHARS)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = json_body(response).await;
    assert_eq!(body["code"], "AI_PROVIDER_ERROR");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("quota exceeded"));
    // exactly one attempt, never retried
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn handbook_overview_serves_outline_without_credential() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("handbook.pdf");
    save_pdf_with_outline(&path);

    let app = advisor_routes(app_state(&path, None));

    let response = app
        .oneshot(Request::builder().uri("/api/handbook").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["source_file"], "handbook.pdf");
    assert_eq!(body["model"], "gemini-2.5-flash-preview-04-17");
    assert_eq!(body["page_count"], 2);
    assert!(body["outline"]
        .as_str()
        .unwrap()
        .contains("Introduction (Page 1)"));
    assert!(body.get("outline_warning").is_none());
}

#[tokio::test]
async fn form_page_is_served_at_root() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("handbook.pdf");
    save_pdf_with_pages(&path, &["first page"]);

    let app = advisor_routes(app_state(&path, None));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Creative Director AI Hilfstool"));
    assert!(html.contains("problem-input"));
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("handbook.pdf");
    save_pdf_with_pages(&path, &["first page"]);

    let app = advisor_routes(app_state(&path, None));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}
