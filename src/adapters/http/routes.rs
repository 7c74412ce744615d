//! HTTP routes for the advisor.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{get_handbook_overview, health, post_suggestions, AdvisorAppState};
use super::page::index;

/// Creates the advisor router with all routes and middleware.
pub fn advisor_routes(state: AdvisorAppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // GET / - the form page
        .route("/", get(index))
        // GET /health - liveness probe
        .route("/health", get(health))
        // GET /api/handbook - sidebar/preview data
        .route("/api/handbook", get(get_handbook_overview))
        // POST /api/suggestions - one suggestion round-trip
        .route("/api/suggestions", post(post_suggestions))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
