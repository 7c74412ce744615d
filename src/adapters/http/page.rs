//! The embedded single-page form.

use axum::response::Html;

/// The complete form page, compiled into the binary.
const INDEX_HTML: &str = include_str!("assets/index.html");

/// GET /
///
/// Serves the interactive form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
