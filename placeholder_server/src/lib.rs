//! Placeholder web server.
//!
//! Serves static text on every path so an external page-load suite has something to hit.
//! It carries no state and shares nothing with the reporter.

use axum::{Router, http::StatusCode, http::Uri, response::IntoResponse, routing::get};

pub const INDEX_BODY: &str = "Welcome to the ";
pub const FALLBACK_BODY: &str = "testing";

pub async fn index() -> impl IntoResponse {
    tracing::debug!("Serving placeholder for /");
    (StatusCode::OK, INDEX_BODY)
}

pub async fn fallback(uri: Uri) -> impl IntoResponse {
    tracing::debug!("Serving placeholder for {}", uri.path());
    (StatusCode::OK, FALLBACK_BODY)
}

/// Builds the router: `GET /` and a catch-all for every other path.
pub fn routes() -> Router {
    Router::new().route("/", get(index)).fallback(fallback)
}
