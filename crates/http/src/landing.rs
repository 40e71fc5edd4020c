//! Embedded landing page served at `/`.

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

/// Embedded HTML for the landing page
pub const LANDING_HTML: &str = include_str!("landing.html");

/// Serve the landing page
pub async fn serve_landing() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(LANDING_HTML))
        .into_response()
}
