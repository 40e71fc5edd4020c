//! HTTP API server for the plant catalog.

pub mod api_error;
mod api_types;
mod handlers;
mod landing;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use plantarium_service::PlantService;

pub use api_types::VersionResponse;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Catalog operations; each handler performs exactly one call.
    pub plants: Arc<PlantService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing::serve_landing))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/plants", post(handlers::plants::create_plant))
        .route(
            "/plants/{name}",
            get(handlers::plants::get_plant)
                .patch(handlers::plants::update_plant)
                .delete(handlers::plants::delete_plant),
        )
        .fallback(unmatched_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

/// Unmatched routes answer with a bare 404 and an empty body.
async fn unmatched_route() -> StatusCode {
    StatusCode::NOT_FOUND
}
