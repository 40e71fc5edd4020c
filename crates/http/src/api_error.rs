//! Typed API error for HTTP handlers.
//!
//! The single boundary between handler failures and the wire: every failure
//! becomes a status code plus a JSON body of the shape `{"err": "<summary>"}`.
//! Internal diagnostic detail is logged server-side and never returned to
//! the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use plantarium_service::ServiceError;

/// API error with HTTP status code and client-facing message.
///
/// Use via `Result<Json<T>, ApiError>` in handlers.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found — no record under the requested name.
    NotFound(String),
    /// 500 Internal Server Error — unexpected storage fault. The source is
    /// logged; only `client` reaches the caller.
    Internal { client: &'static str, source: ServiceError },
}

impl ApiError {
    /// Classify a service failure for one handler: not-found keeps its 404,
    /// anything else becomes a 500 carrying `client` as the outward message.
    #[must_use]
    pub fn from_op(source: ServiceError, client: &'static str) -> Self {
        if source.is_not_found() {
            Self::NotFound("Plant not found".to_owned())
        } else {
            Self::Internal { client, source }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => {
                tracing::debug!(%msg, "request for absent record");
                (StatusCode::NOT_FOUND, msg)
            },
            Self::Internal { client, source } => {
                tracing::error!(error = %source, client, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, client.to_owned())
            },
        };
        let body = serde_json::json!({"err": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::from_op(err, "An internal server error occurred")
    }
}
