use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reserve_core::error::ReserveError;
use serde_json::json;
use thiserror::Error;

/// Server-level error type covering all handlers.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ReserveError> for ServerError {
    fn from(err: ReserveError) -> Self {
        if err.is_not_found() {
            return ServerError::NotFound(err.to_string());
        }
        match err {
            ReserveError::InvalidProof(msg) => ServerError::BadRequest(msg),
            other => ServerError::Internal(other.to_string()),
        }
    }
}

/// Convenience alias for server handler results.
pub type Result<T> = std::result::Result<T, ServerError>;
