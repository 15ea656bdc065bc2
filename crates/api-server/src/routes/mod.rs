//! Route handlers

pub mod health;
pub mod index;
pub mod task;

use axum::{http::StatusCode, Json, Router};
use serde::Serialize;

use todo_core::Error;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

const INTERNAL_ERROR: &str = "Internal server error";

pub type RouteError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, error: impl Into<String>) -> RouteError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

/// Translate a core error into its HTTP status and `{error}` body
///
/// Storage and serialization details stay in the server log; clients only
/// see a fixed message for them.
pub fn route_error(err: Error) -> RouteError {
    match err {
        Error::Validation(msg) => error_response(StatusCode::BAD_REQUEST, msg),
        Error::TaskNotFound(_) => error_response(StatusCode::NOT_FOUND, "Task not found"),
        other => {
            tracing::error!("Request failed: {}", other);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

/// All application routes, including the JSON 404 for unknown endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .merge(health::router())
        .merge(task::router())
        .fallback(index::endpoint_not_found)
        .method_not_allowed_fallback(index::endpoint_not_found)
}
