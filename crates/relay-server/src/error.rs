//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use relay_retell::RetellError;

const FALLBACK_MESSAGE: &str = "Failed to create web call";

/// Application-level errors with HTTP status code mapping.
///
/// Upstream failures of every kind surface uniformly as 500 with a
/// best-effort message; only a malformed client body is a 400.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Upstream(RetellError),
}

impl From<RetellError> for AppError {
    fn from(err: RetellError) -> Self {
        AppError::Upstream(err)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };
        let error = if message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        };
        (status, Json(ErrorResponse { success: false, error })).into_response()
    }
}
