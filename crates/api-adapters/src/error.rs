//! Maps domain failures onto HTTP responses.
//!
//! Client-caused failures answer `{"status": "fail", "message": ...}` with
//! the domain message; infrastructure failures answer a generic
//! `{"status": "error", ...}` so internals never leak to callers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domains::error::DomainError;

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// The caller-identity header was absent or empty.
    MissingCaller,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::MissingCaller => (
                StatusCode::UNAUTHORIZED,
                json!({ "status": "fail", "message": "missing caller identity" }),
            ),
            Self::Domain(err) => match status_for(&err) {
                StatusCode::INTERNAL_SERVER_ERROR => {
                    tracing::error!(error = %err, "request failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "status": "error", "message": "internal server error" }),
                    )
                }
                status => (status, json!({ "status": "fail", "message": err.to_string() })),
            },
        };

        (status, Json(body)).into_response()
    }
}

fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::MissingProperty(..) | DomainError::InvalidType(..) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(..) => StatusCode::NOT_FOUND,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::NotImplemented(_) | DomainError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
