//! Request-scoped middleware.
//!
//! Authentication proper is an external collaborator; by the time a
//! request reaches these routes the boundary has already verified the
//! caller and forwarded their user id in the [`CALLER_HEADER`] header.
//! Handlers that mutate state extract it through [`Caller`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;

pub const CALLER_HEADER: &str = "x-forum-user";

/// The authenticated caller's user id.
#[derive(Debug, Clone)]
pub struct Caller(pub String);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(CALLER_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|id| !id.is_empty())
            .map(|id| Caller(id.to_owned()))
            .ok_or(ApiError::MissingCaller)
    }
}
