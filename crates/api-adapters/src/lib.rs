//! # api-adapters
//!
//! The HTTP boundary for rusty-forum: one route per use case, the
//! caller-identity extractor, and the domain-error → status-code mapping.

pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use services::UseCases;

/// Builds the application router over the wired use cases.
pub fn router(use_cases: Arc<UseCases>) -> Router {
    Router::new()
        .route("/threads", post(handlers::post_thread))
        .route("/threads/{thread_id}", get(handlers::get_thread))
        .route(
            "/threads/{thread_id}/comments",
            post(handlers::post_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(handlers::delete_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(handlers::post_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(handlers::delete_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/likes",
            put(handlers::put_comment_like),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(use_cases)
}
