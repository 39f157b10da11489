//! # integration-tests
//!
//! API-level tests: the axum router driven end to end over mock
//! repositories, plus contract tests for the repository ports. This
//! harness builds an app from whatever mock set a test wires up.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

use domains::traits::{
    MockCommentLikeRepository, MockCommentRepository, MockReplyRepository, MockThreadRepository,
};
use services::UseCases;

pub use api_adapters::middleware::CALLER_HEADER;

/// The four mock repositories a test configures before building the app.
/// Unconfigured capabilities panic on use, so a test states exactly the
/// repository traffic it expects.
#[derive(Default)]
pub struct MockRepos {
    pub threads: MockThreadRepository,
    pub comments: MockCommentRepository,
    pub replies: MockReplyRepository,
    pub likes: MockCommentLikeRepository,
}

impl MockRepos {
    pub fn into_app(self) -> Router {
        let use_cases = UseCases::new(
            Arc::new(self.threads),
            Arc::new(self.comments),
            Arc::new(self.replies),
            Arc::new(self.likes),
        );
        api_adapters::router(Arc::new(use_cases))
    }
}

/// Sends one request through the router and decodes the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("reading response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}

pub fn request(
    method: &str,
    uri: &str,
    caller: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(caller) = caller {
        builder = builder.header(CALLER_HEADER, caller);
    }
    match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .expect("building request"),
        None => builder.body(Body::empty()).expect("building request"),
    }
}
