//! # HTTP Handlers
//!
//! Thin adapters between routes and use cases. Each handler merges the
//! path parameters and the caller identity into the JSON payload, runs
//! the use case, and wraps the result in the response envelope; all
//! domain rules live behind the use-case boundary.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Map, Value};

use services::UseCases;

use crate::error::ApiError;
use crate::middleware::Caller;

type ApiResult = Result<(StatusCode, Json<Value>), ApiError>;

/// Overlays route-derived fields on the request body. A non-object body
/// is treated as empty so the use case reports the missing fields.
fn with_fields(payload: Value, fields: &[(&str, &str)]) -> Value {
    let mut merged = match payload {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for (key, value) in fields {
        merged.insert((*key).to_owned(), Value::String((*value).to_owned()));
    }
    Value::Object(merged)
}

pub async fn post_thread(
    State(use_cases): State<Arc<UseCases>>,
    caller: Caller,
    Json(body): Json<Value>,
) -> ApiResult {
    let payload = with_fields(body, &[("owner", &caller.0)]);
    let added = use_cases.add_thread.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "addedThread": added } })),
    ))
}

pub async fn get_thread(
    State(use_cases): State<Arc<UseCases>>,
    Path(thread_id): Path<String>,
) -> ApiResult {
    let payload = json!({ "threadId": thread_id });
    let thread = use_cases.get_thread_detail.execute(&payload).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "status": "success", "data": { "thread": thread } })),
    ))
}

pub async fn post_comment(
    State(use_cases): State<Arc<UseCases>>,
    caller: Caller,
    Path(thread_id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult {
    let payload = with_fields(body, &[("owner", &caller.0), ("threadId", &thread_id)]);
    let added = use_cases.add_comment.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "addedComment": added } })),
    ))
}

pub async fn delete_comment(
    State(use_cases): State<Arc<UseCases>>,
    caller: Caller,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> ApiResult {
    let payload = json!({
        "threadId": thread_id,
        "commentId": comment_id,
        "owner": caller.0,
    });
    use_cases.delete_comment.execute(&payload).await?;

    Ok((StatusCode::OK, Json(json!({ "status": "success" }))))
}

pub async fn post_reply(
    State(use_cases): State<Arc<UseCases>>,
    caller: Caller,
    Path((thread_id, comment_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> ApiResult {
    let payload = with_fields(
        body,
        &[
            ("owner", &caller.0),
            ("threadId", &thread_id),
            ("commentId", &comment_id),
        ],
    );
    let added = use_cases.add_reply.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "addedReply": added } })),
    ))
}

pub async fn delete_reply(
    State(use_cases): State<Arc<UseCases>>,
    caller: Caller,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> ApiResult {
    let payload = json!({
        "threadId": thread_id,
        "commentId": comment_id,
        "replyId": reply_id,
        "owner": caller.0,
    });
    use_cases.delete_reply.execute(&payload).await?;

    Ok((StatusCode::OK, Json(json!({ "status": "success" }))))
}

pub async fn put_comment_like(
    State(use_cases): State<Arc<UseCases>>,
    caller: Caller,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> ApiResult {
    let payload = json!({
        "threadId": thread_id,
        "commentId": comment_id,
        "owner": caller.0,
    });
    use_cases.toggle_comment_like.execute(&payload).await?;

    Ok((StatusCode::OK, Json(json!({ "status": "success" }))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_fields_overlays_route_data_on_the_body() {
        let body = json!({ "content": "A comment" });
        let merged = with_fields(body, &[("owner", "user-123"), ("threadId", "thread-123")]);

        assert_eq!(merged["content"], "A comment");
        assert_eq!(merged["owner"], "user-123");
        assert_eq!(merged["threadId"], "thread-123");
    }

    #[test]
    fn with_fields_discards_a_non_object_body() {
        let merged = with_fields(json!("not an object"), &[("owner", "user-123")]);
        assert_eq!(merged, json!({ "owner": "user-123" }));
    }
}
