//! Reply routes: creation and soft deletion under the full parent chain.

use mockall::predicate::eq;
use serde_json::json;

use domains::error::DomainError;
use domains::models::AddedReply;
use integration_tests::{request, send, MockRepos};

#[tokio::test]
async fn posting_a_reply_returns_201_with_the_added_reply() {
    let mut repos = MockRepos::default();
    repos
        .threads
        .expect_verify_id_exists()
        .with(eq("thread-123"))
        .times(1)
        .returning(|_| Ok(()));
    repos
        .comments
        .expect_verify_id_exists()
        .with(eq("comment-123"))
        .times(1)
        .returning(|_| Ok(()));
    repos
        .replies
        .expect_add_reply()
        .withf(|r| {
            r.content == "A reply" && r.owner == "user-123" && r.comment_id == "comment-123"
        })
        .times(1)
        .returning(|_| {
            Ok(AddedReply {
                id: "reply-123".to_owned(),
                content: "A reply".to_owned(),
                owner: "user-123".to_owned(),
            })
        });

    let (status, body) = send(
        repos.into_app(),
        request(
            "POST",
            "/threads/thread-123/comments/comment-123/replies",
            Some("user-123"),
            Some(json!({ "content": "A reply" })),
        ),
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(body["data"]["addedReply"]["id"], "reply-123");
    assert_eq!(body["data"]["addedReply"]["owner"], "user-123");
}

#[tokio::test]
async fn deleting_an_owned_reply_returns_200() {
    let mut repos = MockRepos::default();
    repos
        .threads
        .expect_verify_id_exists()
        .with(eq("thread-123"))
        .times(1)
        .returning(|_| Ok(()));
    repos
        .comments
        .expect_verify_id_exists()
        .with(eq("comment-123"))
        .times(1)
        .returning(|_| Ok(()));
    repos
        .replies
        .expect_verify_id_exists()
        .with(eq("reply-123"))
        .times(1)
        .returning(|_| Ok(()));
    repos
        .replies
        .expect_verify_owner()
        .with(eq("reply-123"), eq("user-123"))
        .times(1)
        .returning(|_, _| Ok(()));
    repos
        .replies
        .expect_soft_delete_by_id()
        .with(eq("reply-123"))
        .times(1)
        .returning(|_| Ok(()));

    let (status, body) = send(
        repos.into_app(),
        request(
            "DELETE",
            "/threads/thread-123/comments/comment-123/replies/reply-123",
            Some("user-123"),
            None,
        ),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "status": "success" }));
}

#[tokio::test]
async fn deleting_a_missing_reply_is_404() {
    let mut repos = MockRepos::default();
    repos
        .threads
        .expect_verify_id_exists()
        .times(1)
        .returning(|_| Ok(()));
    repos
        .comments
        .expect_verify_id_exists()
        .times(1)
        .returning(|_| Ok(()));
    repos
        .replies
        .expect_verify_id_exists()
        .with(eq("reply-xxx"))
        .times(1)
        .returning(|id| Err(DomainError::NotFound("reply".to_owned(), id.to_owned())));
    repos.replies.expect_soft_delete_by_id().never();

    let (status, body) = send(
        repos.into_app(),
        request(
            "DELETE",
            "/threads/thread-123/comments/comment-123/replies/reply-xxx",
            Some("user-123"),
            None,
        ),
    )
    .await;

    assert_eq!(status, 404);
    assert_eq!(body["status"], "fail");
}
