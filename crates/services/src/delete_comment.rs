//! Soft-deletes a comment after checking existence and ownership.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use domains::error::Result;
use domains::payload;
use domains::traits::{CommentRepository, ThreadRepository};

const CTX: &str = "delete comment payload";

pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// The row is never removed; it is flagged and redacted on every
    /// subsequent read.
    pub async fn execute(&self, payload: &Value) -> Result<()> {
        payload::require_fields(CTX, payload, &["threadId", "commentId", "owner"])?;
        let thread_id = payload::str_field(CTX, payload, "threadId")?;
        let comment_id = payload::str_field(CTX, payload, "commentId")?;
        let owner = payload::str_field(CTX, payload, "owner")?;

        self.thread_repository.verify_id_exists(&thread_id).await?;
        self.comment_repository.verify_id_exists(&comment_id).await?;
        self.comment_repository.verify_owner(&comment_id, &owner).await?;
        self.comment_repository.soft_delete_by_id(&comment_id).await?;

        info!(comment_id, owner, "comment soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::error::DomainError;
    use domains::traits::{MockCommentRepository, MockThreadRepository};
    use mockall::predicate::eq;
    use serde_json::json;

    fn valid_payload() -> serde_json::Value {
        json!({
            "threadId": "thread-123",
            "commentId": "comment-123",
            "owner": "user-123",
        })
    }

    #[tokio::test]
    async fn rejects_empty_payload_before_any_repository_call() {
        let use_case = DeleteCommentUseCase::new(
            Arc::new(MockThreadRepository::new()),
            Arc::new(MockCommentRepository::new()),
        );

        let err = use_case.execute(&json!({})).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::MissingProperty("delete comment payload", "threadId"),
        );
    }

    #[tokio::test]
    async fn rejects_payload_with_wrong_types() {
        let use_case = DeleteCommentUseCase::new(
            Arc::new(MockThreadRepository::new()),
            Arc::new(MockCommentRepository::new()),
        );

        let err = use_case
            .execute(&json!({
                "threadId": "thread-123",
                "commentId": 123,
                "owner": "user-123",
            }))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::InvalidType("delete comment payload", "commentId"),
        );
    }

    #[tokio::test]
    async fn refuses_to_delete_a_comment_the_caller_does_not_own() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_id_exists()
            .with(eq("thread-123"))
            .times(1)
            .returning(|_| Ok(()));

        let mut comments = MockCommentRepository::new();
        comments
            .expect_verify_id_exists()
            .with(eq("comment-123"))
            .times(1)
            .returning(|_| Ok(()));
        comments
            .expect_verify_owner()
            .with(eq("comment-123"), eq("user-123"))
            .times(1)
            .returning(|_, _| Err(DomainError::Forbidden("not the resource owner".to_owned())));
        comments.expect_soft_delete_by_id().never();

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));

        let err = use_case.execute(&valid_payload()).await.unwrap_err();
        assert_eq!(err, DomainError::Forbidden("not the resource owner".to_owned()));
    }

    #[tokio::test]
    async fn soft_deletes_after_all_checks_pass() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_id_exists()
            .with(eq("thread-123"))
            .times(1)
            .returning(|_| Ok(()));

        let mut comments = MockCommentRepository::new();
        comments
            .expect_verify_id_exists()
            .with(eq("comment-123"))
            .times(1)
            .returning(|_| Ok(()));
        comments
            .expect_verify_owner()
            .with(eq("comment-123"), eq("user-123"))
            .times(1)
            .returning(|_, _| Ok(()));
        comments
            .expect_soft_delete_by_id()
            .with(eq("comment-123"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        use_case.execute(&valid_payload()).await.unwrap();
    }
}
