//! Posts a comment under an existing thread.

use std::sync::Arc;

use serde_json::Value;

use domains::error::Result;
use domains::models::{AddComment, AddedComment};
use domains::traits::{CommentRepository, ThreadRepository};

pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedComment> {
        let add_comment = AddComment::parse(payload)?;
        self.thread_repository
            .verify_id_exists(&add_comment.thread_id)
            .await?;
        self.comment_repository.add_comment(&add_comment).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::error::DomainError;
    use domains::traits::{MockCommentRepository, MockThreadRepository};
    use mockall::predicate::eq;
    use mockall::Sequence;
    use serde_json::json;

    #[tokio::test]
    async fn rejects_incomplete_payload_before_touching_the_repositories() {
        let use_case = AddCommentUseCase::new(
            Arc::new(MockThreadRepository::new()),
            Arc::new(MockCommentRepository::new()),
        );

        let err = use_case.execute(&json!({})).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::MissingProperty("add comment payload", "content"),
        );
    }

    #[tokio::test]
    async fn propagates_not_found_for_a_missing_thread() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_id_exists()
            .with(eq("thread-999"))
            .times(1)
            .returning(|id| Err(DomainError::NotFound("thread".to_owned(), id.to_owned())));

        let use_case =
            AddCommentUseCase::new(Arc::new(threads), Arc::new(MockCommentRepository::new()));

        let err = use_case
            .execute(&json!({
                "content": "My New Comment",
                "owner": "user-123",
                "threadId": "thread-999",
            }))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::NotFound("thread".to_owned(), "thread-999".to_owned()),
        );
    }

    #[tokio::test]
    async fn verifies_the_thread_before_persisting_the_comment() {
        let mut seq = Sequence::new();

        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_id_exists()
            .with(eq("thread-123"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut comments = MockCommentRepository::new();
        comments
            .expect_add_comment()
            .withf(|c| {
                c.content == "My New Comment" && c.owner == "user-123" && c.thread_id == "thread-123"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(AddedComment {
                    id: "comment-123".to_owned(),
                    content: "My New Comment".to_owned(),
                    owner: "user-123".to_owned(),
                })
            });

        let use_case = AddCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let added = use_case
            .execute(&json!({
                "content": "My New Comment",
                "owner": "user-123",
                "threadId": "thread-123",
            }))
            .await
            .unwrap();

        assert_eq!(
            added,
            AddedComment {
                id: "comment-123".to_owned(),
                content: "My New Comment".to_owned(),
                owner: "user-123".to_owned(),
            },
        );
    }
}
