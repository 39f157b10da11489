//! Assembles the full thread detail: thread, comments, and nested replies.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use domains::error::Result;
use domains::mapper;
use domains::models::Thread;
use domains::payload;
use domains::traits::{CommentRepository, ReplyRepository, ThreadRepository};

const CTX: &str = "get thread detail payload";

pub struct GetThreadDetailUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl GetThreadDetailUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<Thread> {
        payload::require_fields(CTX, payload, &["threadId"])?;
        let thread_id = payload::str_field(CTX, payload, "threadId")?;

        self.thread_repository.verify_id_exists(&thread_id).await?;
        let mut thread = self.thread_repository.get_by_id(&thread_id).await?;
        let comments = self
            .comment_repository
            .get_comments_by_thread_id(&thread_id)
            .await?;
        let replies = self
            .reply_repository
            .get_replies_by_thread_id(&thread_id)
            .await?;

        debug!(
            thread_id,
            comments = comments.len(),
            replies = replies.len(),
            "assembling thread detail"
        );

        let comments_with_replies = mapper::map_comments_with_replies(comments, &replies);
        thread.set_comments(comments_with_replies);
        Ok(thread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use domains::error::DomainError;
    use domains::models::{
        Comment, Reply, DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT,
    };
    use domains::traits::{MockCommentRepository, MockReplyRepository, MockThreadRepository};
    use mockall::predicate::eq;
    use serde_json::json;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 10, 0, 0, 0).unwrap()
    }

    fn thread() -> Thread {
        Thread::new("thread-123", "A Thread", "Thread body", date(), "dicoding")
    }

    #[tokio::test]
    async fn rejects_missing_thread_id_before_any_repository_call() {
        let use_case = GetThreadDetailUseCase::new(
            Arc::new(MockThreadRepository::new()),
            Arc::new(MockCommentRepository::new()),
            Arc::new(MockReplyRepository::new()),
        );

        let err = use_case.execute(&json!({})).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingProperty("get thread detail payload", "threadId"),
        );
    }

    #[tokio::test]
    async fn rejects_non_string_thread_id() {
        let use_case = GetThreadDetailUseCase::new(
            Arc::new(MockThreadRepository::new()),
            Arc::new(MockCommentRepository::new()),
            Arc::new(MockReplyRepository::new()),
        );

        let err = use_case.execute(&json!({ "threadId": 123 })).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidType("get thread detail payload", "threadId"),
        );
    }

    #[tokio::test]
    async fn returns_the_thread_with_no_comments() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_id_exists()
            .with(eq("thread-123"))
            .times(1)
            .returning(|_| Ok(()));
        threads
            .expect_get_by_id()
            .with(eq("thread-123"))
            .times(1)
            .returning(|_| Ok(thread()));

        let mut comments = MockCommentRepository::new();
        comments
            .expect_get_comments_by_thread_id()
            .with(eq("thread-123"))
            .times(1)
            .returning(|_| Ok(vec![]));

        let mut replies = MockReplyRepository::new();
        replies
            .expect_get_replies_by_thread_id()
            .with(eq("thread-123"))
            .times(1)
            .returning(|_| Ok(vec![]));

        let use_case =
            GetThreadDetailUseCase::new(Arc::new(threads), Arc::new(comments), Arc::new(replies));

        let detail = use_case
            .execute(&json!({ "threadId": "thread-123" }))
            .await
            .unwrap();

        assert_eq!(detail.id, "thread-123");
        assert!(detail.comments().is_empty());
    }

    #[tokio::test]
    async fn redacts_deleted_comments_and_replies_in_the_assembled_tree() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_id_exists()
            .times(1)
            .returning(|_| Ok(()));
        threads.expect_get_by_id().times(1).returning(|_| Ok(thread()));

        let mut comments = MockCommentRepository::new();
        comments
            .expect_get_comments_by_thread_id()
            .times(1)
            .returning(|_| {
                Ok(vec![
                    Comment::new("comment-123", "johndoe", date(), "A comment", true, 0),
                    Comment::new("comment-456", "dicoding", date(), "A comment 2", false, 1),
                ])
            });

        let mut replies = MockReplyRepository::new();
        replies
            .expect_get_replies_by_thread_id()
            .times(1)
            .returning(|_| {
                Ok(vec![
                    Reply::new("reply-123", "dicoding", date(), "A reply", true, "comment-123"),
                    Reply::new("reply-456", "johndoe", date(), "A reply 2", false, "comment-123"),
                ])
            });

        let use_case =
            GetThreadDetailUseCase::new(Arc::new(threads), Arc::new(comments), Arc::new(replies));

        let detail = use_case
            .execute(&json!({ "threadId": "thread-123" }))
            .await
            .unwrap();

        let first = &detail.comments()[0];
        assert_eq!(first.content, DELETED_COMMENT_CONTENT);
        assert_eq!(first.replies.len(), 2);
        assert_eq!(first.replies[0].content, DELETED_REPLY_CONTENT);
        assert_eq!(first.replies[1].content, "A reply 2");

        let second = &detail.comments()[1];
        assert_eq!(second.content, "A comment 2");
        assert!(second.replies.is_empty());
    }
}
