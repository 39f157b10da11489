//! Toggles the caller's like on a comment.
//!
//! The check-then-act pair (`has_user_liked_comment` → add/remove) is not
//! atomic at this layer. Two concurrent toggles by the same user may both
//! observe "not liked" and both attempt an insert; the storage-level
//! `UNIQUE (owner, comment_id)` constraint rejects the second.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use domains::error::Result;
use domains::payload;
use domains::traits::{CommentLikeRepository, CommentRepository, ThreadRepository};

const CTX: &str = "toggle comment like payload";

pub struct ToggleCommentLikeUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    comment_like_repository: Arc<dyn CommentLikeRepository>,
}

impl ToggleCommentLikeUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        comment_like_repository: Arc<dyn CommentLikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            comment_like_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<()> {
        payload::require_fields(CTX, payload, &["threadId", "commentId", "owner"])?;
        let thread_id = payload::str_field(CTX, payload, "threadId")?;
        let comment_id = payload::str_field(CTX, payload, "commentId")?;
        let owner = payload::str_field(CTX, payload, "owner")?;

        self.thread_repository.verify_id_exists(&thread_id).await?;
        self.comment_repository.verify_id_exists(&comment_id).await?;

        let has_liked = self
            .comment_like_repository
            .has_user_liked_comment(&owner, &comment_id)
            .await?;

        if has_liked {
            self.comment_like_repository
                .remove_like(&owner, &comment_id)
                .await?;
        } else {
            self.comment_like_repository
                .add_like(&owner, &comment_id)
                .await?;
        }

        debug!(comment_id, owner, liked = !has_liked, "comment like toggled");
        Ok(())
    }
}
