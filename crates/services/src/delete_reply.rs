//! Soft-deletes a reply after checking the full parent chain and ownership.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use domains::error::Result;
use domains::payload;
use domains::traits::{CommentRepository, ReplyRepository, ThreadRepository};

const CTX: &str = "delete reply payload";

pub struct DeleteReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl DeleteReplyUseCase {
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

    pub async fn execute(&self, payload: &Value) -> Result<()> {
        payload::require_fields(CTX, payload, &["threadId", "commentId", "replyId", "owner"])?;
        let thread_id = payload::str_field(CTX, payload, "threadId")?;
        let comment_id = payload::str_field(CTX, payload, "commentId")?;
        let reply_id = payload::str_field(CTX, payload, "replyId")?;
        let owner = payload::str_field(CTX, payload, "owner")?;

        self.thread_repository.verify_id_exists(&thread_id).await?;
        self.comment_repository.verify_id_exists(&comment_id).await?;
        self.reply_repository.verify_id_exists(&reply_id).await?;
        self.reply_repository.verify_owner(&reply_id, &owner).await?;
        self.reply_repository.soft_delete_by_id(&reply_id).await?;

        info!(reply_id, owner, "reply soft-deleted");
        Ok(())
    }
}
