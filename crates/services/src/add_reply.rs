//! Posts a reply under an existing comment.

use std::sync::Arc;

use serde_json::Value;

use domains::error::Result;
use domains::models::{AddReply, AddedReply};
use domains::traits::{CommentRepository, ReplyRepository, ThreadRepository};

pub struct AddReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl AddReplyUseCase {
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

    pub async fn execute(&self, payload: &Value) -> Result<AddedReply> {
        let add_reply = AddReply::parse(payload)?;
        self.thread_repository
            .verify_id_exists(&add_reply.thread_id)
            .await?;
        self.comment_repository
            .verify_id_exists(&add_reply.comment_id)
            .await?;
        self.reply_repository.add_reply(&add_reply).await
    }
}
