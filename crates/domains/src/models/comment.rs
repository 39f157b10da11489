//! Comment entities and their soft-delete redaction rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::models::reply::{Reply, ReplyDetail};
use crate::payload;

/// Marker substituted for the content of a deleted comment on every read.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// Validated input for creating a comment under a thread.
#[derive(Debug, Clone, PartialEq)]
pub struct AddComment {
    pub content: String,
    pub thread_id: String,
    pub owner: String,
}

impl AddComment {
    const CTX: &'static str = "add comment payload";

    pub fn parse(payload: &Value) -> Result<Self> {
        payload::require_fields(Self::CTX, payload, &["content", "owner", "threadId"])?;

        Ok(Self {
            content: payload::str_field(Self::CTX, payload, "content")?,
            thread_id: payload::str_field(Self::CTX, payload, "threadId")?,
            owner: payload::str_field(Self::CTX, payload, "owner")?,
        })
    }
}

/// Minimal projection of a freshly persisted comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// A comment as read back from storage.
///
/// Redaction is applied at construction: once the deletion flag is set the
/// original content is discarded and cannot be recovered from this value.
/// Replies are attached once via [`Comment::set_replies`].
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub like_count: i64,
    content: String,
    replies: Vec<ReplyDetail>,
}

impl Comment {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        date: DateTime<Utc>,
        content: impl Into<String>,
        is_deleted: bool,
        like_count: i64,
    ) -> Self {
        let content = if is_deleted {
            DELETED_COMMENT_CONTENT.to_owned()
        } else {
            content.into()
        };

        Self {
            id: id.into(),
            username: username.into(),
            date,
            like_count,
            content,
            replies: Vec::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the held reply collection with plain projections of the
    /// given replies, preserving their order.
    pub fn set_replies(&mut self, replies: Vec<Reply>) {
        self.replies = replies.into_iter().map(ReplyDetail::from).collect();
    }

    pub fn replies(&self) -> &[ReplyDetail] {
        &self.replies
    }
}

/// Plain projection of a comment inside a thread detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub like_count: i64,
    pub replies: Vec<ReplyDetail>,
}

impl From<Comment> for CommentDetail {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            username: comment.username,
            date: comment.date,
            content: comment.content,
            like_count: comment.like_count,
            replies: comment.replies,
        }
    }
}
