//! Reply entities. Replies nest exactly one level below comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::payload;

/// Marker substituted for the content of a deleted reply on every read.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// Validated input for creating a reply under a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct AddReply {
    pub content: String,
    pub comment_id: String,
    pub thread_id: String,
    pub owner: String,
}

impl AddReply {
    const CTX: &'static str = "add reply payload";

    pub fn parse(payload: &Value) -> Result<Self> {
        payload::require_fields(
            Self::CTX,
            payload,
            &["content", "owner", "commentId", "threadId"],
        )?;

        Ok(Self {
            content: payload::str_field(Self::CTX, payload, "content")?,
            comment_id: payload::str_field(Self::CTX, payload, "commentId")?,
            thread_id: payload::str_field(Self::CTX, payload, "threadId")?,
            owner: payload::str_field(Self::CTX, payload, "owner")?,
        })
    }
}

/// Minimal projection of a freshly persisted reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// A reply as read back from storage, with the same redaction-at-construction
/// rule as [`Comment`](crate::models::comment::Comment).
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub comment_id: String,
    content: String,
}

impl Reply {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        date: DateTime<Utc>,
        content: impl Into<String>,
        is_deleted: bool,
        comment_id: impl Into<String>,
    ) -> Self {
        let content = if is_deleted {
            DELETED_REPLY_CONTENT.to_owned()
        } else {
            content.into()
        };

        Self {
            id: id.into(),
            username: username.into(),
            date,
            comment_id: comment_id.into(),
            content,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Plain projection of a reply inside a comment detail. Drops the parent
/// comment id, which is only needed while assembling the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyDetail {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

impl From<Reply> for ReplyDetail {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            username: reply.username,
            date: reply.date,
            content: reply.content,
        }
    }
}
