//! Thread entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::models::comment::{Comment, CommentDetail};
use crate::payload;

/// Validated input for creating a thread. Carries data to the repository
/// and is never persisted directly.
#[derive(Debug, Clone, PartialEq)]
pub struct AddThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl AddThread {
    const CTX: &'static str = "add thread payload";

    pub fn parse(payload: &Value) -> Result<Self> {
        payload::require_fields(Self::CTX, payload, &["title", "body", "owner"])?;

        Ok(Self {
            title: payload::str_field(Self::CTX, payload, "title")?,
            body: payload::str_field(Self::CTX, payload, "body")?,
            owner: payload::str_field(Self::CTX, payload, "owner")?,
        })
    }
}

/// Minimal projection of a freshly persisted thread, built from the
/// `RETURNING` row by the storage adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// A full thread as returned by the thread-detail operation.
///
/// Comments are attached once, post-construction, via [`Thread::set_comments`];
/// the collection is replaced wholesale, never appended to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    comments: Vec<CommentDetail>,
}

impl Thread {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        date: DateTime<Utc>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            date,
            username: username.into(),
            comments: Vec::new(),
        }
    }

    /// Replaces the held comment collection with plain projections of the
    /// given comments, preserving their order.
    pub fn set_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments.into_iter().map(CommentDetail::from).collect();
    }

    pub fn comments(&self) -> &[CommentDetail] {
        &self.comments
    }
}
