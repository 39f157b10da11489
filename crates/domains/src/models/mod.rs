//! # Domain Models
//!
//! These types represent the core entities of rusty-forum. Input entities
//! (`AddThread`, `AddComment`, `AddReply`) validate inbound payloads; detail
//! entities (`Thread`, `Comment`, `Reply`) enforce soft-delete redaction at
//! construction time.

pub mod comment;
pub mod reply;
pub mod thread;

pub use comment::{AddComment, AddedComment, Comment, CommentDetail, DELETED_COMMENT_CONTENT};
pub use reply::{AddReply, AddedReply, Reply, ReplyDetail, DELETED_REPLY_CONTENT};
pub use thread::{AddThread, AddedThread, Thread};
