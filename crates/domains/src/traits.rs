//! # Repository Capability Traits (Ports)
//!
//! Use cases are injected with these contracts; concrete persistence lives
//! in the storage adapters. Every method carries a default body that fails
//! with [`DomainError::NotImplemented`], so a substitute implementation
//! (e.g., a test double) only has to provide the capabilities it actually
//! exercises, and an unbacked call fails loudly instead of silently.

use async_trait::async_trait;

use crate::error::{DomainError, Result};
use crate::models::{
    AddComment, AddReply, AddThread, AddedComment, AddedReply, AddedThread, Comment, Reply, Thread,
};

/// Persistence contract for threads.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Fails with `NotFound` when no thread has the given id.
    async fn verify_id_exists(&self, id: &str) -> Result<()> {
        let _ = id;
        Err(DomainError::NotImplemented("ThreadRepository::verify_id_exists"))
    }

    /// Fails with `Forbidden` when the thread is not owned by `owner`.
    async fn verify_owner(&self, id: &str, owner: &str) -> Result<()> {
        let _ = (id, owner);
        Err(DomainError::NotImplemented("ThreadRepository::verify_owner"))
    }

    async fn add_thread(&self, thread: &AddThread) -> Result<AddedThread> {
        let _ = thread;
        Err(DomainError::NotImplemented("ThreadRepository::add_thread"))
    }

    async fn get_by_id(&self, id: &str) -> Result<Thread> {
        let _ = id;
        Err(DomainError::NotImplemented("ThreadRepository::get_by_id"))
    }
}

/// Persistence contract for comments.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn verify_id_exists(&self, id: &str) -> Result<()> {
        let _ = id;
        Err(DomainError::NotImplemented("CommentRepository::verify_id_exists"))
    }

    async fn verify_owner(&self, id: &str, owner: &str) -> Result<()> {
        let _ = (id, owner);
        Err(DomainError::NotImplemented("CommentRepository::verify_owner"))
    }

    async fn add_comment(&self, comment: &AddComment) -> Result<AddedComment> {
        let _ = comment;
        Err(DomainError::NotImplemented("CommentRepository::add_comment"))
    }

    async fn get_by_id(&self, id: &str) -> Result<Comment> {
        let _ = id;
        Err(DomainError::NotImplemented("CommentRepository::get_by_id"))
    }

    /// All comments of a thread, creation time ascending.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<Comment>> {
        let _ = thread_id;
        Err(DomainError::NotImplemented("CommentRepository::get_comments_by_thread_id"))
    }

    /// Marks the comment deleted; the row is retained and redacted on read.
    async fn soft_delete_by_id(&self, id: &str) -> Result<()> {
        let _ = id;
        Err(DomainError::NotImplemented("CommentRepository::soft_delete_by_id"))
    }
}

/// Persistence contract for replies.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn verify_id_exists(&self, id: &str) -> Result<()> {
        let _ = id;
        Err(DomainError::NotImplemented("ReplyRepository::verify_id_exists"))
    }

    async fn verify_owner(&self, id: &str, owner: &str) -> Result<()> {
        let _ = (id, owner);
        Err(DomainError::NotImplemented("ReplyRepository::verify_owner"))
    }

    async fn add_reply(&self, reply: &AddReply) -> Result<AddedReply> {
        let _ = reply;
        Err(DomainError::NotImplemented("ReplyRepository::add_reply"))
    }

    /// All replies under a thread's comments, creation time ascending.
    async fn get_replies_by_thread_id(&self, thread_id: &str) -> Result<Vec<Reply>> {
        let _ = thread_id;
        Err(DomainError::NotImplemented("ReplyRepository::get_replies_by_thread_id"))
    }

    async fn soft_delete_by_id(&self, id: &str) -> Result<()> {
        let _ = id;
        Err(DomainError::NotImplemented("ReplyRepository::soft_delete_by_id"))
    }
}

/// Persistence contract for comment likes. Only existence of the
/// (owner, comment) pair matters; there is no rich like entity.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait CommentLikeRepository: Send + Sync {
    async fn has_user_liked_comment(&self, owner: &str, comment_id: &str) -> Result<bool> {
        let _ = (owner, comment_id);
        Err(DomainError::NotImplemented("CommentLikeRepository::has_user_liked_comment"))
    }

    async fn add_like(&self, owner: &str, comment_id: &str) -> Result<()> {
        let _ = (owner, comment_id);
        Err(DomainError::NotImplemented("CommentLikeRepository::add_like"))
    }

    async fn remove_like(&self, owner: &str, comment_id: &str) -> Result<()> {
        let _ = (owner, comment_id);
        Err(DomainError::NotImplemented("CommentLikeRepository::remove_like"))
    }
}
