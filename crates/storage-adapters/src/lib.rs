//! # Storage Adapters
//!
//! sqlx/Postgres implementations of the repository capability traits
//! defined in `domains`. Each repository holds a `PgPool` and maps rows
//! straight onto domain entities; redaction of deleted content is the
//! entity constructor's job, so these queries return `is_deleted` as-is
//! and never scrub `content`.

pub mod comment_likes;
pub mod comments;
pub mod replies;
pub mod threads;

pub use comment_likes::PostgresCommentLikeRepository;
pub use comments::PostgresCommentRepository;
pub use replies::PostgresReplyRepository;
pub use threads::PostgresThreadRepository;

use domains::error::DomainError;

/// Database failures surface as the domain's infrastructure error.
pub(crate) fn internal(err: sqlx::Error) -> DomainError {
    DomainError::Internal(err.to_string())
}
