//! rusty-forum/crates/services/src/lib.rs
//!
//! Use-case orchestration. Each use case is a stateless struct constructed
//! with the repository capabilities it needs and executed against a plain
//! JSON payload: validate → existence checks → ownership checks →
//! mutation/aggregation, as a strict awaited sequence.

pub mod add_comment;
pub mod add_reply;
pub mod add_thread;
pub mod delete_comment;
pub mod delete_reply;
pub mod get_thread_detail;
pub mod toggle_comment_like;

pub use add_comment::AddCommentUseCase;
pub use add_reply::AddReplyUseCase;
pub use add_thread::AddThreadUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use delete_reply::DeleteReplyUseCase;
pub use get_thread_detail::GetThreadDetailUseCase;
pub use toggle_comment_like::ToggleCommentLikeUseCase;

use std::sync::Arc;

use domains::traits::{
    CommentLikeRepository, CommentRepository, ReplyRepository, ThreadRepository,
};

/// The full set of use cases, wired once at startup and shared by the
/// HTTP handlers.
pub struct UseCases {
    pub add_thread: AddThreadUseCase,
    pub add_comment: AddCommentUseCase,
    pub add_reply: AddReplyUseCase,
    pub delete_comment: DeleteCommentUseCase,
    pub delete_reply: DeleteReplyUseCase,
    pub toggle_comment_like: ToggleCommentLikeUseCase,
    pub get_thread_detail: GetThreadDetailUseCase,
}

impl UseCases {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
        comment_likes: Arc<dyn CommentLikeRepository>,
    ) -> Self {
        Self {
            add_thread: AddThreadUseCase::new(threads.clone()),
            add_comment: AddCommentUseCase::new(threads.clone(), comments.clone()),
            add_reply: AddReplyUseCase::new(threads.clone(), comments.clone(), replies.clone()),
            delete_comment: DeleteCommentUseCase::new(threads.clone(), comments.clone()),
            delete_reply: DeleteReplyUseCase::new(
                threads.clone(),
                comments.clone(),
                replies.clone(),
            ),
            toggle_comment_like: ToggleCommentLikeUseCase::new(
                threads.clone(),
                comments.clone(),
                comment_likes,
            ),
            get_thread_detail: GetThreadDetailUseCase::new(threads, comments, replies),
        }
    }
}
