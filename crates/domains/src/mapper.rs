//! Joins a flat comment list and a flat reply list into a nested tree.

use crate::models::{Comment, Reply};

/// Attaches to each comment the subset of `replies` whose `comment_id`
/// matches, preserving the relative order of the input list. Replies that
/// reference no comment in the list are dropped.
///
/// Pure: the only effect is each comment's own `set_replies`, which
/// replaces rather than appends, so the attachment step is idempotent.
pub fn map_comments_with_replies(mut comments: Vec<Comment>, replies: &[Reply]) -> Vec<Comment> {
    for comment in &mut comments {
        let matching = replies
            .iter()
            .filter(|reply| reply.comment_id == comment.id)
            .cloned()
            .collect();
        comment.set_replies(matching);
    }
    comments
}
