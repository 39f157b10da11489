//! Postgres-backed comment likes.
//!
//! The `UNIQUE (owner, comment_id)` constraint is the backstop against
//! concurrent duplicate likes; a violated insert surfaces as an
//! infrastructure error rather than being retried here.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use domains::error::Result;
use domains::traits::CommentLikeRepository;

use crate::internal;

pub struct PostgresCommentLikeRepository {
    pool: PgPool,
}

impl PostgresCommentLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentLikeRepository for PostgresCommentLikeRepository {
    async fn has_user_liked_comment(&self, owner: &str, comment_id: &str) -> Result<bool> {
        let row = sqlx::query("SELECT id FROM comment_likes WHERE owner = $1 AND comment_id = $2")
            .bind(owner)
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?;

        Ok(row.is_some())
    }

    async fn add_like(&self, owner: &str, comment_id: &str) -> Result<()> {
        let id = format!("comment-like-{}", Uuid::new_v4());
        debug!(id, owner, comment_id, "inserting comment like");

        sqlx::query("INSERT INTO comment_likes (id, owner, comment_id) VALUES ($1, $2, $3)")
            .bind(&id)
            .bind(owner)
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(internal)?;
        Ok(())
    }

    async fn remove_like(&self, owner: &str, comment_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM comment_likes WHERE owner = $1 AND comment_id = $2")
            .bind(owner)
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(internal)?;
        Ok(())
    }
}
