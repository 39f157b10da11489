//! Postgres-backed comment persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::debug;
use uuid::Uuid;

use domains::error::{DomainError, Result};
use domains::models::{AddComment, AddedComment, Comment};
use domains::traits::CommentRepository;

use crate::internal;

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn verify_id_exists(&self, id: &str) -> Result<()> {
        sqlx::query("SELECT id FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("comment".to_owned(), id.to_owned()))
    }

    async fn verify_owner(&self, id: &str, owner: &str) -> Result<()> {
        let row = sqlx::query("SELECT owner FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?
            .ok_or_else(|| DomainError::NotFound("comment".to_owned(), id.to_owned()))?;

        if row.get::<Option<String>, _>("owner").as_deref() == Some(owner) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(
                "caller does not own this comment".to_owned(),
            ))
        }
    }

    async fn add_comment(&self, comment: &AddComment) -> Result<AddedComment> {
        let id = format!("comment-{}", Uuid::new_v4());
        debug!(id, owner = comment.owner, "inserting comment");

        let row = sqlx::query(
            "INSERT INTO comments (id, content, owner, thread_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&comment.content)
        .bind(&comment.owner)
        .bind(&comment.thread_id)
        .fetch_one(&self.pool)
        .await
        .map_err(internal)?;

        Ok(AddedComment {
            id: row.get("id"),
            content: row.get("content"),
            owner: row.get("owner"),
        })
    }

    async fn get_by_id(&self, id: &str) -> Result<Comment> {
        let row = sqlx::query(
            "SELECT c.id, u.username, c.created_at AS date, c.content, c.is_deleted,
                    (SELECT COUNT(*) FROM comment_likes cl WHERE cl.comment_id = c.id) AS like_count
             FROM comments c JOIN users u ON c.owner = u.id
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(internal)?
        .ok_or_else(|| DomainError::NotFound("comment".to_owned(), id.to_owned()))?;

        Ok(row_to_comment(&row))
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<Comment>> {
        let rows = sqlx::query(
            "SELECT c.id, u.username, c.created_at AS date, c.content, c.is_deleted,
                    (SELECT COUNT(*) FROM comment_likes cl WHERE cl.comment_id = c.id) AS like_count
             FROM comments c JOIN users u ON c.owner = u.id
             WHERE c.thread_id = $1
             ORDER BY c.created_at ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(internal)?;

        Ok(rows.iter().map(row_to_comment).collect())
    }

    async fn soft_delete_by_id(&self, id: &str) -> Result<()> {
        sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(internal)?;
        Ok(())
    }
}

fn row_to_comment(row: &sqlx::postgres::PgRow) -> Comment {
    Comment::new(
        row.get::<String, _>("id"),
        row.get::<String, _>("username"),
        row.get::<DateTime<Utc>, _>("date"),
        row.get::<String, _>("content"),
        row.get("is_deleted"),
        row.get("like_count"),
    )
}
