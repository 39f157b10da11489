//! Postgres-backed reply persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::debug;
use uuid::Uuid;

use domains::error::{DomainError, Result};
use domains::models::{AddReply, AddedReply, Reply};
use domains::traits::ReplyRepository;

use crate::internal;

pub struct PostgresReplyRepository {
    pool: PgPool,
}

impl PostgresReplyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PostgresReplyRepository {
    async fn verify_id_exists(&self, id: &str) -> Result<()> {
        sqlx::query("SELECT id FROM replies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("reply".to_owned(), id.to_owned()))
    }

    async fn verify_owner(&self, id: &str, owner: &str) -> Result<()> {
        let row = sqlx::query("SELECT owner FROM replies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?
            .ok_or_else(|| DomainError::NotFound("reply".to_owned(), id.to_owned()))?;

        if row.get::<Option<String>, _>("owner").as_deref() == Some(owner) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(
                "caller does not own this reply".to_owned(),
            ))
        }
    }

    async fn add_reply(&self, reply: &AddReply) -> Result<AddedReply> {
        let id = format!("reply-{}", Uuid::new_v4());
        debug!(id, owner = reply.owner, "inserting reply");

        let row = sqlx::query(
            "INSERT INTO replies (id, content, owner, comment_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&reply.content)
        .bind(&reply.owner)
        .bind(&reply.comment_id)
        .fetch_one(&self.pool)
        .await
        .map_err(internal)?;

        Ok(AddedReply {
            id: row.get("id"),
            content: row.get("content"),
            owner: row.get("owner"),
        })
    }

    /// Replies of every comment under the thread, joined transitively
    /// through comments, creation time ascending.
    async fn get_replies_by_thread_id(&self, thread_id: &str) -> Result<Vec<Reply>> {
        let rows = sqlx::query(
            "SELECT r.id, u.username, r.created_at AS date, r.content, r.is_deleted, r.comment_id
             FROM replies r
              JOIN users u ON r.owner = u.id
              JOIN comments c ON r.comment_id = c.id
              JOIN threads t ON c.thread_id = t.id
             WHERE t.id = $1
             ORDER BY r.created_at ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(internal)?;

        Ok(rows
            .iter()
            .map(|row| {
                Reply::new(
                    row.get::<String, _>("id"),
                    row.get::<String, _>("username"),
                    row.get::<DateTime<Utc>, _>("date"),
                    row.get::<String, _>("content"),
                    row.get("is_deleted"),
                    row.get::<String, _>("comment_id"),
                )
            })
            .collect())
    }

    async fn soft_delete_by_id(&self, id: &str) -> Result<()> {
        sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(internal)?;
        Ok(())
    }
}
