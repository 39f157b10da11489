//! Postgres-backed thread persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::debug;
use uuid::Uuid;

use domains::error::{DomainError, Result};
use domains::models::{AddThread, AddedThread, Thread};
use domains::traits::ThreadRepository;

use crate::internal;

pub struct PostgresThreadRepository {
    pool: PgPool,
}

impl PostgresThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PostgresThreadRepository {
    async fn verify_id_exists(&self, id: &str) -> Result<()> {
        sqlx::query("SELECT id FROM threads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("thread".to_owned(), id.to_owned()))
    }

    async fn verify_owner(&self, id: &str, owner: &str) -> Result<()> {
        let row = sqlx::query("SELECT owner FROM threads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?
            .ok_or_else(|| DomainError::NotFound("thread".to_owned(), id.to_owned()))?;

        // owner is nullable: deleting a user detaches their rows.
        if row.get::<Option<String>, _>("owner").as_deref() == Some(owner) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(
                "caller does not own this thread".to_owned(),
            ))
        }
    }

    async fn add_thread(&self, thread: &AddThread) -> Result<AddedThread> {
        let id = format!("thread-{}", Uuid::new_v4());
        debug!(id, owner = thread.owner, "inserting thread");

        let row = sqlx::query(
            "INSERT INTO threads (id, title, body, owner)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(&thread.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(internal)?;

        Ok(AddedThread {
            id: row.get("id"),
            title: row.get("title"),
            owner: row.get("owner"),
        })
    }

    async fn get_by_id(&self, id: &str) -> Result<Thread> {
        let row = sqlx::query(
            "SELECT t.id, t.title, t.body, t.created_at AS date, u.username
             FROM threads t JOIN users u ON u.id = t.owner
             WHERE t.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(internal)?
        .ok_or_else(|| DomainError::NotFound("thread".to_owned(), id.to_owned()))?;

        Ok(Thread::new(
            row.get::<String, _>("id"),
            row.get::<String, _>("title"),
            row.get::<String, _>("body"),
            row.get::<DateTime<Utc>, _>("date"),
            row.get::<String, _>("username"),
        ))
    }
}
