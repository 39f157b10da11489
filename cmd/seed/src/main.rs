//! # seed
//!
//! Loads a small fixed data set for local development: two users, one
//! thread with two comments, replies under the first comment, and a like.
//! Every row has a fixed id and inserts with `ON CONFLICT DO NOTHING`, so
//! the seed can be run repeatedly.

use anyhow::Context;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = configs::Settings::load().context("loading configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(settings.database.url.expose_secret())
        .await
        .context("connecting to postgres")?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .context("running migrations")?;

    seed(&pool).await.context("inserting sample data")?;

    println!("seeded sample forum data");
    Ok(())
}

async fn seed(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO users (id, username, fullname) VALUES
           ('user-123', 'johndoe', 'John Doe'),
           ('user-456', 'dicoding', 'Dicoding Indonesia')
         ON CONFLICT DO NOTHING",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO threads (id, title, body, owner) VALUES
           ('thread-123', 'A Thread', 'Thread body', 'user-123')
         ON CONFLICT DO NOTHING",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO comments (id, thread_id, content, is_deleted, owner) VALUES
           ('comment-123', 'thread-123', 'A comment', FALSE, 'user-456'),
           ('comment-456', 'thread-123', 'A deleted comment', TRUE, 'user-123')
         ON CONFLICT DO NOTHING",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO replies (id, comment_id, content, is_deleted, owner) VALUES
           ('reply-123', 'comment-123', 'A reply', FALSE, 'user-123'),
           ('reply-456', 'comment-123', 'A deleted reply', TRUE, 'user-456')
         ON CONFLICT DO NOTHING",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO comment_likes (id, owner, comment_id) VALUES
           ('comment-like-123', 'user-123', 'comment-123')
         ON CONFLICT DO NOTHING",
    )
    .execute(pool)
    .await?;

    Ok(())
}
