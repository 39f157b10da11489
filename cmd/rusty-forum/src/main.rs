//! # rusty-forum binary
//!
//! Assembles the application: configuration → connection pool →
//! repositories → use cases → router.

use std::sync::Arc;

use anyhow::Context;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use storage_adapters::{
    PostgresCommentLikeRepository, PostgresCommentRepository, PostgresReplyRepository,
    PostgresThreadRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = configs::Settings::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(settings.database.url.expose_secret())
        .await
        .context("connecting to postgres")?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .context("running migrations")?;

    let use_cases = services::UseCases::new(
        Arc::new(PostgresThreadRepository::new(pool.clone())),
        Arc::new(PostgresCommentRepository::new(pool.clone())),
        Arc::new(PostgresReplyRepository::new(pool.clone())),
        Arc::new(PostgresCommentLikeRepository::new(pool)),
    );

    let app = api_adapters::router(Arc::new(use_cases));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "rusty-forum listening");

    axum::serve(listener, app).await?;
    Ok(())
}
