//! # Configs
//!
//! Typed runtime configuration for the rusty-forum binaries.
//!
//! Values are layered: built-in defaults first, then an optional
//! `forum.toml` in the working directory, then environment variables
//! (`FORUM_SERVER__PORT`, `FORUM_DATABASE__URL`, ...). A `.env` file is
//! loaded before the environment is read.

use config::{Config, ConfigError, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Postgres connection string. Wrapped so it never lands in logs.
    pub url: SecretString,
    pub max_connections: u32,
}

impl Settings {
    /// Loads the layered configuration. The database URL has no default
    /// and must come from `forum.toml` or `FORUM_DATABASE__URL`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 8)?
            .add_source(File::with_name("forum").required(false))
            .add_source(
                Environment::with_prefix("FORUM")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
