//! SQLite repository implementations.
//!
//! - [`SqliteUrlRepository`] - Alias to URL storage and retrieval
//! - [`connect`] - Pool creation with embedded migrations

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Opens a SQLite connection pool and applies pending migrations.
///
/// The database file is created if it does not exist. For `sqlite::memory:`
/// every connection gets its own database, so callers should pass
/// `max_connections = 1`.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the database cannot be opened, or
/// a migration fails.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database URL: {}", database_url))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("Failed to open database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}
