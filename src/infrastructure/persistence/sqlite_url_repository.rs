//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// SQLite repository for alias to URL mappings.
///
/// Alias uniqueness is enforced by the `UNIQUE` constraint on `url.alias`;
/// a violating insert surfaces as [`AppError::AliasConflict`].
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Lists all records ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn list(&self) -> Result<Vec<UrlRecord>, AppError> {
        let rows: Vec<(i64, String, String)> =
            sqlx::query_as("SELECT id, url, alias FROM url ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, url, alias)| UrlRecord::new(id, url, alias))
            .collect())
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn alias_exists(&self, alias: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn url_exists(&self, url: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url WHERE url = ?")
            .bind(url)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn alias_by_url(&self, url: &str) -> Result<String, AppError> {
        sqlx::query_scalar("SELECT alias FROM url WHERE url = ? ORDER BY id LIMIT 1")
            .bind(url)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn url_by_alias(&self, alias: &str) -> Result<String, AppError> {
        sqlx::query_scalar("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn delete_url(&self, alias: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
