//! Repository trait for alias to URL mappings.

use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract consumed by [`crate::application::services::UrlService`].
///
/// The store owns all persisted state and enforces alias uniqueness itself;
/// callers rely on [`AppError::AliasConflict`] to detect a lost race between
/// an existence check and the insert.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns whether a record with this alias exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn alias_exists(&self, alias: &str) -> Result<bool, AppError>;

    /// Returns whether at least one record points at this URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn url_exists(&self, url: &str) -> Result<bool, AppError>;

    /// Returns the alias of the oldest record pointing at this URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this URL.
    /// Returns [`AppError::Storage`] on database errors.
    async fn alias_by_url(&self, url: &str) -> Result<String, AppError>;

    /// Inserts a new record and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasConflict`] if the alias is already taken.
    /// Returns [`AppError::Storage`] on database errors.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, AppError>;

    /// Returns the URL stored under this alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    /// Returns [`AppError::Storage`] on database errors.
    async fn url_by_alias(&self, alias: &str) -> Result<String, AppError>;

    /// Deletes the record with this alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing was deleted.
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete_url(&self, alias: &str) -> Result<(), AppError>;
}
