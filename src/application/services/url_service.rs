//! Alias assignment, resolution and deletion service.

use std::sync::Arc;

use tracing::{debug, info, warn};
use validator::Validate;

use crate::domain::entities::SaveRequest;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::alias::{DEFAULT_ALIAS_LENGTH, generate_alias, is_valid_alias};

/// Maximum number of random candidates tried before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 64;

/// Service for saving, resolving and deleting aliases.
///
/// Holds no per-request state; the repository is the only shared resource and
/// is responsible for enforcing alias uniqueness.
pub struct UrlService<R: UrlRepository> {
    url_repository: Arc<R>,
    alias_length: usize,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a service generating aliases of [`DEFAULT_ALIAS_LENGTH`].
    pub fn new(url_repository: Arc<R>) -> Self {
        Self::with_alias_length(url_repository, DEFAULT_ALIAS_LENGTH)
    }

    /// Creates a service generating aliases of `alias_length` characters.
    pub fn with_alias_length(url_repository: Arc<R>, alias_length: usize) -> Self {
        Self {
            url_repository,
            alias_length,
        }
    }

    /// Saves a URL and returns its alias.
    ///
    /// # Flow
    ///
    /// 1. Validate the request fields
    /// 2. Use the requested alias if one was given
    /// 3. Otherwise return the existing alias for an already stored URL, or
    ///    generate a free one (up to [`MAX_GENERATION_ATTEMPTS`] tries)
    /// 4. Check the alias charset
    /// 5. Insert the record
    ///
    /// Resubmitting a known URL without an alias is idempotent and inserts
    /// nothing. A URL may be stored several times under different requested
    /// aliases.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is missing or malformed
    /// - [`AppError::AliasExhausted`] if every generated candidate collided
    /// - [`AppError::InvalidAlias`] if the alias has characters outside `[A-Za-z0-9_]`
    /// - [`AppError::AliasConflict`] if the alias was taken at insert time
    /// - [`AppError::Storage`] on database errors
    pub async fn save(&self, request: SaveRequest) -> Result<String, AppError> {
        request.validate()?;

        let alias = match request.requested_alias() {
            Some(alias) => alias.to_string(),
            None => {
                if self.url_repository.url_exists(&request.url).await? {
                    let alias = self.url_repository.alias_by_url(&request.url).await?;
                    debug!(alias = %alias, url = %request.url, "url already stored");
                    return Ok(alias);
                }

                self.generate_unique_alias().await?
            }
        };

        if !is_valid_alias(&alias) {
            return Err(AppError::InvalidAlias);
        }

        let id = self.url_repository.save_url(&request.url, &alias).await?;
        info!(id, alias = %alias, "url saved");

        Ok(alias)
    }

    /// Resolves an alias to its URL.
    ///
    /// No syntax check is applied; malformed aliases are simply not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.url_repository.url_by_alias(alias).await
    }

    /// Deletes an alias.
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyAlias`] if `alias` is empty (the store is not queried)
    /// - [`AppError::InvalidAlias`] if `alias` fails the charset check
    /// - [`AppError::NotFound`] if no record has this alias
    /// - [`AppError::Storage`] on database errors
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        if alias.is_empty() {
            return Err(AppError::EmptyAlias);
        }

        if !is_valid_alias(alias) {
            return Err(AppError::InvalidAlias);
        }

        self.url_repository.delete_url(alias).await?;
        info!(alias = %alias, "url deleted");

        Ok(())
    }

    /// Generates an alias not yet present in the store.
    async fn generate_unique_alias(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let candidate = generate_alias(self.alias_length);

            if !self.url_repository.alias_exists(&candidate).await? {
                debug!(attempt, alias = %candidate, "generated alias");
                return Ok(candidate);
            }
        }

        warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            length = self.alias_length,
            "alias generation exhausted"
        );
        Err(AppError::AliasExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use mockall::predicate::eq;

    fn service(repo: MockUrlRepository) -> UrlService<MockUrlRepository> {
        UrlService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_save_with_requested_alias() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_exists().times(0);
        repo.expect_alias_exists().times(0);
        repo.expect_save_url()
            .with(eq("https://example.com"), eq("abcd"))
            .times(1)
            .returning(|_, _| Ok(1));

        let result = service(repo)
            .save(SaveRequest::new("https://example.com", Some("abcd".to_string())))
            .await;

        assert_eq!(result.unwrap(), "abcd");
    }

    #[tokio::test]
    async fn test_save_generates_alias() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_exists().times(1).returning(|_| Ok(false));
        repo.expect_alias_exists().times(1).returning(|_| Ok(false));
        repo.expect_save_url()
            .withf(|url, alias| url == "https://example.com" && alias.len() == 4)
            .times(1)
            .returning(|_, _| Ok(7));

        let alias = service(repo)
            .save(SaveRequest::new("https://example.com", None))
            .await
            .unwrap();

        assert_eq!(alias.len(), DEFAULT_ALIAS_LENGTH);
        assert!(is_valid_alias(&alias));
    }

    #[tokio::test]
    async fn test_save_uses_configured_alias_length() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_exists().returning(|_| Ok(false));
        repo.expect_alias_exists().returning(|_| Ok(false));
        repo.expect_save_url()
            .withf(|_, alias| alias.len() == 9)
            .times(1)
            .returning(|_, _| Ok(1));

        let service = UrlService::with_alias_length(Arc::new(repo), 9);
        let alias = service
            .save(SaveRequest::new("https://example.com", None))
            .await
            .unwrap();

        assert_eq!(alias.len(), 9);
    }

    #[tokio::test]
    async fn test_save_empty_alias_is_generated() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_exists().times(1).returning(|_| Ok(false));
        repo.expect_alias_exists().times(1).returning(|_| Ok(false));
        repo.expect_save_url().times(1).returning(|_, _| Ok(1));

        let alias = service(repo)
            .save(SaveRequest::new("https://example.com", Some(String::new())))
            .await
            .unwrap();

        assert!(!alias.is_empty());
    }

    #[tokio::test]
    async fn test_save_known_url_returns_existing_alias() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_exists()
            .with(eq("https://example.com"))
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_alias_by_url()
            .with(eq("https://example.com"))
            .times(1)
            .returning(|_| Ok("exst".to_string()));
        repo.expect_alias_exists().times(0);
        repo.expect_save_url().times(0);

        let alias = service(repo)
            .save(SaveRequest::new("https://example.com", None))
            .await
            .unwrap();

        assert_eq!(alias, "exst");
    }

    #[tokio::test]
    async fn test_save_retries_on_collision() {
        let mut repo = MockUrlRepository::new();
        let mut calls = 0;

        repo.expect_url_exists().returning(|_| Ok(false));
        repo.expect_alias_exists().times(3).returning(move |_| {
            calls += 1;
            Ok(calls < 3)
        });
        repo.expect_save_url().times(1).returning(|_, _| Ok(1));

        let result = service(repo)
            .save(SaveRequest::new("https://example.com", None))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_save_alias_exhausted() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_exists().returning(|_| Ok(false));
        repo.expect_alias_exists()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|_| Ok(true));
        repo.expect_save_url().times(0);

        let result = service(repo)
            .save(SaveRequest::new("https://example.com", None))
            .await;

        assert!(matches!(result, Err(AppError::AliasExhausted)));
    }

    #[tokio::test]
    async fn test_save_invalid_requested_alias() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_exists().times(0);
        repo.expect_save_url().times(0);

        let result = service(repo)
            .save(SaveRequest::new(
                "https://example.com",
                Some("bad alias!".to_string()),
            ))
            .await;

        assert!(matches!(result, Err(AppError::InvalidAlias)));
    }

    #[tokio::test]
    async fn test_save_invalid_url() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_exists().times(0);
        repo.expect_save_url().times(0);

        let result = service(repo)
            .save(SaveRequest::new("not-a-url", Some("abcd".to_string())))
            .await;

        match result {
            Err(AppError::Validation(messages)) => {
                assert_eq!(messages, vec!["field url is not a valid URL".to_string()]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_save_missing_url() {
        let repo = MockUrlRepository::new();

        let result = service(repo).save(SaveRequest::new("", None)).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_save_alias_conflict() {
        let mut repo = MockUrlRepository::new();

        repo.expect_save_url()
            .times(1)
            .returning(|_, _| Err(AppError::AliasConflict));

        let result = service(repo)
            .save(SaveRequest::new("https://example.com", Some("taken".to_string())))
            .await;

        assert!(matches!(result, Err(AppError::AliasConflict)));
    }

    #[tokio::test]
    async fn test_save_storage_error_during_lookup() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_exists()
            .times(1)
            .returning(|_| Err(AppError::Storage(sqlx::Error::PoolTimedOut)));
        repo.expect_save_url().times(0);

        let result = service(repo)
            .save(SaveRequest::new("https://example.com", None))
            .await;

        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_save_storage_error_during_generation() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_exists().returning(|_| Ok(false));
        repo.expect_alias_exists()
            .times(1)
            .returning(|_| Err(AppError::Storage(sqlx::Error::PoolClosed)));
        repo.expect_save_url().times(0);

        let result = service(repo)
            .save(SaveRequest::new("https://example.com", None))
            .await;

        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_by_alias()
            .with(eq("abcd"))
            .times(1)
            .returning(|_| Ok("https://example.com".to_string()));

        let url = service(repo).resolve("abcd").await.unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_skips_alias_validation() {
        let mut repo = MockUrlRepository::new();

        repo.expect_url_by_alias()
            .with(eq("not valid!"))
            .times(1)
            .returning(|_| Err(AppError::NotFound));

        let result = service(repo).resolve("not valid!").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut repo = MockUrlRepository::new();

        repo.expect_delete_url()
            .with(eq("abcd"))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).delete("abcd").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_empty_alias_skips_store() {
        let mut repo = MockUrlRepository::new();

        repo.expect_delete_url().times(0);

        let result = service(repo).delete("").await;

        assert!(matches!(result, Err(AppError::EmptyAlias)));
    }

    #[tokio::test]
    async fn test_delete_invalid_alias_skips_store() {
        let mut repo = MockUrlRepository::new();

        repo.expect_delete_url().times(0);

        let result = service(repo).delete("!@#$%").await;

        assert!(matches!(result, Err(AppError::InvalidAlias)));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut repo = MockUrlRepository::new();

        repo.expect_delete_url()
            .times(1)
            .returning(|_| Err(AppError::NotFound));

        let result = service(repo).delete("missing").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_storage_error() {
        let mut repo = MockUrlRepository::new();

        repo.expect_delete_url()
            .times(1)
            .returning(|_| Err(AppError::Storage(sqlx::Error::PoolClosed)));

        let result = service(repo).delete("abcd").await;

        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
