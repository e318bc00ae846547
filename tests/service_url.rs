mod common;

use std::sync::Arc;
use url_alias::AppError;
use url_alias::application::services::UrlService;
use url_alias::domain::entities::SaveRequest;
use url_alias::infrastructure::persistence::SqliteUrlRepository;

async fn service() -> (UrlService<SqliteUrlRepository>, sqlx::SqlitePool) {
    let pool = common::test_pool().await;
    let repo = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));

    (UrlService::new(repo), pool)
}

#[tokio::test]
async fn test_save_resolve_delete_round_trip() {
    let (service, _pool) = service().await;

    let alias = service
        .save(SaveRequest::new(
            "https://example.com",
            Some("abcd".to_string()),
        ))
        .await
        .unwrap();
    assert_eq!(alias, "abcd");

    assert_eq!(service.resolve("abcd").await.unwrap(), "https://example.com");

    service.delete("abcd").await.unwrap();

    assert!(matches!(
        service.resolve("abcd").await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_idempotent_save_keeps_single_record() {
    let (service, pool) = service().await;

    let first = service
        .save(SaveRequest::new("https://example.com/page", None))
        .await
        .unwrap();
    let second = service
        .save(SaveRequest::new("https://example.com/page", None))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[tokio::test]
async fn test_requested_alias_allows_duplicate_url() {
    let (service, pool) = service().await;

    service
        .save(SaveRequest::new(
            "https://example.com",
            Some("one".to_string()),
        ))
        .await
        .unwrap();
    service
        .save(SaveRequest::new(
            "https://example.com",
            Some("two".to_string()),
        ))
        .await
        .unwrap();

    assert_eq!(common::count_urls(&pool).await, 2);
}

#[tokio::test]
async fn test_requested_alias_taken() {
    let (service, pool) = service().await;
    common::create_test_url(&pool, "abcd", "https://other.com").await;

    let result = service
        .save(SaveRequest::new(
            "https://example.com",
            Some("abcd".to_string()),
        ))
        .await;

    assert!(matches!(result, Err(AppError::AliasConflict)));
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[tokio::test]
async fn test_invalid_alias_not_persisted() {
    let (service, pool) = service().await;

    let result = service
        .save(SaveRequest::new(
            "https://example.com",
            Some("bad alias!".to_string()),
        ))
        .await;

    assert!(matches!(result, Err(AppError::InvalidAlias)));
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[tokio::test]
async fn test_single_char_alias_space_exhausted() {
    let pool = common::test_pool().await;
    let repo = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));
    let service = UrlService::with_alias_length(repo, 1);

    for c in ('a'..='z').chain('A'..='Z').chain('0'..='9') {
        common::create_test_url(&pool, &c.to_string(), "https://taken.com").await;
    }

    let result = service
        .save(SaveRequest::new("https://example.com", None))
        .await;

    assert!(matches!(result, Err(AppError::AliasExhausted)));
    assert_eq!(common::count_urls(&pool).await, 62);
}

#[tokio::test]
async fn test_delete_unknown_alias_not_found() {
    let (service, _pool) = service().await;

    assert!(matches!(
        service.delete("unknown").await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_delete_empty_alias() {
    let (service, _pool) = service().await;

    assert!(matches!(service.delete("").await, Err(AppError::EmptyAlias)));
}
