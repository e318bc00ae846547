#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use url_alias::infrastructure::persistence;
use url_alias::state::AppState;

/// Opens a fresh in-memory database with migrations applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    persistence::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory database")
}

pub async fn create_test_url(pool: &SqlitePool, alias: &str, url: &str) -> i64 {
    sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_state() -> (AppState, SqlitePool) {
    let pool = test_pool().await;
    let state = AppState::new(Arc::new(pool.clone()), 4);

    (state, pool)
}
