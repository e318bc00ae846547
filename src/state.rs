use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<SqliteUrlRepository>>,
    pub pool: Arc<SqlitePool>,
}

impl AppState {
    /// Wires the repository and service on top of an open pool.
    pub fn new(pool: Arc<SqlitePool>, alias_length: usize) -> Self {
        let url_repository = Arc::new(SqliteUrlRepository::new(pool.clone()));
        let url_service = Arc::new(UrlService::with_alias_length(url_repository, alias_length));

        Self { url_service, pool }
    }
}
