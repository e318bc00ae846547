//! # url-alias
//!
//! A small URL shortener that maps short aliases to long URLs, built with Axum
//! and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the repository contract
//! - **Application Layer** ([`application`]) - Save, resolve and delete workflows
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Features
//!
//! - User-chosen or randomly generated aliases
//! - Idempotent saves: resubmitting a known URL returns its existing alias
//! - Collision-avoiding generation with a bounded number of attempts
//! - Uniform `{"status": ..., "error": ...}` response envelope
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! cargo run
//!
//! curl -X POST localhost:8082/ -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::{SaveRequest, UrlRecord};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
}
