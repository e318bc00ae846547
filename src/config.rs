//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Storage
//!
//! ```bash
//! # Either a full SQLite URL
//! export DATABASE_URL="sqlite://./storage/storage.db"
//!
//! # or just the database file
//! export STORAGE_PATH="./storage/storage.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `STORAGE_PATH`.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `localhost:8082`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 4, range: 1-32)
//! - `REQUEST_TIMEOUT` - Per-request timeout in seconds (default: 4)
//! - `SHUTDOWN_TIMEOUT` - Graceful shutdown timeout in seconds (default: 10)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `STATIC_DIR` - Directory with `index.html` and assets served under `/static` (default: `./static`)

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::alias::DEFAULT_ALIAS_LENGTH;

/// Database file used when neither `DATABASE_URL` nor `STORAGE_PATH` is set.
const DEFAULT_STORAGE_PATH: &str = "./storage/storage.db";

const DEFAULT_STATIC_DIR: &str = "./static";

/// Upper bound for `ALIAS_LENGTH`.
const MAX_ALIAS_LENGTH: usize = 32;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Length of randomly generated aliases.
    pub alias_length: usize,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Time allowed for in-flight requests to finish on shutdown, in seconds.
    pub shutdown_timeout_secs: u64,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Directory holding the greeting page and static assets.
    pub static_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let database_url = Self::load_database_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "localhost:8082".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let alias_length = env::var("ALIAS_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ALIAS_LENGTH);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4);

        let shutdown_timeout_secs = env::var("SHUTDOWN_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string())
            .into();

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            alias_length,
            request_timeout_secs,
            shutdown_timeout_secs,
            db_max_connections,
            static_dir,
        })
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://` + `STORAGE_PATH` (default `./storage/storage.db`)
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string());
        format!("sqlite://{}", path)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `alias_length` is outside 1-32
    /// - a timeout or the pool size is zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.alias_length == 0 || self.alias_length > MAX_ALIAS_LENGTH {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and {}, got {}",
                MAX_ALIAS_LENGTH,
                self.alias_length
            );
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT must be greater than 0");
        }

        if self.shutdown_timeout_secs == 0 {
            anyhow::bail!("SHUTDOWN_TIMEOUT must be greater than 0");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    /// Returns the database file path, or `None` for in-memory databases.
    pub fn sqlite_file_path(&self) -> Option<&Path> {
        let rest = self
            .database_url
            .strip_prefix("sqlite://")
            .or_else(|| self.database_url.strip_prefix("sqlite:"))?;

        let path = rest.split('?').next().unwrap_or(rest);

        if path.is_empty() || path == ":memory:" {
            None
        } else {
            Some(Path::new(path))
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        for line in self.summary() {
            tracing::info!("  {}", line);
        }
    }

    /// One line per configuration field, as logged at startup.
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!("Listen address: {}", self.listen_addr),
            format!("Database: {}", self.database_url),
            format!("Log level: {}", self.log_level),
            format!("Log format: {}", self.log_format),
            format!("Alias length: {}", self.alias_length),
            format!("Request timeout: {}s", self.request_timeout_secs),
            format!("Shutdown timeout: {}s", self.shutdown_timeout_secs),
            format!("DB max connections: {}", self.db_max_connections),
            format!("Static dir: {}", self.static_dir.display()),
        ]
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
