//! HTTP server initialization and runtime setup.
//!
//! Handles storage bootstrap, Axum server lifecycle and graceful shutdown.

use crate::config::Config;
use crate::infrastructure::persistence;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, lookup_host};
use tokio::sync::Notify;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage directory for file-backed SQLite databases
/// - SQLite connection pool and migrations
/// - Axum HTTP server
///
/// Stops on SIGINT/SIGTERM, giving in-flight requests up to the configured
/// shutdown timeout to finish.
///
/// # Errors
///
/// Returns an error if:
/// - The storage directory or database cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    if let Some(path) = config.sqlite_file_path()
        && let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create storage directory {}", dir.display()))?;
    }

    let pool = persistence::connect(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Connected to database");

    let pool = Arc::new(pool);
    let state = AppState::new(pool.clone(), config.alias_length);
    let app = app_router(state, config.request_timeout(), &config.static_dir);

    let addr: SocketAddr = lookup_host(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to resolve {}", config.listen_addr))?
        .next()
        .with_context(|| format!("No address found for {}", config.listen_addr))?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let shutdown = Arc::new(Notify::new());
    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown({
            let shutdown = shutdown.clone();
            async move { shutdown.notified().await }
        });
    let mut server_task = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut server_task => {
            joined??;
            pool.close().await;
            return Ok(());
        }
        _ = shutdown_signal() => {}
    }

    tracing::info!("Stopping server");
    shutdown.notify_one();

    match tokio::time::timeout(config.shutdown_timeout(), server_task).await {
        Ok(joined) => joined??,
        Err(_) => tracing::warn!("Graceful shutdown timed out, dropping open connections"),
    }

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
