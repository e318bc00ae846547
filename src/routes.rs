//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /`            - Greeting page
//! - `POST   /`            - Save a URL
//! - `GET    /{alias}`     - Redirect
//! - `DELETE /{alias}`     - Delete an alias
//! - `GET    /api/health`  - Health check
//! - `GET    /static/*`    - Static assets
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Handler panics answered with 500
//! - **Timeout** - Per-request deadline, answered with 408
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{catch_panic, request_id, timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::middleware::map_response;
use axum::routing::get;
use std::path::Path;
use std::time::Duration;
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline for a single request
/// - `static_dir` - directory with `index.html` and the `/static` assets
pub fn app_router(
    state: AppState,
    request_timeout: Duration,
    static_dir: &Path,
) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::url_routes(static_dir))
        .route("/api/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(request_id::set_layer())
                .layer(request_id::propagate_layer())
                .layer(tracing::layer())
                .layer(catch_panic::layer())
                .layer(map_response(timeout::envelope))
                .layer(timeout::layer(request_timeout)),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
