//! Alias route configuration.

use crate::api::handlers::{delete_handler, redirect_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, get_service},
};
use std::path::Path;
use tower_http::services::ServeFile;

/// Alias management and redirect routes.
///
/// # Endpoints
///
/// - `GET    /`          - Greeting page (`index.html` from `static_dir`)
/// - `POST   /`          - Save a URL, returning its alias
/// - `GET    /{alias}`   - Redirect to the stored URL
/// - `DELETE /{alias}`   - Delete an alias
pub fn url_routes(static_dir: &Path) -> Router<AppState> {
    let greeting = ServeFile::new(static_dir.join("index.html"));

    Router::new()
        .route("/", get_service(greeting).post(save_handler))
        .route("/{alias}", get(redirect_handler).delete(delete_handler))
}
