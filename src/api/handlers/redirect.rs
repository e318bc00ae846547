//! Handler for alias redirect.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::api::extractors::AliasPath;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Answers `302 Found` with the stored URL in `Location`.
///
/// # Errors
///
/// Returns 400 Bad Request if the path segment cannot be decoded.
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    AliasPath(alias): AliasPath,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.url_service.resolve(&alias).await?;
    debug!(alias = %alias, url = %url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}
