//! Handler for alias deletion.

use axum::{Json, extract::State};

use crate::api::dto::response::ApiResponse;
use crate::api::extractors::AliasPath;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes an alias.
///
/// # Endpoint
///
/// `DELETE /{alias}`
///
/// # Errors
///
/// Returns 400 Bad Request if the alias is malformed or cannot be decoded.
/// Returns 404 Not Found if the alias does not exist.
pub async fn delete_handler(
    AliasPath(alias): AliasPath,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse>, AppError> {
    state.url_service.delete(&alias).await?;

    Ok(Json(ApiResponse::ok()))
}
