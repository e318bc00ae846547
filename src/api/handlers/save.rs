//! Handler for the save endpoint.

use axum::{Json, body::Bytes, extract::State};
use tracing::debug;

use crate::api::dto::save::SaveResponse;
use crate::domain::entities::SaveRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Saves a URL under a requested or generated alias.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "example" }
/// ```
///
/// `alias` is optional. Without it, an already stored URL returns its existing
/// alias and a new URL gets a random one.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "example" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an empty or malformed body, an invalid URL, or
/// an alias with characters outside `[A-Za-z0-9_]`.
/// Returns 409 Conflict if the alias is taken or no free alias could be
/// generated.
pub async fn save_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveResponse>, AppError> {
    let request = SaveRequest::from_json(&body)?;
    debug!(url = %request.url, alias = ?request.alias, "request body decoded");

    let alias = state.url_service.save(request).await?;

    Ok(Json(SaveResponse::ok(alias)))
}
