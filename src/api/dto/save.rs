//! DTOs for the save endpoint.

use serde::Serialize;

use crate::api::dto::response::ApiResponse;

/// Response for `POST /`.
///
/// ```json
/// { "status": "OK", "alias": "aB3x" }
/// ```
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub response: ApiResponse,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            response: ApiResponse::ok(),
            alias: Some(alias),
        }
    }
}
