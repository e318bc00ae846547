//! Per-request deadline.
//!
//! [`layer`] answers requests that overrun the deadline with an empty
//! `408 Request Timeout`; [`envelope`] must wrap it to render that response as
//! an [`AppError::Timeout`] body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

use crate::error::AppError;

/// Creates the deadline layer.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Replaces a bare 408 with the JSON error envelope.
///
/// Use with [`axum::middleware::map_response`].
pub async fn envelope(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::Timeout.into_response();
    }

    response
}
