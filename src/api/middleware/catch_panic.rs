//! Recovery from handler panics.
//!
//! A panicking handler is turned into a `500` with the JSON error envelope and
//! the panic message is logged. The server keeps serving other requests.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::dto::response::ApiResponse;

/// Panic payload passed to the recovery handler.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// Creates the panic recovery layer.
pub fn layer() -> CatchPanicLayer<fn(PanicPayload) -> Response> {
    CatchPanicLayer::custom(handle_panic as fn(PanicPayload) -> Response)
}

fn handle_panic(payload: PanicPayload) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error("internal error")),
    )
        .into_response()
}
