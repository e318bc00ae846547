//! Application error type and its HTTP representation.
//!
//! Every failure a workflow can produce is a variant of [`AppError`]. Handlers
//! return `Result<_, AppError>` and the [`IntoResponse`] impl renders the error
//! into the shared `{"status": "Error", "error": "..."}` envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::dto::response::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body is not valid JSON or has the wrong shape.
    #[error("failed to decode request")]
    Decode(#[source] serde_json::Error),

    #[error("empty request")]
    EmptyBody,

    /// Field-level validation failures, one message per field.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("url alias not valid")]
    InvalidAlias,

    /// Every generated candidate collided with an existing alias.
    #[error("the number of attempts to create an alias has been exceeded, try again later")]
    AliasExhausted,

    /// The store rejected the insert because the alias is taken.
    #[error("url already exists")]
    AliasConflict,

    #[error("url alias not found")]
    NotFound,

    #[error("internal error")]
    Storage(#[source] sqlx::Error),

    #[error("invalid alias")]
    EmptyAlias,

    /// The request did not complete within the configured deadline.
    #[error("request timed out")]
    Timeout,
}

impl AppError {
    /// HTTP status code used when rendering this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Decode(_)
            | AppError::EmptyBody
            | AppError::Validation(_)
            | AppError::InvalidAlias
            | AppError::EmptyAlias => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::AliasConflict | AppError::AliasExhausted => StatusCode::CONFLICT,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Storage(source) => {
                tracing::error!(error = %source, "storage failure");
            }
            AppError::Decode(source) => {
                tracing::info!(error = %source, "failed to decode request");
            }
            other => {
                tracing::info!(error = %other, "request rejected");
            }
        }

        (status, Json(ApiResponse::error(self.to_string()))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::AliasConflict;
        }

        match e {
            sqlx::Error::RowNotFound => AppError::NotFound,
            other => AppError::Storage(other),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let messages = fields
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.iter()
                    .find(|err| err.code == "required")
                    .or_else(|| errs.first())
                    .map(|err| field_message(&field, &err.code))
            })
            .collect();

        AppError::Validation(messages)
    }
}

/// Builds a human-readable message for a single failed field check.
fn field_message(field: &str, code: &str) -> String {
    match code {
        "required" => format!("field {} is a required field", field),
        "url" => format!("field {} is not a valid URL", field),
        _ => format!("field {} is not valid", field),
    }
}
