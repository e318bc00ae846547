//! Custom request extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use tracing::debug;

use crate::error::AppError;

/// The `{alias}` path segment.
///
/// Undecodable segments (for example `%FF`) are rejected with
/// [`AppError::InvalidAlias`] so the response keeps the JSON envelope.
#[derive(Debug, Clone)]
pub struct AliasPath(pub String);

impl<S> FromRequestParts<S> for AliasPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(alias)) => Ok(Self(alias)),
            Err(rejection) => {
                debug!(error = %rejection, "alias path rejected");
                Err(AppError::InvalidAlias)
            }
        }
    }
}
