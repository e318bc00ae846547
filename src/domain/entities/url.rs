//! URL record entity and the save request it is created from.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// A stored mapping from an alias to a long URL.
///
/// Records are created once and never mutated; deleting the alias removes the
/// record entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub url: String,
    pub alias: String,
}

impl UrlRecord {
    pub fn new(id: i64, url: String, alias: String) -> Self {
        Self { id, url, alias }
    }
}

/// Input for saving a URL.
///
/// A missing `url` key decodes to an empty string so that it is reported as a
/// field validation failure rather than a decode failure.
///
/// The URL is stored exactly as sent and later echoed in a `Location` header,
/// so control characters the URL parser would silently drop are rejected.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SaveRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, code = "required"),
        url(code = "url"),
        custom(function = "reject_control_chars")
    )]
    pub url: String,

    /// Optional user-chosen alias. Empty means "generate one".
    #[serde(default)]
    pub alias: Option<String>,
}

impl SaveRequest {
    pub fn new(url: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            url: url.into(),
            alias,
        }
    }

    /// Decodes a request from a raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyBody`] if the body is empty or whitespace only.
    /// Returns [`AppError::Decode`] if the body is not a JSON object of the
    /// expected shape.
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::EmptyBody);
        }

        serde_json::from_slice(body).map_err(AppError::Decode)
    }

    /// Returns the user-supplied alias, treating an empty string as absent.
    pub fn requested_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}

fn reject_control_chars(url: &str) -> Result<(), ValidationError> {
    if url.chars().any(char::is_control) {
        return Err(ValidationError::new("url"));
    }

    Ok(())
}
