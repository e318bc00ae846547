//! Response envelope shared by every JSON endpoint.

use serde::{Deserialize, Serialize};

/// Outcome marker carried in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    Error,
}

/// Base envelope: `{"status": "OK"}` or `{"status": "Error", "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_serializes_without_error_field() {
        let value = serde_json::to_value(ApiResponse::ok()).unwrap();
        assert_eq!(value, json!({ "status": "OK" }));
    }

    #[test]
    fn test_error_serializes_message() {
        let value = serde_json::to_value(ApiResponse::error("url alias not found")).unwrap();
        assert_eq!(
            value,
            json!({ "status": "Error", "error": "url alias not found" })
        );
    }
}
