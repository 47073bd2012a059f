use serde::{Deserialize, Serialize};

/// Envelope for error and message-only responses. Successful data-bearing
/// endpoints return their row shapes directly.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiResponse {
    pub fn message(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            details: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            details: None,
        }
    }

    pub fn error_with_details(message: &str, details: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            details: Some(details.to_string()),
        }
    }
}
