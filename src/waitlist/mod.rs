pub mod parser;
pub mod relay;

use serde::{Deserialize, Serialize};

/// A single waitlist signup as received from the page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SubmissionRequest {
    pub email: String,
}

/// Response body for the relay: `{"success":true}` or `{"error":"..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionResult {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn accepted() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}
