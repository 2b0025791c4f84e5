pub mod github;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Event type the waitlist workflow listens for.
pub const ADD_TO_WAITLIST: &str = "add_to_waitlist";

/// Outbound event body, shaped like a GitHub `repository_dispatch` request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchEvent {
    pub event_type: String,
    pub client_payload: ClientPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientPayload {
    pub email: String,
    /// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
    pub timestamp: String,
}

impl DispatchEvent {
    pub fn add_to_waitlist(email: &str, captured_at: DateTime<Utc>) -> Self {
        Self {
            event_type: ADD_TO_WAITLIST.to_string(),
            client_payload: ClientPayload {
                email: email.to_string(),
                timestamp: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchOutcome {
    pub status: DispatchStatus,
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    Accepted,
    Rejected,
}

impl DispatchStatus {
    pub fn from_status_code(code: u16) -> Self {
        if (200..300).contains(&code) {
            DispatchStatus::Accepted
        } else {
            DispatchStatus::Rejected
        }
    }
}

#[derive(Debug)]
pub enum DispatchError {
    Rejected { status_code: u16, body: String },
    Timeout,
    Transport(String),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::Rejected { status_code, body } => {
                write!(f, "trigger answered {status_code}: {body}")
            }
            DispatchError::Timeout => write!(f, "trigger did not answer in time"),
            DispatchError::Transport(msg) => write!(f, "request failed: {msg}"),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Sends a waitlist event to whatever automation system does the bookkeeping.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    fn name(&self) -> &str;

    /// Perform exactly one outbound delivery. Non-2xx answers come back as
    /// `Ok` with `DispatchStatus::Rejected`; only transport failures are `Err`.
    async fn dispatch(&self, event: &DispatchEvent) -> Result<DispatchOutcome, DispatchError>;
}
