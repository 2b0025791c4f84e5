use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::dispatch::DispatchError;
use crate::waitlist::SubmissionResult;
use crate::waitlist::parser::ParseError;

/// Public message for any failed dispatch. The detail only goes to the log.
pub const DISPATCH_FAILED_MESSAGE: &str = "Failed to add to waitlist";

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    DispatchFailed(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::DispatchFailed(msg) => write!(f, "Dispatch Failed: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::DispatchFailed(msg) => {
                tracing::error!("Dispatch failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DISPATCH_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, axum::Json(SubmissionResult::failed(message))).into_response()
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        AppError::DispatchFailed(err.to_string())
    }
}
