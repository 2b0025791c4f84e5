use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use chrono::Utc;

use crate::error::AppError;
use crate::state::SharedState;
use crate::waitlist::{parser, relay};

/// Where plain form posts land after a successful signup.
pub const SUBSCRIBED_REDIRECT: &str = "/?subscribed=1";

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let request = parser::parse_submission(content_type, &body).inspect_err(|e| {
        tracing::debug!("Rejected waitlist submission: {e}");
    })?;

    let result = relay::run(state.dispatcher.as_ref(), &request, Utc::now()).await?;

    // No-script form posts go back to the page in its thank-you state
    if parser::is_form(content_type) {
        return Ok(Redirect::to(SUBSCRIBED_REDIRECT).into_response());
    }

    Ok((StatusCode::OK, Json(result)).into_response())
}

pub async fn submit_options() -> Response {
    (
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_MAX_AGE, "86400"),
        ],
        StatusCode::NO_CONTENT,
    )
        .into_response()
}
