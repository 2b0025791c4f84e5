use std::collections::HashMap;

use serde_json::Value;

use super::SubmissionRequest;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    InvalidJson(String),
    InvalidForm(String),
    NotAnObject,
    MissingEmail,
    EmailNotString,
    EmptyEmail,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidJson(e) => write!(f, "Invalid JSON: {e}"),
            ParseError::InvalidForm(e) => write!(f, "Unable to parse body: {e}"),
            ParseError::NotAnObject => write!(f, "Expected a JSON object"),
            ParseError::MissingEmail => write!(f, "Missing email"),
            ParseError::EmailNotString => write!(f, "Email must be a string"),
            ParseError::EmptyEmail => write!(f, "Email must not be empty"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Returns true when the body came from a plain HTML form post.
pub fn is_form(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("application/x-www-form-urlencoded"))
}

/// Parse a request body based on Content-Type header and pull out the email.
pub fn parse_submission(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<SubmissionRequest, ParseError> {
    let ct = content_type.unwrap_or("application/json");

    let value = if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| ParseError::InvalidJson(e.to_string()))?
    } else if is_form(Some(ct)) {
        parse_form_urlencoded(body)?
    } else {
        // Try JSON first, then form-urlencoded
        match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) => parse_form_urlencoded(body)?,
        }
    };

    extract_email(&value)
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, ParseError> {
    let body_str =
        std::str::from_utf8(body).map_err(|e| ParseError::InvalidForm(format!("Invalid UTF-8: {e}")))?;
    let pairs: HashMap<String, String> = form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let map = pairs
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect();
    Ok(Value::Object(map))
}

fn extract_email(value: &Value) -> Result<SubmissionRequest, ParseError> {
    let obj = value.as_object().ok_or(ParseError::NotAnObject)?;

    match obj.get("email") {
        None | Some(Value::Null) => Err(ParseError::MissingEmail),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ParseError::EmptyEmail),
        // Forwarded as typed, no trimming or case folding.
        Some(Value::String(s)) => Ok(SubmissionRequest { email: s.clone() }),
        Some(_) => Err(ParseError::EmailNotString),
    }
}
