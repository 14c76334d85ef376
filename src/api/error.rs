//! Error type for service calls.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure of a service call.
///
/// Network failures, non-2xx responses and undecodable bodies all collapse
/// into this one kind; only the message distinguishes them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Build the error for a non-success response from its raw body.
    ///
    /// Uses the `detail` field of a JSON body when it is present and truthy,
    /// otherwise `HTTP error: <code>`.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| value.get("detail").and_then(detail_message));

        match detail {
            Some(message) => Self::new(message),
            None => Self::new(format!("HTTP error: {}", status.as_u16())),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(format!("Request timed out: {}", err))
        } else {
            Self::new(err.to_string())
        }
    }
}

/// Render a `detail` value as a message, or `None` when it is falsy
/// (`null`, `false`, `0`, `""`).
fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
