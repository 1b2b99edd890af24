//! Error types for the assistant client

use serde_json::{json, Value};
use thiserror::Error;

/// Errors returned by the assistant (NLU) service
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Non-success HTTP response
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// Connection failures, timeouts
    #[error("Transport error: {0}")]
    TransportError(String),

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AssistantError {
    /// Status code to hand back to the caller (500 unless the service gave one)
    pub fn status_code(&self) -> u16 {
        match self {
            AssistantError::HttpError { status, .. } if (400..600).contains(status) => *status,
            _ => 500,
        }
    }

    /// Body to hand back to the caller: the service's own JSON when it sent
    /// some, otherwise `{"code", "error"}`
    pub fn to_body(&self) -> Value {
        if let AssistantError::HttpError { body, .. } = self {
            if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(body) {
                return value;
            }
        }

        let error = match self {
            AssistantError::HttpError { body, .. } => body.clone(),
            other => other.to_string(),
        };
        json!({
            "code": self.status_code(),
            "error": error,
        })
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        AssistantError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            AssistantError::HttpError {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else if err.is_decode() {
            AssistantError::SerializationError(err.to_string())
        } else {
            AssistantError::TransportError(err.to_string())
        }
    }
}
