//! Error types for property data lookups

use thiserror::Error;

/// Errors that can occur while fetching or reading a lookup response
#[derive(Debug, Error)]
pub enum LookupError {
    /// Lookup URL could not be built from the base URL
    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),

    /// Non-success HTTP response
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// Connection failures, timeouts
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Response body was not JSON
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Response lacked a field the template reads
    #[error("Lookup response is missing field `{0}`")]
    MissingField(&'static str),

    /// Response held no record where one was required
    #[error("Lookup response contained no records")]
    EmptyResult,
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LookupError::HttpError {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else if err.is_decode() {
            LookupError::SerializationError(err.to_string())
        } else {
            LookupError::TransportError(err.to_string())
        }
    }
}
