/*
[INPUT]:  Error sources (transport, API envelope, JSON, configuration, parsers)
[OUTPUT]: Structured error type separating transport failures from API-reported ones
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the Brave New Coin client
#[derive(Error, Debug)]
pub enum BraveError {
    /// Transport failure: network error or non-2xx status, carried unchanged
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered but its envelope reported `success` as falsy
    #[error("API connection error: {}", detail_message(.error))]
    Connection { error: Value },

    /// Response body was not valid JSON, or did not match a typed parser
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Credential pair cannot be sent as an HTTP header
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Raised by a caller-supplied parser
    #[error("Parser error: {0}")]
    Parse(String),
}

impl BraveError {
    /// Build an API error from the envelope's `error` field
    pub fn connection(error: impl Into<Value>) -> Self {
        BraveError::Connection {
            error: error.into(),
        }
    }

    /// Check if the error came from the HTTP layer
    pub fn is_transport(&self) -> bool {
        matches!(self, BraveError::Http(_))
    }

    /// Check if the API itself reported the failure
    pub fn is_api_error(&self) -> bool {
        matches!(self, BraveError::Connection { .. })
    }

    /// HTTP status of a transport error, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BraveError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Raw `error` payload of an API error
    pub fn detail(&self) -> Option<&Value> {
        match self {
            BraveError::Connection { error } => Some(error),
            _ => None,
        }
    }

    /// API error detail as text; string payloads are returned without quotes
    pub fn message(&self) -> Option<String> {
        self.detail().map(detail_message)
    }
}

fn detail_message(error: &Value) -> String {
    match error {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, BraveError>;
