//! Unified error handling for deskpull-core

use thiserror::Error;

/// Core error type for deskpull-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Zendesk API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed payload: {0}")]
    Payload(String),

    #[error("Rate limited: gave up after {attempts} throttled attempts")]
    ThrottleExhausted { attempts: usize },
}

/// Result type alias for deskpull-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a malformed-payload error
    pub fn payload(msg: impl Into<String>) -> Self {
        Error::Payload(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("missing output directory");
        assert_eq!(
            err.to_string(),
            "Configuration error: missing output directory"
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_payload_error_display() {
        let err = Error::payload("ticket record missing `id`");
        assert!(err.to_string().starts_with("Malformed payload"));
    }
}
