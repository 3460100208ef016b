//! Error types for fetching datasets and loading configuration

use std::path::PathBuf;
use thiserror::Error;

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Everything that can go wrong while fetching one dataset.
///
/// Errors are `Clone` so they can travel inside TEA messages. The detail is
/// only ever logged; the dashboard shows a fixed message per dataset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The body was valid JSON but not the shape the dataset expects
    #[error("unexpected payload for {dataset}: {message}")]
    Payload { dataset: String, message: String },
}

impl FetchError {
    /// Create a transport error
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a non-success status error
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        FetchError::Status {
            url: url.into(),
            status,
        }
    }

    /// Create a malformed body error
    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an error for a payload that does not fit its dataset
    pub fn payload(dataset: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::Payload {
            dataset: dataset.into(),
            message: message.into(),
        }
    }

    /// URL of the request that failed, if the failure came from a request
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. } => Some(url),
            FetchError::Payload { .. } => None,
        }
    }
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    /// Create a validation error
    pub fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::status("https://example.com/posts", 503);
        assert_eq!(err.to_string(), "https://example.com/posts returned HTTP 503");

        let err = FetchError::decode("https://example.com/todos", "expected value at line 1");
        assert!(err.to_string().starts_with("malformed response from https://example.com/todos"));
    }

    #[test]
    fn test_fetch_error_url() {
        let err = FetchError::transport("http://127.0.0.1:1/", "connection refused");
        assert_eq!(err.url(), Some("http://127.0.0.1:1/"));
    }

    #[test]
    fn test_payload_error_names_dataset() {
        let err = FetchError::payload("Users (High Priority)", "missing field `login`");
        assert_eq!(err.url(), None);
        assert_eq!(
            err.to_string(),
            "unexpected payload for Users (High Priority): missing field `login`"
        );
    }
}
