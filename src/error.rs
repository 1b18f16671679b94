//! Error types for the search pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error used for transport-level causes
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by query building, execution, extraction and persistence
#[derive(Debug, Error)]
pub enum SearchError {
    /// The topic could not be represented as UTF-8
    #[error("topic is not valid UTF-8: {0}")]
    Encoding(String),

    /// The configured API endpoint is not a valid URL
    #[error("invalid API endpoint {url}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Network or connection failure while talking to the API
    #[error("an error occurred while fetching the response: {0}")]
    Transport(#[source] BoxError),

    /// The API answered with a non-2xx status
    #[error("request failed with code: {code}")]
    HttpStatus { code: u16 },

    /// The response body is not valid JSON
    #[error("invalid JSON in response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response is valid JSON but does not have the expected shape
    #[error("unexpected response shape: {0}")]
    Schema(String),

    /// Writing the response to disk failed
    #[error("an error occurred while saving the response to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SearchError {
    /// Wrap any transport failure
    pub fn transport(cause: impl Into<BoxError>) -> Self {
        Self::Transport(cause.into())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SearchError>;
