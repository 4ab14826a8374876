/*
[INPUT]:  Error sources (HTTP transport, serialization, storage)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Authgate client
#[derive(Error, Debug)]
pub enum AuthgateError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Caller-supplied header name or value is not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Session storage read/write failed
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result type alias for Authgate operations
pub type Result<T> = std::result::Result<T, AuthgateError>;
