//! Error types for skill_cards

use thiserror::Error;

/// Error type for backend API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, connection refused, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Backend answered with a non-success status. `body` is the error payload.
    #[error("HTTP error {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Backend returned a different number of records than were requested
    #[error("Expected {expected} concept cards, backend returned {received}")]
    BatchSize { expected: usize, received: usize },
}

/// Errors raised by skill domain operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillError {
    #[error("Could not find misconception with ID: {0}")]
    MisconceptionNotFound(i64),
    #[error("Invalid difficulty value passed: {0}")]
    InvalidDifficulty(String),
}

/// Result alias for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;
