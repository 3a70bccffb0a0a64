//! Error types for the dashboard client.

use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Error taxonomy for the dashboard client
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Transport-level failures from the HTTP client
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status, with the response body text
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Failure reported inside a successful response envelope
    #[error("backend error: {0}")]
    Backend(String),

    /// Login rejected or token missing from the login response
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// JSON decoding errors
    #[error("JSON decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid caller-supplied input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Color strings the chart builders cannot parse
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Token store I/O errors
    #[error("token store error: {0}")]
    TokenStore(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl DashboardError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        DashboardError::InvalidInput(message.into())
    }

    pub fn backend(message: impl Into<String>) -> Self {
        DashboardError::Backend(message.into())
    }
}
