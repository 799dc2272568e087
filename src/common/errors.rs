//! Error types for the application

use thiserror::Error;

/// Result type alias using our MonitorError
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Main error type for monitoring operations
#[derive(Error, Debug)]
pub enum MonitorError {
    /// HTTP request errors (DNS, connect, timeout, body decode)
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Invalid API response
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The payload arrived but carried no usable price value
    #[error("Não foi possível obter o preço: {0}")]
    PriceUnavailable(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// SMTP transport or message construction errors
    #[error("SMTP error: {0}")]
    Smtp(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
