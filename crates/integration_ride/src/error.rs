//! Ride service error types

use thiserror::Error;

/// Errors that can occur while fetching ride estimates
#[derive(Debug, Error)]
pub enum RideServiceError {
    /// Connection to the ride service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Ride service answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server token was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse response from the ride service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
