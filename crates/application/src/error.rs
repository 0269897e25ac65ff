//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Every variant is fatal to the request being processed; none is retried.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Missing or invalid invocation parameters
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Address could not be resolved to coordinates
    #[error("Geocoding error: {0}")]
    Geocoding(String),

    /// Ride estimates could not be fetched
    #[error("Ride service error: {0}")]
    RideService(String),
}
