//! Application layer - Use cases and orchestration
//!
//! Contains the ride estimate use case, its invocation parameters, and the
//! port definitions implemented by infrastructure adapters.

pub mod error;
pub mod ports;
pub mod request_config;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use request_config::{RequestConfig, RideRequestParams, StartLocation};
pub use services::*;
