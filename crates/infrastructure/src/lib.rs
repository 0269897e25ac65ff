//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! ride-hailing and geocoding clients, and owns configuration loading
//! and logging setup for the host process.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::AppConfig;
pub use telemetry::{LogFormat, LoggingConfig, init_logging};
