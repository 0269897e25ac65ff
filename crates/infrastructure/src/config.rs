//! Application configuration

use std::path::Path;

use application::RideRequestParams;
use integration_ride::{UberConfig, YandexGeocodingConfig};
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Prefix of environment variable overrides (e.g. `RIDE_NEURON_UBER__TIMEOUT_SECS`)
pub const ENV_PREFIX: &str = "RIDE_NEURON";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Uber Riders API configuration
    #[serde(default)]
    pub uber: UberConfig,

    /// Yandex geocoder configuration
    #[serde(default)]
    pub geocoding: YandexGeocodingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default invocation parameters, overridden per request
    #[serde(default)]
    pub neuron: RideRequestParams,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    ///
    /// An explicit `path` must exist; without one, `config.toml` in the
    /// working directory is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read, the result cannot be
    /// deserialized, or a section fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., RIDE_NEURON_LOGGING__LEVEL)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate().map_err(config::ConfigError::Message)?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid section.
    pub fn validate(&self) -> Result<(), String> {
        self.uber.validate().map_err(|e| format!("uber: {e}"))?;
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        if self.logging.level.trim().is_empty() {
            return Err("logging: level must not be empty".to_string());
        }
        Ok(())
    }
}
