//! Ride service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Uber Riders API client
///
/// The server token is supplied per request and is not part of this config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UberConfig {
    /// Base URL for the Uber API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Value of the `Accept-Language` header (localizes tier names and fare text)
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_base_url() -> String {
    "https://api.uber.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "en_US".to_string()
}

impl Default for UberConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            language: default_language(),
        }
    }
}

impl UberConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UberConfig::default();
        assert_eq!(config.base_url, "https://api.uber.com");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.language, "en_US");
    }

    #[test]
    fn test_validation_success() {
        assert!(UberConfig::default().validate().is_ok());
        assert!(UberConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = UberConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = UberConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: UberConfig = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.base_url, "https://api.uber.com");
    }
}
