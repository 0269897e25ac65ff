//! Geocoding service port
//!
//! Resolves free-text addresses to coordinates. Adapters in the
//! infrastructure layer implement this port using a geocoding API.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use secrecy::SecretString;

use crate::error::ApplicationError;

/// An address to resolve, with the provider key to resolve it with
#[derive(Debug, Clone)]
pub struct GeocodeQuery {
    /// Free-text address
    pub address: String,
    /// Geocoding provider API key (optional for keyless quotas)
    pub api_key: Option<SecretString>,
}

impl GeocodeQuery {
    /// Create a query for an address
    #[must_use]
    pub fn new(address: impl Into<String>, api_key: Option<SecretString>) -> Self {
        Self {
            address: address.into(),
            api_key,
        }
    }
}

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to coordinates
    ///
    /// Fails with `ApplicationError::Geocoding` when nothing matches.
    async fn resolve(&self, query: &GeocodeQuery) -> Result<GeoLocation, ApplicationError>;
}
