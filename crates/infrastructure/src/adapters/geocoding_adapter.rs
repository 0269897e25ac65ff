//! Geocoding adapter - Implements GeocodingPort using the Yandex geocoder

use application::error::ApplicationError;
use application::ports::{GeocodeQuery, GeocodingPort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_ride::{GeocodingClient, YandexGeocodingClient, YandexGeocodingConfig};
use tracing::{instrument, warn};

/// Adapter for address resolution using the Yandex Geocoder API
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: YandexGeocodingClient,
}

impl GeocodingAdapter {
    /// Create a new adapter from an existing client
    pub const fn new(client: YandexGeocodingClient) -> Self {
        Self { client }
    }

    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &YandexGeocodingConfig) -> Result<Self, ApplicationError> {
        let client = YandexGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self, query), fields(address = %query.address))]
    async fn resolve(&self, query: &GeocodeQuery) -> Result<GeoLocation, ApplicationError> {
        self.client
            .geocode(&query.address, query.api_key.as_ref())
            .await
            .map_err(|e| {
                warn!(address = %query.address, error = %e, "Failed to geocode address");
                ApplicationError::Geocoding(e.to_string())
            })
    }
}
