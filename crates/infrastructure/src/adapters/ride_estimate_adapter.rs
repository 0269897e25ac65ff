//! Ride estimate adapter - Implements RideEstimatePort using the Uber client

use application::error::ApplicationError;
use application::ports::RideEstimatePort;
use async_trait::async_trait;
use domain::entities::{PriceEstimate, TimeEstimate};
use domain::value_objects::GeoLocation;
use integration_ride::{
    PriceEstimateEntry, RideClient, RideServiceError, TimeEstimateEntry, UberConfig,
    UberRidesClient,
};
use secrecy::SecretString;
use tracing::{instrument, warn};

/// Adapter for ride estimates using the Uber Riders API
#[derive(Debug)]
pub struct RideEstimateAdapter {
    client: UberRidesClient,
}

impl RideEstimateAdapter {
    /// Create a new adapter from an existing client
    pub const fn new(client: UberRidesClient) -> Self {
        Self { client }
    }

    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &UberConfig) -> Result<Self, ApplicationError> {
        let client = UberRidesClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    fn convert_time(entry: TimeEstimateEntry) -> TimeEstimate {
        TimeEstimate {
            tier_name: entry.display_name,
            seconds_to_pickup: entry.estimate,
        }
    }

    fn convert_price(entry: PriceEstimateEntry) -> PriceEstimate {
        PriceEstimate {
            tier_name: entry.display_name,
            distance: entry.distance,
            low_estimate: entry.low_estimate,
            high_estimate: entry.high_estimate,
            duration_seconds: entry.duration,
            estimate_text: entry.estimate,
        }
    }

    fn map_error(operation: &str, error: &RideServiceError) -> ApplicationError {
        warn!(%operation, %error, "Ride service call failed");
        ApplicationError::RideService(format!("{operation} failed: {error}"))
    }
}

#[async_trait]
impl RideEstimatePort for RideEstimateAdapter {
    #[instrument(skip(self, server_token))]
    async fn pickup_time_estimates(
        &self,
        server_token: &SecretString,
        start: &GeoLocation,
    ) -> Result<Vec<TimeEstimate>, ApplicationError> {
        let entries = self
            .client
            .pickup_time_estimates(server_token, start.latitude(), start.longitude())
            .await
            .map_err(|e| Self::map_error("Pickup-time estimate", &e))?;

        Ok(entries.into_iter().map(Self::convert_time).collect())
    }

    #[instrument(skip(self, server_token))]
    async fn price_estimates(
        &self,
        server_token: &SecretString,
        start: &GeoLocation,
        end: &GeoLocation,
    ) -> Result<Vec<PriceEstimate>, ApplicationError> {
        let entries = self
            .client
            .price_estimates(
                server_token,
                start.latitude(),
                start.longitude(),
                end.latitude(),
                end.longitude(),
            )
            .await
            .map_err(|e| Self::map_error("Price estimate", &e))?;

        Ok(entries.into_iter().map(Self::convert_price).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_time_keeps_tier_and_seconds() {
        let estimate = RideEstimateAdapter::convert_time(TimeEstimateEntry {
            product_id: Some("p-x".to_string()),
            display_name: "uberX".to_string(),
            localized_display_name: None,
            estimate: 300,
        });
        assert_eq!(
            estimate,
            TimeEstimate {
                tier_name: "uberX".to_string(),
                seconds_to_pickup: 300,
            }
        );
    }

    #[test]
    fn convert_price_keeps_metered_fares_absent() {
        let estimate = RideEstimateAdapter::convert_price(PriceEstimateEntry {
            product_id: None,
            display_name: "uberTAXI".to_string(),
            localized_display_name: None,
            distance: 3.2,
            duration: 600,
            low_estimate: None,
            high_estimate: None,
            estimate: "Metered".to_string(),
            currency_code: None,
            surge_multiplier: None,
        });
        assert_eq!(estimate.tier_name, "uberTAXI");
        assert_eq!(estimate.low_estimate, None);
        assert_eq!(estimate.duration_seconds, 600);
        assert_eq!(estimate.estimate_text, "Metered");
    }

    #[test]
    fn errors_map_to_ride_service() {
        let err = RideEstimateAdapter::map_error(
            "Price estimate",
            &RideServiceError::Timeout { timeout_secs: 10 },
        );
        match err {
            ApplicationError::RideService(msg) => {
                assert!(msg.starts_with("Price estimate failed"));
                assert!(msg.contains("10 seconds"));
            },
            other => unreachable!("Expected RideService error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_config_is_a_configuration_error() {
        let config = UberConfig {
            base_url: String::new(),
            ..UberConfig::default()
        };
        assert!(matches!(
            RideEstimateAdapter::with_config(&config),
            Err(ApplicationError::Configuration(_))
        ));
    }
}
