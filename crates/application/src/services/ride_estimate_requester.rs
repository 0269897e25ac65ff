//! Ride estimate service
//!
//! Orchestrates one neuron invocation: validate parameters, geocode the
//! addresses that need it, fetch the pickup-time and price estimates, and
//! keep only the entries for the configured tier.

use std::{fmt, sync::Arc};

use domain::entities::{PriceEstimate, ResultMessage, TimeEstimate};
use domain::value_objects::GeoLocation;
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{GeocodeQuery, GeocodingPort, RideEstimatePort},
    request_config::{RequestConfig, RideRequestParams, StartLocation},
};

/// Fetches pickup and price estimates for a single ride tier
///
/// Stateless between calls; each [`execute`](Self::execute) is independent
/// and runs its network calls strictly one after another. A tier missing
/// from the provider's answer is not an error: the corresponding fields of
/// the [`ResultMessage`] are simply left out.
pub struct RideEstimateRequester {
    geocoding: Arc<dyn GeocodingPort>,
    rides: Arc<dyn RideEstimatePort>,
}

impl fmt::Debug for RideEstimateRequester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RideEstimateRequester").finish_non_exhaustive()
    }
}

impl RideEstimateRequester {
    /// Create a new requester
    pub fn new(geocoding: Arc<dyn GeocodingPort>, rides: Arc<dyn RideEstimatePort>) -> Self {
        Self { geocoding, rides }
    }

    /// Validate `params` and run the request
    ///
    /// # Errors
    ///
    /// Configuration problems are reported before any network call. Geocoding
    /// and ride service failures propagate unchanged.
    #[instrument(skip(self, params))]
    pub async fn execute(
        &self,
        params: RideRequestParams,
    ) -> Result<ResultMessage, ApplicationError> {
        let config = RequestConfig::from_params(params)?;
        self.execute_config(&config).await
    }

    /// Run the request for an already-validated configuration
    #[instrument(skip(self, config), fields(tier = %config.ride_tier()))]
    pub async fn execute_config(
        &self,
        config: &RequestConfig,
    ) -> Result<ResultMessage, ApplicationError> {
        let start = match config.start() {
            StartLocation::Coordinates(location) => *location,
            StartLocation::Address(address) => self.geocode(address, config).await?,
        };

        let mut message = ResultMessage::default();

        let times = self
            .rides
            .pickup_time_estimates(config.api_key(), &start)
            .await?;
        match TimeEstimate::find_for_tier(&times, config.ride_tier()) {
            Some(estimate) => message.set_pickup(estimate),
            None => debug!(available = times.len(), "No pickup estimate for tier"),
        }

        if let Some(end_address) = config.end_address() {
            let end = self.geocode(end_address, config).await?;
            let prices = self
                .rides
                .price_estimates(config.api_key(), &start, &end)
                .await?;
            match PriceEstimate::find_for_tier(&prices, config.ride_tier()) {
                Some(estimate) => message.set_ride(estimate),
                None => debug!(available = prices.len(), "No price estimate for tier"),
            }
        }

        info!(
            pickup = message.time_to_get_driver_minutes.is_some(),
            ride = message.ride.is_some(),
            "Ride estimate ready"
        );
        Ok(message)
    }

    async fn geocode(
        &self,
        address: &str,
        config: &RequestConfig,
    ) -> Result<GeoLocation, ApplicationError> {
        let query = GeocodeQuery::new(address, config.geocoding_api_key().cloned());
        let location = self.geocoding.resolve(&query).await?;
        debug!(%address, %location, "Resolved address");
        Ok(location)
    }
}
