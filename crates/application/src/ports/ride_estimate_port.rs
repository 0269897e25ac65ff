//! Ride estimate service port
//!
//! Defines the interface for pickup-time and price estimates.
//! Adapters in the infrastructure layer implement this port using a
//! ride-hailing API.

use async_trait::async_trait;
use domain::entities::{PriceEstimate, TimeEstimate};
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use secrecy::SecretString;

use crate::error::ApplicationError;

/// Port for ride estimate operations
///
/// Both calls return every tier the provider reports, in provider order.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RideEstimatePort: Send + Sync {
    /// Pickup-time estimates at a start location
    async fn pickup_time_estimates(
        &self,
        server_token: &SecretString,
        start: &GeoLocation,
    ) -> Result<Vec<TimeEstimate>, ApplicationError>;

    /// Price and duration estimates between two locations
    async fn price_estimates(
        &self,
        server_token: &SecretString,
        start: &GeoLocation,
        end: &GeoLocation,
    ) -> Result<Vec<PriceEstimate>, ApplicationError>;
}
