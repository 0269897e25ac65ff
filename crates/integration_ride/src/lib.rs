//! Ride-hailing integration for the ride neuron
//!
//! Provides pickup-time and price estimates via the
//! [Uber Riders API](https://developer.uber.com/docs/riders/references/api) and
//! address geocoding via the
//! [Yandex Geocoder](https://yandex.com/dev/geocode/).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration crates.
//! [`RideClient`] defines the interface for the two estimate endpoints,
//! implemented by [`UberRidesClient`]. [`GeocodingClient`] handles address-to-coordinate
//! conversion via [`YandexGeocodingClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_ride::{RideClient, UberConfig, UberRidesClient};
//! use secrecy::SecretString;
//!
//! let client = UberRidesClient::new(&UberConfig::default())?;
//! let token = SecretString::from("server-token");
//!
//! let times = client.pickup_time_estimates(&token, 55.7558, 37.6173).await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{RideClient, UberRidesClient};
pub use config::UberConfig;
pub use error::RideServiceError;
pub use geocoding::{GeocodingClient, GeocodingError, YandexGeocodingClient, YandexGeocodingConfig};
pub use models::{PriceEstimateEntry, TimeEstimateEntry};
