//! Invocation parameters and their validated form
//!
//! The host passes a [`RideRequestParams`] bundle for every request.
//! [`RequestConfig::from_params`] checks it once, before any network call,
//! and produces an immutable [`RequestConfig`].

use domain::value_objects::{GeoLocation, RideTier};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Raw invocation parameters as supplied by the host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RideRequestParams {
    /// Uber server token (required)
    #[serde(default, skip_serializing)]
    pub uber_api_key: Option<SecretString>,

    /// Yandex geocoder API key
    #[serde(default, skip_serializing)]
    pub yandex_api_key: Option<SecretString>,

    /// Ride tier display name; defaults to "uberX"
    #[serde(default)]
    pub drive_mode: Option<String>,

    /// Start latitude, used when no start address is given
    #[serde(default)]
    pub start_latitude: Option<f64>,

    /// Start longitude, used when no start address is given
    #[serde(default)]
    pub start_longitude: Option<f64>,

    /// Start address; takes precedence over start coordinates
    #[serde(default)]
    pub start_address: Option<String>,

    /// Destination address; enables the price estimate
    #[serde(default)]
    pub end_address: Option<String>,
}

impl RideRequestParams {
    /// Fill every unset field from `defaults`
    #[must_use]
    pub fn with_defaults(self, defaults: Self) -> Self {
        Self {
            uber_api_key: self.uber_api_key.or(defaults.uber_api_key),
            yandex_api_key: self.yandex_api_key.or(defaults.yandex_api_key),
            drive_mode: self.drive_mode.or(defaults.drive_mode),
            start_latitude: self.start_latitude.or(defaults.start_latitude),
            start_longitude: self.start_longitude.or(defaults.start_longitude),
            start_address: self.start_address.or(defaults.start_address),
            end_address: self.end_address.or(defaults.end_address),
        }
    }
}

/// Where the ride starts
#[derive(Debug, Clone, PartialEq)]
pub enum StartLocation {
    /// Free-text address, geocoded before the estimate calls
    Address(String),
    /// Coordinates used as-is
    Coordinates(GeoLocation),
}

/// Validated, immutable configuration for one ride estimate request
#[derive(Debug, Clone)]
pub struct RequestConfig {
    api_key: SecretString,
    geocoding_api_key: Option<SecretString>,
    ride_tier: RideTier,
    start: StartLocation,
    end_address: Option<String>,
}

impl RequestConfig {
    /// Validate raw parameters
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the Uber key is missing
    /// or blank, or if there is neither a start address nor a complete
    /// coordinate pair, if the coordinates are out of range, or if the
    /// tier name is blank.
    pub fn from_params(params: RideRequestParams) -> Result<Self, ApplicationError> {
        let api_key = params
            .uber_api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| {
                ApplicationError::Configuration("An Uber API key is required".to_string())
            })?;

        let start_address = non_blank(params.start_address);
        let start = match (start_address, params.start_latitude, params.start_longitude) {
            (Some(address), _, _) => StartLocation::Address(address),
            (None, Some(latitude), Some(longitude)) => {
                let location = GeoLocation::new(latitude, longitude)
                    .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
                StartLocation::Coordinates(location)
            },
            (None, _, _) => {
                return Err(ApplicationError::Configuration(
                    "Missing start_address or start longitude and latitude".to_string(),
                ));
            },
        };

        let ride_tier = match params.drive_mode {
            Some(name) => RideTier::new(name)
                .map_err(|e| ApplicationError::Configuration(e.to_string()))?,
            None => RideTier::default(),
        };

        Ok(Self {
            api_key,
            geocoding_api_key: params
                .yandex_api_key
                .filter(|key| !key.expose_secret().trim().is_empty()),
            ride_tier,
            start,
            end_address: non_blank(params.end_address),
        })
    }

    /// Uber server token
    pub const fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Geocoding provider key, if any
    pub const fn geocoding_api_key(&self) -> Option<&SecretString> {
        self.geocoding_api_key.as_ref()
    }

    /// Tier whose estimates are reported
    pub const fn ride_tier(&self) -> &RideTier {
        &self.ride_tier
    }

    /// Start of the ride
    pub const fn start(&self) -> &StartLocation {
        &self.start
    }

    /// Destination address, if a price estimate was requested
    pub fn end_address(&self) -> Option<&str> {
        self.end_address.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
