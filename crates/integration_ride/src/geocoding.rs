//! Yandex geocoding client
//!
//! Converts free-form address strings to geographic coordinates using
//! the [Yandex Geocoder](https://yandex.com/dev/geocode/) HTTP API.
//! The first feature of the result collection wins.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Configuration for the Yandex geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YandexGeocodingConfig {
    /// Base URL for the geocoder
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Response language (`lang` query parameter)
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_geocoding_base_url() -> String {
    "https://geocode-maps.yandex.ru".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    10
}

fn default_lang() -> String {
    "ru".to_string()
}

impl Default for YandexGeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout_secs(),
            lang: default_lang(),
        }
    }
}

impl YandexGeocodingConfig {
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

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Address could not be resolved to coordinates
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Invalid client configuration
    #[error("Geocoding configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    async fn geocode(
        &self,
        address: &str,
        api_key: Option<&SecretString>,
    ) -> Result<GeoLocation, GeocodingError>;
}

/// Yandex Geocoder client
#[derive(Debug)]
pub struct YandexGeocodingClient {
    client: Client,
    config: YandexGeocodingConfig,
}

impl YandexGeocodingClient {
    /// Create a new Yandex geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &YandexGeocodingConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("ride-neuron/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Extract the first feature's position from a geocoder response body
    fn parse_response(address: &str, body: &str) -> Result<GeoLocation, GeocodingError> {
        let raw: YandexResponse =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let member = raw
            .response
            .geo_object_collection
            .feature_member
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        parse_position(&member.geo_object.point.pos)
    }
}

/// Parse a Yandex `pos` string, which lists longitude first: `"37.617635 55.755814"`
fn parse_position(pos: &str) -> Result<GeoLocation, GeocodingError> {
    let mut parts = pos.split_whitespace();
    let (Some(lon), Some(lat), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GeocodingError::ParseError(format!(
            "Malformed position: {pos:?}"
        )));
    };

    let longitude: f64 = lon
        .parse()
        .map_err(|_| GeocodingError::ParseError("Invalid longitude".to_string()))?;
    let latitude: f64 = lat
        .parse()
        .map_err(|_| GeocodingError::ParseError("Invalid latitude".to_string()))?;

    GeoLocation::new(latitude, longitude).map_err(|e| GeocodingError::ParseError(e.to_string()))
}

#[async_trait]
impl GeocodingClient for YandexGeocodingClient {
    #[instrument(skip(self, api_key))]
    async fn geocode(
        &self,
        address: &str,
        api_key: Option<&SecretString>,
    ) -> Result<GeoLocation, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodingError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        let url = format!("{}/1.x/", self.config.base_url);
        let mut params = vec![
            ("geocode", address.to_string()),
            ("format", "json".to_string()),
            ("lang", self.config.lang.clone()),
        ];

        if let Some(key) = api_key {
            params.push(("apikey", key.expose_secret().to_string()));
        }

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let location = Self::parse_response(address, &body)?;
        debug!(%address, %location, "Geocoded address");
        Ok(location)
    }
}

/// Raw Yandex Geocoder response
#[derive(Debug, Deserialize)]
struct YandexResponse {
    response: YandexResponseBody,
}

#[derive(Debug, Deserialize)]
struct YandexResponseBody {
    #[serde(rename = "GeoObjectCollection")]
    geo_object_collection: GeoObjectCollection,
}

#[derive(Debug, Deserialize)]
struct GeoObjectCollection {
    #[serde(rename = "featureMember", default)]
    feature_member: Vec<FeatureMember>,
}

#[derive(Debug, Deserialize)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    geo_object: GeoObject,
}

#[derive(Debug, Deserialize)]
struct GeoObject {
    #[serde(rename = "Point")]
    point: Point,
}

#[derive(Debug, Deserialize)]
struct Point {
    pos: String,
}
