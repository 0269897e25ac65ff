//! Uber Riders API client
//!
//! Fetches pickup-time and price estimates from the
//! [estimates endpoints](https://developer.uber.com/docs/riders/references/api/v1.2/estimates-time-get)
//! using server-token authentication.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT_LANGUAGE, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::UberConfig;
use crate::error::RideServiceError;
use crate::models::{
    ApiErrorBody, PriceEstimateEntry, PricesResponse, TimeEstimateEntry, TimesResponse,
};

/// Trait for ride estimate clients
#[async_trait]
pub trait RideClient: Send + Sync {
    /// Pickup-time estimates for every tier available at a location
    async fn pickup_time_estimates(
        &self,
        server_token: &SecretString,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<TimeEstimateEntry>, RideServiceError>;

    /// Fare and duration estimates for every tier between two locations
    async fn price_estimates(
        &self,
        server_token: &SecretString,
        start_latitude: f64,
        start_longitude: f64,
        end_latitude: f64,
        end_longitude: f64,
    ) -> Result<Vec<PriceEstimateEntry>, RideServiceError>;
}

/// Uber Riders API client
#[derive(Debug)]
pub struct UberRidesClient {
    client: Client,
    config: UberConfig,
}

impl UberRidesClient {
    /// Create a new Uber client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &UberConfig) -> Result<Self, RideServiceError> {
        config
            .validate()
            .map_err(RideServiceError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("ride-neuron/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RideServiceError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Issue an authenticated GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        server_token: &SecretString,
        params: &[(&str, String)],
    ) -> Result<T, RideServiceError> {
        let url = format!("{}{path}", self.config.base_url);
        debug!(?url, "Requesting ride estimates");

        let response = self
            .client
            .get(&url)
            .header(
                AUTHORIZATION,
                format!("Token {}", server_token.expose_secret()),
            )
            .header(ACCEPT_LANGUAGE, &self.config.language)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RideServiceError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RideServiceError::ConnectionFailed(e.to_string())
                }
            })?;

        let response = Self::check_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| RideServiceError::ParseError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| RideServiceError::ParseError(e.to_string()))
    }

    /// Map non-success statuses to errors, keeping the API's message if present
    async fn check_status(response: Response) -> Result<Response, RideServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RideServiceError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        let detail = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ApiErrorBody>(&body).ok())
            .and_then(|body| body.describe())
            .map_or_else(|| format!("HTTP {status}"), |d| format!("HTTP {status}: {d}"));

        warn!(%status, %detail, "Ride service rejected request");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(RideServiceError::Unauthorized(detail))
        } else {
            Err(RideServiceError::RequestFailed(detail))
        }
    }
}

#[async_trait]
impl RideClient for UberRidesClient {
    #[instrument(skip(self, server_token))]
    async fn pickup_time_estimates(
        &self,
        server_token: &SecretString,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<TimeEstimateEntry>, RideServiceError> {
        let params = [
            ("start_latitude", latitude.to_string()),
            ("start_longitude", longitude.to_string()),
        ];

        let response: TimesResponse = self
            .get_json("/v1.2/estimates/time", server_token, &params)
            .await?;

        debug!(count = response.times.len(), "Pickup-time estimates received");
        Ok(response.times)
    }

    #[instrument(
        skip(self, server_token),
        fields(start = %format!("{start_latitude},{start_longitude}"), end = %format!("{end_latitude},{end_longitude}"))
    )]
    async fn price_estimates(
        &self,
        server_token: &SecretString,
        start_latitude: f64,
        start_longitude: f64,
        end_latitude: f64,
        end_longitude: f64,
    ) -> Result<Vec<PriceEstimateEntry>, RideServiceError> {
        let params = [
            ("start_latitude", start_latitude.to_string()),
            ("start_longitude", start_longitude.to_string()),
            ("end_latitude", end_latitude.to_string()),
            ("end_longitude", end_longitude.to_string()),
        ];

        let response: PricesResponse = self
            .get_json("/v1.2/estimates/price", server_token, &params)
            .await?;

        debug!(count = response.prices.len(), "Price estimates received");
        Ok(response.prices)
    }
}
