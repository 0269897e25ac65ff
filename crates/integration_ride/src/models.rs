//! Uber estimate models

use serde::{Deserialize, Serialize};

/// One tier entry from `GET /v1.2/estimates/time`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimateEntry {
    /// Provider product identifier
    #[serde(default)]
    pub product_id: Option<String>,
    /// Tier display name (e.g. "uberX")
    pub display_name: String,
    /// Localized tier name
    #[serde(default)]
    pub localized_display_name: Option<String>,
    /// Seconds until a driver arrives
    pub estimate: u32,
}

/// One tier entry from `GET /v1.2/estimates/price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimateEntry {
    /// Provider product identifier
    #[serde(default)]
    pub product_id: Option<String>,
    /// Tier display name (e.g. "uberX")
    pub display_name: String,
    /// Localized tier name
    #[serde(default)]
    pub localized_display_name: Option<String>,
    /// Trip distance; the unit follows `Accept-Language`
    pub distance: f64,
    /// Trip duration in seconds
    pub duration: u32,
    /// Lower fare bound (null for metered tiers)
    #[serde(default)]
    pub low_estimate: Option<f64>,
    /// Upper fare bound (null for metered tiers)
    #[serde(default)]
    pub high_estimate: Option<f64>,
    /// Formatted fare text (e.g. "$10-15" or "Metered")
    pub estimate: String,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Surge pricing multiplier
    #[serde(default)]
    pub surge_multiplier: Option<f64>,
}

/// Body of the time estimate endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct TimesResponse {
    pub times: Vec<TimeEstimateEntry>,
}

/// Body of the price estimate endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct PricesResponse {
    pub prices: Vec<PriceEstimateEntry>,
}

/// Error body returned by the Uber API on failures
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: Option<String>,
    pub code: Option<String>,
}

impl ApiErrorBody {
    /// Human-readable description, preferring the message over the code
    pub fn describe(&self) -> Option<String> {
        match (&self.message, &self.code) {
            (Some(message), Some(code)) => Some(format!("{message} ({code})")),
            (Some(message), None) => Some(message.clone()),
            (None, Some(code)) => Some(code.clone()),
            (None, None) => None,
        }
    }
}
