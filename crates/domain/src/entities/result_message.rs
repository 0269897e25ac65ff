//! Result payload handed to the host for speech output

use serde::{Deserialize, Serialize};

use super::ride_estimate::{PriceEstimate, TimeEstimate};

/// Price and duration of the requested trip for the configured tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideSummary {
    /// Trip distance in the provider's locale-dependent unit
    pub distance: f64,
    /// Upper fare bound, truncated toward zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_estimate: Option<i64>,
    /// Lower fare bound, truncated toward zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_estimate: Option<i64>,
    /// Trip duration in minutes
    pub duration_minutes: f64,
    /// Provider-formatted fare text
    pub estimate_text: String,
}

impl From<&PriceEstimate> for RideSummary {
    fn from(estimate: &PriceEstimate) -> Self {
        Self {
            distance: estimate.distance,
            high_estimate: estimate.high_estimate.map(truncate_fare),
            low_estimate: estimate.low_estimate.map(truncate_fare),
            duration_minutes: estimate.duration_minutes(),
            estimate_text: estimate.estimate_text.clone(),
        }
    }
}

// Fares are truncated toward zero, never rounded.
#[allow(clippy::cast_possible_truncation)]
fn truncate_fare(value: f64) -> i64 {
    value.trunc() as i64
}

/// Combined pickup and trip estimate for one request
///
/// Fields stay `None` when the provider reported no entry for the
/// configured tier; absent fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultMessage {
    /// Tier name of the matched pickup estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driving_mode: Option<String>,
    /// Minutes until a driver arrives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_get_driver_minutes: Option<f64>,
    /// Trip estimate, present only when a destination was requested and matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride: Option<RideSummary>,
}

impl ResultMessage {
    /// Record the matched pickup estimate
    pub fn set_pickup(&mut self, estimate: &TimeEstimate) {
        self.driving_mode = Some(estimate.tier_name.clone());
        self.time_to_get_driver_minutes = Some(estimate.minutes_to_pickup());
    }

    /// Record the matched price estimate
    pub fn set_ride(&mut self, estimate: &PriceEstimate) {
        self.ride = Some(RideSummary::from(estimate));
    }

    /// Whether neither a pickup nor a trip estimate matched
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.driving_mode.is_none() && self.ride.is_none()
    }

    /// Render the message as a sentence for the speech layer
    #[must_use]
    pub fn to_speech(&self) -> String {
        let mut speech = match (&self.driving_mode, self.time_to_get_driver_minutes) {
            (Some(mode), Some(minutes)) => {
                format!("Your {mode} can pick you up in {}.", format_minutes(minutes))
            },
            _ => "No matching ride is available nearby right now.".to_string(),
        };

        if let Some(ride) = &self.ride {
            speech.push_str(&format!(
                " The trip distance is {:.1}, it takes about {} and costs {}.",
                ride.distance,
                format_minutes(ride.duration_minutes),
                ride.estimate_text
            ));
        }

        speech
    }
}

fn format_minutes(minutes: f64) -> String {
    if minutes < 1.0 {
        return "less than a minute".to_string();
    }
    let rounded = minutes.round();
    if (rounded - 1.0).abs() < f64::EPSILON {
        "1 minute".to_string()
    } else {
        format!("{rounded:.0} minutes")
    }
}
