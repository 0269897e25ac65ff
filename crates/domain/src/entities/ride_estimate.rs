//! Ride estimate entities returned by the ride-hailing provider

use serde::{Deserialize, Serialize};

use crate::value_objects::RideTier;

/// Convert a duration in seconds to fractional minutes (not rounded)
#[must_use]
pub fn seconds_to_minutes(seconds: u32) -> f64 {
    f64::from(seconds) / 60.0
}

/// Predicted wait before a driver of one tier reaches the start location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    /// Tier display name as reported by the provider
    pub tier_name: String,
    /// Seconds until pickup
    pub seconds_to_pickup: u32,
}

impl TimeEstimate {
    /// Wait time in minutes
    #[must_use]
    pub fn minutes_to_pickup(&self) -> f64 {
        seconds_to_minutes(self.seconds_to_pickup)
    }

    /// Select the last estimate whose tier name matches `tier`
    #[must_use]
    pub fn find_for_tier<'a>(estimates: &'a [Self], tier: &RideTier) -> Option<&'a Self> {
        estimates.iter().rev().find(|e| tier.matches(&e.tier_name))
    }
}

/// Predicted fare range and duration of a trip for one tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    /// Tier display name as reported by the provider
    pub tier_name: String,
    /// Trip distance as reported by the provider; the unit follows the request locale
    pub distance: f64,
    /// Lower fare bound; `None` for metered tiers
    pub low_estimate: Option<f64>,
    /// Upper fare bound; `None` for metered tiers
    pub high_estimate: Option<f64>,
    /// Expected trip duration in seconds
    pub duration_seconds: u32,
    /// Formatted fare text (e.g. "$10-15")
    pub estimate_text: String,
}

impl PriceEstimate {
    /// Trip duration in minutes
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        seconds_to_minutes(self.duration_seconds)
    }

    /// Select the last estimate whose tier name matches `tier`
    #[must_use]
    pub fn find_for_tier<'a>(estimates: &'a [Self], tier: &RideTier) -> Option<&'a Self> {
        estimates.iter().rev().find(|e| tier.matches(&e.tier_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(tier: &str, seconds: u32) -> TimeEstimate {
        TimeEstimate {
            tier_name: tier.to_string(),
            seconds_to_pickup: seconds,
        }
    }

    #[test]
    fn minutes_to_pickup_is_not_rounded() {
        assert!((time("uberX", 300).minutes_to_pickup() - 5.0).abs() < f64::EPSILON);
        assert!((time("uberX", 90).minutes_to_pickup() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn find_for_tier_returns_last_match() {
        let estimates = vec![time("uberX", 300), time("uberX", 600), time("uberXL", 120)];
        let tier = RideTier::default();
        let found = TimeEstimate::find_for_tier(&estimates, &tier).unwrap();
        assert_eq!(found.seconds_to_pickup, 600);
    }

    #[test]
    fn find_for_tier_misses_silently() {
        let estimates = vec![time("uberXL", 120), time("Black", 240)];
        assert!(TimeEstimate::find_for_tier(&estimates, &RideTier::default()).is_none());
        assert!(TimeEstimate::find_for_tier(&[], &RideTier::default()).is_none());
    }

    #[test]
    fn price_duration_in_minutes() {
        let estimate = PriceEstimate {
            tier_name: "uberX".to_string(),
            distance: 3.2,
            low_estimate: Some(10.3),
            high_estimate: Some(15.7),
            duration_seconds: 600,
            estimate_text: "$10-15".to_string(),
        };
        assert!((estimate.duration_minutes() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn price_find_for_tier_returns_last_match() {
        let price = |tier: &str, seconds: u32| PriceEstimate {
            tier_name: tier.to_string(),
            distance: 3.2,
            low_estimate: None,
            high_estimate: None,
            duration_seconds: seconds,
            estimate_text: "Metered".to_string(),
        };
        let estimates = vec![price("uberX", 600), price("uberX", 900), price("Black", 300)];
        let found = PriceEstimate::find_for_tier(&estimates, &RideTier::default()).unwrap();
        assert_eq!(found.duration_seconds, 900);
    }
}
