//! Ride tier value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Display name of the tier used when none is configured
pub const DEFAULT_RIDE_TIER: &str = "uberX";

/// A ride category as named by the provider (e.g. "uberX", "Comfort")
///
/// Matching against provider entries is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RideTier(String);

impl RideTier {
    /// Create a ride tier from its display name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRideTier` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyRideTier);
        }
        Ok(Self(name))
    }

    /// The tier's display name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a provider entry's display name refers to this tier
    #[must_use]
    pub fn matches(&self, display_name: &str) -> bool {
        self.0 == display_name
    }
}

impl Default for RideTier {
    fn default() -> Self {
        Self(DEFAULT_RIDE_TIER.to_string())
    }
}

impl fmt::Display for RideTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RideTier {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RideTier> for String {
    fn from(tier: RideTier) -> Self {
        tier.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_uber_x() {
        assert_eq!(RideTier::default().as_str(), "uberX");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(RideTier::new(""), Err(DomainError::EmptyRideTier)));
        assert!(matches!(RideTier::new("  "), Err(DomainError::EmptyRideTier)));
    }

    #[test]
    fn matching_is_exact() {
        let tier = RideTier::new("uberX").unwrap();
        assert!(tier.matches("uberX"));
        assert!(!tier.matches("UberX"));
        assert!(!tier.matches("uberXL"));
        assert!(!tier.matches(" uberX"));
    }

    #[test]
    fn deserializes_from_plain_string() {
        let tier: RideTier = serde_json::from_str("\"Comfort\"").unwrap();
        assert_eq!(tier.to_string(), "Comfort");
        assert!(serde_json::from_str::<RideTier>("\"\"").is_err());
    }
}
