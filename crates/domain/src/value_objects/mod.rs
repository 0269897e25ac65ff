//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod ride_tier;

pub use geo_location::GeoLocation;
pub use ride_tier::{DEFAULT_RIDE_TIER, RideTier};
