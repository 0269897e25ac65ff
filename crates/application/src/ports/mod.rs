//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod ride_estimate_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::{GeocodeQuery, GeocodingPort};
#[cfg(test)]
pub use ride_estimate_port::MockRideEstimatePort;
pub use ride_estimate_port::RideEstimatePort;
