//! Port implementations backed by the integration clients

mod geocoding_adapter;
mod ride_estimate_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use ride_estimate_adapter::RideEstimateAdapter;
