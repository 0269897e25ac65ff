//! Application services

mod ride_estimate_requester;

pub use ride_estimate_requester::RideEstimateRequester;
