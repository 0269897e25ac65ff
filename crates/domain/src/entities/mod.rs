//! Entities produced while estimating a ride

mod result_message;
mod ride_estimate;

pub use result_message::{ResultMessage, RideSummary};
pub use ride_estimate::{PriceEstimate, TimeEstimate, seconds_to_minutes};
