//! Fuel-consumption cost model.
//!
//! Maps an ordered sequence of waypoints to an estimated fuel total. Each
//! leg is charged using the attributes of the waypoint it departs from, so
//! the cost depends on direction as well as order.
//!
//! The great-circle length of every leg is available through
//! [`FuelModel::legs`], but it is not a factor in the fuel term.

mod config;
mod geo;
mod model;

pub use config::FuelConfig;
pub use geo::{great_circle_nm, EARTH_RADIUS_KM, KM_PER_NAUTICAL_MILE};
pub use model::{FuelModel, Leg};
