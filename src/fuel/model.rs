//! Route fuel evaluation.

use super::config::FuelConfig;
use crate::error::Result;
use crate::waypoint::Waypoint;

/// One directed leg of a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    /// Position of the departing waypoint within the route.
    pub from: usize,
    /// Great-circle length in nautical miles.
    pub distance_nm: f64,
    /// Estimated fuel for the leg.
    pub fuel: f64,
}

/// Fuel-consumption cost model.
///
/// The fuel for a leg depends only on the departing waypoint:
///
/// ```text
/// engine_power * (1 + tow_size/1000 + wind_speed/10 + wave_height/10 + towing_speed/10)
///     / (sfc * engine_efficiency)
/// ```
///
/// A route's cost is the sum over its legs; a single waypoint has no legs
/// and costs zero. Arithmetic is unchecked, so NaN and infinities in the
/// input propagate into the result.
///
/// # Examples
///
/// ```
/// use tug_route::fuel::{FuelConfig, FuelModel};
/// use tug_route::Waypoint;
///
/// let model = FuelModel::new(FuelConfig::default()).unwrap();
/// let a = Waypoint::new(0.0, 0.0).with_engine_power(100.0);
/// let b = Waypoint::new(0.0, 1.0).with_engine_power(100.0);
///
/// let cost = model.route_cost(&[a, b]);
/// assert!((cost - 100.0 / (0.2 * 0.85)).abs() < 1e-9);
/// assert_eq!(model.route_cost(&[a]), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FuelModel {
    config: FuelConfig,
    divisor: f64,
}

impl FuelModel {
    /// Creates a model, rejecting non-positive constants.
    pub fn new(config: FuelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            divisor: config.divisor(),
        })
    }

    pub fn config(&self) -> &FuelConfig {
        &self.config
    }

    /// Fuel for the leg departing `from`.
    #[inline]
    pub fn leg_fuel(&self, from: &Waypoint) -> f64 {
        from.engine_power
            * (1.0
                + from.tow_size / 1000.0
                + from.wind_speed / 10.0
                + from.wave_height / 10.0
                + from.towing_speed / 10.0)
            / self.divisor
    }

    /// Total fuel for the route, in visiting order.
    pub fn route_cost(&self, route: &[Waypoint]) -> f64 {
        self.sum_legs(route.iter())
    }

    /// Total fuel for the route `order` describes over `waypoints`.
    ///
    /// Produces exactly the same value as [`route_cost`](Self::route_cost)
    /// on the materialized route.
    ///
    /// # Panics
    ///
    /// Panics if an index in `order` is out of bounds.
    pub fn order_cost(&self, waypoints: &[Waypoint], order: &[usize]) -> f64 {
        self.sum_legs(order.iter().map(|&i| &waypoints[i]))
    }

    /// Per-leg breakdown of the route, including leg distances.
    pub fn legs(&self, route: &[Waypoint]) -> Vec<Leg> {
        route
            .windows(2)
            .enumerate()
            .map(|(i, pair)| Leg {
                from: i,
                distance_nm: pair[0].distance_nm_to(&pair[1]),
                fuel: self.leg_fuel(&pair[0]),
            })
            .collect()
    }

    /// Sum of great-circle leg lengths in nautical miles.
    pub fn total_distance_nm(&self, route: &[Waypoint]) -> f64 {
        route
            .windows(2)
            .fold(0.0, |acc, pair| acc + pair[0].distance_nm_to(&pair[1]))
    }

    fn sum_legs<'a>(&self, stops: impl Iterator<Item = &'a Waypoint>) -> f64 {
        let mut stops = stops.peekable();
        let mut total = 0.0;
        while let Some(from) = stops.next() {
            if stops.peek().is_none() {
                break;
            }
            total += self.leg_fuel(from);
        }
        total
    }
}
