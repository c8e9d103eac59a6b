//! Fuel-optimal waypoint ordering.
//!
//! [`RouteOptimizer`] anneals over permutations of the caller's waypoints,
//! scoring each ordering with the [`FuelModel`](crate::fuel::FuelModel).
//! The waypoint multiset never changes during a run; only its order does.

mod optimizer;
mod problem;
mod result;

pub use optimizer::RouteOptimizer;
pub use problem::RouteProblem;
pub use result::OptimizedRoute;
