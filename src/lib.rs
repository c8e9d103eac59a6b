//! Fuel-aware waypoint ordering for towing vessels.
//!
//! Given a set of geolocated waypoints carrying towing and sea-state
//! attributes, finds a visiting order that minimizes estimated fuel
//! consumption, using simulated annealing.
//!
//! - **Fuel model** ([`fuel`]): pure cost function over an ordered route.
//!   Each leg is charged from the attributes of the waypoint it departs.
//! - **Simulated Annealing** ([`sa`]): problem-agnostic search loop with
//!   geometric cooling, Metropolis acceptance, and an injected random
//!   source.
//! - **Route optimizer** ([`route`]): binds the two, searching over
//!   permutations of the caller's waypoints.
//!
//! # Example
//!
//! ```
//! use tug_route::{AnnealConfig, FuelConfig, RouteOptimizer, Waypoint};
//!
//! let optimizer = RouteOptimizer::new(
//!     FuelConfig::default(),
//!     AnnealConfig::default().with_seed(7),
//! )?;
//!
//! let waypoints = vec![
//!     Waypoint::new(51.95, 4.14).with_engine_power(1200.0).with_tow_size(300.0),
//!     Waypoint::new(53.54, 9.98).with_engine_power(1200.0).with_wind_speed(9.0),
//!     Waypoint::new(55.68, 12.57).with_engine_power(800.0),
//! ];
//!
//! let best = optimizer.optimize_seeded(&waypoints)?;
//! assert_eq!(best.optimal_route.len(), waypoints.len());
//! # Ok::<(), tug_route::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for waypoints, configs and results.
//! - `parallel`: runs [`RouteOptimizer::optimize_restarts`] on rayon.

pub mod error;
pub mod fuel;
pub mod route;
pub mod sa;
mod waypoint;

pub use error::{Error, Result};
pub use fuel::{FuelConfig, FuelModel};
pub use route::{OptimizedRoute, RouteOptimizer};
pub use sa::AnnealConfig;
pub use waypoint::Waypoint;
