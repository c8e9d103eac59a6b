//! Optimization output.

use crate::waypoint::Waypoint;

/// Best route found by one optimization.
///
/// `optimal_cost` is exactly the fuel model's cost of `optimal_route`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizedRoute {
    /// Waypoints in visiting order.
    pub optimal_route: Vec<Waypoint>,

    /// Estimated fuel for `optimal_route`.
    pub optimal_cost: f64,

    /// `optimal_route[k] == input[order[k]]`.
    pub order: Vec<usize>,

    /// Number of annealing iterations performed.
    pub iterations: usize,

    /// Number of accepted moves.
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Whether the run was stopped before the schedule finished.
    pub cancelled: bool,

    /// Best cost sampled during the run.
    pub cost_history: Vec<f64>,
}

impl OptimizedRoute {
    pub fn len(&self) -> usize {
        self.optimal_route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.optimal_route.is_empty()
    }
}
