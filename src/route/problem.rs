//! Waypoint ordering as an annealing problem.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::fuel::FuelModel;
use crate::sa::AnnealProblem;
use crate::waypoint::Waypoint;

/// Orderings of a fixed waypoint slice, costed by a [`FuelModel`].
///
/// A solution is a permutation of indices into `waypoints`. The neighborhood
/// move swaps two distinct positions; with fewer than two waypoints there is
/// no such pair and the neighbor is an unchanged copy.
#[derive(Debug, Clone, Copy)]
pub struct RouteProblem<'a> {
    waypoints: &'a [Waypoint],
    model: &'a FuelModel,
}

impl<'a> RouteProblem<'a> {
    pub fn new(waypoints: &'a [Waypoint], model: &'a FuelModel) -> Self {
        Self { waypoints, model }
    }

    pub fn waypoints(&self) -> &'a [Waypoint] {
        self.waypoints
    }

    /// Materializes an index permutation into waypoints.
    pub fn route(&self, order: &[usize]) -> Vec<Waypoint> {
        order.iter().map(|&i| self.waypoints[i]).collect()
    }
}

impl AnnealProblem for RouteProblem<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.waypoints.len()).collect();
        order.shuffle(rng);
        order
    }

    fn cost(&self, order: &Vec<usize>) -> f64 {
        self.model.order_cost(self.waypoints, order)
    }

    fn neighbor<R: Rng>(&self, order: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut next = order.clone();
        let n = next.len();
        if n >= 2 {
            // Uniform over distinct pairs: draw j from the n - 1 other slots.
            let i = rng.random_range(0..n);
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            next.swap(i, j);
        }
        next
    }
}
