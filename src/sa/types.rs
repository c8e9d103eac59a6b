//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The implementor supplies the initial solution, the cost, and the
/// neighborhood move. Temperature management, the acceptance criterion,
/// and best-solution tracking belong to the runner.
///
/// SA minimizes the cost function.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use rand::seq::SliceRandom;
/// use tug_route::sa::AnnealProblem;
///
/// struct Sorting { n: usize }
///
/// impl AnnealProblem for Sorting {
///     type Solution = Vec<usize>;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
///         let mut perm: Vec<usize> = (0..self.n).collect();
///         perm.shuffle(rng);
///         perm
///     }
///
///     fn cost(&self, perm: &Vec<usize>) -> f64 {
///         perm.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64
///     }
///
///     fn neighbor<R: Rng>(&self, perm: &Vec<usize>, rng: &mut R) -> Vec<usize> {
///         let mut next = perm.clone();
///         next.swap(rng.random_range(0..self.n), rng.random_range(0..self.n));
///         next
///     }
/// }
/// ```
pub trait AnnealProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of `solution` without modifying it.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
