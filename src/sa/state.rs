//! Mutable state of one annealing run.

use rand::Rng;

use super::types::AnnealProblem;

/// What a single iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// The candidate replaced the current solution.
    pub accepted: bool,
    /// The candidate was strictly cheaper than the current solution.
    pub improving: bool,
    /// The best solution changed.
    pub new_best: bool,
}

/// Search state owned exclusively by one run.
///
/// `best_cost` is the minimum cost observed so far and `best` a solution
/// with that cost. The current solution may be worse than the best while
/// the search explores.
#[derive(Debug, Clone)]
pub struct SearchState<S> {
    current: S,
    current_cost: f64,
    best: S,
    best_cost: f64,
    temperature: f64,
}

impl<S: Clone> SearchState<S> {
    /// Draws an initial solution and starts at `temperature`.
    pub fn init<P, R>(problem: &P, rng: &mut R, temperature: f64) -> Self
    where
        P: AnnealProblem<Solution = S>,
        R: Rng,
    {
        let current = problem.initial_solution(rng);
        let current_cost = problem.cost(&current);
        Self {
            best: current.clone(),
            best_cost: current_cost,
            current,
            current_cost,
            temperature,
        }
    }

    /// Runs one iteration: perturb, evaluate, accept or reject, track the
    /// best, and cool by `cooling_rate`.
    pub fn step<P, R>(&mut self, problem: &P, rng: &mut R, cooling_rate: f64) -> StepOutcome
    where
        P: AnnealProblem<Solution = S>,
        R: Rng,
    {
        let candidate = problem.neighbor(&self.current, rng);
        let candidate_cost = problem.cost(&candidate);

        // Metropolis acceptance criterion
        let improving = candidate_cost < self.current_cost;
        let accepted = improving || {
            let probability = ((self.current_cost - candidate_cost) / self.temperature).exp();
            rng.random_range(0.0..1.0) < probability
        };

        let mut new_best = false;
        if accepted {
            self.current = candidate;
            self.current_cost = candidate_cost;

            if self.current_cost < self.best_cost {
                self.best = self.current.clone();
                self.best_cost = self.current_cost;
                new_best = true;
            }
        }

        self.temperature *= cooling_rate;
        StepOutcome {
            accepted,
            improving,
            new_best,
        }
    }

    pub fn current(&self) -> &S {
        &self.current
    }

    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    pub fn best(&self) -> &S {
        &self.best
    }

    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Consumes the state, yielding the best solution and its cost.
    pub fn into_best(self) -> (S, f64) {
        (self.best, self.best_cost)
    }
}
