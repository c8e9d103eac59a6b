//! SA execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, trace};
use rand::Rng;

use super::config::AnnealConfig;
use super::state::SearchState;
use super::types::AnnealProblem;
use crate::error::Result;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether the run was stopped by the cancel flag or the time limit.
    pub cancelled: bool,

    /// Best cost sampled at regular intervals, starting with the initial
    /// cost and ending with the final best.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs SA with the caller's random source.
    pub fn run<P, R>(problem: &P, config: &AnnealConfig, rng: &mut R) -> Result<AnnealResult<P::Solution>>
    where
        P: AnnealProblem,
        R: Rng,
    {
        Self::run_with_cancel(problem, config, rng, None)
    }

    /// Runs SA with an optional cancellation token, checked once per
    /// iteration.
    pub fn run_with_cancel<P, R>(
        problem: &P,
        config: &AnnealConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult<P::Solution>>
    where
        P: AnnealProblem,
        R: Rng,
    {
        config.validate()?;
        Ok(anneal(problem, config, rng, cancel.as_deref()))
    }
}

/// The annealing loop. Assumes `config` has been validated, except that a
/// schedule starting at or below its stopping temperature simply performs
/// no iterations.
pub(crate) fn anneal<P, R>(
    problem: &P,
    config: &AnnealConfig,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> AnnealResult<P::Solution>
where
    P: AnnealProblem,
    R: Rng,
{
    let started = Instant::now();
    let mut state = SearchState::init(problem, rng, config.initial_temperature);

    debug!(
        "annealing from T={} to T={} at rate {} (~{} iterations), initial cost {}",
        config.initial_temperature,
        config.stopping_temperature,
        config.cooling_rate,
        config.planned_iterations(),
        state.current_cost()
    );

    let history_interval = config.history_interval.max(1);
    let mut cost_history = vec![state.best_cost()];

    let mut iterations = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;
    let mut cancelled = false;

    while state.temperature() > config.stopping_temperature {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
            || config
                .time_limit
                .is_some_and(|limit| started.elapsed() >= limit)
        {
            cancelled = true;
            break;
        }

        let outcome = state.step(problem, rng, config.cooling_rate);
        iterations += 1;

        if outcome.accepted {
            accepted_moves += 1;
        }
        if outcome.improving {
            improving_moves += 1;
        }
        if outcome.new_best {
            trace!(
                "iteration {iterations}: new best {} at T={}",
                state.best_cost(),
                state.temperature()
            );
        }

        if iterations.is_multiple_of(history_interval) {
            cost_history.push(state.best_cost());
        }
    }

    let final_temperature = state.temperature();
    let (best, best_cost) = state.into_best();

    if cost_history.last().is_none_or(|&last| last != best_cost) {
        cost_history.push(best_cost);
    }

    if cancelled {
        info!("annealing stopped early after {iterations} iterations, best cost {best_cost}");
    } else {
        debug!(
            "annealing finished: {iterations} iterations, {accepted_moves} accepted, best cost {best_cost}"
        );
    }

    AnnealResult {
        best,
        best_cost,
        iterations,
        final_temperature,
        accepted_moves,
        improving_moves,
        cancelled,
        cost_history,
    }
}
