//! Simulated Annealing (SA).
//!
//! A single-solution trajectory search. Each iteration perturbs the current
//! solution, always keeps improvements, and keeps a worsening move with the
//! Metropolis probability `exp(-delta / T)`. The temperature `T` decays
//! geometrically until it reaches the stopping temperature.
//!
//! The random source is always supplied by the caller, so a run is fully
//! reproducible from its seed.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod state;
mod types;

pub use config::AnnealConfig;
pub(crate) use runner::anneal;
pub use runner::{AnnealResult, AnnealRunner};
pub use state::{SearchState, StepOutcome};
pub use types::AnnealProblem;
