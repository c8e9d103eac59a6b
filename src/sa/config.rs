//! SA configuration and cooling schedule.

use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for a Simulated Annealing run.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, starting from
/// `initial_temperature`. The run ends once `T <= stopping_temperature`.
///
/// # Examples
///
/// ```
/// use tug_route::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.995)
///     .with_stopping_temperature(0.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Multiplicative decay applied after every iteration, in (0, 1).
    pub cooling_rate: f64,

    /// The run stops once the temperature falls to or below this value.
    pub stopping_temperature: f64,

    /// Random seed for the convenience entry points that build their own
    /// generator. `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    /// Wall-clock budget checked once per iteration. `None` = unbounded.
    pub time_limit: Option<Duration>,

    /// Record the best cost into the history every this many iterations.
    pub history_interval: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.99,
            stopping_temperature: 1.0,
            seed: None,
            time_limit: None,
            history_interval: 100,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_stopping_temperature(mut self, t: f64) -> Self {
        self.stopping_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    /// Number of iterations the schedule performs:
    /// `ceil(ln(stopping / initial) / ln(cooling_rate))`.
    ///
    /// Zero when the schedule starts at or below its stopping temperature.
    /// Only meaningful for a valid configuration.
    ///
    /// ```
    /// use tug_route::sa::AnnealConfig;
    ///
    /// assert_eq!(AnnealConfig::default().planned_iterations(), 688);
    /// ```
    pub fn planned_iterations(&self) -> usize {
        if self.initial_temperature <= self.stopping_temperature {
            return 0;
        }
        let steps = (self.stopping_temperature / self.initial_temperature).ln()
            / self.cooling_rate.ln();
        steps.ceil() as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(Error::invalid_config(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !self.stopping_temperature.is_finite() || self.stopping_temperature <= 0.0 {
            return Err(Error::invalid_config(format!(
                "stopping_temperature must be positive and finite, got {}",
                self.stopping_temperature
            )));
        }
        if self.stopping_temperature >= self.initial_temperature {
            return Err(Error::invalid_config(format!(
                "stopping_temperature ({}) must be less than initial_temperature ({})",
                self.stopping_temperature, self.initial_temperature
            )));
        }
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(Error::invalid_config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.history_interval == 0 {
            return Err(Error::invalid_config("history_interval must be at least 1"));
        }
        Ok(())
    }
}
