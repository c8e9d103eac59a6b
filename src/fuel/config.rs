//! Fuel model constants.

use crate::error::{Error, Result};

/// Constants of the fuel-consumption estimate.
///
/// # Examples
///
/// ```
/// use tug_route::fuel::FuelConfig;
///
/// let config = FuelConfig::default().with_sfc(0.25);
/// assert!(config.validate().is_ok());
/// assert!(FuelConfig::default().with_engine_efficiency(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelConfig {
    /// Specific fuel consumption. Must be positive and finite.
    pub sfc: f64,

    /// Engine efficiency. Must be positive and finite.
    pub engine_efficiency: f64,
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self {
            sfc: 0.2,
            engine_efficiency: 0.85,
        }
    }
}

impl FuelConfig {
    pub fn with_sfc(mut self, sfc: f64) -> Self {
        self.sfc = sfc;
        self
    }

    pub fn with_engine_efficiency(mut self, efficiency: f64) -> Self {
        self.engine_efficiency = efficiency;
        self
    }

    /// Denominator shared by every leg: `sfc * engine_efficiency`.
    pub fn divisor(&self) -> f64 {
        self.sfc * self.engine_efficiency
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.sfc.is_finite() || self.sfc <= 0.0 {
            return Err(Error::invalid_config(format!(
                "sfc must be positive and finite, got {}",
                self.sfc
            )));
        }
        if !self.engine_efficiency.is_finite() || self.engine_efficiency <= 0.0 {
            return Err(Error::invalid_config(format!(
                "engine_efficiency must be positive and finite, got {}",
                self.engine_efficiency
            )));
        }
        Ok(())
    }
}
