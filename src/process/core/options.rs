//! Process options — configuration shared by every process model.
//!
//! Purpose
//! -------
//! Collect the knobs that shape process parameters and fresh initial states
//! in one validated place, so process models receive explicit configuration
//! instead of ad-hoc constants.
//!
//! Key behaviors
//! -------------
//! - [`ProcessConfig`] holds the coefficient ranges of the smoothing
//!   components, the seasonal period, the level-seeding coefficient, and the
//!   white-noise family.
//! - [`ProcessConfig::new`] validates every range; [`ProcessConfig::default`]
//!   carries the documented defaults.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every coefficient range is finite with `low <= high`.
//! - `seasonal_lag >= 1`; `init_values_coeff` is finite.
//!
//! Conventions
//! -----------
//! - Ranges are `(low, high)` tuples and map directly onto
//!   `ParameterType::Coefficient { low, high }`.
//!
//! Testing notes
//! -------------
//! - Unit tests verify the defaults and the rejection of reversed ranges and
//!   zero seasonal lags.
use crate::{
    parameters::types::ParameterType,
    process::errors::{ProcessError, ProcessResult},
};

/// Default multiplier applied to the strategy mean when seeding a fresh level.
pub const DEFAULT_INIT_VALUES_COEFF: f64 = 0.5;
/// Default smoothing-coefficient range of the long-term level.
pub const DEFAULT_LONG_TERM_COEFF_RANGE: (f64, f64) = (0.0, 0.3);
/// Default smoothing-coefficient range of the trend.
pub const DEFAULT_TREND_COEFF_RANGE: (f64, f64) = (0.0, 0.05);
/// Default smoothing-coefficient range of the seasonal component.
pub const DEFAULT_SEASONAL_COEFF_RANGE: (f64, f64) = (0.0, 0.05);
/// Default seasonal period.
pub const DEFAULT_SEASONAL_LAG: usize = 12;

/// Distribution family used by white noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseDistribution {
    /// `N(mean, std²)`.
    #[default]
    Normal,
    /// Uniform on `mean ± std·√3` (same mean and variance as the normal).
    Uniform,
}

/// ProcessConfig — configuration shared by process models.
///
/// Fields
/// ------
/// - `init_values_coeff`: `f64`
///   Multiplier on the strategy mean used as a fresh initial level.
/// - `long_term_coeff_range`, `trend_coeff_range`, `seasonal_coeff_range`:
///   `(f64, f64)`
///   Bounds for the smoothing coefficients (alpha, beta, gamma).
/// - `seasonal_lag`: `usize`
///   Period of the triple-smoothing seasonal component.
/// - `noise`: [`NoiseDistribution`]
///   White-noise family.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessConfig {
    pub init_values_coeff: f64,
    pub long_term_coeff_range: (f64, f64),
    pub trend_coeff_range: (f64, f64),
    pub seasonal_coeff_range: (f64, f64),
    pub seasonal_lag: usize,
    pub noise: NoiseDistribution,
}

impl ProcessConfig {
    /// Construct a validated configuration.
    ///
    /// Errors
    /// ------
    /// - [`ProcessError::InvalidConfig`] if `init_values_coeff` is
    ///   non-finite or a coefficient range is non-finite or reversed.
    /// - [`ProcessError::InvalidSeasonalLag`] if `seasonal_lag == 0`.
    pub fn new(
        init_values_coeff: f64, long_term_coeff_range: (f64, f64), trend_coeff_range: (f64, f64),
        seasonal_coeff_range: (f64, f64), seasonal_lag: usize, noise: NoiseDistribution,
    ) -> ProcessResult<Self> {
        if !init_values_coeff.is_finite() {
            return Err(ProcessError::InvalidConfig {
                name: "init_values_coeff",
                reason: "must be finite",
            });
        }
        validate_range("long_term_coeff_range", long_term_coeff_range)?;
        validate_range("trend_coeff_range", trend_coeff_range)?;
        validate_range("seasonal_coeff_range", seasonal_coeff_range)?;
        if seasonal_lag == 0 {
            return Err(ProcessError::InvalidSeasonalLag { lag: seasonal_lag });
        }
        Ok(ProcessConfig {
            init_values_coeff,
            long_term_coeff_range,
            trend_coeff_range,
            seasonal_coeff_range,
            seasonal_lag,
            noise,
        })
    }

    /// Replace the white-noise family.
    pub fn with_noise(mut self, noise: NoiseDistribution) -> Self {
        self.noise = noise;
        self
    }

    pub fn long_term_coeff(&self) -> ParameterType {
        coefficient(self.long_term_coeff_range)
    }

    pub fn trend_coeff(&self) -> ParameterType {
        coefficient(self.trend_coeff_range)
    }

    pub fn seasonal_coeff(&self) -> ParameterType {
        coefficient(self.seasonal_coeff_range)
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        ProcessConfig {
            init_values_coeff: DEFAULT_INIT_VALUES_COEFF,
            long_term_coeff_range: DEFAULT_LONG_TERM_COEFF_RANGE,
            trend_coeff_range: DEFAULT_TREND_COEFF_RANGE,
            seasonal_coeff_range: DEFAULT_SEASONAL_COEFF_RANGE,
            seasonal_lag: DEFAULT_SEASONAL_LAG,
            noise: NoiseDistribution::Normal,
        }
    }
}

fn validate_range(name: &'static str, (low, high): (f64, f64)) -> ProcessResult<()> {
    if !low.is_finite() || !high.is_finite() {
        return Err(ProcessError::InvalidConfig { name, reason: "bounds must be finite" });
    }
    if low > high {
        return Err(ProcessError::InvalidConfig { name, reason: "low must not exceed high" });
    }
    Ok(())
}

// Ranges are validated on construction.
fn coefficient((low, high): (f64, f64)) -> ParameterType {
    ParameterType::Coefficient { low, high }
}
