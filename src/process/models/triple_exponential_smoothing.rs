//! Triple exponential smoothing — level, trend, and seasonal components.
//!
//! Purpose
//! -------
//! Generate a segment from three stacked components over a normal error row:
//! a seasonal component with period `lag`, a trend, and a long-term level
//! that consumes the trend.
//!
//! Key behaviors
//! -------------
//! - Parameters: `[alpha, beta, gamma, std]`.
//! - Seeding depends on how much continuation history is available:
//!   1. none: fresh seeds. Without source data the level is a normal draw
//!      around the linspace centre and the seasonal seeds are `lag` such
//!      draws; with source data the level is the weighted source mean and
//!      the seasonal seeds are a random walk from zero with step `step`.
//!   2. `0 < len < lag`: the level continues from the last value, the
//!      available history fills the first seasonal slots, and the remainder
//!      is drawn from `N(last, step²)`.
//!   3. `len >= lag`: the trailing `lag` values are the seasonal seeds and
//!      the level continues from the last value.
//! - The trend always starts at zero.
//! - Seasonal seeds are divided by their sum before entering the recurrence;
//!   a sum within `f64::EPSILON` of zero leaves them unscaled.
//!
//! Invariants & assumptions
//! ------------------------
//! - `lag >= 1`; a zero lag is rejected before anything is drawn.
use crate::{
    parameters::types::ParameterType,
    process::{
        core::{
            builder::EtsProcessBuilder,
            context::GenerationContext,
            data::{ProcessData, ProcessInfo},
            options::ProcessConfig,
            sampling::ErrorDistribution,
            validation::validate_process_data,
        },
        errors::{ProcessError, ProcessResult},
        traits::Process,
    },
    utils::sample_normal,
};
use ndarray::{Array1, ArrayView1, s};
use rand::RngCore;

const TREND_INIT: f64 = 0.0;

/// Seeds chosen for one segment.
#[derive(Debug, Clone, PartialEq)]
struct SeasonalSeeds {
    level: f64,
    seasonal: Array1<f64>,
}

/// TripleExponentialSmoothing — level + trend + seasonal smoothing process.
#[derive(Debug, Clone, PartialEq)]
pub struct TripleExponentialSmoothing {
    pub lag: usize,
    pub long_term_coeff: ParameterType,
    pub trend_coeff: ParameterType,
    pub seasonal_coeff: ParameterType,
}

impl TripleExponentialSmoothing {
    pub const NAME: &'static str = "triple_exponential_smoothing";

    pub fn new(config: &ProcessConfig) -> Self {
        TripleExponentialSmoothing {
            lag: config.seasonal_lag,
            long_term_coeff: config.long_term_coeff(),
            trend_coeff: config.trend_coeff(),
            seasonal_coeff: config.seasonal_coeff(),
        }
    }

    fn fresh_seeds(
        &self, ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> ProcessResult<SeasonalSeeds> {
        let linspace = ctx.linspace();
        match ctx.source_data {
            None => {
                let level = linspace.generate_value(true, rng);
                let seasonal = linspace.generate_values(self.lag, true, rng);
                Ok(SeasonalSeeds { level, seasonal })
            }
            Some(_) => {
                let level = ctx.method.mean_value(ctx.source_data, rng)?;
                let mut seasonal = Array1::<f64>::zeros(self.lag);
                for i in 1..self.lag {
                    seasonal[i] = seasonal[i - 1] + sample_normal(0.0, linspace.step, rng);
                }
                Ok(SeasonalSeeds { level, seasonal })
            }
        }
    }

    fn seeds(
        &self, previous_values: Option<ArrayView1<'_, f64>>, ctx: GenerationContext<'_>,
        rng: &mut dyn RngCore,
    ) -> ProcessResult<SeasonalSeeds> {
        let history = match previous_values {
            Some(values) if !values.is_empty() => values,
            _ => return self.fresh_seeds(ctx, rng),
        };
        let available = history.len();
        let last = history[available - 1];
        if available >= self.lag {
            return Ok(SeasonalSeeds {
                level: last,
                seasonal: history.slice(s![available - self.lag..]).to_owned(),
            });
        }
        let step = ctx.linspace().step;
        let mut seasonal = Array1::<f64>::zeros(self.lag);
        seasonal.slice_mut(s![..available]).assign(&history);
        for value in seasonal.iter_mut().skip(available) {
            *value = sample_normal(last, step, rng);
        }
        Ok(SeasonalSeeds { level: last, seasonal })
    }
}

impl Default for TripleExponentialSmoothing {
    fn default() -> Self {
        TripleExponentialSmoothing::new(&ProcessConfig::default())
    }
}

/// Divide `seeds` by their sum unless the sum is numerically zero.
pub fn normalize_seasonal(mut seeds: Array1<f64>) -> Array1<f64> {
    let total = seeds.sum();
    if total.abs() > f64::EPSILON {
        seeds /= total;
    }
    seeds
}

impl Process for TripleExponentialSmoothing {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn lag(&self) -> usize {
        self.lag
    }

    fn parameters_required(&self) -> Vec<ParameterType> {
        vec![self.long_term_coeff, self.trend_coeff, self.seasonal_coeff, ParameterType::std()]
    }

    fn generate_time_series(
        &self, data: &ProcessData, previous_values: Option<ArrayView1<'_, f64>>,
        ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> ProcessResult<(Array1<f64>, ProcessInfo)> {
        validate_process_data(Self::NAME, data, &self.parameters_required())?;
        if self.lag == 0 {
            return Err(ProcessError::InvalidSeasonalLag { lag: self.lag });
        }
        let (alpha, beta, gamma, std) =
            (data.parameters[0], data.parameters[1], data.parameters[2], data.parameters[3]);
        let mut builder = EtsProcessBuilder::with_error(
            data.steps,
            ErrorDistribution::Normal { mean: 0.0, std },
            rng,
        )?;
        let SeasonalSeeds { level, seasonal } = self.seeds(previous_values, ctx, rng)?;
        let seasonal = normalize_seasonal(seasonal);
        builder.set_seasonal(self.lag, seasonal.view(), gamma)?;
        let trend = builder.set_trend(TREND_INIT, beta)?;
        builder.set_long_term(level, alpha, &[trend])?;
        let info = ProcessInfo::new(Self::NAME, self.lag, vec![level, TREND_INIT], data);
        Ok((builder.sum_components(), info))
    }
}
