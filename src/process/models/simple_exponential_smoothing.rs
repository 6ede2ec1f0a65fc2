//! Simple exponential smoothing — a long-term level driven by normal error.
//!
//! Parameters: `[alpha, std]`. Lag 1.
//!
//! The error row is `N(0, std²)`; a single long-term component
//! `l[t] = alpha · e[t] + l[t − 1]` is added on top. The initial level is
//! `mean_value(source) · init_values_coeff` for a fresh segment, else the last
//! observed value.
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
        errors::ProcessResult,
        traits::{Process, last_value},
    },
};
use ndarray::{Array1, ArrayView1};
use rand::RngCore;

/// SimpleExponentialSmoothing — level-only smoothing process.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleExponentialSmoothing {
    pub init_values_coeff: f64,
    pub long_term_coeff: ParameterType,
}

impl SimpleExponentialSmoothing {
    pub const NAME: &'static str = "simple_exponential_smoothing";

    pub fn new(config: &ProcessConfig) -> Self {
        SimpleExponentialSmoothing {
            init_values_coeff: config.init_values_coeff,
            long_term_coeff: config.long_term_coeff(),
        }
    }
}

impl Default for SimpleExponentialSmoothing {
    fn default() -> Self {
        SimpleExponentialSmoothing::new(&ProcessConfig::default())
    }
}

impl Process for SimpleExponentialSmoothing {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn lag(&self) -> usize {
        1
    }

    fn parameters_required(&self) -> Vec<ParameterType> {
        vec![self.long_term_coeff, ParameterType::std()]
    }

    fn generate_time_series(
        &self, data: &ProcessData, previous_values: Option<ArrayView1<'_, f64>>,
        ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> ProcessResult<(Array1<f64>, ProcessInfo)> {
        validate_process_data(Self::NAME, data, &self.parameters_required())?;
        let (alpha, std) = (data.parameters[0], data.parameters[1]);
        let mut builder = EtsProcessBuilder::with_error(
            data.steps,
            ErrorDistribution::Normal { mean: 0.0, std },
            rng,
        )?;
        let level = match last_value(previous_values) {
            Some(last) => last,
            None => ctx.method.mean_value(ctx.source_data, rng)? * self.init_values_coeff,
        };
        builder.set_long_term(level, alpha, &[])?;
        let info = ProcessInfo::new(Self::NAME, self.lag(), vec![level], data);
        Ok((builder.sum_components(), info))
    }
}
