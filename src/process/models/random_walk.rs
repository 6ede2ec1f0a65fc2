//! Random walk — cumulative normal increments.
//!
//! Parameters: `[std]`. Lag 1.
//!
//! A fresh segment starts at `mean_value(source) · init_values_coeff` and
//! adds `steps − 1` increments. A continuation starts from the last observed
//! value and adds `steps` increments, so `segment[0] − previous[-1]` is one
//! `N(0, std²)` draw.
use crate::{
    parameters::types::ParameterType,
    process::{
        core::{
            context::GenerationContext,
            data::{ProcessData, ProcessInfo},
            options::DEFAULT_INIT_VALUES_COEFF,
            validation::validate_process_data,
        },
        errors::ProcessResult,
        traits::{Process, last_value},
    },
    utils::sample_normal,
};
use ndarray::{Array1, ArrayView1};
use rand::RngCore;

/// RandomWalk — lag-1 Gaussian walk.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWalk {
    pub init_values_coeff: f64,
}

impl RandomWalk {
    pub const NAME: &'static str = "random_walk";

    pub fn new(init_values_coeff: f64) -> Self {
        RandomWalk { init_values_coeff }
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        RandomWalk::new(DEFAULT_INIT_VALUES_COEFF)
    }
}

impl Process for RandomWalk {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn lag(&self) -> usize {
        1
    }

    fn parameters_required(&self) -> Vec<ParameterType> {
        vec![ParameterType::std()]
    }

    fn generate_time_series(
        &self, data: &ProcessData, previous_values: Option<ArrayView1<'_, f64>>,
        ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> ProcessResult<(Array1<f64>, ProcessInfo)> {
        validate_process_data(Self::NAME, data, &self.parameters_required())?;
        let std = data.parameters[0];
        let mut values = Array1::<f64>::zeros(data.steps);
        let (mut current, first) = match last_value(previous_values) {
            Some(last) => (last, 0),
            None => {
                let init = ctx.method.mean_value(ctx.source_data, rng)? * self.init_values_coeff;
                values[0] = init;
                (init, 1)
            }
        };
        let initial_values = vec![current];
        for value in values.iter_mut().skip(first) {
            current += sample_normal(0.0, std, rng);
            *value = current;
        }
        Ok((values, ProcessInfo::new(Self::NAME, self.lag(), initial_values, data)))
    }
}
