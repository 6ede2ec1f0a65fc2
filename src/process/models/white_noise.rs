//! White noise — i.i.d. draws around a mean.
//!
//! Parameters: `[mean, std]`. Lag 0.
//!
//! A fresh segment draws from the configured family with the given mean and
//! std. A continuation re-centres on the last observed value with a freshly
//! generated spread (`linspace.generate_std()`); the segment's own `[mean,
//! std]` parameters are recorded but not used for the draws.
use crate::{
    parameters::types::ParameterType,
    process::{
        core::{
            context::GenerationContext,
            data::{ProcessData, ProcessInfo},
            options::NoiseDistribution,
            sampling::ErrorDistribution,
            validation::validate_process_data,
        },
        errors::ProcessResult,
        traits::{Process, last_value},
    },
};
use ndarray::{Array1, ArrayView1};
use rand::RngCore;

/// WhiteNoise — lag-0 noise process.
#[derive(Debug, Clone, PartialEq)]
pub struct WhiteNoise {
    pub noise: NoiseDistribution,
}

impl WhiteNoise {
    pub const NAME: &'static str = "white_noise";

    pub fn new(noise: NoiseDistribution) -> Self {
        WhiteNoise { noise }
    }

    fn distribution(&self, mean: f64, std: f64) -> ErrorDistribution {
        match self.noise {
            NoiseDistribution::Normal => ErrorDistribution::Normal { mean, std },
            NoiseDistribution::Uniform => {
                let half_width = std * 3f64.sqrt();
                ErrorDistribution::Uniform { left: mean - half_width, right: mean + half_width }
            }
        }
    }
}

impl Default for WhiteNoise {
    fn default() -> Self {
        WhiteNoise::new(NoiseDistribution::Normal)
    }
}

impl Process for WhiteNoise {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn lag(&self) -> usize {
        0
    }

    fn parameters_required(&self) -> Vec<ParameterType> {
        vec![ParameterType::mean(), ParameterType::std()]
    }

    fn generate_time_series(
        &self, data: &ProcessData, previous_values: Option<ArrayView1<'_, f64>>,
        ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> ProcessResult<(Array1<f64>, ProcessInfo)> {
        validate_process_data(Self::NAME, data, &self.parameters_required())?;
        let (mean, std) = match last_value(previous_values) {
            None => (data.parameters[0], data.parameters[1]),
            Some(last) => (last, ctx.linspace().generate_std(None, rng)),
        };
        let values = self.distribution(mean, std).sample_n(data.steps, rng)?;
        Ok((values, ProcessInfo::new(Self::NAME, self.lag(), Vec::new(), data)))
    }
}
