//! Double exponential smoothing — level plus additive trend.
//!
//! Parameters: `[alpha, beta, std]`. Lag 1.
//!
//! The trend `b[t] = beta · e[t] + b[t − 1]` is registered first and feeds
//! the level `l[t] = alpha · e[t] + l[t − 1] + b[t]`. The trend always starts
//! at zero; the level starts fresh or from the last observed value.
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

const TREND_INIT: f64 = 0.0;

/// DoubleExponentialSmoothing — level + trend smoothing process.
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleExponentialSmoothing {
    pub init_values_coeff: f64,
    pub long_term_coeff: ParameterType,
    pub trend_coeff: ParameterType,
}

impl DoubleExponentialSmoothing {
    pub const NAME: &'static str = "double_exponential_smoothing";

    pub fn new(config: &ProcessConfig) -> Self {
        DoubleExponentialSmoothing {
            init_values_coeff: config.init_values_coeff,
            long_term_coeff: config.long_term_coeff(),
            trend_coeff: config.trend_coeff(),
        }
    }
}

impl Default for DoubleExponentialSmoothing {
    fn default() -> Self {
        DoubleExponentialSmoothing::new(&ProcessConfig::default())
    }
}

impl Process for DoubleExponentialSmoothing {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn lag(&self) -> usize {
        1
    }

    fn parameters_required(&self) -> Vec<ParameterType> {
        vec![self.long_term_coeff, self.trend_coeff, ParameterType::std()]
    }

    fn generate_time_series(
        &self, data: &ProcessData, previous_values: Option<ArrayView1<'_, f64>>,
        ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> ProcessResult<(Array1<f64>, ProcessInfo)> {
        validate_process_data(Self::NAME, data, &self.parameters_required())?;
        let (alpha, beta, std) = (data.parameters[0], data.parameters[1], data.parameters[2]);
        let mut builder = EtsProcessBuilder::with_error(
            data.steps,
            ErrorDistribution::Normal { mean: 0.0, std },
            rng,
        )?;
        let level = match last_value(previous_values) {
            Some(last) => last,
            None => ctx.method.mean_value(ctx.source_data, rng)? * self.init_values_coeff,
        };
        let trend = builder.set_trend(TREND_INIT, beta)?;
        builder.set_long_term(level, alpha, &[trend])?;
        let info = ProcessInfo::new(Self::NAME, self.lag(), vec![level, TREND_INIT], data);
        Ok((builder.sum_components(), info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{linspace::LinspaceInfo, methods::RandomMethod};
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    // Purpose
    // -------
    // Verify that the segment has the requested length and that a zero-noise
    // continuation stays on the last observed level (zero trend, zero error).
    //
    // Given
    // -----
    // - std = 0, history [.., −3.0], 9 steps.
    //
    // Expect
    // ------
    // - Nine values of −3.0; info [−3.0, 0.0].
    fn zero_noise_continuation_is_flat() {
        // Arrange
        let method = RandomMethod::new(LinspaceInfo::new(0.0, 10.0, 10).unwrap());
        let ctx = GenerationContext::new(&method, None);
        let mut rng = StdRng::seed_from_u64(70);
        let history = array![-3.0];

        // Act
        let (values, info) = DoubleExponentialSmoothing::default()
            .generate_time_series(
                &ProcessData::new(9, vec![0.1, 0.01, 0.0]),
                Some(history.view()),
                ctx,
                &mut rng,
            )
            .unwrap();

        // Assert
        assert_eq!(values, Array1::from_elem(9, -3.0));
        assert_eq!(info.initial_values, vec![-3.0, 0.0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify fresh segments have the requested length with random noise.
    fn fresh_segment_has_requested_length() {
        let method = RandomMethod::new(LinspaceInfo::new(0.0, 10.0, 10).unwrap());
        let ctx = GenerationContext::new(&method, None);
        let mut rng = StdRng::seed_from_u64(71);
        let process = DoubleExponentialSmoothing::default();

        let params = process.generate_parameters(ctx, &mut rng).unwrap();
        let (values, _) = process
            .generate_time_series(&ProcessData::new(17, params), None, ctx, &mut rng)
            .unwrap();

        assert_eq!(values.len(), 17);
        assert!(values.iter().all(|v| v.is_finite()));
    }
}
