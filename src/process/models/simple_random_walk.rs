//! Simple random walk — fixed-size steps up or down.
//!
//! Parameters: `[up_probability ∈ [0, 1], walk ≥ 0]`. Lag 1.
//!
//! Each step moves `+walk` with probability `up_probability`, else `−walk`.
//! Seeding mirrors the Gaussian random walk: a fresh level scaled by
//! `init_values_coeff`, or the last observed value.
use crate::{
    parameters::types::ParameterType,
    process::{
        core::{
            context::GenerationContext,
            data::{ProcessData, ProcessInfo},
            options::DEFAULT_INIT_VALUES_COEFF,
            validation::validate_process_data,
        },
        errors::{ProcessError, ProcessResult},
        traits::{Process, last_value},
    },
};
use ndarray::{Array1, ArrayView1};
use rand::{Rng, RngCore};

/// SimpleRandomWalk — lag-1 Bernoulli walk.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleRandomWalk {
    pub init_values_coeff: f64,
}

impl SimpleRandomWalk {
    pub const NAME: &'static str = "simple_random_walk";

    pub fn new(init_values_coeff: f64) -> Self {
        SimpleRandomWalk { init_values_coeff }
    }
}

impl Default for SimpleRandomWalk {
    fn default() -> Self {
        SimpleRandomWalk::new(DEFAULT_INIT_VALUES_COEFF)
    }
}

impl Process for SimpleRandomWalk {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn lag(&self) -> usize {
        1
    }

    fn parameters_required(&self) -> Vec<ParameterType> {
        vec![ParameterType::unit_coefficient(), ParameterType::std()]
    }

    fn generate_time_series(
        &self, data: &ProcessData, previous_values: Option<ArrayView1<'_, f64>>,
        ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> ProcessResult<(Array1<f64>, ProcessInfo)> {
        validate_process_data(Self::NAME, data, &self.parameters_required())?;
        let (up_probability, walk) = (data.parameters[0], data.parameters[1]);
        if !(0.0..=1.0).contains(&up_probability) {
            return Err(ProcessError::InvalidProbability {
                process: Self::NAME,
                value: up_probability,
            });
        }
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
            if rng.gen::<f64>() < up_probability {
                current += walk;
            } else {
                current -= walk;
            }
            *value = current;
        }
        Ok((values, ProcessInfo::new(Self::NAME, self.lag(), initial_values, data)))
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
    // Verify deterministic directions at the probability extremes.
    //
    // Given
    // -----
    // - history [.., 10.0]; walk 2.0; 4 steps.
    //
    // Expect
    // ------
    // - p = 1 → [12, 14, 16, 18]; p = 0 → [8, 6, 4, 2].
    fn extreme_probabilities_walk_deterministically() {
        let method = RandomMethod::new(LinspaceInfo::new(0.0, 1.0, 10).unwrap());
        let ctx = GenerationContext::new(&method, None);
        let mut rng = StdRng::seed_from_u64(50);
        let history = array![10.0];
        let process = SimpleRandomWalk::default();

        let mut walk = |up_probability: f64| {
            let data = ProcessData::new(4, vec![up_probability, 2.0]);
            process.generate_time_series(&data, Some(history.view()), ctx, &mut rng).unwrap().0
        };

        let up = walk(1.0);
        let down = walk(0.0);

        assert_eq!(up, array![12.0, 14.0, 16.0, 18.0]);
        assert_eq!(down, array![8.0, 6.0, 4.0, 2.0]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a probability outside [0, 1] is rejected.
    fn invalid_probability_is_rejected() {
        let method = RandomMethod::new(LinspaceInfo::new(0.0, 1.0, 10).unwrap());
        let ctx = GenerationContext::new(&method, None);
        let mut rng = StdRng::seed_from_u64(51);

        let err = SimpleRandomWalk::default()
            .generate_time_series(&ProcessData::new(4, vec![1.5, 2.0]), None, ctx, &mut rng)
            .unwrap_err();

        assert!(matches!(err, ProcessError::InvalidProbability { .. }));
    }
}
