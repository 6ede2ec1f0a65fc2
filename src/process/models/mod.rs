//! models — the concrete process families and their enum registry entry.
//!
//! Purpose
//! -------
//! Collect one file per process family and a closed [`ProcessKind`] enum
//! that dispatches the [`Process`] contract by variant. Dispatch by name is
//! a lookup from the registry key to a variant built once from a
//! [`ProcessConfig`].
//!
//! Key behaviors
//! -------------
//! - [`ProcessKind::from_name`] / `FromStr` resolve registry keys; unknown
//!   names surface as [`ProcessError::UnknownProcess`].
//! - [`ProcessKind::all`] builds every family in [`ALL_PROCESS_NAMES`] order.
//! - `impl Process for ProcessKind` forwards every call to the variant.
//!
//! Invariants & assumptions
//! ------------------------
//! - Names are unique and match each family's `NAME` constant.
//! - Every family returns exactly `data.steps` values and validates its
//!   parameter vector before drawing anything.
//!
//! Testing notes
//! -------------
//! - Each family file carries unit tests for its seeding regimes; the tests
//!   here cover name resolution and the length contract across all families.

pub mod double_exponential_smoothing;
pub mod random_walk;
pub mod simple_exponential_smoothing;
pub mod simple_random_walk;
pub mod triple_exponential_smoothing;
pub mod white_noise;

pub use self::double_exponential_smoothing::DoubleExponentialSmoothing;
pub use self::random_walk::RandomWalk;
pub use self::simple_exponential_smoothing::SimpleExponentialSmoothing;
pub use self::simple_random_walk::SimpleRandomWalk;
pub use self::triple_exponential_smoothing::TripleExponentialSmoothing;
pub use self::white_noise::WhiteNoise;

use crate::{
    parameters::types::ParameterType,
    process::{
        core::{
            context::GenerationContext,
            data::{ProcessData, ProcessInfo},
            options::ProcessConfig,
        },
        errors::{ProcessError, ProcessResult},
        traits::Process,
    },
};
use ndarray::{Array1, ArrayView1};
use rand::RngCore;
use std::str::FromStr;

/// Registry keys of every built-in process, in canonical order.
pub const ALL_PROCESS_NAMES: [&str; 6] = [
    WhiteNoise::NAME,
    RandomWalk::NAME,
    SimpleRandomWalk::NAME,
    SimpleExponentialSmoothing::NAME,
    DoubleExponentialSmoothing::NAME,
    TripleExponentialSmoothing::NAME,
];

/// ProcessKind — closed set of process families.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessKind {
    WhiteNoise(WhiteNoise),
    RandomWalk(RandomWalk),
    SimpleRandomWalk(SimpleRandomWalk),
    SimpleExponentialSmoothing(SimpleExponentialSmoothing),
    DoubleExponentialSmoothing(DoubleExponentialSmoothing),
    TripleExponentialSmoothing(TripleExponentialSmoothing),
}

impl ProcessKind {
    /// Build the family registered under `name`.
    ///
    /// # Errors
    /// [`ProcessError::UnknownProcess`] for names outside
    /// [`ALL_PROCESS_NAMES`].
    pub fn from_name(name: &str, config: &ProcessConfig) -> ProcessResult<Self> {
        let kind = match name {
            WhiteNoise::NAME => ProcessKind::WhiteNoise(WhiteNoise::new(config.noise)),
            RandomWalk::NAME => ProcessKind::RandomWalk(RandomWalk::new(config.init_values_coeff)),
            SimpleRandomWalk::NAME => {
                ProcessKind::SimpleRandomWalk(SimpleRandomWalk::new(config.init_values_coeff))
            }
            SimpleExponentialSmoothing::NAME => {
                ProcessKind::SimpleExponentialSmoothing(SimpleExponentialSmoothing::new(config))
            }
            DoubleExponentialSmoothing::NAME => {
                ProcessKind::DoubleExponentialSmoothing(DoubleExponentialSmoothing::new(config))
            }
            TripleExponentialSmoothing::NAME => {
                ProcessKind::TripleExponentialSmoothing(TripleExponentialSmoothing::new(config))
            }
            _ => return Err(ProcessError::UnknownProcess { name: name.to_string() }),
        };
        Ok(kind)
    }

    /// Every built-in family, in [`ALL_PROCESS_NAMES`] order.
    pub fn all(config: &ProcessConfig) -> Vec<Self> {
        ALL_PROCESS_NAMES
            .iter()
            .filter_map(|name| ProcessKind::from_name(name, config).ok())
            .collect()
    }

    fn as_process(&self) -> &dyn Process {
        match self {
            ProcessKind::WhiteNoise(p) => p,
            ProcessKind::RandomWalk(p) => p,
            ProcessKind::SimpleRandomWalk(p) => p,
            ProcessKind::SimpleExponentialSmoothing(p) => p,
            ProcessKind::DoubleExponentialSmoothing(p) => p,
            ProcessKind::TripleExponentialSmoothing(p) => p,
        }
    }
}

impl FromStr for ProcessKind {
    type Err = ProcessError;

    /// Resolve a registry key with the default [`ProcessConfig`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProcessKind::from_name(s, &ProcessConfig::default())
    }
}

impl Process for ProcessKind {
    fn name(&self) -> &'static str {
        self.as_process().name()
    }

    fn lag(&self) -> usize {
        self.as_process().lag()
    }

    fn parameters_required(&self) -> Vec<ParameterType> {
        self.as_process().parameters_required()
    }

    fn generate_parameters(
        &self, ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> ProcessResult<Vec<f64>> {
        self.as_process().generate_parameters(ctx, rng)
    }

    fn generate_time_series(
        &self, data: &ProcessData, previous_values: Option<ArrayView1<'_, f64>>,
        ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> ProcessResult<(Array1<f64>, ProcessInfo)> {
        self.as_process().generate_time_series(data, previous_values, ctx, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{
        linspace::LinspaceInfo,
        methods::{AggregationMethod, ParametrizationMethod, RandomMethod},
        methods::ParametersGenerationMethod,
    };
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    // Purpose
    // -------
    // Verify name resolution for every registry key and an unknown name.
    //
    // Expect
    // ------
    // - Each name resolves to a variant reporting the same name.
    // - "arima" → `UnknownProcess`.
    fn from_name_resolves_every_registry_key() {
        let config = ProcessConfig::default();

        for name in ALL_PROCESS_NAMES {
            assert_eq!(ProcessKind::from_name(name, &config).unwrap().name(), name);
        }
        assert_eq!(ProcessKind::all(&config).len(), ALL_PROCESS_NAMES.len());
        assert_eq!(
            "arima".parse::<ProcessKind>().unwrap_err(),
            ProcessError::UnknownProcess { name: "arima".to_string() }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify the length contract for every family, strategy, and history
    // shape.
    //
    // Given
    // -----
    // - All six families; random, aggregation, and parametrization
    //   strategies; source data present or absent; histories none / short /
    //   long; step counts 1, 7, and 40.
    //
    // Expect
    // ------
    // - Every segment has exactly `steps` finite values.
    fn every_family_returns_exactly_steps_values() {
        // Arrange
        let linspace = LinspaceInfo::new(0.0, 100.0, 100).unwrap();
        let methods: Vec<Box<dyn ParametersGenerationMethod>> = vec![
            Box::new(RandomMethod::new(linspace.clone())),
            Box::new(AggregationMethod::new(linspace.clone())),
            Box::new(ParametrizationMethod::new(linspace)),
        ];
        let source = [0.3, 0.6, 0.9];
        let short_history = array![10.0, 11.0];
        let long_history = Array1::linspace(0.0, 50.0, 40);
        let mut rng = StdRng::seed_from_u64(90);

        for process in ProcessKind::all(&ProcessConfig::default()) {
            for method in &methods {
                for source_data in [None, Some(&source[..])] {
                    let ctx = GenerationContext::new(method.as_ref(), source_data);
                    for history in [None, Some(short_history.view()), Some(long_history.view())] {
                        for steps in [1, 7, 40] {
                            // Act
                            let params = process.generate_parameters(ctx, &mut rng).unwrap();
                            let data = ProcessData::new(steps, params);
                            let (values, info) = process
                                .generate_time_series(&data, history, ctx, &mut rng)
                                .unwrap();

                            // Assert
                            assert_eq!(values.len(), steps, "{}", process.name());
                            assert!(values.iter().all(|v| v.is_finite()), "{}", process.name());
                            assert_eq!(info.steps, steps);
                        }
                    }
                }
            }
        }
    }
}
