//! Parameter-generation strategies.
//!
//! Purpose
//! -------
//! Decide *how* a raw process parameter is produced: a pure random draw
//! bounded by the linspace descriptor, a value derived from aggregated source
//! data, or a value rescaled from a parametrization vector. Processes only
//! declare *what* they need (an ordered list of [`ParameterType`] tags) and
//! receive a strategy explicitly at call time.
//!
//! Key behaviors
//! -------------
//! - [`ParametersGenerationMethod::generate_all_parameters`] maps optional
//!   source data onto one source value per requirement, then dispatches each
//!   tag to `generate_std` / `generate_mean` / `generate_coefficient`.
//! - Coefficients leaving `generate_all_parameters` are clamped to their
//!   `[low, high]` bounds, whatever reflection a strategy applied.
//! - [`ParametersGenerationMethod::mean_value`] yields the level used to seed
//!   fresh process segments.
//! - [`GenerationMethodKind`] names the three built-in strategies and builds
//!   boxed instances for configuration-driven callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - `change_source_data` returns exactly one value per requirement.
//! - Strategies are stateless apart from their configuration; all randomness
//!   comes from the RNG handle passed in.
pub mod aggregation;
pub mod parametrization;
pub mod random;

pub use self::aggregation::AggregationMethod;
pub use self::parametrization::ParametrizationMethod;
pub use self::random::RandomMethod;

use crate::parameters::{
    aggregated::{validate_source_data, weighted_mean},
    errors::ParamResult,
    linspace::LinspaceInfo,
    types::ParameterType,
};
use rand::RngCore;

/// Capability shared by every parameter-generation strategy.
pub trait ParametersGenerationMethod {
    /// Stable identifier of the strategy.
    fn name(&self) -> &'static str;

    /// Range descriptor bounding the strategy's random draws.
    fn linspace(&self) -> &LinspaceInfo;

    /// Map `source_data` to one source value per entry of
    /// `parameters_required`.
    fn change_source_data(
        &self, source_data: &[f64], parameters_required: &[ParameterType],
    ) -> ParamResult<Vec<f64>>;

    /// Produce a standard deviation.
    fn generate_std(&self, source_value: Option<f64>, rng: &mut dyn RngCore) -> f64;

    /// Produce a mean level.
    fn generate_mean(&self, source_value: Option<f64>, rng: &mut dyn RngCore) -> f64;

    /// Produce a coefficient constrained to `[low, high]`.
    fn generate_coefficient(
        &self, low: f64, high: f64, source_value: Option<f64>, rng: &mut dyn RngCore,
    ) -> f64;

    /// Produce one value per requirement, in order.
    ///
    /// # Errors
    /// Propagates source-data validation failures from
    /// [`ParametersGenerationMethod::change_source_data`].
    fn generate_all_parameters(
        &self, parameters_required: &[ParameterType], source_data: Option<&[f64]>,
        rng: &mut dyn RngCore,
    ) -> ParamResult<Vec<f64>> {
        let source_values = match source_data {
            Some(data) => Some(self.change_source_data(data, parameters_required)?),
            None => None,
        };
        let parameters = parameters_required
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let source_value = source_values.as_ref().and_then(|values| values.get(i).copied());
                match *kind {
                    ParameterType::Std => self.generate_std(source_value, rng),
                    ParameterType::Mean => self.generate_mean(source_value, rng),
                    ParameterType::Coefficient { low, high } => {
                        self.generate_coefficient(low, high, source_value, rng).max(low).min(high)
                    }
                }
            })
            .collect();
        Ok(parameters)
    }

    /// Level used to seed fresh segments: the weighted mean of the source data,
    /// or a uniform draw from the linspace range without source data.
    ///
    /// # Errors
    /// Propagates source-data validation failures.
    fn mean_value(&self, source_data: Option<&[f64]>, rng: &mut dyn RngCore) -> ParamResult<f64> {
        match source_data {
            Some(data) => weighted_mean(data, true),
            None => Ok(self.linspace().generate_value(false, rng)),
        }
    }
}

/// Built-in strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMethodKind {
    Random,
    Aggregation,
    Parametrization,
}

impl GenerationMethodKind {
    /// Parse a strategy identifier (`"random_method"`, `"aggregation_method"`,
    /// `"parametrization_method"`, or their short forms).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" | RandomMethod::NAME => Some(GenerationMethodKind::Random),
            "aggregation" | AggregationMethod::NAME => Some(GenerationMethodKind::Aggregation),
            "parametrization" | ParametrizationMethod::NAME => {
                Some(GenerationMethodKind::Parametrization)
            }
            _ => None,
        }
    }

    /// Build the strategy over `linspace` with its default configuration.
    pub fn build(self, linspace: LinspaceInfo) -> Box<dyn ParametersGenerationMethod> {
        match self {
            GenerationMethodKind::Random => Box::new(RandomMethod::new(linspace)),
            GenerationMethodKind::Aggregation => Box::new(AggregationMethod::new(linspace)),
            GenerationMethodKind::Parametrization => {
                Box::new(ParametrizationMethod::new(linspace))
            }
        }
    }
}

/// Shared guard used by strategies that consume source data.
pub(crate) fn checked_source(source_data: &[f64]) -> ParamResult<&[f64]> {
    validate_source_data(source_data)?;
    Ok(source_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    // Purpose
    // -------
    // Verify strategy names round-trip through `GenerationMethodKind`.
    //
    // Expect
    // ------
    // - Long and short identifiers resolve; unknown names return `None`;
    //   built strategies report their canonical name.
    fn generation_method_kind_resolves_names() {
        let linspace = LinspaceInfo::new(0.0, 1.0, 10).unwrap();

        assert_eq!(GenerationMethodKind::from_name("random"), Some(GenerationMethodKind::Random));
        assert_eq!(
            GenerationMethodKind::from_name("aggregation_method"),
            Some(GenerationMethodKind::Aggregation)
        );
        assert_eq!(GenerationMethodKind::from_name("bogus"), None);
        assert_eq!(
            GenerationMethodKind::Parametrization.build(linspace).name(),
            ParametrizationMethod::NAME
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure the default `mean_value` uses the weighted source mean when
    // source data are present and a range-bounded draw otherwise.
    //
    // Given
    // -----
    // - RandomMethod over [0, 100); source = [10.0, 50.0].
    //
    // Expect
    // ------
    // - With source: 70/3. Without: a value in [0, 100).
    fn mean_value_prefers_source_data() {
        let method = RandomMethod::new(LinspaceInfo::new(0.0, 100.0, 100).unwrap());
        let mut rng = StdRng::seed_from_u64(3);

        let with_source = method.mean_value(Some(&[10.0, 50.0]), &mut rng).unwrap();
        let without_source = method.mean_value(None, &mut rng).unwrap();

        assert_relative_eq!(with_source, 70.0 / 3.0, epsilon = 1e-12);
        assert!((0.0..100.0).contains(&without_source));
    }
}
