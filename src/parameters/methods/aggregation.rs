//! Aggregation strategy — parameters derived from summary statistics of the
//! source vector.
//!
//! Key behaviors
//! -------------
//! - Source data collapse to an [`AggregatedData`]; std and coefficient
//!   requirements receive its `fraction`, mean requirements its mean level.
//! - `std = linspace.generate_std(Some(fraction))`.
//! - `coefficient = high · fraction`, reflected to `high − c` when it falls
//!   below `low`.
//! - Without source data every source value is `0.0`, so means are `0.0`,
//!   stds fall back to the unscaled step, and coefficients reflect to `high`.
use crate::parameters::{
    aggregated::AggregatedData, errors::ParamResult, linspace::LinspaceInfo,
    methods::ParametersGenerationMethod, types::ParameterType,
};
use rand::RngCore;

/// AggregationMethod — source-driven parameters.
///
/// Fields
/// ------
/// - `weighted_values`: use linearly decreasing weights for the mean.
/// - `use_max`: fraction denominator is the max (else the sum).
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationMethod {
    pub linspace: LinspaceInfo,
    pub weighted_values: bool,
    pub use_max: bool,
}

impl AggregationMethod {
    pub const NAME: &'static str = "aggregation_method";

    /// Weighted mean with a sum-denominated fraction.
    pub fn new(linspace: LinspaceInfo) -> Self {
        Self::with_options(linspace, true, false)
    }

    pub fn with_options(linspace: LinspaceInfo, weighted_values: bool, use_max: bool) -> Self {
        AggregationMethod { linspace, weighted_values, use_max }
    }
}

impl ParametersGenerationMethod for AggregationMethod {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn linspace(&self) -> &LinspaceInfo {
        &self.linspace
    }

    fn change_source_data(
        &self, source_data: &[f64], parameters_required: &[ParameterType],
    ) -> ParamResult<Vec<f64>> {
        let aggregated = AggregatedData::new(source_data, self.weighted_values, self.use_max)?;
        Ok(parameters_required
            .iter()
            .map(|kind| {
                if kind.uses_fraction() { aggregated.fraction } else { aggregated.mean_value }
            })
            .collect())
    }

    fn generate_std(&self, source_value: Option<f64>, rng: &mut dyn RngCore) -> f64 {
        self.linspace.generate_std(source_value, rng)
    }

    fn generate_mean(&self, source_value: Option<f64>, _rng: &mut dyn RngCore) -> f64 {
        source_value.unwrap_or(0.0)
    }

    fn generate_coefficient(
        &self, low: f64, high: f64, source_value: Option<f64>, _rng: &mut dyn RngCore,
    ) -> f64 {
        let coefficient = high * source_value.unwrap_or(0.0);
        if coefficient < low { high - coefficient } else { coefficient }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    // Purpose
    // -------
    // Verify the fraction/mean split of `change_source_data` and the
    // resulting deterministic mean and coefficient values.
    //
    // Given
    // -----
    // - source = [10.0, 50.0], weighted, sum denominator:
    //   mean = 70/3, fraction = (70/3) / 60 = 7/18.
    // - requirements [Mean, Coefficient(0, 0.3)].
    //
    // Expect
    // ------
    // - mean parameter = 70/3; coefficient = 0.3 · 7/18.
    fn aggregation_method_maps_source_to_parameters() {
        // Arrange
        let method = AggregationMethod::new(LinspaceInfo::new(0.0, 100.0, 50).unwrap());
        let required = [ParameterType::mean(), ParameterType::coefficient(0.0, 0.3).unwrap()];
        let mut rng = StdRng::seed_from_u64(4);

        // Act
        let params =
            method.generate_all_parameters(&required, Some(&[10.0, 50.0]), &mut rng).unwrap();

        // Assert
        assert_relative_eq!(params[0], 70.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(params[1], 0.3 * 7.0 / 18.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a coefficient below its lower bound is reflected from `high`.
    //
    // Given
    // -----
    // - low = 0.1, high = 0.3, fraction = 0.2 → raw 0.06 < 0.1.
    //
    // Expect
    // ------
    // - 0.3 − 0.06 = 0.24.
    fn aggregation_coefficient_reflects_below_low() {
        let method = AggregationMethod::new(LinspaceInfo::new(0.0, 1.0, 10).unwrap());
        let mut rng = StdRng::seed_from_u64(4);

        let value = method.generate_coefficient(0.1, 0.3, Some(0.2), &mut rng);

        assert_relative_eq!(value, 0.24, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure empty source data surface as an error instead of a NaN fraction.
    fn aggregation_rejects_empty_source() {
        let method = AggregationMethod::new(LinspaceInfo::new(0.0, 1.0, 10).unwrap());
        let mut rng = StdRng::seed_from_u64(4);

        let result = method.generate_all_parameters(&[ParameterType::std()], Some(&[]), &mut rng);

        assert!(result.is_err());
    }
}
