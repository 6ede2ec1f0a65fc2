//! Random strategy — parameters drawn purely from the linspace range.
//!
//! Source data are accepted but ignored: every requirement receives a source
//! value of `0.0` and the draws never consult it.
use crate::{
    parameters::{
        errors::ParamResult, linspace::LinspaceInfo, methods::ParametersGenerationMethod,
        types::ParameterType,
    },
    utils::sample_uniform,
};
use rand::RngCore;

/// RandomMethod — range-bounded random parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomMethod {
    pub linspace: LinspaceInfo,
}

impl RandomMethod {
    pub const NAME: &'static str = "random_method";

    pub fn new(linspace: LinspaceInfo) -> Self {
        RandomMethod { linspace }
    }
}

impl ParametersGenerationMethod for RandomMethod {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn linspace(&self) -> &LinspaceInfo {
        &self.linspace
    }

    fn change_source_data(
        &self, _source_data: &[f64], parameters_required: &[ParameterType],
    ) -> ParamResult<Vec<f64>> {
        Ok(vec![0.0; parameters_required.len()])
    }

    fn generate_std(&self, _source_value: Option<f64>, rng: &mut dyn RngCore) -> f64 {
        self.linspace.generate_std(None, rng)
    }

    fn generate_mean(&self, _source_value: Option<f64>, rng: &mut dyn RngCore) -> f64 {
        self.linspace.generate_value(false, rng)
    }

    fn generate_coefficient(
        &self, low: f64, high: f64, _source_value: Option<f64>, rng: &mut dyn RngCore,
    ) -> f64 {
        sample_uniform(low, high, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    // Purpose
    // -------
    // Verify that every generated parameter respects its kind's bounds and
    // that source data do not change the shape of the output.
    //
    // Given
    // -----
    // - Linspace [0, 10), requirements [Mean, Std, Coefficient(0, 0.3)].
    //
    // Expect
    // ------
    // - Three values; mean in [0, 10), std > 0, coefficient in [0, 0.3).
    fn random_method_respects_parameter_bounds() {
        // Arrange
        let method = RandomMethod::new(LinspaceInfo::new(0.0, 10.0, 10).unwrap());
        let required = [
            ParameterType::mean(),
            ParameterType::std(),
            ParameterType::coefficient(0.0, 0.3).unwrap(),
        ];
        let mut rng = StdRng::seed_from_u64(21);

        for source in [None, Some(&[1.0, 2.0][..])] {
            // Act
            let params = method.generate_all_parameters(&required, source, &mut rng).unwrap();

            // Assert
            assert_eq!(params.len(), 3);
            assert!((0.0..10.0).contains(&params[0]));
            assert!(params[1] > 0.0);
            assert!((0.0..0.3).contains(&params[2]));
        }
    }
}
