//! Parametrization strategy — parameters rescaled from a parametrization
//! vector.
//!
//! Key behaviors
//! -------------
//! - [`match_parameters_number`] resizes the source vector to the requirement
//!   count: a short vector is padded with running averages of what precedes
//!   each slot; a long vector has its tail folded back modulo the new size.
//! - [`generate_value_in_range`] maps a source value to
//!   `stop · v / 10^(⌊log10|v|⌋ + 1)`, i.e. the value's mantissa in
//!   `[0.1, 1)` scaled by `stop`, reflected to `stop − x` below `start`.
//! - A zero source value has no magnitude and maps to `start`.
//!
//! Conventions
//! -----------
//! - The exponent is floored on purpose. Without the floor,
//!   `v / 10^(log10|v| + 1)` is exactly `±0.1` for every `v`, so every source
//!   value would land on `±stop / 10` and the source data would carry no
//!   information.
use crate::parameters::{
    errors::ParamResult,
    linspace::LinspaceInfo,
    methods::{ParametersGenerationMethod, checked_source},
    types::ParameterType,
};
use rand::RngCore;

/// Resize `source_data` to `new_size` entries.
pub fn match_parameters_number(source_data: &[f64], new_size: usize) -> Vec<f64> {
    let old_size = source_data.len();
    if old_size == new_size || new_size == 0 {
        return source_data[..new_size.min(old_size)].to_vec();
    }
    let mut resized = vec![0.0; new_size];
    let shared = old_size.min(new_size);
    resized[..shared].copy_from_slice(&source_data[..shared]);
    if old_size < new_size {
        for j in old_size.max(1)..new_size {
            resized[j] = resized[..j].iter().sum::<f64>() / j as f64;
        }
    } else {
        for (j, &value) in source_data.iter().enumerate().skip(new_size) {
            resized[(j - new_size) % new_size] += value;
        }
    }
    resized
}

/// Order-of-magnitude bound `10^(⌊log10|v|⌋ + 1)`; `None` for zero or
/// non-finite input.
fn magnitude_border(source_value: f64) -> Option<f64> {
    if source_value == 0.0 || !source_value.is_finite() {
        return None;
    }
    Some(10f64.powf(source_value.abs().log10().floor() + 1.0))
}

/// Rescale `source_value` into `[start, stop]`-ish units.
pub fn generate_value_in_range(source_value: f64, start: f64, stop: f64) -> f64 {
    let Some(border) = magnitude_border(source_value) else {
        return start;
    };
    let value = stop * (source_value / border);
    if value < start { stop - value } else { value }
}

/// ParametrizationMethod — parameters rescaled from a parametrization vector.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametrizationMethod {
    pub linspace: LinspaceInfo,
}

impl ParametrizationMethod {
    pub const NAME: &'static str = "parametrization_method";

    pub fn new(linspace: LinspaceInfo) -> Self {
        ParametrizationMethod { linspace }
    }
}

impl ParametersGenerationMethod for ParametrizationMethod {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn linspace(&self) -> &LinspaceInfo {
        &self.linspace
    }

    fn change_source_data(
        &self, source_data: &[f64], parameters_required: &[ParameterType],
    ) -> ParamResult<Vec<f64>> {
        let source_data = checked_source(source_data)?;
        Ok(match_parameters_number(source_data, parameters_required.len()))
    }

    fn generate_std(&self, source_value: Option<f64>, rng: &mut dyn RngCore) -> f64 {
        let scaled = source_value
            .and_then(|value| magnitude_border(value).map(|border| value / border));
        self.linspace.generate_std(scaled, rng)
    }

    fn generate_mean(&self, source_value: Option<f64>, rng: &mut dyn RngCore) -> f64 {
        match source_value {
            Some(value) => generate_value_in_range(value, self.linspace.start, self.linspace.stop),
            None => self.linspace.generate_value(false, rng),
        }
    }

    fn generate_coefficient(
        &self, low: f64, high: f64, source_value: Option<f64>, rng: &mut dyn RngCore,
    ) -> f64 {
        match source_value {
            Some(value) => generate_value_in_range(value, low, high),
            None => crate::utils::sample_uniform(low, high, rng),
        }
    }
}
