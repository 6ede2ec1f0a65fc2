//! Aggregated source data — summary statistics of a per-series source vector.
//!
//! Purpose
//! -------
//! Reduce an optional source vector (for example the coordinates of a sampled
//! point) to the handful of statistics the aggregation strategy needs: a
//! weighted mean level and a `fraction` in roughly `[0, 1]` that scales
//! standard deviations and coefficients.
//!
//! Key behaviors
//! -------------
//! - [`validate_source_data`] rejects empty or non-finite vectors.
//! - [`calculate_weights`] builds linearly decreasing weights
//!   `(n, n − 1, …, 1) / (n (n + 1) / 2)` so earlier source values dominate.
//! - [`weighted_mean`] and [`AggregatedData::new`] compute the summary.
//!
//! Invariants & assumptions
//! ------------------------
//! - Weights are positive and sum to one.
//! - `fraction` is `mean / max` (or `mean / sum`); a zero denominator yields
//!   a fraction of `0.0` rather than an infinity.
use crate::parameters::errors::{ParamError, ParamResult};
use ndarray::{Array1, ArrayView1};

/// Reject empty or non-finite source vectors.
///
/// # Errors
/// - [`ParamError::EmptySourceData`] for an empty slice.
/// - [`ParamError::NonFiniteSourceData`] for the first NaN / ±∞ entry.
pub fn validate_source_data(source_data: &[f64]) -> ParamResult<()> {
    if source_data.is_empty() {
        return Err(ParamError::EmptySourceData);
    }
    if let Some((index, &value)) = source_data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ParamError::NonFiniteSourceData { index, value });
    }
    Ok(())
}

/// Linearly decreasing weights of length `num_values` that sum to one.
pub fn calculate_weights(num_values: usize) -> Array1<f64> {
    let progression_sum = (1 + num_values) as f64 * num_values as f64 / 2.0;
    Array1::from_shape_fn(num_values, |i| (num_values - i) as f64 / progression_sum)
}

/// Mean of `source_data`, weighted by [`calculate_weights`] when `weighted`.
///
/// # Errors
/// Propagates [`validate_source_data`] failures.
pub fn weighted_mean(source_data: &[f64], weighted: bool) -> ParamResult<f64> {
    validate_source_data(source_data)?;
    let values = ArrayView1::from(source_data);
    if weighted {
        Ok(values.dot(&calculate_weights(source_data.len())))
    } else {
        Ok(values.sum() / source_data.len() as f64)
    }
}

/// AggregatedData — summary of one source vector.
///
/// Fields
/// ------
/// - `num_values`, `sum_values`, `max_value`, `min_value`: plain summaries.
/// - `mean_value`: weighted (or plain) mean.
/// - `fraction`: `mean / max` when `use_max`, else `mean / sum`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedData {
    pub num_values: usize,
    pub sum_values: f64,
    pub max_value: f64,
    pub min_value: f64,
    pub mean_value: f64,
    pub fraction: f64,
}

impl AggregatedData {
    /// Summarize `source_data`.
    ///
    /// # Errors
    /// Propagates [`validate_source_data`] failures.
    pub fn new(source_data: &[f64], weighted_values: bool, use_max: bool) -> ParamResult<Self> {
        let mean_value = weighted_mean(source_data, weighted_values)?;
        let sum_values: f64 = source_data.iter().sum();
        let max_value = source_data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_value = source_data.iter().copied().fold(f64::INFINITY, f64::min);
        let denominator = if use_max { max_value } else { sum_values };
        let fraction = if denominator == 0.0 { 0.0 } else { mean_value / denominator };
        Ok(AggregatedData {
            num_values: source_data.len(),
            sum_values,
            max_value,
            min_value,
            mean_value,
            fraction,
        })
    }
}
