//! utils — small sampling helpers shared across the crate, plus PyO3 glue.
//!
//! The scalar helpers here wrap `statrs` / `rand` draws so that degenerate
//! spreads (zero width, zero standard deviation) collapse to a constant
//! instead of surfacing a distribution-construction error. Callers that must
//! reject invalid spreads validate them before reaching these helpers.
use rand::{Rng, RngCore, distributions::Distribution};
use statrs::distribution::Normal;

/// Draw one value from `N(mean, std²)`.
///
/// A `std` that is zero, negative, or non-finite degenerates to `mean`.
#[inline]
pub fn sample_normal(mean: f64, std: f64, rng: &mut dyn RngCore) -> f64 {
    if !std.is_finite() || std <= 0.0 {
        return mean;
    }
    match Normal::new(mean, std) {
        Ok(dist) => dist.sample(rng),
        Err(_) => mean,
    }
}

/// Draw one value uniformly from `[low, high)`; `low >= high` returns `low`.
#[inline]
pub fn sample_uniform(low: f64, high: f64, rng: &mut dyn RngCore) -> f64 {
    if low < high { rng.gen_range(low..high) } else { low }
}

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray2;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

/// Extract a C-contiguous 2-D float64 array (points × coordinates) from a
/// Python object, copying through a nested list when needed.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<ndarray::Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }
    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 2-D numpy.ndarray or a sequence of float64 sequences",
        )
    })?;
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, |row| row.len());
    if rows.iter().any(|row| row.len() != n_cols) {
        return Err(pyo3::exceptions::PyValueError::new_err("all rows must have the same length"));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    ndarray::Array2::from_shape_vec((n_rows, n_cols), flat)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    // Purpose
    // -------
    // Ensure a zero standard deviation collapses `sample_normal` to the mean.
    //
    // Given
    // -----
    // - mean = 3.5, std = 0.0.
    //
    // Expect
    // ------
    // - Exactly 3.5 is returned.
    fn sample_normal_with_zero_std_returns_mean() {
        let mut rng = StdRng::seed_from_u64(1);

        let value = sample_normal(3.5, 0.0, &mut rng);

        assert_eq!(value, 3.5);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `sample_uniform` stays inside `[low, high)` and collapses
    // to `low` for an empty range.
    //
    // Given
    // -----
    // - 200 draws from [-1, 2), and one draw from [4, 4).
    //
    // Expect
    // ------
    // - Every draw lies in [-1, 2); the empty range returns 4.0.
    fn sample_uniform_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(2);

        let draws: Vec<f64> = (0..200).map(|_| sample_uniform(-1.0, 2.0, &mut rng)).collect();

        assert!(draws.iter().all(|&v| (-1.0..2.0).contains(&v)));
        assert_eq!(sample_uniform(4.0, 4.0, &mut rng), 4.0);
    }
}
