//! Error-row distributions.
//!
//! [`ErrorDistribution`] names the three families a builder can draw its
//! error row from. Parameters are validated through the `statrs`
//! constructors; a zero-width uniform/triangular or a zero std collapses to a
//! constant row instead of failing.
use crate::process::errors::{ProcessError, ProcessResult};
use ndarray::Array1;
use rand::{RngCore, distributions::Distribution};
use statrs::distribution::{Normal, Triangular, Uniform};

/// Distribution of the error row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorDistribution {
    Normal { mean: f64, std: f64 },
    Uniform { left: f64, right: f64 },
    Triangular { left: f64, mode: f64, right: f64 },
}

impl Default for ErrorDistribution {
    fn default() -> Self {
        ErrorDistribution::standard_normal()
    }
}

impl ErrorDistribution {
    pub const fn standard_normal() -> Self {
        ErrorDistribution::Normal { mean: 0.0, std: 1.0 }
    }

    /// Draw `n` values.
    ///
    /// # Errors
    /// [`ProcessError::InvalidDistribution`] for non-finite parameters, a
    /// negative std, reversed bounds, or a mode outside `[left, right]`.
    pub fn sample_n(&self, n: usize, rng: &mut dyn RngCore) -> ProcessResult<Array1<f64>> {
        match *self {
            ErrorDistribution::Normal { mean, std } => {
                if std == 0.0 && mean.is_finite() {
                    return Ok(Array1::from_elem(n, mean));
                }
                let dist = Normal::new(mean, std)?;
                Ok(Array1::from_shape_fn(n, |_| dist.sample(rng)))
            }
            ErrorDistribution::Uniform { left, right } => {
                if left == right && left.is_finite() {
                    return Ok(Array1::from_elem(n, left));
                }
                let dist = Uniform::new(left, right)?;
                Ok(Array1::from_shape_fn(n, |_| dist.sample(rng)))
            }
            ErrorDistribution::Triangular { left, mode, right } => {
                if left == right && mode == left && left.is_finite() {
                    return Ok(Array1::from_elem(n, left));
                }
                if !(left..=right).contains(&mode) {
                    return Err(ProcessError::InvalidDistribution {
                        reason: format!("triangular mode {mode} outside [{left}, {right}]"),
                    });
                }
                let dist = Triangular::new(left, right, mode)?;
                Ok(Array1::from_shape_fn(n, |_| dist.sample(rng)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    // Purpose
    // -------
    // Verify range behavior of uniform and triangular draws.
    //
    // Given
    // -----
    // - Uniform [−1, 1] and Triangular(0, 0.5, 2), 300 draws each.
    //
    // Expect
    // ------
    // - All draws lie within their supports.
    fn bounded_distributions_stay_in_support() {
        let mut rng = StdRng::seed_from_u64(9);

        let uniform =
            ErrorDistribution::Uniform { left: -1.0, right: 1.0 }.sample_n(300, &mut rng).unwrap();
        let triangular = ErrorDistribution::Triangular { left: 0.0, mode: 0.5, right: 2.0 }
            .sample_n(300, &mut rng)
            .unwrap();

        assert!(uniform.iter().all(|v| (-1.0..=1.0).contains(v)));
        assert!(triangular.iter().all(|v| (0.0..=2.0).contains(v)));
    }

    #[test]
    // Purpose
    // -------
    // Ensure degenerate widths collapse to constants and invalid parameters
    // surface as errors.
    //
    // Expect
    // ------
    // - Normal std 0 → constant mean; uniform [3, 3] → constant 3.
    // - Negative std and reversed uniform bounds → `InvalidDistribution`.
    fn degenerate_and_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(10);

        let constant =
            ErrorDistribution::Normal { mean: 2.0, std: 0.0 }.sample_n(4, &mut rng).unwrap();
        assert!(constant.iter().all(|&v| v == 2.0));
        let flat =
            ErrorDistribution::Uniform { left: 3.0, right: 3.0 }.sample_n(2, &mut rng).unwrap();
        assert!(flat.iter().all(|&v| v == 3.0));

        assert!(matches!(
            ErrorDistribution::Normal { mean: 0.0, std: -1.0 }.sample_n(3, &mut rng),
            Err(ProcessError::InvalidDistribution { .. })
        ));
        assert!(matches!(
            ErrorDistribution::Uniform { left: 1.0, right: 0.0 }.sample_n(3, &mut rng),
            Err(ProcessError::InvalidDistribution { .. })
        ));
        assert!(matches!(
            ErrorDistribution::Triangular { left: 0.0, mode: 5.0, right: 1.0 }
                .sample_n(3, &mut rng),
            Err(ProcessError::InvalidDistribution { .. })
        ));
    }
}
