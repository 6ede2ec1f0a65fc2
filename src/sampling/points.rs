//! Source-point sampling on the unit sphere.
//!
//! Purpose
//! -------
//! Produce point clouds whose coordinates serve as per-series source data.
//! Points are drawn uniformly on the unit sphere, shifted into the
//! non-negative orthant, and summarised by their border values so callers
//! can build a matching linspace range.
//!
//! Key behaviors
//! -------------
//! - [`sample_spherical`]: normalised standard-normal vectors, one row per
//!   point.
//! - [`move_points`]: shift every coordinate by `|min|` when the minimum is
//!   negative, so the smallest coordinate lands on zero.
//! - [`border_values`]: `(min, max)` over all coordinates.
//! - [`sample_points`]: the three steps above in one call.
//!
//! Conventions
//! -----------
//! - Point matrices are `num_points × ndim`, row-major.
use crate::{
    parameters::{errors::ParamResult, linspace::LinspaceInfo},
    sampling::errors::{SamplingError, SamplingResult},
    utils::sample_normal,
};
use ndarray::{Array2, ArrayView2};
use rand::RngCore;

/// Dimension of the point clouds built by [`sample_points`].
pub const DEFAULT_POINT_DIM: usize = 3;

/// SampledPoints — shifted sphere points and their coordinate range.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledPoints {
    pub points: Array2<f64>,
    pub border_values: (f64, f64),
    pub shift: f64,
}

impl SampledPoints {
    /// Linspace spanning the coordinate range in `parts` steps.
    ///
    /// # Errors
    /// [`crate::parameters::ParamError::InvalidLinspace`] when the range is
    /// degenerate (e.g. a single point) or `parts == 0`.
    pub fn linspace(&self, parts: usize) -> ParamResult<LinspaceInfo> {
        LinspaceInfo::new(self.border_values.0, self.border_values.1, parts)
    }
}

/// `num_points` points drawn uniformly on the unit sphere in `ndim`
/// dimensions.
///
/// # Errors
/// [`SamplingError::ZeroPoints`] / [`SamplingError::ZeroDimensions`].
pub fn sample_spherical(
    num_points: usize, ndim: usize, rng: &mut dyn RngCore,
) -> SamplingResult<Array2<f64>> {
    if num_points == 0 {
        return Err(SamplingError::ZeroPoints);
    }
    if ndim == 0 {
        return Err(SamplingError::ZeroDimensions);
    }
    let mut points = Array2::zeros((num_points, ndim));
    for mut row in points.rows_mut() {
        // A zero vector has no direction; redraw.
        loop {
            row.mapv_inplace(|_| sample_normal(0.0, 1.0, rng));
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row /= norm;
                break;
            }
        }
    }
    Ok(points)
}

/// Shift `points` so that no coordinate is negative; returns the shift
/// applied (zero when nothing was negative).
pub fn move_points(points: &mut Array2<f64>) -> f64 {
    let (min, _) = border_values(points.view());
    if min < 0.0 {
        let shift = min.abs();
        *points += shift;
        shift
    } else {
        0.0
    }
}

/// `(min, max)` over every coordinate; `(+∞, −∞)` for an empty matrix.
pub fn border_values(points: ArrayView2<'_, f64>) -> (f64, f64) {
    points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// Sample `num_points` three-dimensional points on the sphere and move them
/// into the non-negative orthant.
///
/// # Errors
/// [`SamplingError::ZeroPoints`] when `num_points == 0`.
pub fn sample_points(num_points: usize, rng: &mut dyn RngCore) -> SamplingResult<SampledPoints> {
    let mut points = sample_spherical(num_points, DEFAULT_POINT_DIM, rng)?;
    let shift = move_points(&mut points);
    let border_values = border_values(points.view());
    Ok(SampledPoints { points, border_values, shift })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    // Purpose
    // -------
    // Verify sphere samples have unit norm and the requested shape.
    fn spherical_points_have_unit_norm() {
        let mut rng = StdRng::seed_from_u64(500);

        let points = sample_spherical(20, 4, &mut rng).unwrap();

        assert_eq!(points.dim(), (20, 4));
        for row in points.rows() {
            assert_relative_eq!(row.dot(&row), 1.0, epsilon = 1e-12);
        }
        assert_eq!(sample_spherical(0, 3, &mut rng).unwrap_err(), SamplingError::ZeroPoints);
    }

    #[test]
    // Purpose
    // -------
    // Verify the shift moves the minimum to zero and leaves non-negative
    // clouds untouched.
    //
    // Given
    // -----
    // - [[−0.5, 1.0], [0.25, −0.2]] → shift 0.5.
    //
    // Expect
    // ------
    // - [[0.0, 1.5], [0.75, 0.3]]; border values (0.0, 1.5).
    fn move_points_shifts_minimum_to_zero() {
        let mut points = array![[-0.5, 1.0], [0.25, -0.2]];

        let shift = move_points(&mut points);

        assert_eq!(shift, 0.5);
        assert_eq!(points, array![[0.0, 1.5], [0.75, 0.3]]);
        assert_eq!(border_values(points.view()), (0.0, 1.5));
        assert_eq!(move_points(&mut points), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify `sample_points` returns non-negative 3-D points whose border
    // values build a valid linspace.
    fn sample_points_are_non_negative() {
        let mut rng = StdRng::seed_from_u64(501);

        let sampled = sample_points(10, &mut rng).unwrap();

        assert_eq!(sampled.points.dim(), (10, DEFAULT_POINT_DIM));
        assert!(sampled.points.iter().all(|&v| v >= 0.0));
        assert_eq!(sampled.border_values.0, 0.0);
        assert!(sampled.linspace(100).is_ok());
    }
}
