//! sampling — source points for point-driven generation.
//!
//! Purpose
//! -------
//! Build the per-series source data consumed by
//! [`crate::series::TimeSeriesGenerator::generate_from_points`]: points on
//! the unit sphere moved into the non-negative orthant, and k-means labels
//! grouping them into clusters that share a process order.
//!
//! Key behaviors
//! -------------
//! - [`points`]: [`sample_spherical`], [`move_points`], [`border_values`],
//!   and the combined [`sample_points`] returning [`SampledPoints`].
//! - [`clustering`]: [`cluster_points`] (Lloyd's algorithm).
//! - [`errors`]: [`SamplingError`] / [`SamplingResult`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover unit-norm sampling, the orthant shift, and recovery of
//!   well-separated clusters across seeds.

pub mod clustering;
pub mod errors;
pub mod points;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::clustering::{DEFAULT_MAX_ITER, cluster_points};
pub use self::errors::{SamplingError, SamplingResult};
pub use self::points::{
    DEFAULT_POINT_DIM, SampledPoints, border_values, move_points, sample_points, sample_spherical,
};

pub mod prelude {
    pub use super::{SampledPoints, SamplingError, SamplingResult, cluster_points, sample_points};
}
