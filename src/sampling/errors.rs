//! sampling::errors — error types for source-point sampling and clustering.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for sampling and clustering.
pub type SamplingResult<T> = Result<T, SamplingError>;

/// SamplingError — invalid sampling or clustering request.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// At least one point must be sampled.
    ZeroPoints,

    /// Points need at least one coordinate.
    ZeroDimensions,

    /// Cluster count must lie in `[1, points]`.
    InvalidClusterCount { n_clusters: usize, points: usize },

    /// A coordinate is NaN or ±∞.
    NonFinitePoint { row: usize, col: usize, value: f64 },
}

impl std::error::Error for SamplingError {}

impl std::fmt::Display for SamplingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplingError::ZeroPoints => write!(f, "Number of points must be >= 1."),
            SamplingError::ZeroDimensions => write!(f, "Number of dimensions must be >= 1."),
            SamplingError::InvalidClusterCount { n_clusters, points } => {
                write!(f, "Cannot form {n_clusters} clusters from {points} points.")
            }
            SamplingError::NonFinitePoint { row, col, value } => {
                write!(f, "Point coordinate ({row}, {col}) is non-finite: {value}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SamplingError> for PyErr {
    fn from(err: SamplingError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
