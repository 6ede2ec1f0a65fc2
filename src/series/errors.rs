//! series::errors — error types for series generation.
//!
//! - [`SeriesError`] / [`SeriesResult`] for everything under
//!   `crate::series`.
//! - `From` conversions for scheduler and process errors so the generation
//!   loop propagates with `?`.
//! - Conversion into `PyErr` (`ValueError`) with the `python-bindings`
//!   feature.

use crate::{process::errors::ProcessError, scheduler::errors::SchedulerError};
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for series generation.
pub type SeriesResult<T> = Result<T, SeriesError>;

/// SeriesError — invalid generator inputs or a failure further down.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    // ---- Options ----
    /// Series length must be at least one step.
    ZeroSteps,

    // ---- Source points ----
    /// Point rows and cluster labels disagree in count.
    PointsClustersMismatch { points: usize, clusters: usize },

    /// Fewer point rows than series requested.
    NotEnoughPoints { points: usize, required: usize },

    // ---- Wrapped ----
    Scheduler(SchedulerError),
    Process(ProcessError),
}

impl std::error::Error for SeriesError {}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Options ----
            SeriesError::ZeroSteps => write!(f, "Number of steps must be >= 1."),
            // ---- Source points ----
            SeriesError::PointsClustersMismatch { points, clusters } => {
                write!(f, "Got {points} points but {clusters} cluster labels.")
            }
            SeriesError::NotEnoughPoints { points, required } => {
                write!(f, "Got {points} points; at least {required} are required.")
            }
            // ---- Wrapped ----
            SeriesError::Scheduler(err) => write!(f, "{err}"),
            SeriesError::Process(err) => write!(f, "{err}"),
        }
    }
}

impl From<SchedulerError> for SeriesError {
    fn from(err: SchedulerError) -> SeriesError {
        SeriesError::Scheduler(err)
    }
}

impl From<ProcessError> for SeriesError {
    fn from(err: ProcessError) -> SeriesError {
        SeriesError::Process(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<SeriesError> for PyErr {
    fn from(err: SeriesError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
