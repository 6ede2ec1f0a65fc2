//! scheduler::errors — error types for process orders, schedules, and
//! per-cluster scheduler storage.
//!
//! Key behaviors
//! -------------
//! - [`SchedulerError`] / [`SchedulerResult`] for everything under
//!   `crate::scheduler`.
//! - `From<ProcessError>` so registry lookups and parameter draws propagate
//!   with `?`.
//! - Conversion into `PyErr` (`ValueError`) with the `python-bindings`
//!   feature.

use crate::process::errors::ProcessError;
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for scheduler operations.
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// SchedulerError — invalid scheduler configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerError {
    // ---- Process order ----
    /// A series of zero steps was requested.
    ZeroSteps,

    /// A caller-provided process order has no entries.
    EmptyProcessOrder,

    /// A process-order entry has zero steps.
    NonPositiveOrderSteps { index: usize },

    /// Process-order steps do not add up to the series length.
    OrderSumMismatch { expected: usize, actual: usize },

    // ---- Cluster storage ----
    /// No scheduler exists for `cluster`.
    UnknownCluster { cluster: usize },

    /// A point index is outside the cluster label vector.
    PointOutOfRange { index: usize, len: usize },

    // ---- Wrapped ----
    /// Failure from the process layer.
    Process(ProcessError),
}

impl std::error::Error for SchedulerError {}

impl std::fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Process order ----
            SchedulerError::ZeroSteps => {
                write!(f, "Number of steps must be >= 1.")
            }
            SchedulerError::EmptyProcessOrder => {
                write!(f, "Process order must contain at least one entry.")
            }
            SchedulerError::NonPositiveOrderSteps { index } => {
                write!(f, "Process order entry {index} has zero steps.")
            }
            SchedulerError::OrderSumMismatch { expected, actual } => {
                write!(f, "Process order steps sum to {actual}; expected {expected}")
            }
            // ---- Cluster storage ----
            SchedulerError::UnknownCluster { cluster } => {
                write!(f, "No scheduler for cluster {cluster}.")
            }
            SchedulerError::PointOutOfRange { index, len } => {
                write!(f, "Point index {index} out of range for {len} cluster labels.")
            }
            // ---- Wrapped ----
            SchedulerError::Process(err) => write!(f, "{err}"),
        }
    }
}

impl From<ProcessError> for SchedulerError {
    fn from(err: ProcessError) -> SchedulerError {
        SchedulerError::Process(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<SchedulerError> for PyErr {
    fn from(err: SchedulerError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
