//! process::errors — error types for components, builders, processes, and
//! the process registry.
//!
//! Purpose
//! -------
//! Give every segment-generation path a single error surface. Failures here
//! are configuration violations (unknown names, wrong parameter counts,
//! invalid distribution parameters); insufficient continuation history is
//! never an error and is handled by each process's fallback instead.
//!
//! Key behaviors
//! -------------
//! - [`ProcessError`] / [`ProcessResult`] for everything under
//!   `crate::process`.
//! - `From<ParamError>` so strategy failures propagate with `?`.
//! - `From<StatsError>` for the `statrs` constructor errors of the
//!   distributions used to draw error rows.
//! - Conversion into `PyErr` (`ValueError`) with the `python-bindings`
//!   feature.

use crate::parameters::errors::ParamError;
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};
use statrs::StatsError;

/// Result alias for process-level operations.
pub type ProcessResult<T> = Result<T, ProcessError>;

/// ProcessError — invalid process configuration or inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessError {
    // ---- Registry ----
    /// No process is registered under `name`.
    UnknownProcess { name: String },

    /// The registry holds no processes to choose from.
    EmptyRegistry,

    // ---- Parameters ----
    /// Parameter vector length differs from the process's requirements.
    ParameterCountMismatch { process: &'static str, expected: usize, actual: usize },

    /// A parameter is NaN or ±∞.
    NonFiniteParameter { process: &'static str, index: usize, value: f64 },

    /// A standard deviation parameter is negative.
    NegativeStd { process: &'static str, value: f64 },

    /// A probability parameter lies outside `[0, 1]`.
    InvalidProbability { process: &'static str, value: f64 },

    // ---- Segments / components ----
    /// A segment of zero steps was requested.
    EmptySegment { process: &'static str },

    /// Error-distribution parameters are invalid.
    InvalidDistribution { reason: String },

    /// A component row index does not exist in the builder.
    UnknownComponent { index: usize, rows: usize },

    /// Seed values do not match the component lag.
    SeedLengthMismatch { expected: usize, actual: usize },

    /// An additional row does not match the error row length.
    ComponentLengthMismatch { expected: usize, actual: usize },

    /// Seasonal components need a lag of at least one.
    InvalidSeasonalLag { lag: usize },

    /// Coefficient range in a process configuration is invalid.
    InvalidConfig { name: &'static str, reason: &'static str },

    // ---- Wrapped ----
    /// Failure from the parameter-generation layer.
    Param(ParamError),
}

impl std::error::Error for ProcessError {}

impl std::fmt::Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Registry ----
            ProcessError::UnknownProcess { name } => {
                write!(f, "No process registered under name `{name}`.")
            }
            ProcessError::EmptyRegistry => {
                write!(f, "Process registry is empty.")
            }
            // ---- Parameters ----
            ProcessError::ParameterCountMismatch { process, expected, actual } => {
                write!(f, "Process `{process}` expects {expected} parameters, got {actual}")
            }
            ProcessError::NonFiniteParameter { process, index, value } => {
                write!(f, "Process `{process}` parameter at index {index} is non-finite: {value}")
            }
            ProcessError::NegativeStd { process, value } => {
                write!(f, "Process `{process}` std must be non-negative; got: {value}")
            }
            ProcessError::InvalidProbability { process, value } => {
                write!(f, "Process `{process}` probability must lie in [0, 1]; got: {value}")
            }
            // ---- Segments / components ----
            ProcessError::EmptySegment { process } => {
                write!(f, "Process `{process}` cannot generate a segment of zero steps.")
            }
            ProcessError::InvalidDistribution { reason } => {
                write!(f, "Invalid error distribution: {reason}")
            }
            ProcessError::UnknownComponent { index, rows } => {
                write!(f, "Component row {index} does not exist; builder has {rows} rows.")
            }
            ProcessError::SeedLengthMismatch { expected, actual } => {
                write!(f, "Component seed length mismatch: expected {expected}, got {actual}")
            }
            ProcessError::ComponentLengthMismatch { expected, actual } => {
                write!(f, "Component row length mismatch: expected {expected}, got {actual}")
            }
            ProcessError::InvalidSeasonalLag { lag } => {
                write!(f, "Seasonal lag must be >= 1; got: {lag}")
            }
            ProcessError::InvalidConfig { name, reason } => {
                write!(f, "Invalid process configuration `{name}`: {reason}")
            }
            // ---- Wrapped ----
            ProcessError::Param(err) => write!(f, "{err}"),
        }
    }
}

impl From<ParamError> for ProcessError {
    fn from(err: ParamError) -> ProcessError {
        ProcessError::Param(err)
    }
}

impl From<StatsError> for ProcessError {
    fn from(err: StatsError) -> ProcessError {
        ProcessError::InvalidDistribution { reason: err.to_string() }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ProcessError> for PyErr {
    fn from(err: ProcessError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that parameter errors wrap transparently and that messages
    // carry the offending values.
    //
    // Expect
    // ------
    // - `From<ParamError>` yields `Param(..)` with the inner message.
    // - `ParameterCountMismatch` mentions both counts.
    fn process_error_wraps_and_formats() {
        let wrapped: ProcessError = ParamError::EmptySourceData.into();
        assert_eq!(wrapped, ProcessError::Param(ParamError::EmptySourceData));
        assert_eq!(wrapped.to_string(), ParamError::EmptySourceData.to_string());

        let msg = ProcessError::ParameterCountMismatch {
            process: "random_walk",
            expected: 1,
            actual: 3,
        }
        .to_string();
        assert!(msg.contains("random_walk") && msg.contains('1') && msg.contains('3'));
    }

    #[test]
    // Purpose
    // -------
    // Ensure `statrs` constructor failures (`StatsError`) map to
    // `InvalidDistribution` for every family used by error rows.
    fn statrs_errors_map_to_invalid_distribution() {
        use statrs::distribution::{Normal, Triangular, Uniform};

        let errors: [ProcessError; 3] = [
            Normal::new(0.0, -1.0).unwrap_err().into(),
            Uniform::new(2.0, 1.0).unwrap_err().into(),
            Triangular::new(0.0, 1.0, 5.0).unwrap_err().into(),
        ];

        for err in errors {
            assert!(matches!(err, ProcessError::InvalidDistribution { .. }));
        }
    }
}
