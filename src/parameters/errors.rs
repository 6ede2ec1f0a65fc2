//! parameters::errors — error types for parameter ranges and strategies.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the linspace descriptor,
//! the parameter-kind constructors, the aggregated source-data summary, and
//! the parameter-generation strategies.
//!
//! Key behaviors
//! -------------
//! - Define [`ParamError`] / [`ParamResult`] as the canonical error surface
//!   for everything under `crate::parameters`.
//! - Attach human-readable `Display` messages that embed the offending
//!   values so diagnostics are meaningful without extra context.
//! - Convert into `PyErr` (as `ValueError`) when the `python-bindings`
//!   feature is enabled.
//!
//! Conventions
//! -----------
//! - Errors here are configuration violations: they are surfaced to the
//!   caller immediately and never retried.
//! - Indices are 0-based.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for parameter-range and parameter-generation operations.
pub type ParamResult<T> = Result<T, ParamError>;

/// ParamError — invalid ranges, constraints, or source data.
///
/// Variants
/// --------
/// - `InvalidLinspace`
///   Bounds are non-finite, `start >= stop`, or `parts == 0`.
/// - `InvalidLinspaceOption`
///   `center_shift` or `step_coeff` is non-finite, or `step_coeff < 0`.
/// - `InvalidCoefficientRange`
///   Coefficient constraints are non-finite or `low > high`.
/// - `EmptySourceData`
///   Source data were supplied but contain no values.
/// - `NonFiniteSourceData`
///   A source value is NaN or ±∞.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    InvalidLinspace { start: f64, stop: f64, parts: usize, reason: &'static str },
    InvalidLinspaceOption { name: &'static str, value: f64 },
    InvalidCoefficientRange { low: f64, high: f64 },
    EmptySourceData,
    NonFiniteSourceData { index: usize, value: f64 },
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::InvalidLinspace { start, stop, parts, reason } => {
                write!(f, "Invalid linspace [{start}, {stop}] with {parts} parts: {reason}")
            }
            ParamError::InvalidLinspaceOption { name, value } => {
                write!(f, "Linspace option `{name}` must be finite and non-negative; got: {value}")
            }
            ParamError::InvalidCoefficientRange { low, high } => {
                write!(f, "Coefficient range must be finite with low <= high; got: [{low}, {high}]")
            }
            ParamError::EmptySourceData => {
                write!(f, "Source data must contain at least one value.")
            }
            ParamError::NonFiniteSourceData { index, value } => {
                write!(f, "Source data value at index {index} is non-finite: {value}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ParamError> for PyErr {
    fn from(err: ParamError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting of `ParamError` variants and payload embedding.
    //
    // They intentionally DO NOT cover:
    // - The `PyErr` conversion, which requires the Python C API.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidLinspace` reports the bounds and the reason.
    //
    // Given
    // -----
    // - start = 5.0, stop = 1.0, parts = 10.
    //
    // Expect
    // ------
    // - The message contains both bounds and the reason text.
    fn invalid_linspace_display_includes_bounds_and_reason() {
        // Arrange
        let err = ParamError::InvalidLinspace {
            start: 5.0,
            stop: 1.0,
            parts: 10,
            reason: "start must be below stop.",
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('5') && msg.contains('1'), "Got: {msg}");
        assert!(msg.contains("start must be below stop."), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `NonFiniteSourceData` embeds the offending index.
    //
    // Given
    // -----
    // - index = 7, value = NaN.
    //
    // Expect
    // ------
    // - The message contains "7" and "NaN".
    fn non_finite_source_display_includes_index() {
        // Arrange
        let err = ParamError::NonFiniteSourceData { index: 7, value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7') && msg.contains("NaN"), "Got: {msg}");
    }
}
