//! Component recurrence — one additive term of an exponential-smoothing model.
//!
//! Purpose
//! -------
//! Compute a single named component (error, long-term level, trend, or
//! seasonal) as a lag-indexed recurrence over an error row, optionally summing
//! in rows computed earlier.
//!
//! Key behaviors
//! -------------
//! - A working buffer of length `lag + N` is seeded with `init_values` in its
//!   first `lag` slots, then filled by
//!   `v[lag + i] = parameter · error[i] + v[i]·[lag > 0] + Σ_k additional[k][i]`.
//! - The first `lag` seed slots are dropped, so the output has exactly `N`
//!   values.
//!
//! Invariants & assumptions
//! ------------------------
//! - `init_values.len() == lag` and every additional row has the error row's
//!   length; both are checked at construction.
//! - With `lag == 0` and no additional rows the output is exactly
//!   `parameter · error`.
use crate::process::errors::{ProcessError, ProcessResult};
use ndarray::{Array1, ArrayView1, s};

/// EtsComponent — borrowed inputs of one component recurrence.
///
/// Fields
/// ------
/// - `lag`: self-feedback distance (0 disables the feedback term).
/// - `init_values`: seed values, length `lag`.
/// - `parameter`: multiplier on the error row.
/// - `error`: error row of length `N`.
/// - `additional`: rows of length `N` summed into every step.
#[derive(Debug, Clone)]
pub struct EtsComponent<'a> {
    pub lag: usize,
    pub init_values: ArrayView1<'a, f64>,
    pub parameter: f64,
    pub error: ArrayView1<'a, f64>,
    pub additional: Vec<ArrayView1<'a, f64>>,
}

impl<'a> EtsComponent<'a> {
    /// Build a component without additional rows.
    ///
    /// # Errors
    /// [`ProcessError::SeedLengthMismatch`] if `init_values.len() != lag`.
    pub fn new(
        lag: usize, init_values: ArrayView1<'a, f64>, parameter: f64, error: ArrayView1<'a, f64>,
    ) -> ProcessResult<Self> {
        if init_values.len() != lag {
            return Err(ProcessError::SeedLengthMismatch {
                expected: lag,
                actual: init_values.len(),
            });
        }
        Ok(EtsComponent { lag, init_values, parameter, error, additional: Vec::new() })
    }

    /// Attach rows that are summed into every step of the recurrence.
    ///
    /// # Errors
    /// [`ProcessError::ComponentLengthMismatch`] if a row's length differs
    /// from the error row's.
    pub fn with_additional(mut self, additional: Vec<ArrayView1<'a, f64>>) -> ProcessResult<Self> {
        let expected = self.error.len();
        if let Some(row) = additional.iter().find(|row| row.len() != expected) {
            return Err(ProcessError::ComponentLengthMismatch { expected, actual: row.len() });
        }
        self.additional = additional;
        Ok(self)
    }

    /// Evaluate the recurrence; the result has the error row's length.
    pub fn values(&self) -> Array1<f64> {
        let lag = self.lag;
        let n = self.error.len();
        let mut buffer = Array1::<f64>::zeros(lag + n);
        buffer.slice_mut(s![..lag]).assign(&self.init_values);
        for i in 0..n {
            let feedback = if lag > 0 { buffer[i] } else { 0.0 };
            let extra: f64 = self.additional.iter().map(|row| row[i]).sum();
            buffer[lag + i] = self.parameter * self.error[i] + feedback + extra;
        }
        buffer.slice_move(s![lag..])
    }
}
