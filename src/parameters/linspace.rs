//! Linspace descriptor — value bounds and step size for random draws.
//!
//! Purpose
//! -------
//! Describe the numeric range `[start, stop]` that bounds generated values,
//! split into `parts` equal steps. The step size doubles as the natural noise
//! scale of the generator: standard deviations, local jitter, and seasonal
//! padding are all expressed as multiples of `step`.
//!
//! Key behaviors
//! -------------
//! - [`LinspaceInfo::new`] / [`LinspaceInfo::with_options`] validate the
//!   bounds and derive `step = (stop − start) / parts`.
//! - [`LinspaceInfo::generate_values`] draws either normal values centred on
//!   `center_shift · (start + stop) / 2` with spread `step`, or uniform values
//!   in `[start, stop)`.
//! - [`LinspaceInfo::generate_std`] draws a jittered standard deviation around
//!   `step`, optionally scaled by a source value in `[0, 1]`-ish units.
//!
//! Invariants & assumptions
//! ------------------------
//! - `start` and `stop` are finite with `start < stop`; `parts > 0`.
//! - Hence `step > 0`, so every normal draw here is well-defined.
//! - `step_coeff >= 0` and `center_shift` is finite.
//!
//! Conventions
//! -----------
//! - All randomness comes from the caller's RNG handle; this type holds no
//!   random state and is freely `Clone`.
use crate::{
    parameters::errors::{ParamError, ParamResult},
    utils::{sample_normal, sample_uniform},
};
use ndarray::Array1;
use rand::RngCore;

/// Default multiplier applied to the midpoint for normal draws.
pub const DEFAULT_CENTER_SHIFT: f64 = 1.0;
/// Default ratio between the std jitter and `step`.
pub const DEFAULT_STEP_COEFF: f64 = 0.5;
/// Default number of steps the range is split into.
pub const DEFAULT_PARTS: usize = 50;

/// LinspaceInfo — validated range descriptor used to bound random draws.
///
/// Fields
/// ------
/// - `start`, `stop`: `f64`
///   Range bounds, `start < stop`.
/// - `parts`: `usize`
///   Number of equal steps in the range (`> 0`).
/// - `step`: `f64`
///   Derived step size `(stop − start) / parts`.
/// - `center_shift`: `f64`
///   Multiplier on the midpoint used as the mean of normal draws.
/// - `step_coeff`: `f64`
///   Standard deviation of the std jitter, as a fraction of `step`.
/// - `use_k`: `bool`
///   Whether the jitter term is kept when a source value drives the std.
#[derive(Debug, Clone, PartialEq)]
pub struct LinspaceInfo {
    pub start: f64,
    pub stop: f64,
    pub parts: usize,
    pub step: f64,
    pub center_shift: f64,
    pub step_coeff: f64,
    pub use_k: bool,
}

impl LinspaceInfo {
    /// Construct a descriptor with default `center_shift`, `step_coeff`, and
    /// `use_k = true`.
    ///
    /// # Errors
    /// - [`ParamError::InvalidLinspace`] if a bound is non-finite,
    ///   `start >= stop`, or `parts == 0`.
    pub fn new(start: f64, stop: f64, parts: usize) -> ParamResult<Self> {
        Self::with_options(start, stop, parts, DEFAULT_CENTER_SHIFT, DEFAULT_STEP_COEFF, true)
    }

    /// Construct a descriptor with every knob explicit.
    ///
    /// # Errors
    /// - [`ParamError::InvalidLinspace`] for invalid bounds or `parts == 0`.
    /// - [`ParamError::InvalidLinspaceOption`] if `center_shift` is
    ///   non-finite or `step_coeff` is non-finite or negative.
    pub fn with_options(
        start: f64, stop: f64, parts: usize, center_shift: f64, step_coeff: f64, use_k: bool,
    ) -> ParamResult<Self> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(ParamError::InvalidLinspace {
                start,
                stop,
                parts,
                reason: "bounds must be finite.",
            });
        }
        if start >= stop {
            return Err(ParamError::InvalidLinspace {
                start,
                stop,
                parts,
                reason: "start must be strictly below stop.",
            });
        }
        if parts == 0 {
            return Err(ParamError::InvalidLinspace {
                start,
                stop,
                parts,
                reason: "parts must be positive.",
            });
        }
        if !center_shift.is_finite() {
            return Err(ParamError::InvalidLinspaceOption {
                name: "center_shift",
                value: center_shift,
            });
        }
        if !step_coeff.is_finite() || step_coeff < 0.0 {
            return Err(ParamError::InvalidLinspaceOption { name: "step_coeff", value: step_coeff });
        }
        let step = (stop - start) / parts as f64;
        Ok(LinspaceInfo { start, stop, parts, step, center_shift, step_coeff, use_k })
    }

    /// Midpoint of the range scaled by `center_shift`.
    pub fn center(&self) -> f64 {
        self.center_shift * (self.start + self.stop) / 2.0
    }

    /// Draw `num_values` values.
    ///
    /// - `is_normal = true`: `N(center(), step²)`.
    /// - `is_normal = false`: uniform on `[start, stop)`.
    pub fn generate_values(
        &self, num_values: usize, is_normal: bool, rng: &mut dyn RngCore,
    ) -> Array1<f64> {
        Array1::from_shape_fn(num_values, |_| self.generate_value(is_normal, rng))
    }

    /// Draw a single value; see [`LinspaceInfo::generate_values`].
    pub fn generate_value(&self, is_normal: bool, rng: &mut dyn RngCore) -> f64 {
        if is_normal {
            sample_normal(self.center(), self.step, rng)
        } else {
            sample_uniform(self.start, self.stop, rng)
        }
    }

    /// Draw a jittered standard deviation.
    ///
    /// A jitter `k ~ N(0, (step · step_coeff)²)` is drawn and reset to `0`
    /// when `k <= −step`, so the result is always positive. Without a source
    /// value the std is `step + k`; with one it is
    /// `step · (1 + source) + k · use_k`.
    pub fn generate_std(&self, source_value: Option<f64>, rng: &mut dyn RngCore) -> f64 {
        let mut k = sample_normal(0.0, self.step * self.step_coeff, rng);
        if k <= -self.step {
            k = 0.0;
        }
        match source_value {
            None => self.step + k,
            Some(source) => {
                let jitter = if self.use_k { k } else { 0.0 };
                self.step * (1.0 + source) + jitter
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation in `LinspaceInfo::new` / `with_options`.
    // - Range behavior of uniform draws and positivity of `generate_std`.
    //
    // They intentionally DO NOT cover:
    // - Distributional calibration of the normal draws.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a valid range derives the expected step size.
    //
    // Given
    // -----
    // - start = 0.0, stop = 100.0, parts = 50.
    //
    // Expect
    // ------
    // - `step == 2.0` and the defaults are applied.
    fn new_derives_step_from_parts() {
        // Act
        let linspace = LinspaceInfo::new(0.0, 100.0, 50).unwrap();

        // Assert
        assert_eq!(linspace.step, 2.0);
        assert_eq!(linspace.center_shift, DEFAULT_CENTER_SHIFT);
        assert_eq!(linspace.step_coeff, DEFAULT_STEP_COEFF);
        assert!(linspace.use_k);
        assert_eq!(linspace.center(), 50.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure invalid bounds and zero parts are rejected.
    //
    // Given
    // -----
    // - Reversed bounds, a NaN bound, zero parts, and a negative step_coeff.
    //
    // Expect
    // ------
    // - Each call returns the matching `ParamError` variant.
    fn new_rejects_invalid_ranges() {
        assert!(matches!(
            LinspaceInfo::new(10.0, 0.0, 10),
            Err(ParamError::InvalidLinspace { .. })
        ));
        assert!(matches!(
            LinspaceInfo::new(f64::NAN, 1.0, 10),
            Err(ParamError::InvalidLinspace { .. })
        ));
        assert!(matches!(LinspaceInfo::new(0.0, 1.0, 0), Err(ParamError::InvalidLinspace { .. })));
        assert_eq!(
            LinspaceInfo::with_options(0.0, 1.0, 10, 1.0, -0.5, true).unwrap_err(),
            ParamError::InvalidLinspaceOption { name: "step_coeff", value: -0.5 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that uniform draws stay within `[start, stop)`.
    //
    // Given
    // -----
    // - Range [-3, 7) and 500 uniform draws from a seeded RNG.
    //
    // Expect
    // ------
    // - All draws lie in the range and the requested count is returned.
    fn generate_values_uniform_stays_in_range() {
        // Arrange
        let linspace = LinspaceInfo::new(-3.0, 7.0, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        // Act
        let values = linspace.generate_values(500, false, &mut rng);

        // Assert
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|v| (-3.0..7.0).contains(v)));
    }

    #[test]
    // Purpose
    // -------
    // Ensure `generate_std` is strictly positive with and without a source
    // value, since the jitter is reset whenever it would cancel the step.
    //
    // Given
    // -----
    // - A large `step_coeff` so that many raw jitters fall below `-step`.
    //
    // Expect
    // ------
    // - Every std is > 0; source-driven stds are > 0 for non-negative sources.
    fn generate_std_is_strictly_positive() {
        // Arrange
        let linspace = LinspaceInfo::with_options(0.0, 10.0, 10, 1.0, 3.0, true).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        // Act / Assert
        for _ in 0..500 {
            assert!(linspace.generate_std(None, &mut rng) > 0.0);
            assert!(linspace.generate_std(Some(0.4), &mut rng) > 0.0);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that disabling `use_k` makes a source-driven std deterministic.
    //
    // Given
    // -----
    // - step = 1.0, use_k = false, source = 0.5.
    //
    // Expect
    // ------
    // - `generate_std(Some(0.5))` is exactly 1.5.
    fn generate_std_without_jitter_is_deterministic() {
        let linspace = LinspaceInfo::with_options(0.0, 10.0, 10, 1.0, 0.5, false).unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        assert_eq!(linspace.generate_std(Some(0.5), &mut rng), 1.5);
    }
}
