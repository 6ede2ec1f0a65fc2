//! Process builder — accumulates additive components into segment values.
//!
//! Purpose
//! -------
//! Own the component rows of one segment. Row 0 is always the error row;
//! every named component (long-term level, trend, seasonal) appends a row and
//! returns its index so that later components can read it as a dependency.
//!
//! Key behaviors
//! -------------
//! - [`EtsProcessBuilder::new`] draws a standard-normal error row;
//!   [`EtsProcessBuilder::with_error`] draws it from any
//!   [`ErrorDistribution`].
//! - [`EtsProcessBuilder::set_error`] redraws row 0 in place from a chosen
//!   [`ErrorDistribution`].
//! - `set_trend`, `set_long_term`, and `set_seasonal` evaluate an
//!   [`EtsComponent`] over the error row and append the result.
//! - [`EtsProcessBuilder::sum_components`] consumes the builder and returns
//!   the column-wise sum.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every row has length `num_steps`.
//! - A dependency row must already exist when a component references it, so
//!   the trend is registered before the long-term level that consumes it.
//! - The builder lives for exactly one segment.
use crate::process::{
    core::{component::EtsComponent, sampling::ErrorDistribution},
    errors::{ProcessError, ProcessResult},
};
use ndarray::{Array1, ArrayView1, array};
use rand::RngCore;

/// EtsProcessBuilder — component rows of one segment.
#[derive(Debug, Clone)]
pub struct EtsProcessBuilder {
    num_steps: usize,
    components: Vec<Array1<f64>>,
}

impl EtsProcessBuilder {
    /// Start a builder whose error row is drawn from `N(0, 1)`.
    ///
    /// # Errors
    /// Never fails for the standard normal; the `Result` mirrors
    /// [`EtsProcessBuilder::with_error`].
    pub fn new(num_steps: usize, rng: &mut dyn RngCore) -> ProcessResult<Self> {
        Self::with_error(num_steps, ErrorDistribution::standard_normal(), rng)
    }

    /// Start a builder whose error row is drawn from `distribution`.
    ///
    /// # Errors
    /// Propagates [`ProcessError::InvalidDistribution`].
    pub fn with_error(
        num_steps: usize, distribution: ErrorDistribution, rng: &mut dyn RngCore,
    ) -> ProcessResult<Self> {
        Ok(Self::from_error(distribution.sample_n(num_steps, rng)?))
    }

    /// Start a builder over an explicit error row.
    pub fn from_error(error: Array1<f64>) -> Self {
        EtsProcessBuilder { num_steps: error.len(), components: vec![error] }
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Row `index`, if present.
    pub fn component(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        self.components.get(index).map(|row| row.view())
    }

    /// Redraw the error row from `distribution`.
    ///
    /// # Errors
    /// Propagates [`ProcessError::InvalidDistribution`].
    pub fn set_error(
        &mut self, distribution: ErrorDistribution, rng: &mut dyn RngCore,
    ) -> ProcessResult<()> {
        self.components[0] = distribution.sample_n(self.num_steps, rng)?;
        Ok(())
    }

    /// Append a lag-1 long-term level fed by the error row plus the rows
    /// listed in `dependencies`.
    ///
    /// # Errors
    /// [`ProcessError::UnknownComponent`] if a dependency row does not exist.
    pub fn set_long_term(
        &mut self, init_value: f64, parameter: f64, dependencies: &[usize],
    ) -> ProcessResult<usize> {
        self.push_component(1, array![init_value].view(), parameter, dependencies)
    }

    /// Append a lag-1 trend fed by the error row.
    pub fn set_trend(&mut self, init_value: f64, parameter: f64) -> ProcessResult<usize> {
        self.push_component(1, array![init_value].view(), parameter, &[])
    }

    /// Append a seasonal component with period `lag`.
    ///
    /// # Errors
    /// - [`ProcessError::InvalidSeasonalLag`] for `lag == 0`.
    /// - [`ProcessError::SeedLengthMismatch`] if `init_values.len() != lag`.
    pub fn set_seasonal(
        &mut self, lag: usize, init_values: ArrayView1<'_, f64>, parameter: f64,
    ) -> ProcessResult<usize> {
        if lag == 0 {
            return Err(ProcessError::InvalidSeasonalLag { lag });
        }
        self.push_component(lag, init_values, parameter, &[])
    }

    /// Zero out row `index`.
    ///
    /// # Errors
    /// [`ProcessError::UnknownComponent`] if the row does not exist.
    pub fn remove_component(&mut self, index: usize) -> ProcessResult<()> {
        let rows = self.components.len();
        let row =
            self.components.get_mut(index).ok_or(ProcessError::UnknownComponent { index, rows })?;
        row.fill(0.0);
        Ok(())
    }

    /// Column-wise sum of every row.
    pub fn sum_components(self) -> Array1<f64> {
        let mut total = Array1::<f64>::zeros(self.num_steps);
        for row in &self.components {
            total += row;
        }
        total
    }

    fn push_component(
        &mut self, lag: usize, init_values: ArrayView1<'_, f64>, parameter: f64,
        dependencies: &[usize],
    ) -> ProcessResult<usize> {
        let init_values = init_values.to_owned();
        let rows = self.components.len();
        let additional = dependencies
            .iter()
            .map(|&index| {
                self.components
                    .get(index)
                    .map(|row| row.view())
                    .ok_or(ProcessError::UnknownComponent { index, rows })
            })
            .collect::<ProcessResult<Vec<_>>>()?;
        let error = self.components[0].view();
        let values = EtsComponent::new(lag, init_values.view(), parameter, error)?
            .with_additional(additional)?
            .values();
        self.components.push(values);
        Ok(self.components.len() - 1)
    }
}
