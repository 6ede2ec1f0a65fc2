//! The process contract shared by every model family.
//!
//! A process is a pure function of `(steps, parameters, previous_values)`
//! plus the strategy and source data carried by a [`GenerationContext`] and
//! the caller's RNG. It holds configuration only; no call mutates it.
use crate::{
    parameters::types::ParameterType,
    process::{
        core::{context::GenerationContext, data::{ProcessData, ProcessInfo}},
        errors::ProcessResult,
    },
};
use ndarray::{Array1, ArrayView1};
use rand::RngCore;

/// Segment generator for one model family.
///
/// Required:
/// - `name`: unique registry key.
/// - `lag`: continuation history the model consumes.
/// - `parameters_required`: ordered parameter kinds.
/// - `generate_time_series`: produce exactly `data.steps` values, seeded from
///   `previous_values` when it is non-empty.
///
/// Optional:
/// - `generate_parameters`: defaults to
///   `ctx.method.generate_all_parameters(parameters_required, ctx.source_data)`.
pub trait Process {
    fn name(&self) -> &'static str;

    fn lag(&self) -> usize;

    fn parameters_required(&self) -> Vec<ParameterType>;

    fn generate_parameters(
        &self, ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> ProcessResult<Vec<f64>> {
        let required = self.parameters_required();
        Ok(ctx.method.generate_all_parameters(&required, ctx.source_data, rng)?)
    }

    fn generate_time_series(
        &self, data: &ProcessData, previous_values: Option<ArrayView1<'_, f64>>,
        ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> ProcessResult<(Array1<f64>, ProcessInfo)>;
}

/// Last value of a non-empty continuation history.
///
/// An empty history is treated exactly like no history.
pub fn last_value(previous_values: Option<ArrayView1<'_, f64>>) -> Option<f64> {
    previous_values.and_then(|values| values.len().checked_sub(1).map(|last| values[last]))
}
