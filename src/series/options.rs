//! Generator options — batch size, series length, scheduling modes, seed.
//!
//! Purpose
//! -------
//! Keep the knobs of a generation run in one validated carrier so the
//! generator itself takes no ad-hoc flags.
//!
//! Conventions
//! -----------
//! - `stable_parameters`: one parameter draw per process-order entry (else
//!   drifting sub-parts).
//! - `single_schedule`: every series in the batch replays one schedule (else
//!   each series draws its own).
//! - `strict_num_parts`: process orders use even partitions (else
//!   stick-breaking).
//! - `seed`: `Some` makes a run reproducible; `None` seeds from entropy.
use crate::series::errors::{SeriesError, SeriesResult};

pub const DEFAULT_NUM_STEPS: usize = 100;

/// GeneratorOptions — configuration of a batch generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub num_time_series: usize,
    pub num_steps: usize,
    pub stable_parameters: bool,
    pub single_schedule: bool,
    pub strict_num_parts: bool,
    pub seed: Option<u64>,
}

impl GeneratorOptions {
    /// Options with the default modes for `num_time_series` series of
    /// `num_steps` values.
    ///
    /// # Errors
    /// [`SeriesError::ZeroSteps`] if `num_steps == 0`.
    pub fn new(num_time_series: usize, num_steps: usize) -> SeriesResult<Self> {
        if num_steps == 0 {
            return Err(SeriesError::ZeroSteps);
        }
        Ok(GeneratorOptions { num_time_series, num_steps, ..GeneratorOptions::default() })
    }

    pub fn with_stable_parameters(mut self, stable_parameters: bool) -> Self {
        self.stable_parameters = stable_parameters;
        self
    }

    pub fn with_single_schedule(mut self, single_schedule: bool) -> Self {
        self.single_schedule = single_schedule;
        self
    }

    pub fn with_strict_num_parts(mut self, strict_num_parts: bool) -> Self {
        self.strict_num_parts = strict_num_parts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            num_time_series: 1,
            num_steps: DEFAULT_NUM_STEPS,
            stable_parameters: true,
            single_schedule: true,
            strict_num_parts: false,
            seed: None,
        }
    }
}
