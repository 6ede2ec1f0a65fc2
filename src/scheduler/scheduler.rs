//! Scheduler — process orders and per-segment parameter schedules.
//!
//! Purpose
//! -------
//! Decide which process generates which stretch of a series and with which
//! parameters. A scheduler owns a process registry and a process order
//! (`(steps, process_name)` entries summing to the series length), and turns
//! that order into a schedule of `(process_name, [(steps, parameters), ..])`
//! entries.
//!
//! Key behaviors
//! -------------
//! - [`Scheduler::new`] draws a random process order: a part count uniform in
//!   `[1, max(⌊√num_steps⌋, 2))`, a partition of `num_steps` into that many
//!   parts, and one registered process per part chosen with replacement.
//! - [`Scheduler::with_process_order`] / [`Scheduler::set_process_order`]
//!   accept a caller-provided order after validation.
//! - [`Scheduler::generate_schedule`] emits one parameter draw per order
//!   entry with stable parameters (or a single-step entry); otherwise the
//!   entry is split by the stick-breaking partitioner into a random number of
//!   sub-parts, each with a fresh parameter draw.
//! - With drifting parameters and source data, the source vector drifts
//!   between sub-parts: each entry is redrawn from `N(v, (2·step)²)` on a
//!   working copy.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every process-order entry has `steps >= 1`, the entries sum to
//!   `num_steps`, and every name is registered.
//! - For every schedule entry, the sub-part steps sum to the steps of the
//!   order entry it was generated from.
//! - The scheduler holds no strategy or source data; both arrive through
//!   the [`GenerationContext`] of each call.
use crate::{
    process::{
        core::{context::GenerationContext, data::ProcessData},
        storage::ProcessStorage,
        traits::Process,
    },
    scheduler::{
        errors::{SchedulerError, SchedulerResult},
        partition::generate_steps_number,
    },
    utils::sample_normal,
};
use rand::{Rng, RngCore};

const SOURCE_DRIFT_SCALE: f64 = 2.0;

/// ProcessOrderEntry — one stretch of the series and its process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOrderEntry {
    pub steps: usize,
    pub process_name: String,
}

impl ProcessOrderEntry {
    pub fn new(steps: usize, process_name: impl Into<String>) -> Self {
        ProcessOrderEntry { steps, process_name: process_name.into() }
    }
}

/// ScheduleEntry — the parameter parts generated for one order entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub process_name: String,
    pub parts: Vec<ProcessData>,
}

impl ScheduleEntry {
    /// Total steps across all parts.
    pub fn steps(&self) -> usize {
        self.parts.iter().map(|part| part.steps).sum()
    }
}

/// Scheduler — process order plus the registry it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduler {
    num_steps: usize,
    storage: ProcessStorage,
    process_order: Vec<ProcessOrderEntry>,
}

impl Scheduler {
    /// Scheduler with a freshly drawn process order.
    ///
    /// # Errors
    /// - [`SchedulerError::ZeroSteps`] if `num_steps == 0`.
    /// - [`SchedulerError::Process`] wrapping `EmptyRegistry` when `storage`
    ///   holds no process.
    pub fn new(
        num_steps: usize, storage: ProcessStorage, strict_num_parts: bool, rng: &mut dyn RngCore,
    ) -> SchedulerResult<Self> {
        let process_order = generate_process_order(num_steps, &storage, strict_num_parts, rng)?;
        Ok(Scheduler { num_steps, storage, process_order })
    }

    /// Scheduler over a caller-provided process order.
    ///
    /// # Errors
    /// See [`Scheduler::set_process_order`].
    pub fn with_process_order(
        num_steps: usize, storage: ProcessStorage, process_order: Vec<ProcessOrderEntry>,
    ) -> SchedulerResult<Self> {
        let mut scheduler = Scheduler { num_steps, storage, process_order: Vec::new() };
        scheduler.set_process_order(process_order)?;
        Ok(scheduler)
    }

    /// Replace the process order.
    ///
    /// # Errors
    /// - [`SchedulerError::ZeroSteps`] if the scheduler has `num_steps == 0`.
    /// - [`SchedulerError::EmptyProcessOrder`] for an empty order.
    /// - [`SchedulerError::NonPositiveOrderSteps`] for a zero-step entry.
    /// - [`SchedulerError::OrderSumMismatch`] if the steps do not sum to
    ///   `num_steps`.
    /// - [`SchedulerError::Process`] wrapping `UnknownProcess` for a name that
    ///   is not registered.
    pub fn set_process_order(
        &mut self, process_order: Vec<ProcessOrderEntry>,
    ) -> SchedulerResult<()> {
        validate_process_order(self.num_steps, &self.storage, &process_order)?;
        self.process_order = process_order;
        Ok(())
    }

    /// Draw a new random process order in place.
    ///
    /// # Errors
    /// As for [`Scheduler::new`].
    pub fn regenerate_process_order(
        &mut self, strict_num_parts: bool, rng: &mut dyn RngCore,
    ) -> SchedulerResult<()> {
        self.process_order =
            generate_process_order(self.num_steps, &self.storage, strict_num_parts, rng)?;
        Ok(())
    }

    /// Turn the process order into a parameter schedule.
    ///
    /// # Errors
    /// Propagates parameter-generation failures (e.g. invalid source data).
    pub fn generate_schedule(
        &self, stable_parameters: bool, ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
    ) -> SchedulerResult<Vec<ScheduleEntry>> {
        let mut source = ctx.source_data.map(<[f64]>::to_vec);
        let drift_std = SOURCE_DRIFT_SCALE * ctx.linspace().step;
        let mut schedule = Vec::with_capacity(self.process_order.len());

        for entry in &self.process_order {
            let process = self.storage.get_process(&entry.process_name)?;
            let mut parts = Vec::new();
            if stable_parameters || entry.steps == 1 {
                let part_ctx = GenerationContext::new(ctx.method, source.as_deref());
                let parameters = process.generate_parameters(part_ctx, rng)?;
                parts.push(ProcessData::new(entry.steps, parameters));
            } else {
                let num_parts = rng.gen_range(1..entry.steps);
                for steps in generate_steps_number(entry.steps, num_parts, false, rng) {
                    let part_ctx = GenerationContext::new(ctx.method, source.as_deref());
                    let parameters = process.generate_parameters(part_ctx, rng)?;
                    parts.push(ProcessData::new(steps, parameters));
                    if let Some(values) = source.as_mut() {
                        drift_source(values, drift_std, rng);
                    }
                }
            }
            log::debug!(
                "scheduled `{}` over {} steps in {} part(s)",
                entry.process_name,
                entry.steps,
                parts.len()
            );
            schedule.push(ScheduleEntry { process_name: entry.process_name.clone(), parts });
        }
        Ok(schedule)
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn process_order(&self) -> &[ProcessOrderEntry] {
        &self.process_order
    }

    pub fn storage(&self) -> &ProcessStorage {
        &self.storage
    }
}

/// Random process order over `num_steps`.
///
/// # Errors
/// - [`SchedulerError::ZeroSteps`] if `num_steps == 0`.
/// - [`SchedulerError::Process`] wrapping `EmptyRegistry`.
pub fn generate_process_order(
    num_steps: usize, storage: &ProcessStorage, strict_num_parts: bool, rng: &mut dyn RngCore,
) -> SchedulerResult<Vec<ProcessOrderEntry>> {
    if num_steps == 0 {
        return Err(SchedulerError::ZeroSteps);
    }
    let upper = ((num_steps as f64).sqrt() as usize).max(2);
    let num_parts = rng.gen_range(1..upper);
    let steps = generate_steps_number(num_steps, num_parts, strict_num_parts, rng);
    let processes = storage.get_random_processes(steps.len(), rng)?;
    log::debug!("process order: {} part(s) over {num_steps} steps", steps.len());
    Ok(steps
        .into_iter()
        .zip(processes)
        .map(|(steps, process)| ProcessOrderEntry::new(steps, process.name()))
        .collect())
}

fn validate_process_order(
    num_steps: usize, storage: &ProcessStorage, process_order: &[ProcessOrderEntry],
) -> SchedulerResult<()> {
    if num_steps == 0 {
        return Err(SchedulerError::ZeroSteps);
    }
    if process_order.is_empty() {
        return Err(SchedulerError::EmptyProcessOrder);
    }
    for (index, entry) in process_order.iter().enumerate() {
        if entry.steps == 0 {
            return Err(SchedulerError::NonPositiveOrderSteps { index });
        }
        storage.get_process(&entry.process_name)?;
    }
    let actual: usize = process_order.iter().map(|entry| entry.steps).sum();
    if actual != num_steps {
        return Err(SchedulerError::OrderSumMismatch { expected: num_steps, actual });
    }
    Ok(())
}

fn drift_source(values: &mut [f64], std: f64, rng: &mut dyn RngCore) {
    for value in values.iter_mut() {
        *value = sample_normal(*value, std, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parameters::{linspace::LinspaceInfo, methods::RandomMethod},
        process::{
            core::options::ProcessConfig,
            errors::ProcessError,
            models::{RandomWalk, WhiteNoise},
        },
    };
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Process-order invariants (sum, positivity, registered names).
    // - Validation of caller-provided orders.
    // - Stable vs drifting schedules and their step sums.
    //
    // They intentionally DO NOT cover:
    // - Segment values; see the process models and the integration tests.
    // -------------------------------------------------------------------------

    fn random_method() -> RandomMethod {
        RandomMethod::new(LinspaceInfo::new(0.0, 10.0, 10).unwrap())
    }

    #[test]
    // Purpose
    // -------
    // Verify that small series still get a valid single-part order.
    //
    // Given
    // -----
    // - num_steps ∈ {1, 2, 3}: ⌊√n⌋ < 2, so the part count is always 1.
    //
    // Expect
    // ------
    // - One entry covering all steps.
    fn short_series_get_single_part_order() {
        let mut rng = StdRng::seed_from_u64(200);
        for num_steps in 1..=3 {
            let order =
                generate_process_order(num_steps, &ProcessStorage::default(), false, &mut rng)
                    .unwrap();

            assert_eq!(order.len(), 1);
            assert_eq!(order[0].steps, num_steps);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure zero steps and an empty registry are reported.
    fn process_order_rejects_zero_steps_and_empty_registry() {
        let mut rng = StdRng::seed_from_u64(201);
        let empty = ProcessStorage::new(Some(&[] as &[&str]), ProcessConfig::default()).unwrap();

        assert_eq!(
            generate_process_order(0, &ProcessStorage::default(), false, &mut rng).unwrap_err(),
            SchedulerError::ZeroSteps
        );
        assert_eq!(
            Scheduler::new(10, empty, false, &mut rng).unwrap_err(),
            SchedulerError::Process(ProcessError::EmptyRegistry)
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify caller-provided orders are validated.
    //
    // Expect
    // ------
    // - A valid order is accepted as is.
    // - Sum mismatch, zero steps, empty order, and unknown names are errors.
    fn provided_process_order_is_validated() {
        let storage = ProcessStorage::default();
        let valid = vec![
            ProcessOrderEntry::new(6, WhiteNoise::NAME),
            ProcessOrderEntry::new(4, RandomWalk::NAME),
        ];

        let scheduler = Scheduler::with_process_order(10, storage.clone(), valid.clone()).unwrap();
        assert_eq!(scheduler.process_order(), &valid[..]);

        assert_eq!(
            Scheduler::with_process_order(12, storage.clone(), valid).unwrap_err(),
            SchedulerError::OrderSumMismatch { expected: 12, actual: 10 }
        );
        assert_eq!(
            Scheduler::with_process_order(
                5,
                storage.clone(),
                vec![
                    ProcessOrderEntry::new(5, WhiteNoise::NAME),
                    ProcessOrderEntry::new(0, WhiteNoise::NAME),
                ],
            )
            .unwrap_err(),
            SchedulerError::NonPositiveOrderSteps { index: 1 }
        );
        assert_eq!(
            Scheduler::with_process_order(5, storage.clone(), Vec::new()).unwrap_err(),
            SchedulerError::EmptyProcessOrder
        );
        assert!(matches!(
            Scheduler::with_process_order(5, storage, vec![ProcessOrderEntry::new(5, "arima")]),
            Err(SchedulerError::Process(ProcessError::UnknownProcess { .. }))
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify stable and drifting schedules preserve each entry's steps.
    //
    // Given
    // -----
    // - Order [(30, random_walk), (1, white_noise), (19, white_noise)].
    //
    // Expect
    // ------
    // - Stable: one part per entry with the entry's steps.
    // - Drifting: the single-step entry keeps one part; part steps always sum
    //   to the entry steps and each part has `parameters_required` values.
    fn schedule_parts_sum_to_entry_steps() {
        // Arrange
        let method = random_method();
        let source = [1.0, 2.0, 3.0];
        let mut rng = StdRng::seed_from_u64(202);
        let order = vec![
            ProcessOrderEntry::new(30, RandomWalk::NAME),
            ProcessOrderEntry::new(1, WhiteNoise::NAME),
            ProcessOrderEntry::new(19, WhiteNoise::NAME),
        ];
        let scheduler =
            Scheduler::with_process_order(50, ProcessStorage::default(), order.clone()).unwrap();

        for source_data in [None, Some(&source[..])] {
            let ctx = GenerationContext::new(&method, source_data);

            // Act
            let stable = scheduler.generate_schedule(true, ctx, &mut rng).unwrap();
            let drifting = scheduler.generate_schedule(false, ctx, &mut rng).unwrap();

            // Assert
            assert!(stable.iter().all(|entry| entry.parts.len() == 1));
            assert_eq!(drifting[1].parts.len(), 1);
            for schedule in [&stable, &drifting] {
                for (entry, expected) in schedule.iter().zip(&order) {
                    assert_eq!(entry.process_name, expected.process_name);
                    assert_eq!(entry.steps(), expected.steps);
                    let process = scheduler.storage().get_process(&entry.process_name).unwrap();
                    let required = process.parameters_required().len();
                    assert!(entry.parts.iter().all(|part| part.parameters.len() == required));
                    assert!(entry.parts.iter().all(|part| part.steps >= 1));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn process_order_covers_series(
            num_steps in 1usize..2_000, strict in any::<bool>(), seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let storage = ProcessStorage::new(None, ProcessConfig::default()).unwrap();

            let order = generate_process_order(num_steps, &storage, strict, &mut rng).unwrap();

            prop_assert_eq!(order.iter().map(|e| e.steps).sum::<usize>(), num_steps);
            prop_assert!(order.iter().all(|e| e.steps >= 1 && storage.contains(&e.process_name)));
        }
    }
}
