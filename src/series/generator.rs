//! Series generation — schedules in, stitched time series out.
//!
//! Purpose
//! -------
//! Run the composition loop: for every schedule entry and every parameter
//! part, generate a segment with the entry's process, seeded from the
//! values written so far, and append it to a [`TimeSeries`] buffer.
//!
//! Key behaviors
//! -------------
//! - [`generate_time_series`] is the loop itself over an explicit schedule,
//!   registry, context, and RNG.
//! - [`TimeSeriesGenerator`] owns the RNG, the registry, and the parameter
//!   strategy, and produces batches:
//!   - [`TimeSeriesGenerator::generate_all`] builds one scheduler; with
//!     `single_schedule` every series replays one schedule, otherwise each
//!     series draws its own schedule (and its own process order unless a
//!     fixed order was supplied). Optional source points supply per-series
//!     source data (row `i` for series `i`, row 0 for a single schedule).
//!   - [`TimeSeriesGenerator::generate_from_points`] generates one series per
//!     point with the scheduler of the point's cluster.
//!
//! Invariants & assumptions
//! ------------------------
//! - The first segment of a series gets no history; every later segment gets
//!   the full written prefix.
//! - A schedule whose steps sum to `num_steps` fills the buffer exactly;
//!   anything longer is truncated by the buffer with a warning.
//! - Batches are returned both as a `num_series × num_steps` matrix and as
//!   the individual buffers with their metadata.
use crate::{
    parameters::methods::ParametersGenerationMethod,
    process::{
        core::{context::GenerationContext, data::SegmentMetadata},
        storage::ProcessStorage,
        traits::Process,
    },
    scheduler::{
        scheduler::{ProcessOrderEntry, ScheduleEntry, Scheduler},
        storage::SchedulerStorage,
    },
    series::{
        errors::{SeriesError, SeriesResult},
        options::GeneratorOptions,
        time_series::TimeSeries,
    },
};
use ndarray::{Array2, ArrayView2};
use rand::{RngCore, SeedableRng, rngs::StdRng};

/// Stitch every part of `schedule` into a buffer of `num_steps` values.
///
/// # Errors
/// - [`SeriesError::Process`] for an unregistered process name or a
///   segment that fails validation.
pub fn generate_time_series(
    num_steps: usize, schedule: &[ScheduleEntry], storage: &ProcessStorage,
    ctx: GenerationContext<'_>, rng: &mut dyn RngCore,
) -> SeriesResult<TimeSeries> {
    let mut series = TimeSeries::new(num_steps);
    for entry in schedule {
        let process = storage.get_process(&entry.process_name)?;
        for part in &entry.parts {
            let previous = if series.last_index() == 0 { None } else { Some(series.written()) };
            let (values, info) = process.generate_time_series(part, previous, ctx, rng)?;
            log::trace!(
                "segment `{}` at {}: {} steps, seed {:?}",
                info.name,
                series.last_index(),
                info.steps,
                info.initial_values
            );
            series.add_values(values.view(), SegmentMetadata::new(process.name(), part.clone()));
        }
    }
    Ok(series)
}

/// TimeSeriesGenerator — batch generation with an owned RNG.
pub struct TimeSeriesGenerator {
    options: GeneratorOptions,
    storage: ProcessStorage,
    method: Box<dyn ParametersGenerationMethod>,
    process_order: Option<Vec<ProcessOrderEntry>>,
    rng: StdRng,
}

impl TimeSeriesGenerator {
    /// Generator over `storage` drawing parameters with `method`.
    ///
    /// # Errors
    /// [`SeriesError::ZeroSteps`] if `options.num_steps == 0`.
    pub fn new(
        options: GeneratorOptions, storage: ProcessStorage,
        method: Box<dyn ParametersGenerationMethod>,
    ) -> SeriesResult<Self> {
        if options.num_steps == 0 {
            return Err(SeriesError::ZeroSteps);
        }
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(TimeSeriesGenerator { options, storage, method, process_order: None, rng })
    }

    /// Use a fixed process order for every scheduler built by
    /// [`TimeSeriesGenerator::generate_all`]. It is validated when the
    /// scheduler is built.
    pub fn with_process_order(mut self, process_order: Vec<ProcessOrderEntry>) -> Self {
        self.process_order = Some(process_order);
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn storage(&self) -> &ProcessStorage {
        &self.storage
    }

    /// Scheduler over the generator's registry, with the fixed process order
    /// when one was supplied.
    ///
    /// # Errors
    /// Propagates scheduler construction or order validation failures.
    pub fn build_scheduler(&mut self) -> SeriesResult<Scheduler> {
        let scheduler = match &self.process_order {
            Some(order) => Scheduler::with_process_order(
                self.options.num_steps,
                self.storage.clone(),
                order.clone(),
            )?,
            None => Scheduler::new(
                self.options.num_steps,
                self.storage.clone(),
                self.options.strict_num_parts,
                &mut self.rng,
            )?,
        };
        Ok(scheduler)
    }

    /// Draw a schedule from `scheduler` and generate one series from it.
    ///
    /// # Errors
    /// Propagates scheduling and segment-generation failures.
    pub fn generate_with_scheduler(
        &mut self, scheduler: &Scheduler, source_data: Option<&[f64]>,
    ) -> SeriesResult<TimeSeries> {
        let ctx = GenerationContext::new(self.method.as_ref(), source_data);
        let schedule =
            scheduler.generate_schedule(self.options.stable_parameters, ctx, &mut self.rng)?;
        let num_steps = scheduler.num_steps();
        generate_time_series(num_steps, &schedule, scheduler.storage(), ctx, &mut self.rng)
    }

    /// Generate `num_time_series` series.
    ///
    /// # Errors
    /// - [`SeriesError::NotEnoughPoints`] when `points` has fewer rows than
    ///   the series that read them.
    /// - Scheduling and segment-generation failures.
    pub fn generate_all(
        &mut self, points: Option<ArrayView2<'_, f64>>,
    ) -> SeriesResult<(Array2<f64>, Vec<TimeSeries>)> {
        let num_series = self.options.num_time_series;
        if let Some(points) = points {
            let required =
                if self.options.single_schedule { num_series.min(1) } else { num_series };
            if points.nrows() < required {
                return Err(SeriesError::NotEnoughPoints { points: points.nrows(), required });
            }
        }
        let source_row = |i: usize| points.map(|p| p.row(i).to_vec());
        let mut scheduler = self.build_scheduler()?;
        let mut series = Vec::with_capacity(num_series);

        if self.options.single_schedule {
            let source = if num_series > 0 { source_row(0) } else { None };
            let ctx = GenerationContext::new(self.method.as_ref(), source.as_deref());
            let schedule =
                scheduler.generate_schedule(self.options.stable_parameters, ctx, &mut self.rng)?;
            for _ in 0..num_series {
                series.push(generate_time_series(
                    self.options.num_steps,
                    &schedule,
                    &self.storage,
                    ctx,
                    &mut self.rng,
                )?);
            }
        } else {
            for i in 0..num_series {
                if i > 0 && self.process_order.is_none() {
                    let strict = self.options.strict_num_parts;
                    scheduler.regenerate_process_order(strict, &mut self.rng)?;
                }
                let source = source_row(i);
                series.push(self.generate_with_scheduler(&scheduler, source.as_deref())?);
            }
        }
        Ok((stack_series(self.options.num_steps, &series), series))
    }

    /// Generate one series per point, scheduled per cluster, with each
    /// point's coordinates as source data. `num_time_series` is ignored.
    ///
    /// # Errors
    /// - [`SeriesError::PointsClustersMismatch`] when row and label counts
    ///   differ.
    /// - Scheduling and segment-generation failures.
    pub fn generate_from_points(
        &mut self, points: ArrayView2<'_, f64>, clusters: &[usize],
    ) -> SeriesResult<(Array2<f64>, Vec<TimeSeries>)> {
        if points.nrows() != clusters.len() {
            return Err(SeriesError::PointsClustersMismatch {
                points: points.nrows(),
                clusters: clusters.len(),
            });
        }
        let schedulers = SchedulerStorage::new(
            self.options.num_steps,
            &self.storage,
            clusters.to_vec(),
            self.options.strict_num_parts,
            &mut self.rng,
        )?;
        let mut series = Vec::with_capacity(points.nrows());
        for (i, point) in points.rows().into_iter().enumerate() {
            let scheduler = schedulers.scheduler_for_point(i)?;
            let source = point.to_vec();
            series.push(self.generate_with_scheduler(scheduler, Some(&source))?);
        }
        Ok((stack_series(self.options.num_steps, &series), series))
    }
}

impl std::fmt::Debug for TimeSeriesGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeSeriesGenerator")
            .field("options", &self.options)
            .field("processes", &self.storage.names())
            .field("method", &self.method.name())
            .field("process_order", &self.process_order)
            .finish()
    }
}

fn stack_series(num_steps: usize, series: &[TimeSeries]) -> Array2<f64> {
    let mut stacked = Array2::zeros((series.len(), num_steps));
    for (mut row, values) in stacked.rows_mut().into_iter().zip(series) {
        row.assign(values.values());
    }
    stacked
}
