//! series — time-series buffers and the generation loop.
//!
//! Purpose
//! -------
//! Stitch scheduled segments into continuous series and generate batches of
//! them.
//!
//! Key behaviors
//! -------------
//! - [`time_series`]: [`TimeSeries`], a fixed-capacity buffer with a write
//!   cursor and per-segment provenance; overflow truncates with a warning.
//! - [`generator`]: the free [`generate_time_series`] loop and the batch
//!   [`TimeSeriesGenerator`].
//! - [`options`]: [`GeneratorOptions`].
//! - [`errors`]: [`SeriesError`] / [`SeriesResult`].
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!   1. Build a [`crate::parameters::LinspaceInfo`] and a strategy.
//!   2. Build a [`crate::process::ProcessStorage`] (all families by
//!      default) and [`GeneratorOptions`].
//!   3. `TimeSeriesGenerator::new(options, storage, Box::new(strategy))`
//!      then `generate_all(None)` or `generate_from_points(points, labels)`.

pub mod errors;
pub mod generator;
pub mod options;
pub mod time_series;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SeriesError, SeriesResult};
pub use self::generator::{TimeSeriesGenerator, generate_time_series};
pub use self::options::GeneratorOptions;
pub use self::time_series::TimeSeries;

pub mod prelude {
    pub use super::{
        GeneratorOptions, SeriesError, SeriesResult, TimeSeries, TimeSeriesGenerator,
    };
}
