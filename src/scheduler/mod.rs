//! scheduler — partitioning, process orders, and parameter schedules.
//!
//! Purpose
//! -------
//! Split a series of `num_steps` values into stretches, assign a registered
//! process to each stretch, and draw the parameters that drive every
//! segment.
//!
//! Key behaviors
//! -------------
//! - [`partition`]: [`generate_steps_number`], strict and stick-breaking
//!   partitions of a total into positive parts.
//! - [`scheduler`]: [`Scheduler`] with random or caller-provided process
//!   orders and stable or drifting parameter schedules.
//! - [`storage`]: [`SchedulerStorage`], one scheduler per cluster label.
//! - [`errors`]: [`SchedulerError`] / [`SchedulerResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Process-order steps sum to `num_steps`; schedule sub-parts sum to their
//!   order entry.
//! - All randomness comes from the caller's RNG, so a seeded RNG replays the
//!   same orders and schedules.
//!
//! Testing notes
//! -------------
//! - Sum and positivity properties are checked with `proptest`; schedule
//!   shapes with seeded unit tests.

pub mod errors;
pub mod partition;
#[allow(clippy::module_inception)]
pub mod scheduler;
pub mod storage;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SchedulerError, SchedulerResult};
pub use self::partition::generate_steps_number;
pub use self::scheduler::{ProcessOrderEntry, ScheduleEntry, Scheduler, generate_process_order};
pub use self::storage::SchedulerStorage;

pub mod prelude {
    pub use super::{
        ProcessOrderEntry, ScheduleEntry, Scheduler, SchedulerError, SchedulerResult,
        SchedulerStorage,
    };
}
