//! process — segment generators: component recurrence, builder, models, and
//! the process registry.
//!
//! Purpose
//! -------
//! Turn a `(steps, parameters)` pair plus optional continuation history into
//! exactly `steps` values. Every exponential-smoothing-family model is a sum
//! of additive components computed by one lag-indexed recurrence; white noise
//! and the random walks draw their values directly.
//!
//! Key behaviors
//! -------------
//! - [`core`]: [`EtsComponent`] recurrence, [`EtsProcessBuilder`] row
//!   accumulation, error distributions, [`ProcessConfig`], and the
//!   [`GenerationContext`] carrying the parameter strategy and source data.
//! - [`models`]: one file per family plus the [`ProcessKind`] enum that
//!   dispatches the [`Process`] contract.
//! - [`storage`]: [`ProcessStorage`], the name-keyed registry the scheduler
//!   draws from.
//! - [`errors`]: [`ProcessError`] / [`ProcessResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Row 0 of a builder is always the error component; later rows may only
//!   depend on rows registered before them.
//! - A process never mutates itself; strategy and source data arrive through
//!   the context on every call and all randomness through the caller's RNG.
//! - A continuation history shorter than a process's lag selects a
//!   documented fallback seed, never an error.
//!
//! Conventions
//! -----------
//! - Continuation history is the buffer written so far, oldest value first;
//!   an empty view is treated exactly like no history.
//!
//! Testing notes
//! -------------
//! - Each file carries unit tests; the length contract across every family,
//!   strategy, and history shape is checked in [`models`].

pub mod core;
pub mod errors;
pub mod models;
pub mod storage;
pub mod traits;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    EtsComponent, EtsProcessBuilder, GenerationContext, NoiseDistribution, ProcessConfig,
    ProcessData, ProcessInfo, SegmentMetadata,
};
pub use self::errors::{ProcessError, ProcessResult};
pub use self::models::{ALL_PROCESS_NAMES, ProcessKind};
pub use self::storage::ProcessStorage;
pub use self::traits::Process;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use synthetic_timeseries::process::prelude::*;
//
// to import the process surface in a single line.

pub mod prelude {
    pub use super::{
        GenerationContext, Process, ProcessConfig, ProcessData, ProcessError, ProcessInfo,
        ProcessKind, ProcessResult, ProcessStorage, SegmentMetadata,
    };
}
