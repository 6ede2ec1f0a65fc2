//! parameters — range descriptors, parameter kinds, and generation strategies.
//!
//! Purpose
//! -------
//! Supply every numeric parameter a process needs. Processes declare an
//! ordered list of [`ParameterType`] tags; a [`ParametersGenerationMethod`]
//! turns those tags into `f64` values, bounded by a [`LinspaceInfo`] range and
//! optionally biased by a per-series source vector.
//!
//! Key behaviors
//! -------------
//! - [`linspace`]: validated `[start, stop]` range, step size, normal/uniform
//!   value draws, and jittered standard deviations.
//! - [`types`]: the three parameter kinds (std, mean, bounded coefficient).
//! - [`aggregated`]: weighted means and fractions summarising source data.
//! - [`methods`]: the strategy trait plus the random, aggregation, and
//!   parametrization strategies.
//! - [`errors`]: [`ParamError`] / [`ParamResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - A strategy returns exactly one value per requirement, in requirement
//!   order.
//! - Source data, when present, are non-empty and finite; this is checked
//!   before any aggregation.
//! - Nothing here owns random state; every draw uses the caller's
//!   `&mut dyn RngCore`.
//!
//! Downstream usage
//! ----------------
//! - The scheduler hands a strategy and optional source data to each process
//!   through a generation context; processes call
//!   `generate_all_parameters(parameters_required, source_data, rng)` and
//!   `mean_value(source_data, rng)`.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each strategy and cover bounds, source-data
//!   mapping, and the deterministic rescaling helpers.

pub mod aggregated;
pub mod errors;
pub mod linspace;
pub mod methods;
pub mod types;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::aggregated::{AggregatedData, calculate_weights, weighted_mean};
pub use self::errors::{ParamError, ParamResult};
pub use self::linspace::LinspaceInfo;
pub use self::methods::{
    AggregationMethod, GenerationMethodKind, ParametersGenerationMethod, ParametrizationMethod,
    RandomMethod,
};
pub use self::types::ParameterType;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use synthetic_timeseries::parameters::prelude::*;
//
// to import the parameter-generation surface in a single line.

pub mod prelude {
    pub use super::{
        AggregationMethod, GenerationMethodKind, LinspaceInfo, ParamError, ParamResult,
        ParameterType, ParametersGenerationMethod, ParametrizationMethod, RandomMethod,
    };
}
