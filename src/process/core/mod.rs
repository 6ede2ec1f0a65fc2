//! process::core — building blocks shared by every process model.
//!
//! - [`component`]: the lag-indexed component recurrence.
//! - [`builder`]: row accumulation into segment values.
//! - [`sampling`]: error-row distributions.
//! - [`options`]: [`ProcessConfig`] and the white-noise family.
//! - [`context`]: the strategy/source-data bundle passed to processes.
//! - [`data`]: segment inputs and provenance records.
//! - [`validation`]: step and parameter checks.

pub mod builder;
pub mod component;
pub mod context;
pub mod data;
pub mod options;
pub mod sampling;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::builder::EtsProcessBuilder;
pub use self::component::EtsComponent;
pub use self::context::GenerationContext;
pub use self::data::{ProcessData, ProcessInfo, SegmentMetadata};
pub use self::options::{NoiseDistribution, ProcessConfig};
pub use self::sampling::ErrorDistribution;
pub use self::validation::{validate_parameters, validate_process_data, validate_steps};

pub mod prelude {
    pub use super::builder::EtsProcessBuilder;
    pub use super::component::EtsComponent;
    pub use super::context::GenerationContext;
    pub use super::data::{ProcessData, ProcessInfo, SegmentMetadata};
    pub use super::options::{NoiseDistribution, ProcessConfig};
    pub use super::sampling::ErrorDistribution;
}
