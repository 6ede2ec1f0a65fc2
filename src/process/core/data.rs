//! Segment inputs and provenance records.
//!
//! - [`ProcessData`]: one `(steps, parameters)` pair driving a segment.
//! - [`ProcessInfo`]: what a process actually used to produce a segment
//!   (name, lag, seed values, steps, parameters).
//! - [`SegmentMetadata`]: the `(process_name, (steps, parameters))` record a
//!   time-series buffer keeps per written segment.

/// ProcessData — steps and parameters of one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessData {
    pub steps: usize,
    pub parameters: Vec<f64>,
}

impl ProcessData {
    pub fn new(steps: usize, parameters: Vec<f64>) -> Self {
        ProcessData { steps, parameters }
    }
}

/// ProcessInfo — seed and configuration actually used for a segment.
///
/// `initial_values` holds the level/trend seeds for smoothing processes, the
/// first value (fresh) or continuation value for walks, and nothing for
/// white noise.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessInfo {
    pub name: &'static str,
    pub lag: usize,
    pub initial_values: Vec<f64>,
    pub steps: usize,
    pub parameters: Vec<f64>,
}

impl ProcessInfo {
    pub fn new(
        name: &'static str, lag: usize, initial_values: Vec<f64>, data: &ProcessData,
    ) -> Self {
        ProcessInfo {
            name,
            lag,
            initial_values,
            steps: data.steps,
            parameters: data.parameters.clone(),
        }
    }
}

/// SegmentMetadata — provenance of one written segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentMetadata {
    pub process_name: String,
    pub data: ProcessData,
}

impl SegmentMetadata {
    pub fn new(process_name: impl Into<String>, data: ProcessData) -> Self {
        SegmentMetadata { process_name: process_name.into(), data }
    }

    pub fn steps(&self) -> usize {
        self.data.steps
    }
}
