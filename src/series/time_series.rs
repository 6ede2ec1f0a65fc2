//! TimeSeries — fixed-capacity buffer that stitches segments together.
//!
//! Purpose
//! -------
//! Hold one generated series of `num_steps` values, filled left to right by
//! successive segments, together with the provenance of each segment.
//!
//! Key behaviors
//! -------------
//! - [`TimeSeries::add_values`] writes at the cursor. A segment that does not
//!   fit is truncated to the remaining capacity and a warning is logged; this
//!   never fails.
//! - [`TimeSeries::get_values`] returns a view of `[start, end)`; without
//!   `end` only the values written so far are returned, which is the
//!   continuation history handed to the next process.
//!
//! Invariants & assumptions
//! ------------------------
//! - `last_index <= capacity` at all times and only increases.
//! - The cursor advances by the number of values actually written, so after
//!   an overflow `last_index == capacity`.
//! - `metadata` is append-only, one record per `add_values` call in write
//!   order, including truncated segments (their record keeps the requested
//!   steps).
//!
//! Conventions
//! -----------
//! - Out-of-range `start` / `end` are clamped to the buffer rather than
//!   rejected; an inverted range yields an empty view.
use crate::process::core::data::SegmentMetadata;
use ndarray::{Array1, ArrayView1, s};

/// TimeSeries — values buffer, write cursor, and segment provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    values: Array1<f64>,
    last_index: usize,
    metadata: Vec<SegmentMetadata>,
}

impl TimeSeries {
    /// Zero-filled buffer of `num_steps` values.
    pub fn new(num_steps: usize) -> Self {
        TimeSeries { values: Array1::zeros(num_steps), last_index: 0, metadata: Vec::new() }
    }

    /// Append `new_values` at the cursor and record `metadata`.
    ///
    /// Returns the number of values written, which is smaller than
    /// `new_values.len()` only on overflow.
    pub fn add_values(
        &mut self, new_values: ArrayView1<'_, f64>, metadata: SegmentMetadata,
    ) -> usize {
        let remaining = self.capacity() - self.last_index;
        let written = new_values.len().min(remaining);
        if written < new_values.len() {
            log::warn!(
                "time series overflow: `{}` produced {} values but only {} fit (capacity {})",
                metadata.process_name,
                new_values.len(),
                written,
                self.capacity()
            );
        }
        let end = self.last_index + written;
        self.values.slice_mut(s![self.last_index..end]).assign(&new_values.slice(s![..written]));
        self.last_index = end;
        self.metadata.push(metadata);
        written
    }

    /// View of `[start, end)`, or `[start, last_index)` without `end`.
    pub fn get_values(&self, start: usize, end: Option<usize>) -> ArrayView1<'_, f64> {
        let end = end.unwrap_or(self.last_index).min(self.capacity());
        let start = start.min(end);
        self.values.slice(s![start..end])
    }

    /// Everything written so far.
    pub fn written(&self) -> ArrayView1<'_, f64> {
        self.get_values(0, None)
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn last_index(&self) -> usize {
        self.last_index
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn is_full(&self) -> bool {
        self.last_index == self.capacity()
    }

    pub fn metadata(&self) -> &[SegmentMetadata] {
        &self.metadata
    }
}
