//! synthetic_timeseries — synthetic time-series generation with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the generator to Python via the `_synthetic_timeseries` extension module.
//! A series is built by composing segments of elementary stochastic processes
//! (white noise, random walks, exponential smoothing) under a randomly drawn
//! schedule, each segment continuing from the values written before it.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules as the public crate surface:
//!   - `parameters`: linspace ranges and parameter-generation strategies.
//!   - `process`: component recurrences, the process families, and the
//!     process registry.
//!   - `scheduler`: step partitioning, process orders, and schedules.
//!   - `series`: the time-series buffer and the batch generator.
//!   - `sampling`: source points on the sphere and their k-means clusters.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_synthetic_timeseries` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner Rust modules; this file performs
//!   only FFI glue, input conversion, and error mapping.
//! - Randomness always flows through an explicit RNG; a seeded generator is
//!   reproducible end to end.
//!
//! Conventions
//! -----------
//! - Series matrices are `num_series × num_steps`; point matrices are
//!   `num_points × ndim`.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_synthetic_timeseries.generation`.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/` exercises the full
//!   scheduler → generator → buffer pipeline.

pub mod parameters;
pub mod process;
pub mod sampling;
pub mod scheduler;
pub mod series;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use rand::{SeedableRng, rngs::StdRng};

#[cfg(feature = "python-bindings")]
use crate::{
    parameters::{GenerationMethodKind, LinspaceInfo},
    process::{ProcessConfig, ProcessStorage},
    sampling::DEFAULT_MAX_ITER,
    series::{GeneratorOptions, TimeSeries, TimeSeriesGenerator},
    utils::extract_f64_matrix,
};

/// Per-series segment records as `(process_name, steps, parameters)`.
#[cfg(feature = "python-bindings")]
type PySegments = Vec<Vec<(String, usize, Vec<f64>)>>;

#[cfg(feature = "python-bindings")]
fn segments_of(series: &[TimeSeries]) -> PySegments {
    series
        .iter()
        .map(|ts| {
            ts.metadata()
                .iter()
                .map(|m| (m.process_name.clone(), m.data.steps, m.data.parameters.clone()))
                .collect()
        })
        .collect()
}

#[cfg(feature = "python-bindings")]
fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// PyTimeSeriesGenerator — Python-facing wrapper for [`TimeSeriesGenerator`].
///
/// Purpose
/// -------
/// Build a generator from Python-friendly arguments and return batches as
/// numpy matrices together with per-segment provenance.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `TimeSeriesGenerator(num_time_series, num_steps, start, stop, ...)`:
/// - `method`: one of `"random_method"`, `"aggregation_method"`,
///   `"parametrization_method"` (short forms accepted).
/// - `start`, `stop`, `parts`: the linspace the strategy draws from.
/// - `processes`: registry names; all families when `None`.
/// - `stable_parameters`, `single_schedule`, `strict_num_parts`, `seed`:
///   forwarded to [`GeneratorOptions`].
///
/// Notes
/// -----
/// - Marked `unsendable`: the boxed strategy carries no `Send` bound.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "TimeSeriesGenerator", module = "synthetic_timeseries.generation", unsendable)]
pub struct PyTimeSeriesGenerator {
    inner: TimeSeriesGenerator,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyTimeSeriesGenerator {
    #[new]
    #[pyo3(
        signature = (
            num_time_series,
            num_steps,
            start,
            stop,
            parts = 100,
            method = "random_method",
            processes = None,
            stable_parameters = true,
            single_schedule = true,
            strict_num_parts = false,
            seed = None,
        ),
        text_signature = "(num_time_series, num_steps, start, stop, /, parts=100, \
                          method='random_method', processes=None, stable_parameters=True, \
                          single_schedule=True, strict_num_parts=False, seed=None)"
    )]
    pub fn new(
        num_time_series: usize, num_steps: usize, start: f64, stop: f64, parts: usize,
        method: &str, processes: Option<Vec<String>>, stable_parameters: bool,
        single_schedule: bool, strict_num_parts: bool, seed: Option<u64>,
    ) -> PyResult<Self> {
        let kind = GenerationMethodKind::from_name(method)
            .ok_or_else(|| PyValueError::new_err(format!("unknown method '{method}'")))?;
        let linspace = LinspaceInfo::new(start, stop, parts)?;

        let names: Option<Vec<&str>> =
            processes.as_ref().map(|names| names.iter().map(String::as_str).collect());
        let storage = ProcessStorage::new(names.as_deref(), ProcessConfig::default())?;

        let mut options = GeneratorOptions::new(num_time_series, num_steps)?
            .with_stable_parameters(stable_parameters)
            .with_single_schedule(single_schedule)
            .with_strict_num_parts(strict_num_parts);
        if let Some(seed) = seed {
            options = options.with_seed(seed);
        }

        let inner = TimeSeriesGenerator::new(options, storage, kind.build(linspace))?;
        Ok(PyTimeSeriesGenerator { inner })
    }

    /// Generate `num_time_series` series; `points` (one row per series)
    /// supplies optional source data.
    #[pyo3(signature = (points = None), text_signature = "(self, /, points=None)")]
    pub fn generate_all<'py>(
        &mut self, py: Python<'py>, points: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<(Bound<'py, PyArray2<f64>>, PySegments)> {
        let points = points.map(|raw| extract_f64_matrix(py, raw)).transpose()?;
        let (matrix, series) = self.inner.generate_all(points.as_ref().map(|p| p.view()))?;
        Ok((matrix.into_pyarray(py), segments_of(&series)))
    }

    /// Generate one series per point, sharing process orders within each
    /// cluster label.
    #[pyo3(text_signature = "(self, points, clusters)")]
    pub fn generate_from_points<'py>(
        &mut self, py: Python<'py>, points: &Bound<'py, PyAny>, clusters: Vec<usize>,
    ) -> PyResult<(Bound<'py, PyArray2<f64>>, PySegments)> {
        let points = extract_f64_matrix(py, points)?;
        let (matrix, series) = self.inner.generate_from_points(points.view(), &clusters)?;
        Ok((matrix.into_pyarray(py), segments_of(&series)))
    }

    #[getter]
    pub fn processes(&self) -> Vec<String> {
        self.inner.storage().names().into_iter().map(str::to_string).collect()
    }

    #[getter]
    pub fn num_steps(&self) -> usize {
        self.inner.options().num_steps
    }
}

/// Sample `num_points` points on the 3-D unit sphere moved into the
/// non-negative orthant. Returns `(points, (min, max))`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (num_points, seed = None), text_signature = "(num_points, /, seed=None)")]
pub fn sample_points<'py>(
    py: Python<'py>, num_points: usize, seed: Option<u64>,
) -> PyResult<(Bound<'py, PyArray2<f64>>, (f64, f64))> {
    let mut rng = rng_from(seed);
    let sampled = sampling::sample_points(num_points, &mut rng)?;
    Ok((sampled.points.into_pyarray(py), sampled.border_values))
}

/// k-means labels for the rows of `points`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (points, n_clusters, max_iter = DEFAULT_MAX_ITER, seed = None),
    text_signature = "(points, n_clusters, /, max_iter=300, seed=None)"
)]
pub fn cluster_points<'py>(
    py: Python<'py>, points: &Bound<'py, PyAny>, n_clusters: usize, max_iter: usize,
    seed: Option<u64>,
) -> PyResult<Vec<usize>> {
    let points = extract_f64_matrix(py, points)?;
    let mut rng = rng_from(seed);
    Ok(sampling::cluster_points(points.view(), n_clusters, max_iter, &mut rng)?)
}

/// _synthetic_timeseries — PyO3 module initializer for the Python extension.
///
/// Creates the `generation` submodule, attaches it to the parent module, and
/// registers it in `sys.modules` so it is importable via a dotted path.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _synthetic_timeseries<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let generation_mod = PyModule::new(_py, "generation")?;
    generation(_py, m, &generation_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("synthetic_timeseries.generation", generation_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn generation<'py>(
    _py: Python, synthetic_timeseries: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyTimeSeriesGenerator>()?;
    m.add_function(wrap_pyfunction!(sample_points, m)?)?;
    m.add_function(wrap_pyfunction!(cluster_points, m)?)?;
    synthetic_timeseries.add_submodule(m)?;
    Ok(())
}
