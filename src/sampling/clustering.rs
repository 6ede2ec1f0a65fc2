//! k-means clustering of source points.
//!
//! Lloyd's algorithm with initial centroids drawn without replacement from
//! the points themselves. Labels feed [`crate::scheduler::SchedulerStorage`],
//! which shares one process order per cluster.
//!
//! An empty cluster keeps its previous centroid. Iteration stops when no
//! label changes or after `max_iter` rounds.
use crate::sampling::errors::{SamplingError, SamplingResult};
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::{RngCore, seq::index::sample};

pub const DEFAULT_MAX_ITER: usize = 300;

/// Cluster label (in `0..n_clusters`) for every row of `points`.
///
/// # Errors
/// - [`SamplingError::ZeroPoints`] for an empty matrix.
/// - [`SamplingError::InvalidClusterCount`] unless
///   `1 <= n_clusters <= points.nrows()`.
/// - [`SamplingError::NonFinitePoint`] for a NaN or infinite coordinate.
pub fn cluster_points(
    points: ArrayView2<'_, f64>, n_clusters: usize, max_iter: usize, rng: &mut dyn RngCore,
) -> SamplingResult<Vec<usize>> {
    let n_points = points.nrows();
    if n_points == 0 {
        return Err(SamplingError::ZeroPoints);
    }
    if n_clusters == 0 || n_clusters > n_points {
        return Err(SamplingError::InvalidClusterCount { n_clusters, points: n_points });
    }
    if let Some(((row, col), &value)) = points.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(SamplingError::NonFinitePoint { row, col, value });
    }

    let mut centroids = Array2::zeros((n_clusters, points.ncols()));
    let initial = sample(rng, n_points, n_clusters);
    for (mut centroid, index) in centroids.rows_mut().into_iter().zip(initial) {
        centroid.assign(&points.row(index));
    }
    let mut labels = assign_labels(points, centroids.view());
    for _ in 0..max_iter {
        update_centroids(points, &labels, &mut centroids);
        let next = assign_labels(points, centroids.view());
        if next == labels {
            break;
        }
        labels = next;
    }
    Ok(labels)
}

fn assign_labels(points: ArrayView2<'_, f64>, centroids: ArrayView2<'_, f64>) -> Vec<usize> {
    points.rows().into_iter().map(|point| nearest_centroid(point, centroids)).collect()
}

fn nearest_centroid(point: ArrayView1<'_, f64>, centroids: ArrayView2<'_, f64>) -> usize {
    let mut best = (0, f64::INFINITY);
    for (index, centroid) in centroids.rows().into_iter().enumerate() {
        let distance: f64 = point.iter().zip(centroid).map(|(a, b)| (a - b) * (a - b)).sum();
        if distance < best.1 {
            best = (index, distance);
        }
    }
    best.0
}

fn update_centroids(points: ArrayView2<'_, f64>, labels: &[usize], centroids: &mut Array2<f64>) {
    let mut sums = Array2::<f64>::zeros(centroids.dim());
    let mut counts = vec![0usize; centroids.nrows()];
    for (&label, point) in labels.iter().zip(points.rows()) {
        let mut sum = sums.row_mut(label);
        sum += &point;
        counts[label] += 1;
    }
    let rows = centroids.rows_mut().into_iter().zip(sums.rows()).zip(&counts);
    for ((mut centroid, sum), &count) in rows {
        if count > 0 {
            centroid.assign(&(&sum / count as f64));
        }
    }
}
