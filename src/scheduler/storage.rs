//! Per-cluster scheduler storage.
//!
//! Source points that share a cluster label share one process order, so
//! series generated from the same cluster switch processes at the same
//! steps while their parameters still follow each point's source data.
use crate::{
    process::storage::ProcessStorage,
    scheduler::{
        errors::{SchedulerError, SchedulerResult},
        scheduler::Scheduler,
    },
};
use rand::RngCore;
use std::collections::BTreeMap;

/// SchedulerStorage — one [`Scheduler`] per distinct cluster label.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerStorage {
    clusters: Vec<usize>,
    schedulers: BTreeMap<usize, Scheduler>,
}

impl SchedulerStorage {
    /// Build a scheduler for every distinct label in `clusters`, in order of
    /// first appearance.
    ///
    /// # Errors
    /// Propagates [`Scheduler::new`] failures.
    pub fn new(
        num_steps: usize, storage: &ProcessStorage, clusters: Vec<usize>, strict_num_parts: bool,
        rng: &mut dyn RngCore,
    ) -> SchedulerResult<Self> {
        let mut schedulers = BTreeMap::new();
        for &cluster in &clusters {
            if !schedulers.contains_key(&cluster) {
                let scheduler = Scheduler::new(num_steps, storage.clone(), strict_num_parts, rng)?;
                schedulers.insert(cluster, scheduler);
            }
        }
        Ok(SchedulerStorage { clusters, schedulers })
    }

    /// Cluster label of the point at `point_index`.
    ///
    /// # Errors
    /// [`SchedulerError::PointOutOfRange`] for an index past the labels.
    pub fn get_cluster(&self, point_index: usize) -> SchedulerResult<usize> {
        self.clusters.get(point_index).copied().ok_or(SchedulerError::PointOutOfRange {
            index: point_index,
            len: self.clusters.len(),
        })
    }

    /// # Errors
    /// [`SchedulerError::UnknownCluster`] when no point carries `cluster`.
    pub fn get_scheduler(&self, cluster: usize) -> SchedulerResult<&Scheduler> {
        self.schedulers.get(&cluster).ok_or(SchedulerError::UnknownCluster { cluster })
    }

    /// Scheduler of the cluster the point at `point_index` belongs to.
    pub fn scheduler_for_point(&self, point_index: usize) -> SchedulerResult<&Scheduler> {
        self.get_scheduler(self.get_cluster(point_index)?)
    }

    pub fn num_clusters(&self) -> usize {
        self.schedulers.len()
    }

    pub fn clusters(&self) -> &[usize] {
        &self.clusters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    // Purpose
    // -------
    // Verify one scheduler per distinct label, shared by every point of the
    // cluster.
    //
    // Given
    // -----
    // - labels [2, 0, 2, 5, 0].
    //
    // Expect
    // ------
    // - Three schedulers; points 0 and 2 share a process order.
    // - Unknown cluster and out-of-range point are errors.
    fn one_scheduler_per_cluster() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(300);

        // Act
        let registry = ProcessStorage::default();
        let storage =
            SchedulerStorage::new(64, &registry, vec![2, 0, 2, 5, 0], false, &mut rng).unwrap();

        // Assert
        assert_eq!(storage.num_clusters(), 3);
        assert_eq!(storage.get_cluster(3).unwrap(), 5);
        assert_eq!(
            storage.scheduler_for_point(0).unwrap().process_order(),
            storage.scheduler_for_point(2).unwrap().process_order()
        );
        assert_eq!(storage.get_scheduler(1).unwrap_err(), SchedulerError::UnknownCluster {
            cluster: 1
        });
        assert_eq!(storage.get_cluster(5).unwrap_err(), SchedulerError::PointOutOfRange {
            index: 5,
            len: 5
        });
    }
}
