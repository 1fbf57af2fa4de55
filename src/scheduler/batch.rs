//! Greedy priority-driven batch packer.
//!
//! # Algorithm
//!
//! 1. Validate the input (capacity limits, job fields, per-job fit).
//! 2. Stable-sort jobs ascending by `(priority, id)` — priority is the
//!    primary key (1 = most urgent), the identifier breaks ties so equal
//!    priorities produce the same order regardless of input order.
//! 3. Scan left to right, packing consecutive jobs into the open batch
//!    while both capacity limits hold; otherwise close it and start a new
//!    batch at the same job.
//!
//! The result is deterministic and the call is pure: no state survives it.

use crate::models::{Batch, Capacity, Job, ScheduleResult};
use crate::validation::{validate_schedule_input, ScheduleError};

/// Greedy capacity-bounded batch scheduler.
///
/// # Example
///
/// ```
/// use u_batchcut::models::{Capacity, Job};
/// use u_batchcut::scheduler::BatchScheduler;
///
/// let jobs = vec![
///     Job::new("M1", 100.0, 1, 120),
///     Job::new("M2", 150.0, 1, 90),
///     Job::new("M3", 120.0, 1, 150),
/// ];
/// let capacity = Capacity::new(300.0, 2);
///
/// let result = BatchScheduler::new().schedule(&jobs, &capacity).unwrap();
/// assert_eq!(result.execution_order, vec!["M1", "M2", "M3"]);
/// assert_eq!(result.total_time, 270);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchScheduler;

impl BatchScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Orders and groups jobs into capacity-bounded batches.
    ///
    /// Returns the batches, the flattened execution order, and the total
    /// time (sum of per-batch bottleneck durations). Fails on malformed
    /// input without scheduling anything; see [`ScheduleError`].
    pub fn schedule(
        &self,
        jobs: &[Job],
        capacity: &Capacity,
    ) -> Result<ScheduleResult, ScheduleError> {
        validate_schedule_input(jobs, capacity)?;

        let mut sorted: Vec<&Job> = jobs.iter().collect();
        sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let mut batches: Vec<Batch> = Vec::new();
        let mut execution_order: Vec<String> = Vec::with_capacity(jobs.len());
        let mut total_time: i64 = 0;

        let mut i = 0;
        while i < sorted.len() {
            let mut volume = 0.0_f64;
            let mut job_ids: Vec<String> = Vec::new();
            let mut bottleneck: i64 = 0;

            // Validation guarantees every job fits an empty batch, so each
            // outer iteration places at least one job.
            while i < sorted.len() {
                let job = sorted[i];
                if !capacity.admits(volume, job_ids.len(), job.volume) {
                    break;
                }
                volume += job.volume;
                bottleneck = bottleneck.max(job.duration);
                job_ids.push(job.id.clone());
                i += 1;
            }

            execution_order.extend(job_ids.iter().cloned());
            total_time += bottleneck;
            batches.push(Batch {
                job_ids,
                volume,
                bottleneck_time: bottleneck,
            });
        }

        Ok(ScheduleResult {
            batches,
            execution_order,
            total_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn capacity() -> Capacity {
        Capacity::new(300.0, 2)
    }

    #[test]
    fn test_same_priority_batches_by_id_order() {
        let jobs = vec![
            Job::new("M1", 100.0, 1, 120),
            Job::new("M2", 150.0, 1, 90),
            Job::new("M3", 120.0, 1, 150),
        ];

        let result = BatchScheduler::new().schedule(&jobs, &capacity()).unwrap();
        assert_eq!(result.execution_order, vec!["M1", "M2", "M3"]);
        // [M1, M2] bottleneck 120, [M3] bottleneck 150
        assert_eq!(result.total_time, 270);
        assert_eq!(result.batch_count(), 2);
        assert_eq!(result.batches[0].job_ids, vec!["M1", "M2"]);
        assert_eq!(result.batches[0].volume, 250.0);
    }

    #[test]
    fn test_priority_overrides_input_order() {
        let jobs = vec![
            Job::new("M1", 100.0, 2, 120),
            Job::new("M2", 150.0, 1, 90),
            Job::new("M3", 120.0, 3, 150),
        ];

        let result = BatchScheduler::new().schedule(&jobs, &capacity()).unwrap();
        assert_eq!(result.execution_order, vec!["M2", "M1", "M3"]);
        // [M2, M1] bottleneck 120, [M3] bottleneck 150
        assert_eq!(result.total_time, 270);
    }

    #[test]
    fn test_tight_capacity_makes_singleton_batches() {
        let jobs = vec![
            Job::new("M1", 250.0, 1, 180),
            Job::new("M2", 200.0, 1, 150),
            Job::new("M3", 180.0, 2, 120),
        ];

        let result = BatchScheduler::new().schedule(&jobs, &capacity()).unwrap();
        assert_eq!(result.execution_order, vec!["M1", "M2", "M3"]);
        assert_eq!(result.batch_count(), 3);
        assert_eq!(result.total_time, 180 + 150 + 120);
    }

    #[test]
    fn test_item_limit_closes_batch() {
        // Plenty of volume; only max_items forces splits.
        let jobs = vec![
            Job::new("A", 1.0, 1, 10),
            Job::new("B", 1.0, 1, 20),
            Job::new("C", 1.0, 1, 30),
        ];
        let result = BatchScheduler::new()
            .schedule(&jobs, &Capacity::new(1000.0, 2))
            .unwrap();
        assert_eq!(result.batch_count(), 2);
        assert_eq!(result.total_time, 20 + 30);
    }

    #[test]
    fn test_empty_input() {
        let result = BatchScheduler::new().schedule(&[], &capacity()).unwrap();
        assert_eq!(result.job_count(), 0);
        assert_eq!(result.batch_count(), 0);
        assert_eq!(result.total_time, 0);
    }

    #[test]
    fn test_oversized_job_is_rejected_up_front() {
        let jobs = vec![Job::new("M1", 100.0, 1, 60), Job::new("XL", 500.0, 1, 60)];
        let err = BatchScheduler::new()
            .schedule(&jobs, &capacity())
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidJob { ref id, .. } if id == "XL"));
    }

    #[test]
    fn test_invalid_capacity_is_rejected() {
        let jobs = vec![Job::new("M1", 100.0, 1, 60)];
        let err = BatchScheduler::new()
            .schedule(&jobs, &Capacity::new(300.0, 0))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConstraint(_)));
    }

    #[test]
    fn test_idempotent() {
        let jobs = vec![
            Job::new("M1", 100.0, 2, 120),
            Job::new("M2", 150.0, 1, 90),
            Job::new("M3", 120.0, 3, 150),
        ];
        let scheduler = BatchScheduler::new();
        let first = scheduler.schedule(&jobs, &capacity()).unwrap();
        let second = scheduler.schedule(&jobs, &capacity()).unwrap();
        assert_eq!(first, second);
    }

    fn random_jobs(rng: &mut SmallRng, count: usize, max_volume: f64) -> Vec<Job> {
        (0..count)
            .map(|k| {
                Job::new(
                    format!("J{k:03}"),
                    rng.random_range(1..=max_volume as i64) as f64,
                    rng.random_range(1..=3),
                    rng.random_range(1..=200),
                )
            })
            .collect()
    }

    #[test]
    fn test_order_is_permutation_and_sorted() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let cap = Capacity::new(150.0, rng.random_range(1..=4));
            let count = rng.random_range(0..=20);
            let jobs = random_jobs(&mut rng, count, cap.max_volume);
            let result = BatchScheduler::new().schedule(&jobs, &cap).unwrap();

            // Permutation: same ids, nothing dropped or duplicated.
            let mut got = result.execution_order.clone();
            let mut want: Vec<String> = jobs.iter().map(|j| j.id.clone()).collect();
            got.sort();
            want.sort();
            assert_eq!(got, want);

            // Non-decreasing (priority, id) across the full order.
            let by_id = |id: &str| jobs.iter().find(|j| j.id == id).unwrap();
            for pair in result.execution_order.windows(2) {
                let (a, b) = (by_id(&pair[0]), by_id(&pair[1]));
                assert!(a.sort_key() <= b.sort_key());
            }
        }
    }

    #[test]
    fn test_batches_respect_capacity() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let cap = Capacity::new(200.0, rng.random_range(1..=5));
            let count = rng.random_range(1..=25);
            let jobs = random_jobs(&mut rng, count, cap.max_volume);
            let result = BatchScheduler::new().schedule(&jobs, &cap).unwrap();

            for batch in &result.batches {
                assert!(!batch.is_empty());
                assert!(batch.len() <= cap.max_items);
                assert!(batch.volume <= cap.max_volume);
                let bottleneck = batch
                    .job_ids
                    .iter()
                    .map(|id| jobs.iter().find(|j| &j.id == id).unwrap().duration)
                    .max()
                    .unwrap();
                assert_eq!(batch.bottleneck_time, bottleneck);
            }
            let summed: i64 = result.batches.iter().map(|b| b.bottleneck_time).sum();
            assert_eq!(result.total_time, summed);
        }
    }
}
