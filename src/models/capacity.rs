//! Capacity (batch constraint) model.

use serde::{Deserialize, Serialize};

/// Limits on a single concurrently-processed batch.
///
/// A batch may hold at most `max_items` jobs whose volumes sum to at most
/// `max_volume`. Every individual job must fit an empty batch
/// (`job.volume <= max_volume`) to ever be schedulable; the scheduler
/// rejects inputs violating this before the greedy pass starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    /// Maximum total volume per batch (> 0).
    pub max_volume: f64,
    /// Maximum number of jobs per batch (> 0).
    pub max_items: usize,
}

impl Capacity {
    /// Creates a new capacity constraint.
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    /// Whether a batch holding `count` jobs of total `volume` can accept
    /// one more job of `job_volume`.
    #[inline]
    pub fn admits(&self, volume: f64, count: usize, job_volume: f64) -> bool {
        volume + job_volume <= self.max_volume && count + 1 <= self.max_items
    }
}
