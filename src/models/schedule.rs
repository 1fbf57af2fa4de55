//! Schedule (solution) model for the batch scheduler.
//!
//! A schedule is a sequence of capacity-bounded batches plus the flattened
//! execution order and the total wall time. Jobs within one batch run
//! concurrently, so each batch contributes its slowest member's duration
//! (the bottleneck) to the total.

use serde::{Deserialize, Serialize};

/// A group of jobs processed together within one capacity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Member job identifiers, in the order they were packed.
    pub job_ids: Vec<String>,
    /// Accumulated volume of the members.
    pub volume: f64,
    /// Maximum member duration; the batch's wall-time contribution.
    pub bottleneck_time: i64,
}

/// A complete batching solution.
///
/// Produced fresh per call; carries no state beyond the answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Batches in processing order.
    pub batches: Vec<Batch>,
    /// Job identifiers flattened across batches (the execution order).
    pub execution_order: Vec<String>,
    /// Sum of per-batch bottleneck durations.
    pub total_time: i64,
}

impl Batch {
    /// Number of jobs in this batch.
    pub fn len(&self) -> usize {
        self.job_ids.len()
    }

    /// Whether the batch holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }
}

impl ScheduleResult {
    /// Number of batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.execution_order.len()
    }

    /// Finds the index of the batch containing a given job.
    pub fn batch_for_job(&self, job_id: &str) -> Option<usize> {
        self.batches
            .iter()
            .position(|b| b.job_ids.iter().any(|id| id == job_id))
    }
}
