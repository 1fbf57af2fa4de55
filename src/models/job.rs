//! Job (work item) model.
//!
//! A job is a single indivisible unit of work submitted to the batch
//! scheduler: it occupies volume inside a capacity window and takes a fixed
//! duration to process.

use serde::{Deserialize, Serialize};

/// A job to be batch-scheduled.
///
/// Immutable once constructed. The scheduler never mutates jobs; it only
/// orders and groups them.
///
/// # Time Representation
/// Durations are in abstract time units; the consumer defines the unit
/// (e.g., minutes). A batch's wall time is the maximum duration among its
/// members, since members of one batch run concurrently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Volume consumed inside a capacity window (> 0).
    pub volume: f64,
    /// Scheduling priority (>= 1, where 1 = most urgent).
    pub priority: i32,
    /// Processing duration in time units (> 0).
    pub duration: i64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, volume: f64, priority: i32, duration: i64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            duration,
        }
    }

    /// Sort key used by the scheduler: priority first (lower = earlier),
    /// identifier as the deterministic tie-break.
    pub fn sort_key(&self) -> (i32, &str) {
        (self.priority, self.id.as_str())
    }
}
