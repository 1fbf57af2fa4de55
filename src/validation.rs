//! Input validation for both kernels.
//!
//! All input problems are detected here, synchronously at call entry,
//! before any solver logic runs. Detects:
//! - Non-positive capacity limits
//! - Duplicate job IDs
//! - Non-positive (or non-finite) job fields
//! - Jobs too large to ever fit a batch
//! - Price tables shorter than the target length
//!
//! The oversized-job check is load-bearing: a job whose volume alone exceeds
//! `max_volume` can never pass the greedy fits-check, so without this guard
//! the scheduler's scan would make no forward progress.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Capacity, Job, PriceTable};

/// Errors rejecting a batch-scheduling input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Capacity limits are non-positive.
    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),
    /// A job record is malformed or can never be scheduled.
    #[error("invalid job '{id}': {reason}")]
    InvalidJob {
        /// Offending job identifier.
        id: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Errors rejecting a partition-solver input.
///
/// Negative target lengths are unrepresentable (`usize`), so the only
/// rejectable input is a price table that does not cover the target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// The price table has fewer entries than the target length.
    #[error("price table covers lengths 1..={available}, but target length is {length}")]
    InsufficientPrices {
        /// Requested rod length.
        length: usize,
        /// Number of entries in the table.
        available: usize,
    },
}

/// Validates a batch-scheduling input.
///
/// Checks, in order:
/// 1. `max_volume > 0` and `max_items > 0`
/// 2. No duplicate job IDs
/// 3. Every job has finite positive volume, positive duration, priority >= 1
/// 4. Every job individually fits an empty batch (`volume <= max_volume`)
///
/// Returns the first violation found; a passing input guarantees the greedy
/// scan terminates with every job placed.
pub fn validate_schedule_input(jobs: &[Job], capacity: &Capacity) -> Result<(), ScheduleError> {
    // Negated comparison so NaN is rejected along with non-positive values.
    if !(capacity.max_volume > 0.0) {
        return Err(ScheduleError::InvalidConstraint(format!(
            "max_volume must be positive, got {}",
            capacity.max_volume
        )));
    }
    if capacity.max_items == 0 {
        return Err(ScheduleError::InvalidConstraint(
            "max_items must be positive, got 0".into(),
        ));
    }

    let mut seen = HashSet::new();
    for job in jobs {
        if !seen.insert(job.id.as_str()) {
            return Err(ScheduleError::InvalidJob {
                id: job.id.clone(),
                reason: "duplicate identifier".into(),
            });
        }
        if !job.volume.is_finite() || job.volume <= 0.0 {
            return Err(ScheduleError::InvalidJob {
                id: job.id.clone(),
                reason: format!("volume must be a positive finite number, got {}", job.volume),
            });
        }
        if job.priority < 1 {
            return Err(ScheduleError::InvalidJob {
                id: job.id.clone(),
                reason: format!("priority must be >= 1, got {}", job.priority),
            });
        }
        if job.duration <= 0 {
            return Err(ScheduleError::InvalidJob {
                id: job.id.clone(),
                reason: format!("duration must be positive, got {}", job.duration),
            });
        }
        if job.volume > capacity.max_volume {
            return Err(ScheduleError::InvalidJob {
                id: job.id.clone(),
                reason: format!(
                    "volume {} exceeds max_volume {}",
                    job.volume, capacity.max_volume
                ),
            });
        }
    }

    Ok(())
}

/// Validates a partition-solver input: the price table must cover every
/// segment length up to `length`.
pub fn validate_partition_input(length: usize, prices: &PriceTable) -> Result<(), PartitionError> {
    if prices.len() < length {
        return Err(PartitionError::InsufficientPrices {
            length,
            available: prices.len(),
        });
    }
    Ok(())
}
