//! Capacity-bounded batch scheduling.
//!
//! # Algorithm
//!
//! `BatchScheduler` sorts jobs by `(priority, id)` and packs the sorted
//! sequence greedily into batches, closing a batch as soon as the next job
//! would exceed the volume or item limit. Jobs in one batch run
//! concurrently, so total time sums the per-batch bottleneck durations.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the packing pass.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4:
//! Priority Dispatching

mod batch;

pub use batch::BatchScheduler;
