//! Offline optimization kernels for the U-Engine ecosystem.
//!
//! Provides two independent, purely functional solvers:
//!
//! - **Batch scheduling** (`scheduler`): orders jobs by priority and greedily
//!   packs them into capacity-bounded batches. A batch runs concurrently, so
//!   its wall time is the duration of its slowest member.
//! - **Rod partitioning** (`partition`): maximizes total value when cutting a
//!   length into positive-integer segments, given a per-length price table.
//!   Two equivalent dynamic-programming strategies are provided (memoized and
//!   tabulated) and must agree on every valid input.
//!
//! The two kernels share no control or data flow; they live together because
//! each is a small, complete optimization routine with the same purely
//! functional boundary: one offline decision per call, no ongoing state, no
//! retries, no internal concurrency.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Capacity`, `Batch`,
//!   `ScheduleResult`, `PriceTable`, `PartitionResult`
//! - **`scheduler`**: Greedy capacity-bounded batch scheduler
//! - **`partition`**: Rod-cutting solvers (memoized and tabulated)
//! - **`validation`**: Input integrity checks and error types
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1 (Rod Cutting)

pub mod models;
pub mod partition;
pub mod scheduler;
pub mod validation;
