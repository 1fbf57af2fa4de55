//! Domain models for the batching and partitioning kernels.
//!
//! Provides the input records and result types for both solvers. All types
//! are plain immutable data: constructed by the caller (or returned by a
//! solver), never mutated afterwards, and owned entirely by the call that
//! uses them.
//!
//! # Domain Mappings
//!
//! | u-batchcut | 3D Printing | Manufacturing | Logistics |
//! |------------|-------------|---------------|-----------|
//! | Job | Print model | Production lot | Parcel |
//! | Capacity | Build plate | Oven/kiln window | Vehicle |
//! | Batch | Plate load | Firing batch | Trip |
//! | PriceTable | — | Stock-cutting prices | Tariff table |

mod capacity;
mod job;
mod partition;
mod price_table;
mod schedule;

pub use capacity::Capacity;
pub use job::Job;
pub use partition::PartitionResult;
pub use price_table::PriceTable;
pub use schedule::{Batch, ScheduleResult};
