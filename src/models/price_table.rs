//! Price table for the partition solver.

use serde::{Deserialize, Serialize};

/// Per-length prices for rod segments.
///
/// Entry `k - 1` holds the value of a standalone segment of length `k`,
/// for `k` in `1..=len()`. A solve for target length `n` requires at least
/// `n` entries; `validation::validate_partition_input` enforces this before
/// any lookup happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: Vec<i64>,
}

impl PriceTable {
    /// Creates a price table from per-length prices.
    pub fn new(prices: Vec<i64>) -> Self {
        Self { prices }
    }

    /// Price of a standalone segment of length `segment_len`.
    ///
    /// # Panics
    /// Panics if `segment_len` is 0 or exceeds the table length. The solvers
    /// only call this for lengths in `1..=length` after validation.
    #[inline]
    pub fn price(&self, segment_len: usize) -> i64 {
        self.prices[segment_len - 1]
    }

    /// Longest segment length this table covers.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl From<Vec<i64>> for PriceTable {
    fn from(prices: Vec<i64>) -> Self {
        Self::new(prices)
    }
}
