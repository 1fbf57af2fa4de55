//! Tabulated (bottom-up) rod-cutting strategy.

use crate::models::{PartitionResult, PriceTable};
use crate::validation::{validate_partition_input, PartitionError};

/// Solves the rod-cutting problem by bottom-up tabulation.
///
/// Builds `best(n)` for `n = 1..=length` from previously solved entries,
/// applying the same candidate order and tie-break as
/// [`solve_memo`](super::solve_memo); the two strategies return identical
/// results for every valid input.
///
/// # Example
///
/// ```
/// use u_batchcut::models::PriceTable;
/// use u_batchcut::partition::solve_table;
///
/// let prices = PriceTable::new(vec![2, 5, 7, 8, 10]);
/// let result = solve_table(5, &prices).unwrap();
/// assert_eq!(result.max_value, 12);
/// assert_eq!(result.segment_count, 2);
/// ```
pub fn solve_table(length: usize, prices: &PriceTable) -> Result<PartitionResult, PartitionError> {
    validate_partition_input(length, prices)?;

    let mut best_value = vec![0_i64; length + 1];
    let mut best_segments: Vec<Vec<usize>> = vec![Vec::new(); length + 1];

    for n in 1..=length {
        let (value, segments) = super::best_split(n, prices, |m| {
            (best_value[m], best_segments[m].as_slice())
        });
        best_value[n] = value;
        best_segments[n] = segments;
    }

    let segments = std::mem::take(&mut best_segments[length]);
    Ok(PartitionResult::from_parts(best_value[length], segments))
}
