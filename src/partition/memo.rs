//! Memoized (demand-driven) rod-cutting strategy.
//!
//! Equivalent to the naive recursion `best(n) = max(price(i) + best(n-i))`,
//! but runs over an explicit cache and work stack instead of the call
//! stack: a length is popped, its unsolved sub-lengths are pushed, and it
//! is re-visited once they are all cached. Each length is solved at most
//! once and the cache lives only for the duration of the call.

use std::collections::HashMap;

use crate::models::{PartitionResult, PriceTable};
use crate::validation::{validate_partition_input, PartitionError};

/// Solves the rod-cutting problem by demand-driven memoization.
///
/// Returns the best achievable value, the winning segmentation (outermost
/// segment first; on value ties the smaller leading segment wins), and the
/// number of internal cuts. Produces results identical to
/// [`solve_table`](super::solve_table) for every valid input.
///
/// # Example
///
/// ```
/// use u_batchcut::models::PriceTable;
/// use u_batchcut::partition::solve_memo;
///
/// let prices = PriceTable::new(vec![1, 3, 8]);
/// let result = solve_memo(3, &prices).unwrap();
/// assert_eq!(result.max_value, 8);
/// assert_eq!(result.segments, vec![3]); // keeping the rod whole is optimal
/// assert_eq!(result.segment_count, 0);
/// ```
pub fn solve_memo(length: usize, prices: &PriceTable) -> Result<PartitionResult, PartitionError> {
    validate_partition_input(length, prices)?;

    // length -> (best value, winning segmentation, outermost first)
    let mut cache: HashMap<usize, (i64, Vec<usize>)> = HashMap::new();
    cache.insert(0, (0, Vec::new()));

    let mut pending = vec![length];
    while let Some(n) = pending.pop() {
        if cache.contains_key(&n) {
            continue;
        }

        let missing: Vec<usize> = (1..n).filter(|m| !cache.contains_key(m)).collect();
        if !missing.is_empty() {
            // Re-visit n after its sub-lengths are solved.
            pending.push(n);
            pending.extend(missing);
            continue;
        }

        let solved = super::best_split(n, prices, |m| {
            let (value, segments) = &cache[&m];
            (*value, segments.as_slice())
        });
        cache.insert(n, solved);
    }

    let (max_value, segments) = cache.remove(&length).unwrap_or((0, Vec::new()));
    Ok(PartitionResult::from_parts(max_value, segments))
}
