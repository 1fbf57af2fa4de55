//! Optimal rod partitioning (rod cutting).
//!
//! Given a target length and a price per segment length, computes the
//! maximum total value obtainable by cutting the length into
//! positive-integer segments, via the classic recurrence
//!
//! ```text
//! best(0) = 0
//! best(n) = max over i in 1..=n of price(i) + best(n - i)
//! ```
//!
//! Two strategies are exposed and must agree on every valid input:
//!
//! - [`solve_memo`]: demand-driven evaluation over an explicit cache and
//!   work stack (no recursion, so large lengths cannot overflow the call
//!   stack)
//! - [`solve_table`]: bottom-up table over `1..=length`
//!
//! Both return the winning segmentation (outermost segment first) and obey
//! the same tie-break: on equal value, the segmentation with the smaller
//! leading segment wins. That policy pins down a unique answer among
//! equal-value segmentations, so both strategies route through the shared
//! `best_split` selection and cannot drift apart.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1

mod memo;
mod table;

pub use memo::solve_memo;
pub use table::solve_table;

use crate::models::PriceTable;

/// Selects the best split for a rod of length `n`, given the already-solved
/// sub-lengths.
///
/// `best_for(m)` must return the optimal `(value, segments)` for every
/// `m in 1..n`. Starts from the "no cut" candidate (`price(n)`, `[n]`),
/// then tries each split point, placing the `n - split` segment first
/// followed by the cached segmentation of `split`. Replaces the running
/// best on strictly greater value, or on equal value with a strictly
/// smaller leading segment.
fn best_split<'a, F>(n: usize, prices: &PriceTable, best_for: F) -> (i64, Vec<usize>)
where
    F: Fn(usize) -> (i64, &'a [usize]),
{
    let mut value = prices.price(n);
    let mut segments = vec![n];

    for split in 1..n {
        let (sub_value, sub_segments) = best_for(split);
        let candidate = sub_value + prices.price(n - split);
        let leading = n - split;
        if candidate > value || (candidate == value && leading < segments[0]) {
            value = candidate;
            let mut combined = Vec::with_capacity(sub_segments.len() + 1);
            combined.push(leading);
            combined.extend_from_slice(sub_segments);
            segments = combined;
        }
    }

    (value, segments)
}
