//! Partition (rod-cutting) result model.

use serde::{Deserialize, Serialize};

/// An optimal partition of a rod into priced segments.
///
/// `segments` lists the chosen segment lengths with the outermost segment
/// first; they always sum to the solved length. `segment_count` is the
/// number of internal cuts: one less than the number of segments, or 0 when
/// the rod is kept whole (or has length 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionResult {
    /// Best achievable total value.
    pub max_value: i64,
    /// Segment lengths achieving `max_value`, outermost first.
    pub segments: Vec<usize>,
    /// Number of internal cuts (`segments.len() - 1`, or 0 when empty).
    pub segment_count: usize,
}

impl PartitionResult {
    /// Builds a result from a value and its segmentation, deriving the
    /// cut count.
    pub(crate) fn from_parts(max_value: i64, segments: Vec<usize>) -> Self {
        let segment_count = segments.len().saturating_sub(1);
        Self {
            max_value,
            segments,
            segment_count,
        }
    }

    /// Total length covered by the segmentation.
    pub fn total_length(&self) -> usize {
        self.segments.iter().sum()
    }
}
