//! Visible slot range resolution.

use std::ops::Range;

use serde::Serialize;

use super::CumulativeOffsets;

/// Extra slots kept on the leading edge of the visible range to reduce popping during scroll.
pub const OVERSCAN: usize = 1;

/// Half-open range `[first, last)` of slots to materialize along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VisibleRange {
    /// First slot to render (overscan applied)
    pub first: usize,
    /// One past the last slot to render
    pub last: usize,
}

impl VisibleRange {
    /// Number of slots to render; zero when `last <= first`
    pub fn len(&self) -> usize {
        self.last.saturating_sub(self.first)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, slot: usize) -> bool {
        slot >= self.first && slot < self.last
    }

    /// Iterate the slot indices in the range.
    pub fn iter(&self) -> Range<usize> {
        self.first..self.last.max(self.first)
    }
}

impl From<VisibleRange> for Range<usize> {
    fn from(range: VisibleRange) -> Self {
        range.iter()
    }
}

/// Resolve the slots intersecting the scroll window `[window_min, window_max)`.
///
/// `first` is the first boundary exceeding `window_min` (0 when none does),
/// then moved back by [`OVERSCAN`]. `last` is the first boundary exceeding
/// `window_max`, or the slot count when none does. Out-of-range windows
/// degrade to an empty or full range, never a failure.
pub fn find_range(offsets: &CumulativeOffsets, window_min: f32, window_max: f32) -> VisibleRange {
    let first = offsets
        .first_exceeding(window_min)
        .unwrap_or(0)
        .saturating_sub(OVERSCAN);
    let last = offsets
        .first_exceeding(window_max)
        .unwrap_or_else(|| offsets.slot_count());
    VisibleRange { first, last }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::layout::compute_offsets;

    fn three_rows() -> CumulativeOffsets {
        compute_offsets(&[None, None, None], 30.0)
    }

    #[test]
    fn test_top_of_grid() {
        let range = find_range(&three_rows(), 0.0, 40.0);
        assert_eq!(range, VisibleRange { first: 0, last: 2 });
        assert_eq!(range.len(), 2);
    }

    #[test]
    fn test_partially_scrolled() {
        let range = find_range(&three_rows(), 31.0, 71.0);
        assert_eq!(range, VisibleRange { first: 1, last: 3 });
    }

    #[test]
    fn test_window_past_content_renders_through_end() {
        let range = find_range(&three_rows(), 60.0, 100.0);
        assert_eq!(range, VisibleRange { first: 2, last: 3 });
    }

    #[test]
    fn test_empty_axis() {
        let range = find_range(&CumulativeOffsets::default(), 0.0, 500.0);
        assert!(range.is_empty());
        assert_eq!(range.iter().count(), 0);
    }

    #[test]
    fn test_negative_window() {
        let range = find_range(&three_rows(), -50.0, -10.0);
        assert_eq!(range.first, 0);
        assert_eq!(range.last, 0);
        assert!(range.is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = VisibleRange { first: 4, last: 2 };
        assert!(range.is_empty());
        assert_eq!(range.iter().count(), 0);
        assert!(!range.contains(3));
    }
}
