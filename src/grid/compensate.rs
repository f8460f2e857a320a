//! Scroll compensation for slot insertion and removal.
//!
//! When a slot is added or removed above (or inside) the scrolled-to region,
//! the scroll offset moves by that slot's size so content already on screen
//! keeps its apparent position.

use serde::{Deserialize, Serialize};

use crate::layout::AxisLayout;

/// How insertions and removals decide whether to move the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompensationPolicy {
    /// Walk slots from the top while spending the `scroll + viewport` budget.
    /// Fires when the insertion point is reached with budget left.
    #[default]
    ForwardWalk,
    /// Keep the slot at the top of the viewport (the anchor) fixed on screen.
    Anchor,
}

/// Scroll window along the compensated axis.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AxisWindow {
    pub scroll: f32,
    pub extent: f32,
}

/// Scroll delta for inserting a default-sized slot at `at` (pre-insert layout).
pub(crate) fn insertion_shift(
    policy: CompensationPolicy,
    layout: &AxisLayout,
    at: usize,
    window: AxisWindow,
) -> f32 {
    let inserted = layout.default_size();
    let fires = match policy {
        CompensationPolicy::ForwardWalk => walk_reaches(layout, at, window),
        CompensationPolicy::Anchor => {
            anchor_slot(layout, window.scroll).is_some_and(|anchor| at <= anchor)
        }
    };
    if fires {
        inserted
    } else {
        0.0
    }
}

/// Scroll delta (zero or negative) for removing slot `at` (pre-removal layout).
///
/// Never moves a non-negative scroll offset below zero.
pub(crate) fn removal_shift(
    policy: CompensationPolicy,
    layout: &AxisLayout,
    at: usize,
    window: AxisWindow,
) -> f32 {
    let Some(removed) = layout.effective_size(at) else {
        return 0.0;
    };
    let back = match policy {
        CompensationPolicy::ForwardWalk => {
            if walk_reaches(layout, at, window) {
                removed
            } else {
                0.0
            }
        }
        CompensationPolicy::Anchor => {
            // Past the end or on an empty axis nothing is on screen to hold
            let Some(anchor) = anchor_slot(layout, window.scroll) else {
                return 0.0;
            };
            if at < anchor {
                removed
            } else if at == anchor {
                // Snap to where the removed anchor started
                let start = layout.offsets().start(at).unwrap_or(0.0);
                window.scroll - start
            } else {
                0.0
            }
        }
    };
    let back = back.min(window.scroll.max(0.0)).max(0.0);
    -back
}

/// Forward walk over the pre-mutation sizes.
///
/// `remaining` starts at `scroll + extent` and each visited slot spends its
/// effective size. The boundary case `remaining + scroll - extent == 0`
/// counts as firing, so prepending at the very top compensates.
fn walk_reaches(layout: &AxisLayout, at: usize, window: AxisWindow) -> bool {
    let mut remaining = window.scroll + window.extent;
    let mut slot = 0;
    while slot < at && remaining > 0.0 {
        remaining -= layout.effective_size(slot).unwrap_or(layout.default_size());
        slot += 1;
    }
    slot == at && remaining + window.scroll - window.extent >= 0.0
}

/// Slot whose span contains `scroll`; a negative scroll anchors on slot 0.
///
/// `None` on an empty axis or when `scroll` is at or past the content end.
fn anchor_slot(layout: &AxisLayout, scroll: f32) -> Option<usize> {
    layout
        .offsets()
        .first_exceeding(scroll)
        .map(|idx| idx.saturating_sub(1))
        .filter(|&anchor| anchor < layout.len())
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
    use crate::layout::Axis;

    fn rows(count: usize) -> AxisLayout {
        AxisLayout::new(Axis::Row, count, 30.0)
    }

    fn window(scroll: f32, extent: f32) -> AxisWindow {
        AxisWindow { scroll, extent }
    }

    #[test]
    fn test_walk_prepend_at_top_fires() {
        let shift = insertion_shift(CompensationPolicy::ForwardWalk, &rows(3), 0, window(0.0, 40.0));
        assert_eq!(shift, 30.0);
    }

    #[test]
    fn test_walk_below_fold_does_not_fire() {
        let shift = insertion_shift(CompensationPolicy::ForwardWalk, &rows(3), 3, window(0.0, 40.0));
        assert_eq!(shift, 0.0);
        let shift = insertion_shift(CompensationPolicy::ForwardWalk, &rows(3), 1, window(0.0, 40.0));
        assert_eq!(shift, 0.0);
    }

    #[test]
    fn test_walk_inside_scrolled_window_fires() {
        // Viewing 31..71; row 1 starts at 30, above the fold
        let shift = insertion_shift(CompensationPolicy::ForwardWalk, &rows(3), 1, window(31.0, 40.0));
        assert_eq!(shift, 30.0);
        // Append after the last row is past the forward budget
        let shift = insertion_shift(CompensationPolicy::ForwardWalk, &rows(3), 3, window(31.0, 40.0));
        assert_eq!(shift, 0.0);
    }

    #[test]
    fn test_anchor_insertion() {
        let layout = rows(10);
        // Anchor is row 2 (60..90)
        let w = window(75.0, 40.0);
        assert_eq!(insertion_shift(CompensationPolicy::Anchor, &layout, 0, w), 30.0);
        assert_eq!(insertion_shift(CompensationPolicy::Anchor, &layout, 2, w), 30.0);
        assert_eq!(insertion_shift(CompensationPolicy::Anchor, &layout, 3, w), 0.0);
    }

    #[test]
    fn test_anchor_removal() {
        let mut layout = rows(10);
        layout.set_size(0, 50.0).unwrap();
        // Offsets: 0, 50, 80, 110 ...; anchor at scroll 90 is row 2
        let w = window(90.0, 40.0);
        assert_eq!(removal_shift(CompensationPolicy::Anchor, &layout, 0, w), -50.0);
        assert_eq!(removal_shift(CompensationPolicy::Anchor, &layout, 2, w), -10.0);
        assert_eq!(removal_shift(CompensationPolicy::Anchor, &layout, 5, w), 0.0);
    }

    #[test]
    fn test_removal_never_scrolls_past_top() {
        let shift = removal_shift(CompensationPolicy::ForwardWalk, &rows(3), 0, window(0.0, 40.0));
        assert_eq!(shift, 0.0);
        let shift = removal_shift(CompensationPolicy::ForwardWalk, &rows(3), 0, window(10.0, 40.0));
        assert_eq!(shift, -10.0);
    }

    #[test]
    fn test_anchor_missing_past_end() {
        let layout = rows(3);
        assert_eq!(anchor_slot(&layout, 89.0), Some(2));
        assert_eq!(anchor_slot(&layout, 90.0), None);
        assert_eq!(anchor_slot(&layout, -5.0), Some(0));
        assert_eq!(anchor_slot(&rows(0), -5.0), None);
        assert_eq!(anchor_slot(&rows(0), 0.0), None);

        let w = window(90.0, 40.0);
        assert_eq!(insertion_shift(CompensationPolicy::Anchor, &layout, 0, w), 0.0);
        assert_eq!(insertion_shift(CompensationPolicy::Anchor, &layout, 3, w), 0.0);
        assert_eq!(removal_shift(CompensationPolicy::Anchor, &layout, 0, w), 0.0);
    }

    #[test]
    fn test_removal_past_end_is_noop() {
        let shift = removal_shift(CompensationPolicy::Anchor, &rows(3), 7, window(10.0, 40.0));
        assert_eq!(shift, 0.0);
    }
}
