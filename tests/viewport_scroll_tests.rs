//! Viewport and scroll tests
//!
//! Tests for verifying scroll position handling, scroll-to-bottom and
//! visible row/column calculation through the grid state.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use vgrid::{Axis, GridCommand, GridState, ScrollOffset, Viewport, VisibleRange};

/// Create an initialized grid with a viewport
fn create_grid(rows: usize, columns: usize, width: f32, height: f32) -> GridState {
    let mut state = GridState::default();
    state.apply(&GridCommand::Init { rows, columns }).unwrap();
    state
        .apply(&GridCommand::Resize { width, height })
        .unwrap();
    state
}

fn scroll(state: &mut GridState, x: f32, y: f32) {
    state.apply(&GridCommand::Scroll { x, y }).unwrap();
}

#[test]
fn test_resize_is_verbatim() {
    let mut state = create_grid(3, 2, 60.0, 40.0);
    state
        .apply(&GridCommand::Resize {
            width: -1.0,
            height: 0.0,
        })
        .unwrap();
    assert_eq!(state.viewport(), Viewport::new(-1.0, 0.0));
}

#[test]
fn test_scroll_is_not_clamped() {
    let mut state = create_grid(3, 2, 60.0, 40.0);
    scroll(&mut state, 5_000.0, -250.0);
    assert_eq!(state.scroll(), ScrollOffset::new(5_000.0, -250.0));
}

#[test]
fn test_visible_rows_at_top() {
    let state = create_grid(3, 2, 60.0, 40.0);
    assert_eq!(
        state.visible_range(Axis::Row),
        VisibleRange { first: 0, last: 2 }
    );
    assert_eq!(
        state.visible_range(Axis::Column),
        VisibleRange { first: 0, last: 2 }
    );
}

#[test]
fn test_visible_rows_after_scroll() {
    let mut state = create_grid(3, 2, 60.0, 40.0);
    scroll(&mut state, 0.0, 31.0);
    let rows = state.visible_range(Axis::Row);
    assert_eq!(rows, VisibleRange { first: 1, last: 3 });
    assert_eq!(rows.iter().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_axes_resolve_independently() {
    let mut state = create_grid(100, 100, 90.0, 60.0);
    scroll(&mut state, 305.0, 0.0);
    // Columns: 305 lies in column 10 (300..330)
    assert_eq!(
        state.visible_range(Axis::Column),
        VisibleRange { first: 10, last: 14 }
    );
    assert_eq!(
        state.visible_range(Axis::Row),
        VisibleRange { first: 0, last: 3 }
    );
}

#[test]
fn test_negative_scroll_degrades_gracefully() {
    let mut state = create_grid(3, 2, 60.0, 40.0);
    scroll(&mut state, 0.0, -20.0);
    // Window -20..20 only reaches row 0
    assert_eq!(
        state.visible_range(Axis::Row),
        VisibleRange { first: 0, last: 1 }
    );
    scroll(&mut state, 0.0, -100.0);
    assert!(state.visible_range(Axis::Row).is_empty());
}

#[test]
fn test_scroll_past_content_degrades_gracefully() {
    let mut state = create_grid(3, 2, 60.0, 40.0);
    scroll(&mut state, 0.0, 10_000.0);
    let rows = state.visible_range(Axis::Row);
    assert!(rows.last <= state.row_count());
    assert!(rows.first <= rows.last);
}

#[test]
fn test_scroll_to_bottom_exact() {
    let mut state = create_grid(100, 2, 60.0, 400.0);
    state.apply(&GridCommand::ScrollToBottom).unwrap();
    assert_eq!(state.scroll().y, 3_000.0 - 400.0);
    // Horizontal offset untouched
    assert_eq!(state.scroll().x, 0.0);
    let rows = state.visible_range(Axis::Row);
    assert_eq!(rows.last, 100);
}

#[test]
fn test_scroll_to_bottom_short_content_goes_negative() {
    let mut state = create_grid(3, 2, 60.0, 400.0);
    state.apply(&GridCommand::ScrollToBottom).unwrap();
    assert_eq!(state.scroll().y, -310.0);
    assert_eq!(
        state.visible_range(Axis::Row),
        VisibleRange { first: 0, last: 3 }
    );
}

#[test]
fn test_scroll_to_bottom_uses_known_sizes() {
    let mut state = create_grid(3, 2, 60.0, 40.0);
    state
        .apply(&GridCommand::SetSize {
            axis: Axis::Row,
            index: 0,
            size: 100.0,
        })
        .unwrap();
    state.apply(&GridCommand::ScrollToBottom).unwrap();
    assert_eq!(state.scroll().y, 160.0 - 40.0);
}

#[test]
fn test_scroll_to_bottom_before_init() {
    let mut state = GridState::default();
    state
        .apply(&GridCommand::Resize {
            width: 10.0,
            height: 25.0,
        })
        .unwrap();
    state.apply(&GridCommand::ScrollToBottom).unwrap();
    assert_eq!(state.scroll().y, -25.0);
    assert!(state.visible_range(Axis::Row).is_empty());
}
