//! Prefix-sum and visible-range tests
//!
//! Concrete scenarios on a small grid plus property tests over arbitrary
//! size sequences.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use proptest::prelude::*;
use vgrid::layout::{compute_offsets, find_range, VisibleRange};

const DEFAULT: f32 = 30.0;

fn uniform(count: usize) -> Vec<Option<f32>> {
    vec![None; count]
}

#[test]
fn test_three_rows_offsets() {
    let offsets = compute_offsets(&uniform(3), DEFAULT);
    assert_eq!(offsets.as_slice(), &[0.0, 30.0, 60.0, 90.0]);
    assert_eq!(offsets.total(), 90.0);
}

#[test]
fn test_range_at_top() {
    let offsets = compute_offsets(&uniform(3), DEFAULT);
    assert_eq!(
        find_range(&offsets, 0.0, 40.0),
        VisibleRange { first: 0, last: 2 }
    );
}

#[test]
fn test_range_scrolled_into_second_row() {
    let offsets = compute_offsets(&uniform(3), DEFAULT);
    assert_eq!(
        find_range(&offsets, 31.0, 71.0),
        VisibleRange { first: 1, last: 3 }
    );
}

#[test]
fn test_range_mixed_sizes() {
    let sizes = [Some(100.0), None, Some(5.0), None, Some(200.0)];
    let offsets = compute_offsets(&sizes, DEFAULT);
    assert_eq!(offsets.as_slice(), &[0.0, 100.0, 130.0, 135.0, 165.0, 365.0]);
    // Window 120..170 starts inside slot 1 and ends inside slot 4
    assert_eq!(
        find_range(&offsets, 120.0, 170.0),
        VisibleRange { first: 1, last: 5 }
    );
    // Entirely inside slot 3
    assert_eq!(
        find_range(&offsets, 140.0, 160.0),
        VisibleRange { first: 3, last: 4 }
    );
}

#[test]
fn test_large_axis() {
    let offsets = compute_offsets(&uniform(50_000), DEFAULT);
    assert_eq!(offsets.total(), 1_500_000.0);
    let range = find_range(&offsets, 900_000.0, 900_600.0);
    assert_eq!(range, VisibleRange { first: 30_000, last: 30_021 });
    assert_eq!(range.len(), 21);
}

#[test]
fn test_scroll_far_past_end_falls_back_to_defaults() {
    let offsets = compute_offsets(&uniform(3), DEFAULT);
    // No boundary exceeds either bound: first defaults to 0, last to the slot count
    assert_eq!(
        find_range(&offsets, 1_000.0, 1_040.0),
        VisibleRange { first: 0, last: 3 }
    );
}

#[test]
fn test_empty_axis_renders_nothing() {
    let offsets = compute_offsets(&[], DEFAULT);
    assert_eq!(offsets.as_slice(), &[0.0]);
    assert!(find_range(&offsets, 0.0, 100.0).is_empty());
    assert!(find_range(&offsets, -20.0, 100.0).is_empty());
}

#[test]
fn test_zero_viewport() {
    let offsets = compute_offsets(&uniform(3), DEFAULT);
    let range = find_range(&offsets, 45.0, 45.0);
    assert_eq!(range, VisibleRange { first: 1, last: 2 });
}

fn sizes_strategy() -> impl Strategy<Value = Vec<Option<f32>>> {
    prop::collection::vec(prop::option::of(0u16..500).prop_map(|s| s.map(f32::from)), 0..200)
}

proptest! {
    #[test]
    fn prop_prefix_sum_matches_running_total(
        sizes in sizes_strategy(),
        default in 0u16..200,
    ) {
        let default = f32::from(default);
        let offsets = compute_offsets(&sizes, default);
        prop_assert_eq!(offsets.as_slice().len(), sizes.len() + 1);
        prop_assert_eq!(offsets.as_slice()[0], 0.0);
        for i in 0..=sizes.len() {
            let expected: f32 = sizes[..i].iter().map(|s| s.unwrap_or(default)).sum();
            prop_assert_eq!(offsets.as_slice()[i], expected);
        }
    }

    #[test]
    fn prop_range_is_monotonic(
        sizes in sizes_strategy(),
        min in -100i32..20_000,
        extent in 0i32..2_000,
    ) {
        prop_assume!(!sizes.is_empty());
        let offsets = compute_offsets(&sizes, DEFAULT);
        let min = f32::from(i16::try_from(min / 2).unwrap());
        let max = min + f32::from(i16::try_from(extent).unwrap());
        let range = find_range(&offsets, min, max);
        prop_assert!(range.first <= range.last);
        prop_assert!(range.last <= sizes.len());
    }

    #[test]
    fn prop_overscan_is_exactly_one(
        sizes in sizes_strategy(),
        min in 0u16..20_000,
    ) {
        let offsets = compute_offsets(&sizes, DEFAULT);
        let min = f32::from(min);
        let naive = offsets.as_slice().iter().position(|&o| o > min).unwrap_or(0);
        let range = find_range(&offsets, min, min + 100.0);
        if naive > 0 {
            prop_assert_eq!(range.first, naive - 1);
        } else {
            prop_assert_eq!(range.first, 0);
        }
    }

    #[test]
    fn prop_binary_search_matches_linear_scan(
        sizes in sizes_strategy(),
        bound in -50i16..i16::MAX,
    ) {
        let offsets = compute_offsets(&sizes, DEFAULT);
        let bound = f32::from(bound);
        let linear = offsets.as_slice().iter().position(|&o| o > bound);
        prop_assert_eq!(offsets.first_exceeding(bound), linear);
    }
}
