//! Prefix sums over slot sizes.
//!
//! Offsets are recomputed in full whenever an axis changes. For axes in the
//! tens of thousands this is a single linear pass, cheap enough per layout change.

use serde::Serialize;

/// Cumulative slot boundaries along one axis.
///
/// Element `i` is the start of slot `i`, element `slot_count()` is the total
/// axis extent. Always holds at least one element (`0.0`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CumulativeOffsets(Vec<f32>);

impl Default for CumulativeOffsets {
    fn default() -> Self {
        Self(vec![0.0])
    }
}

/// Compute cumulative offsets from per-slot sizes.
///
/// `None` slots fall back to `default_size`. The result is one element longer
/// than `sizes`, starting at `0.0`.
pub fn compute_offsets(sizes: &[Option<f32>], default_size: f32) -> CumulativeOffsets {
    let mut offsets = Vec::with_capacity(sizes.len() + 1);
    let mut acc: f32 = 0.0;
    offsets.push(acc);
    for size in sizes {
        acc += size.unwrap_or(default_size);
        offsets.push(acc);
    }
    CumulativeOffsets(offsets)
}

impl CumulativeOffsets {
    /// Raw boundary sequence.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Number of slots described by these offsets.
    pub fn slot_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Total axis extent (last boundary)
    pub fn total(&self) -> f32 {
        self.0.last().copied().unwrap_or(0.0)
    }

    /// Start boundary of `slot`
    pub fn start(&self, slot: usize) -> Option<f32> {
        if slot >= self.slot_count() {
            return None;
        }
        self.0.get(slot).copied()
    }

    /// End boundary of `slot`
    pub fn end(&self, slot: usize) -> Option<f32> {
        if slot >= self.slot_count() {
            return None;
        }
        self.0.get(slot + 1).copied()
    }

    /// Index of the first boundary strictly greater than `bound`.
    ///
    /// Boundaries are non-decreasing, so this is a binary partition.
    pub fn first_exceeding(&self, bound: f32) -> Option<usize> {
        let idx = self.0.partition_point(|&offset| offset <= bound);
        (idx < self.0.len()).then_some(idx)
    }

    /// Find the slot containing `pos` (binary search).
    ///
    /// Returns `None` for positions before `0.0` or at/after the total extent.
    pub fn slot_at(&self, pos: f32) -> Option<usize> {
        self.first_exceeding(pos)?.checked_sub(1)
    }
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

    #[test]
    fn test_empty_sizes() {
        let offsets = compute_offsets(&[], 30.0);
        assert_eq!(offsets.as_slice(), &[0.0]);
        assert_eq!(offsets.slot_count(), 0);
        assert_eq!(offsets.total(), 0.0);
        assert_eq!(offsets, CumulativeOffsets::default());
    }

    #[test]
    fn test_defaults_and_known_sizes() {
        let offsets = compute_offsets(&[None, Some(10.0), None, Some(0.0)], 30.0);
        assert_eq!(offsets.as_slice(), &[0.0, 30.0, 40.0, 70.0, 70.0]);
        assert_eq!(offsets.start(1), Some(30.0));
        assert_eq!(offsets.end(1), Some(40.0));
        assert_eq!(offsets.start(4), None);
    }

    #[test]
    fn test_first_exceeding() {
        let offsets = compute_offsets(&[None, None, None], 30.0);
        assert_eq!(offsets.first_exceeding(-1.0), Some(0));
        assert_eq!(offsets.first_exceeding(0.0), Some(1));
        assert_eq!(offsets.first_exceeding(30.0), Some(2));
        assert_eq!(offsets.first_exceeding(31.0), Some(2));
        assert_eq!(offsets.first_exceeding(89.9), Some(3));
        assert_eq!(offsets.first_exceeding(90.0), None);
    }

    #[test]
    fn test_slot_at() {
        let offsets = compute_offsets(&[None, Some(0.0), None], 30.0);
        assert_eq!(offsets.slot_at(-5.0), None);
        assert_eq!(offsets.slot_at(0.0), Some(0));
        assert_eq!(offsets.slot_at(29.0), Some(0));
        // Zero-sized slot 1 is never hit; 30.0 lands in slot 2
        assert_eq!(offsets.slot_at(30.0), Some(2));
        assert_eq!(offsets.slot_at(60.0), None);
    }
}
