//! Per-axis sizing state.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{compute_offsets, CumulativeOffsets};
use crate::error::{GridError, Result};

/// One dimension of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    /// Vertical axis; slot sizes are row heights
    Row,
    /// Horizontal axis; slot sizes are column widths
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// Sizing state for all slots of one axis.
///
/// `size` and `known` are parallel; `size[i]` is `None` whenever `known[i]`
/// is false. `None` slots use `default_size`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLayout {
    axis: Axis,
    size: Vec<Option<f32>>,
    known: Vec<bool>,
    default_size: f32,
    /// Bumped by every size-affecting mutation, for memoizing offsets
    #[serde(skip)]
    revision: u64,
}

impl AxisLayout {
    /// Create a layout of `count` default-sized slots.
    pub fn new(axis: Axis, count: usize, default_size: f32) -> Self {
        Self {
            axis,
            size: vec![None; count],
            known: vec![false; count],
            default_size,
            revision: 0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Slot count
    pub fn len(&self) -> usize {
        self.size.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    pub fn default_size(&self) -> f32 {
        self.default_size
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn sizes(&self) -> &[Option<f32>] {
        &self.size
    }

    pub fn known(&self) -> &[bool] {
        &self.known
    }

    /// Whether slot `slot` carries a committed size.
    pub fn is_known(&self, slot: usize) -> bool {
        self.known.get(slot).copied().unwrap_or(false)
    }

    /// Committed size if known, otherwise the axis default. `None` past the end.
    pub fn effective_size(&self, slot: usize) -> Option<f32> {
        let size = self.size.get(slot)?;
        if self.is_known(slot) {
            Some(size.unwrap_or(self.default_size))
        } else {
            Some(self.default_size)
        }
    }

    /// Full recompute of the cumulative offsets.
    pub fn offsets(&self) -> CumulativeOffsets {
        compute_offsets(&self.size, self.default_size)
    }

    /// Normalize an insertion index: `-1` appends, `-2` inserts before the last slot.
    ///
    /// Valid results lie in `[0, len]`.
    pub fn insertion_index(&self, index: i64) -> Result<usize> {
        self.normalize(index, 1, self.len())
    }

    /// Normalize an existing-slot index: `-1` is the last slot.
    ///
    /// Valid results lie in `[0, len)`.
    pub fn slot_index(&self, index: i64) -> Result<usize> {
        let len = self.len();
        self.normalize(index, 0, len.saturating_sub(1))
            .and_then(|slot| {
                if slot < len {
                    Ok(slot)
                } else {
                    Err(self.out_of_range(index))
                }
            })
    }

    fn normalize(&self, index: i64, from_end_bias: i64, max: usize) -> Result<usize> {
        let len = i64::try_from(self.len()).map_err(|_| self.out_of_range(index))?;
        let resolved = if index >= 0 {
            index
        } else {
            len.saturating_add(index).saturating_add(from_end_bias)
        };
        match usize::try_from(resolved) {
            Ok(slot) if slot <= max => Ok(slot),
            _ => Err(self.out_of_range(index)),
        }
    }

    fn out_of_range(&self, index: i64) -> GridError {
        GridError::IndexOutOfRange {
            axis: self.axis,
            index,
            len: self.len(),
        }
    }

    /// Reject negative or non-finite sizes.
    pub fn validate_size(axis: Axis, size: f32) -> Result<f32> {
        if size.is_finite() && size >= 0.0 {
            Ok(size)
        } else {
            Err(GridError::InvalidSize { axis, size })
        }
    }

    /// Replace every slot with `count` default-sized ones.
    pub(crate) fn reinit(&mut self, count: usize) {
        self.size = vec![None; count];
        self.known = vec![false; count];
        self.bump();
    }

    /// Insert a default-sized slot at `at` (already normalized, `<= len`).
    pub(crate) fn insert_slot(&mut self, at: usize) {
        let at = at.min(self.len());
        self.size.insert(at, None);
        self.known.insert(at, false);
        self.bump();
    }

    /// Remove slot `at`, returning its effective size.
    pub(crate) fn remove_slot(&mut self, at: usize) -> Option<f32> {
        let removed = self.effective_size(at)?;
        self.size.remove(at);
        self.known.remove(at);
        self.bump();
        Some(removed)
    }

    /// Commit a measured size for `at`.
    pub(crate) fn set_size(&mut self, at: usize, size: f32) -> Result<()> {
        let size = Self::validate_size(self.axis, size)?;
        let (Some(slot_size), Some(slot_known)) = (self.size.get_mut(at), self.known.get_mut(at))
        else {
            return Err(GridError::IndexOutOfRange {
                axis: self.axis,
                index: i64::try_from(at).unwrap_or(i64::MAX),
                len: self.size.len(),
            });
        };
        *slot_size = Some(size);
        *slot_known = true;
        self.bump();
        Ok(())
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
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
    fn test_new_axis_is_all_default() {
        let axis = AxisLayout::new(Axis::Row, 4, 30.0);
        assert_eq!(axis.len(), 4);
        assert!(axis.sizes().iter().all(Option::is_none));
        assert!(axis.known().iter().all(|k| !k));
        assert_eq!(axis.effective_size(3), Some(30.0));
        assert_eq!(axis.effective_size(4), None);
        assert_eq!(axis.offsets().total(), 120.0);
    }

    #[test]
    fn test_insertion_index_normalization() {
        let axis = AxisLayout::new(Axis::Row, 3, 30.0);
        assert_eq!(axis.insertion_index(0).unwrap(), 0);
        assert_eq!(axis.insertion_index(3).unwrap(), 3);
        assert_eq!(axis.insertion_index(-1).unwrap(), 3);
        assert_eq!(axis.insertion_index(-4).unwrap(), 0);
        assert!(matches!(
            axis.insertion_index(4),
            Err(GridError::IndexOutOfRange { index: 4, len: 3, .. })
        ));
        assert!(axis.insertion_index(-5).is_err());
    }

    #[test]
    fn test_slot_index_normalization() {
        let axis = AxisLayout::new(Axis::Column, 3, 30.0);
        assert_eq!(axis.slot_index(0).unwrap(), 0);
        assert_eq!(axis.slot_index(-1).unwrap(), 2);
        assert_eq!(axis.slot_index(-3).unwrap(), 0);
        assert!(axis.slot_index(3).is_err());
        assert!(axis.slot_index(-4).is_err());

        let empty = AxisLayout::new(Axis::Column, 0, 30.0);
        assert!(empty.slot_index(0).is_err());
        assert!(empty.slot_index(-1).is_err());
    }

    #[test]
    fn test_set_size_marks_known() {
        let mut axis = AxisLayout::new(Axis::Row, 3, 30.0);
        let before = axis.revision();
        axis.set_size(1, 12.5).unwrap();
        assert!(axis.is_known(1));
        assert_eq!(axis.sizes(), &[None, Some(12.5), None]);
        assert_eq!(axis.effective_size(1), Some(12.5));
        assert_eq!(axis.offsets().as_slice(), &[0.0, 30.0, 42.5, 72.5]);
        assert!(axis.revision() > before);
    }

    #[test]
    fn test_set_size_rejects_bad_values() {
        let mut axis = AxisLayout::new(Axis::Row, 2, 30.0);
        assert!(matches!(
            axis.set_size(0, -1.0),
            Err(GridError::InvalidSize { .. })
        ));
        assert!(axis.set_size(0, f32::NAN).is_err());
        assert!(axis.set_size(5, 10.0).is_err());
        assert!(axis.known().iter().all(|k| !k));
    }

    #[test]
    fn test_insert_and_remove_slot() {
        let mut axis = AxisLayout::new(Axis::Row, 2, 30.0);
        axis.set_size(1, 50.0).unwrap();
        axis.insert_slot(0);
        assert_eq!(axis.sizes(), &[None, None, Some(50.0)]);
        assert_eq!(axis.known(), &[false, false, true]);

        assert_eq!(axis.remove_slot(2), Some(50.0));
        assert_eq!(axis.remove_slot(9), None);
        assert_eq!(axis.len(), 2);
    }
}
