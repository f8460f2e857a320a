//! Offsets memoization keyed on axis revision.

use std::cell::RefCell;
use std::rc::Rc;

use crate::layout::{AxisLayout, CumulativeOffsets};

/// Cached offsets for one axis. Recomputed when the axis revision changes.
#[derive(Debug, Default)]
pub(crate) struct OffsetsCache {
    entry: RefCell<Option<(u64, Rc<CumulativeOffsets>)>>,
}

impl OffsetsCache {
    pub(crate) fn get(&self, layout: &AxisLayout) -> Rc<CumulativeOffsets> {
        let mut entry = self.entry.borrow_mut();
        if let Some((revision, offsets)) = entry.as_ref() {
            if *revision == layout.revision() {
                return Rc::clone(offsets);
            }
        }
        let offsets = Rc::new(layout.offsets());
        *entry = Some((layout.revision(), Rc::clone(&offsets)));
        offsets
    }

    pub(crate) fn invalidate(&self) {
        self.entry.borrow_mut().take();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::layout::Axis;

    #[test]
    fn test_reuses_until_revision_changes() {
        let cache = OffsetsCache::default();
        let mut layout = AxisLayout::new(Axis::Row, 3, 30.0);

        let first = cache.get(&layout);
        let second = cache.get(&layout);
        assert!(Rc::ptr_eq(&first, &second));

        layout.set_size(0, 10.0).unwrap();
        let third = cache.get(&layout);
        assert!(!Rc::ptr_eq(&first, &third));
        assert_eq!(third.total(), 70.0);
    }

    #[test]
    fn test_invalidate() {
        let cache = OffsetsCache::default();
        let layout = AxisLayout::new(Axis::Column, 2, 30.0);
        let first = cache.get(&layout);
        cache.invalidate();
        assert!(!Rc::ptr_eq(&first, &cache.get(&layout)));
    }
}
