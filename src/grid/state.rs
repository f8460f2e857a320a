//! Authoritative grid state and its transition function.

use serde::Serialize;
use tracing::{debug, warn};

use super::compensate::{insertion_shift, removal_shift, AxisWindow};
use super::{GridCommand, GridConfig, GridContent};
use crate::error::{GridError, Result};
use crate::layout::{
    find_range, scroll_window, Axis, AxisLayout, CumulativeOffsets, ScrollOffset, Viewport,
    VisibleRange,
};

/// Complete grid state: per-axis layouts, viewport, scroll offset and content.
///
/// Changes only through [`GridState::apply`] (in place) or [`reduce`] (by value).
/// A rejected command leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridState {
    #[serde(skip)]
    config: GridConfig,
    rows: AxisLayout,
    columns: AxisLayout,
    viewport: Viewport,
    scroll: ScrollOffset,
    content: GridContent,
    initialized: bool,
}

impl Default for GridState {
    fn default() -> Self {
        Self::with_config(GridConfig::default())
    }
}

/// Apply `command` to a copy of `state`, returning the new state.
///
/// # Errors
/// Returns the same errors as [`GridState::apply`]; `state` is never modified.
pub fn reduce(state: &GridState, command: &GridCommand) -> Result<GridState> {
    let mut next = state.clone();
    next.apply(command)?;
    Ok(next)
}

impl GridState {
    /// Create an empty, uninitialized grid.
    ///
    /// # Errors
    /// Returns `InvalidSize` if the configured default sizes are unusable.
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: GridConfig) -> Self {
        Self {
            rows: AxisLayout::new(Axis::Row, 0, config.default_size(Axis::Row)),
            columns: AxisLayout::new(Axis::Column, 0, config.default_size(Axis::Column)),
            viewport: Viewport::default(),
            scroll: ScrollOffset::default(),
            content: GridContent::default(),
            initialized: false,
            config,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn rows(&self) -> &AxisLayout {
        &self.rows
    }

    pub fn columns(&self) -> &AxisLayout {
        &self.columns
    }

    /// Layout for `axis`
    pub fn axis(&self, axis: Axis) -> &AxisLayout {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    pub fn content(&self) -> &GridContent {
        &self.content
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Cell value at `(row, column)`
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.content.cell(row, column)
    }

    /// Effective size of `slot` along `axis`
    pub fn effective_size(&self, axis: Axis, slot: usize) -> Option<f32> {
        self.axis(axis).effective_size(slot)
    }

    /// Freshly computed cumulative offsets for `axis`
    pub fn offsets(&self, axis: Axis) -> CumulativeOffsets {
        self.axis(axis).offsets()
    }

    /// Total content width
    pub fn total_width(&self) -> f32 {
        self.columns.offsets().total()
    }

    /// Total content height
    pub fn total_height(&self) -> f32 {
        self.rows.offsets().total()
    }

    /// Visible slot range along `axis` for the current viewport and scroll.
    pub fn visible_range(&self, axis: Axis) -> VisibleRange {
        self.visible_range_in(axis, &self.offsets(axis))
    }

    /// Visible slot range along `axis` using precomputed `offsets`.
    pub fn visible_range_in(&self, axis: Axis, offsets: &CumulativeOffsets) -> VisibleRange {
        let (min, max) = scroll_window(&self.viewport, &self.scroll, axis);
        find_range(offsets, min, max)
    }

    /// Apply a command in place.
    ///
    /// # Errors
    /// - `AlreadyInitialized` for `Init` on an initialized grid
    /// - `NotInitialized` for structural commands before `Init`
    /// - `IndexOutOfRange` / `InvalidSize` for bad slot arguments
    pub fn apply(&mut self, command: &GridCommand) -> Result<()> {
        let outcome = self.apply_inner(command);
        match &outcome {
            Ok(()) => debug!(
                command = command.kind(),
                rows = self.rows.len(),
                columns = self.columns.len(),
                scroll_x = self.scroll.x,
                scroll_y = self.scroll.y,
                "applied grid command"
            ),
            Err(err) => warn!(command = command.kind(), error = %err, "rejected grid command"),
        }
        outcome
    }

    fn apply_inner(&mut self, command: &GridCommand) -> Result<()> {
        if command.is_structural() && !self.initialized {
            return Err(GridError::NotInitialized);
        }

        match *command {
            GridCommand::Init { rows, columns } => {
                if self.initialized {
                    return Err(GridError::AlreadyInitialized);
                }
                self.replace_grid(rows, columns);
            }
            GridCommand::Reset { rows, columns } => self.replace_grid(rows, columns),
            GridCommand::Resize { width, height } => self.viewport = Viewport::new(width, height),
            GridCommand::Scroll { x, y } => self.scroll = ScrollOffset::new(x, y),
            GridCommand::ScrollToBottom => {
                // May go negative when content is shorter than the viewport
                self.scroll.y = self.total_height() - self.viewport.height;
            }
            GridCommand::InsertRow { index } => self.insert(Axis::Row, index)?,
            GridCommand::InsertColumn { index } => self.insert(Axis::Column, index)?,
            GridCommand::SetSize { axis, index, size } => {
                let layout = self.axis_mut(axis);
                let at = layout.slot_index(index)?;
                layout.set_size(at, size)?;
            }
            GridCommand::RemoveRow { index } => self.remove(Axis::Row, index)?,
            GridCommand::RemoveColumn { index } => self.remove(Axis::Column, index)?,
        }
        Ok(())
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisLayout {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.columns,
        }
    }

    fn window(&self, axis: Axis) -> AxisWindow {
        AxisWindow {
            scroll: self.scroll.along(axis),
            extent: self.viewport.extent(axis),
        }
    }

    fn replace_grid(&mut self, rows: usize, columns: usize) {
        self.rows.reinit(rows);
        self.columns.reinit(columns);
        self.content = GridContent::with_placeholders(rows, columns);
        self.initialized = true;
    }

    fn insert(&mut self, axis: Axis, index: i64) -> Result<()> {
        let layout = self.axis(axis);
        let at = layout.insertion_index(index)?;
        let shift = insertion_shift(self.config.compensation, layout, at, self.window(axis));

        match axis {
            Axis::Row => {
                self.content
                    .insert_row(at, self.columns.len(), &self.config.new_row_label);
                self.rows.insert_slot(at);
            }
            Axis::Column => {
                self.content.insert_column(at, &self.config.new_column_label);
                self.columns.insert_slot(at);
            }
        }
        self.compensate(axis, at, shift);
        Ok(())
    }

    fn remove(&mut self, axis: Axis, index: i64) -> Result<()> {
        let layout = self.axis(axis);
        let at = layout.slot_index(index)?;
        let shift = removal_shift(self.config.compensation, layout, at, self.window(axis));

        match axis {
            Axis::Row => {
                self.rows.remove_slot(at);
                self.content.remove_row(at);
            }
            Axis::Column => {
                self.columns.remove_slot(at);
                self.content.remove_column(at);
            }
        }
        self.compensate(axis, at, shift);
        Ok(())
    }

    fn compensate(&mut self, axis: Axis, slot: usize, delta: f32) {
        if delta.abs() > 0.0 {
            debug!(%axis, slot, delta, "scroll compensated");
            self.scroll.shift(axis, delta);
        }
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

    fn initialized(rows: usize, columns: usize) -> GridState {
        let mut state = GridState::default();
        state.apply(&GridCommand::Init { rows, columns }).unwrap();
        state
            .apply(&GridCommand::Resize {
                width: 60.0,
                height: 40.0,
            })
            .unwrap();
        state
    }

    #[test]
    fn test_init_builds_placeholders() {
        let state = initialized(3, 2);
        assert!(state.is_initialized());
        assert_eq!(state.row_count(), 3);
        assert_eq!(state.column_count(), 2);
        assert_eq!(state.cell(1, 1), Some("1,1"));
        assert_eq!(state.offsets(Axis::Row).as_slice(), &[0.0, 30.0, 60.0, 90.0]);
    }

    #[test]
    fn test_second_init_rejected_and_state_kept() {
        let mut state = initialized(3, 2);
        let before = state.clone();
        let err = state
            .apply(&GridCommand::Init {
                rows: 30,
                columns: 20,
            })
            .unwrap_err();
        assert!(matches!(err, GridError::AlreadyInitialized));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_replaces_grid() {
        let mut state = initialized(3, 2);
        state.apply(&GridCommand::InsertRow { index: 0 }).unwrap();
        state
            .apply(&GridCommand::Reset {
                rows: 5,
                columns: 4,
            })
            .unwrap();
        assert_eq!(state.row_count(), 5);
        assert_eq!(state.column_count(), 4);
        assert_eq!(state.cell(0, 0), Some("0,0"));
    }

    #[test]
    fn test_structural_commands_need_init() {
        let mut state = GridState::default();
        let err = state.apply(&GridCommand::InsertRow { index: 0 }).unwrap_err();
        assert!(matches!(err, GridError::NotInitialized));
        // Host wiring is accepted before init
        state.apply(&GridCommand::Scroll { x: 1.0, y: 2.0 }).unwrap();
        assert_eq!(state.scroll(), ScrollOffset::new(1.0, 2.0));
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = initialized(3, 2);
        let next = reduce(&state, &GridCommand::InsertColumn { index: -1 }).unwrap();
        assert_eq!(state.column_count(), 2);
        assert_eq!(next.column_count(), 3);
        assert_eq!(next.cell(0, 2), Some("new Col"));
    }

    #[test]
    fn test_set_size_by_negative_index() {
        let mut state = initialized(3, 2);
        state
            .apply(&GridCommand::SetSize {
                axis: Axis::Row,
                index: -1,
                size: 10.0,
            })
            .unwrap();
        assert_eq!(state.effective_size(Axis::Row, 2), Some(10.0));
        assert_eq!(state.total_height(), 70.0);
    }

    #[test]
    fn test_visible_range_per_axis() {
        let mut state = initialized(3, 5);
        state.apply(&GridCommand::Scroll { x: 31.0, y: 0.0 }).unwrap();
        assert_eq!(state.visible_range(Axis::Row), VisibleRange { first: 0, last: 2 });
        assert_eq!(
            state.visible_range(Axis::Column),
            VisibleRange { first: 1, last: 4 }
        );
    }
}
