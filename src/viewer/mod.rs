//! Main GridView struct - the host-facing entry point.
//!
//! `GridView` owns the current [`GridState`] and handles:
//! - Applying commands from the host (resize, scroll, insert, remove, ...)
//! - Memoizing cumulative offsets per axis
//! - Producing visible ranges, hit tests and render plans
//!
//! On `wasm32` the same operations are exported to JavaScript; native builds
//! (tests, CLI) use the plain Rust API.

mod cache;

use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::grid::{GridCommand, GridConfig, GridState};
use crate::layout::{Axis, CumulativeOffsets, ScrollOffset, Viewport, VisibleRange};
use crate::render::RenderPlan;
use cache::OffsetsCache;

/// Serializable summary of the grid as the renderer would see it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub viewport: Viewport,
    pub scroll: ScrollOffset,
    pub plan: RenderPlan,
}

/// The grid host exported to JavaScript
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct GridView {
    state: GridState,
    row_offsets: OffsetsCache,
    column_offsets: OffsetsCache,
}

impl GridView {
    /// Create a view over an empty, uninitialized grid.
    ///
    /// # Errors
    /// Returns `InvalidSize` if the config's default sizes are unusable.
    pub fn new(config: GridConfig) -> Result<Self> {
        Ok(Self {
            state: GridState::new(config)?,
            row_offsets: OffsetsCache::default(),
            column_offsets: OffsetsCache::default(),
        })
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Swap in a state produced elsewhere (e.g. by `reduce`).
    pub fn restore(&mut self, state: GridState) {
        self.state = state;
        self.row_offsets.invalidate();
        self.column_offsets.invalidate();
    }

    /// Apply a command to the owned state.
    ///
    /// # Errors
    /// Propagates the command's error; the state is unchanged on failure.
    pub fn apply(&mut self, command: &GridCommand) -> Result<()> {
        self.state.apply(command)
    }

    /// Decode and apply a JSON command such as `{"type":"insertRow","index":0}`.
    ///
    /// # Errors
    /// Returns an error for malformed JSON or a rejected command.
    pub fn dispatch_json(&mut self, json: &str) -> Result<()> {
        let command = GridCommand::from_json(json)?;
        self.apply(&command)
    }

    /// Cumulative row offsets (memoized)
    pub fn row_offsets(&self) -> Rc<CumulativeOffsets> {
        self.row_offsets.get(self.state.rows())
    }

    /// Cumulative column offsets (memoized)
    pub fn column_offsets(&self) -> Rc<CumulativeOffsets> {
        self.column_offsets.get(self.state.columns())
    }

    pub fn offsets(&self, axis: Axis) -> Rc<CumulativeOffsets> {
        match axis {
            Axis::Row => self.row_offsets(),
            Axis::Column => self.column_offsets(),
        }
    }

    pub fn visible_rows(&self) -> VisibleRange {
        self.state.visible_range_in(Axis::Row, &self.row_offsets())
    }

    pub fn visible_columns(&self) -> VisibleRange {
        self.state
            .visible_range_in(Axis::Column, &self.column_offsets())
    }

    pub fn render_plan(&self) -> RenderPlan {
        RenderPlan::build(&self.state, &self.row_offsets(), &self.column_offsets())
    }

    /// Hit test viewport coordinates, returning `(row, column)`.
    pub fn cell_at(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        let (x, y) = self.state.scroll().to_content(screen_x, screen_y);
        let row = self.row_offsets().slot_at(y)?;
        let column = self.column_offsets().slot_at(x)?;
        Some((row, column))
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: self.state.row_count(),
            columns: self.state.column_count(),
            viewport: self.state.viewport(),
            scroll: self.state.scroll(),
            plan: self.render_plan(),
        }
    }
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
fn to_js<T: Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a grid view. `config` may be `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn js_new(config: JsValue) -> std::result::Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        let config = if config.is_undefined() || config.is_null() {
            GridConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?
        };
        Ok(Self::new(config)?)
    }

    /// Apply an action object, e.g. `{ type: "insertRow", index: -1 }`.
    #[wasm_bindgen(js_name = dispatch)]
    pub fn js_dispatch(&mut self, action: JsValue) -> std::result::Result<(), JsValue> {
        let command: GridCommand = serde_wasm_bindgen::from_value(action)
            .map_err(|e| JsValue::from_str(&format!("Invalid command: {e}")))?;
        Ok(self.apply(&command)?)
    }

    #[wasm_bindgen(js_name = init)]
    pub fn js_init(&mut self, rows: usize, columns: usize) -> std::result::Result<(), JsValue> {
        Ok(self.apply(&GridCommand::Init { rows, columns })?)
    }

    #[wasm_bindgen(js_name = reset)]
    pub fn js_reset(&mut self, rows: usize, columns: usize) -> std::result::Result<(), JsValue> {
        Ok(self.apply(&GridCommand::Reset { rows, columns })?)
    }

    #[wasm_bindgen(js_name = resize)]
    pub fn js_resize(&mut self, width: f32, height: f32) -> std::result::Result<(), JsValue> {
        Ok(self.apply(&GridCommand::Resize { width, height })?)
    }

    #[wasm_bindgen(js_name = scroll)]
    pub fn js_scroll(&mut self, x: f32, y: f32) -> std::result::Result<(), JsValue> {
        Ok(self.apply(&GridCommand::Scroll { x, y })?)
    }

    #[wasm_bindgen(js_name = scrollToBottom)]
    pub fn js_scroll_to_bottom(&mut self) -> std::result::Result<(), JsValue> {
        Ok(self.apply(&GridCommand::ScrollToBottom)?)
    }

    #[wasm_bindgen(js_name = insertRow)]
    pub fn js_insert_row(&mut self, index: i32) -> std::result::Result<(), JsValue> {
        Ok(self.apply(&GridCommand::InsertRow {
            index: i64::from(index),
        })?)
    }

    #[wasm_bindgen(js_name = insertColumn)]
    pub fn js_insert_column(&mut self, index: i32) -> std::result::Result<(), JsValue> {
        Ok(self.apply(&GridCommand::InsertColumn {
            index: i64::from(index),
        })?)
    }

    #[wasm_bindgen(js_name = removeRow)]
    pub fn js_remove_row(&mut self, index: i32) -> std::result::Result<(), JsValue> {
        Ok(self.apply(&GridCommand::RemoveRow {
            index: i64::from(index),
        })?)
    }

    #[wasm_bindgen(js_name = removeColumn)]
    pub fn js_remove_column(&mut self, index: i32) -> std::result::Result<(), JsValue> {
        Ok(self.apply(&GridCommand::RemoveColumn {
            index: i64::from(index),
        })?)
    }

    #[wasm_bindgen(js_name = setRowHeight)]
    pub fn js_set_row_height(&mut self, index: i32, height: f32) -> std::result::Result<(), JsValue> {
        Ok(self.apply(&GridCommand::SetSize {
            axis: Axis::Row,
            index: i64::from(index),
            size: height,
        })?)
    }

    #[wasm_bindgen(js_name = setColumnWidth)]
    pub fn js_set_column_width(
        &mut self,
        index: i32,
        width: f32,
    ) -> std::result::Result<(), JsValue> {
        Ok(self.apply(&GridCommand::SetSize {
            axis: Axis::Column,
            index: i64::from(index),
            size: width,
        })?)
    }

    /// `{ first, last }` half-open row range to render
    #[wasm_bindgen(js_name = visibleRows)]
    pub fn js_visible_rows(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.visible_rows())
    }

    /// `{ first, last }` half-open column range to render
    #[wasm_bindgen(js_name = visibleColumns)]
    pub fn js_visible_columns(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.visible_columns())
    }

    #[wasm_bindgen(js_name = rowOffsets)]
    pub fn js_row_offsets(&self) -> Vec<f32> {
        self.row_offsets().as_slice().to_vec()
    }

    #[wasm_bindgen(js_name = columnOffsets)]
    pub fn js_column_offsets(&self) -> Vec<f32> {
        self.column_offsets().as_slice().to_vec()
    }

    #[wasm_bindgen(js_name = rowHeight)]
    pub fn js_row_height(&self, row: usize) -> Option<f32> {
        self.state.effective_size(Axis::Row, row)
    }

    #[wasm_bindgen(js_name = columnWidth)]
    pub fn js_column_width(&self, column: usize) -> Option<f32> {
        self.state.effective_size(Axis::Column, column)
    }

    #[wasm_bindgen(js_name = cell)]
    pub fn js_cell(&self, row: usize, column: usize) -> Option<String> {
        self.state.cell(row, column).map(str::to_string)
    }

    /// `[row, column]` under viewport coordinates
    #[wasm_bindgen(js_name = cellAt)]
    pub fn js_cell_at(&self, x: f32, y: f32) -> Option<Vec<u32>> {
        let (row, column) = self.cell_at(x, y)?;
        Some(vec![u32::try_from(row).ok()?, u32::try_from(column).ok()?])
    }

    #[wasm_bindgen(js_name = contentWidth)]
    pub fn js_content_width(&self) -> f32 {
        self.column_offsets().total()
    }

    #[wasm_bindgen(js_name = contentHeight)]
    pub fn js_content_height(&self) -> f32 {
        self.row_offsets().total()
    }

    #[wasm_bindgen(js_name = scrollX)]
    pub fn js_scroll_x(&self) -> f32 {
        self.state.scroll().x
    }

    #[wasm_bindgen(js_name = scrollY)]
    pub fn js_scroll_y(&self) -> f32 {
        self.state.scroll().y
    }

    #[wasm_bindgen(js_name = renderPlan)]
    pub fn js_render_plan(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.render_plan())
    }

    #[wasm_bindgen(js_name = snapshot)]
    pub fn js_snapshot(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.snapshot())
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
    use crate::grid::reduce;

    fn view() -> GridView {
        let mut view = GridView::default();
        view.dispatch_json(r#"{"type":"init","rows":3,"columns":2}"#)
            .unwrap();
        view.dispatch_json(r#"{"type":"resize","width":60,"height":40}"#)
            .unwrap();
        view
    }

    #[test]
    fn test_offsets_are_memoized() {
        let mut view = view();
        let first = view.row_offsets();
        assert!(Rc::ptr_eq(&first, &view.row_offsets()));

        view.apply(&GridCommand::InsertRow { index: -1 }).unwrap();
        let after = view.row_offsets();
        assert_eq!(after.total(), 120.0);
        // Column axis untouched
        assert_eq!(view.column_offsets().total(), 60.0);
    }

    #[test]
    fn test_cell_at_accounts_for_scroll() {
        let mut view = view();
        assert_eq!(view.cell_at(5.0, 5.0), Some((0, 0)));
        view.apply(&GridCommand::Scroll { x: 0.0, y: 31.0 }).unwrap();
        assert_eq!(view.cell_at(35.0, 0.0), Some((1, 1)));
        assert_eq!(view.cell_at(35.0, 100.0), None);
    }

    #[test]
    fn test_restore_invalidates_caches() {
        let mut view = view();
        let cached = view.row_offsets();
        let next = reduce(
            view.state(),
            &GridCommand::Reset {
                rows: 10,
                columns: 2,
            },
        )
        .unwrap();
        view.restore(next);
        assert!(!Rc::ptr_eq(&cached, &view.row_offsets()));
        assert_eq!(view.row_offsets().total(), 300.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let view = view();
        let json = serde_json::to_value(view.snapshot()).unwrap();
        assert_eq!(json["rows"], 3);
        assert_eq!(json["plan"]["visibleRows"]["last"], 2);
        assert_eq!(json["plan"]["rows"][0]["cells"][1]["value"], "0,1");
    }
}
