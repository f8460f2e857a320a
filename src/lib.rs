//! vgrid - virtualized grid layout engine
//!
//! Renders grids with tens of thousands of rows and columns through a small
//! viewport by materializing only the visible cells:
//! - Per-axis sizing with known sizes and a default fallback
//! - Cumulative offsets and visible-range resolution with one-slot overscan
//! - Insert/remove with scroll compensation so on-screen content stays put
//! - A reducer-style command set hosts can drive from JavaScript or JSON
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'vgrid';
//! await init();
//! const grid = new GridView({ defaultRowHeight: 30 });
//! grid.init(30000, 20);
//! grid.resize(el.clientWidth, el.clientHeight);
//! el.onscroll = () => grid.scroll(el.scrollLeft, el.scrollTop);
//! const plan = grid.renderPlan();
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use vgrid::{GridCommand, GridView};
//!
//! let mut view = GridView::default();
//! view.apply(&GridCommand::Init { rows: 3, columns: 2 }).unwrap();
//! view.apply(&GridCommand::Resize { width: 60.0, height: 40.0 }).unwrap();
//! assert_eq!(view.visible_rows().len(), 2);
//! ```

pub mod error;
pub mod grid;
pub mod layout;
pub mod render;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{GridError, Result};
pub use grid::{
    reduce, CompensationPolicy, GridCommand, GridConfig, GridContent, GridState,
    DEFAULT_SLOT_SIZE, NEW_COLUMN_LABEL, NEW_ROW_LABEL,
};
pub use layout::{Axis, AxisLayout, CumulativeOffsets, ScrollOffset, Viewport, VisibleRange};
pub use render::RenderPlan;
pub use viewer::{GridSnapshot, GridView};

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
