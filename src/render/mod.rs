//! Render planning.
//!
//! The engine never paints. It hands the host a [`RenderPlan`] listing the
//! visible rows and cells with their absolute content-space positions.

mod plan;

pub use plan::{CellRenderData, RenderPlan, RowRenderData};
