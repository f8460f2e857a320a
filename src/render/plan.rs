//! Absolute placement of the visible cells.

use serde::Serialize;

use crate::grid::GridState;
use crate::layout::{Axis, CumulativeOffsets, VisibleRange};

/// Data for rendering a single cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellRenderData {
    pub column: usize,
    /// Left edge in content coordinates
    pub x: f32,
    pub width: f32,
    pub value: String,
}

/// Data for rendering one visible row and its visible cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowRenderData {
    pub row: usize,
    /// Top edge in content coordinates
    pub y: f32,
    pub height: f32,
    pub cells: Vec<CellRenderData>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    /// Total content width, for sizing the scroll spacer
    pub total_width: f32,
    /// Total content height, for sizing the scroll spacer
    pub total_height: f32,
    pub visible_rows: VisibleRange,
    pub visible_columns: VisibleRange,
    pub rows: Vec<RowRenderData>,
}

impl RenderPlan {
    /// Build the plan from precomputed offsets for both axes.
    pub fn build(
        state: &GridState,
        row_offsets: &CumulativeOffsets,
        column_offsets: &CumulativeOffsets,
    ) -> Self {
        let visible_rows = state.visible_range_in(Axis::Row, row_offsets);
        let visible_columns = state.visible_range_in(Axis::Column, column_offsets);

        let rows = visible_rows
            .iter()
            .filter_map(|row| {
                let y = row_offsets.start(row)?;
                let height = row_offsets.end(row)? - y;
                let cells = visible_columns
                    .iter()
                    .filter_map(|column| {
                        let x = column_offsets.start(column)?;
                        let width = column_offsets.end(column)? - x;
                        Some(CellRenderData {
                            column,
                            x,
                            width,
                            value: state.cell(row, column)?.to_string(),
                        })
                    })
                    .collect();
                Some(RowRenderData {
                    row,
                    y,
                    height,
                    cells,
                })
            })
            .collect();

        Self {
            total_width: column_offsets.total(),
            total_height: row_offsets.total(),
            visible_rows,
            visible_columns,
            rows,
        }
    }

    /// Number of cells in the plan
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
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
    use crate::grid::GridCommand;

    fn state(scroll_y: f32) -> GridState {
        let mut state = GridState::default();
        for command in [
            GridCommand::Init {
                rows: 3,
                columns: 2,
            },
            GridCommand::Resize {
                width: 60.0,
                height: 40.0,
            },
            GridCommand::Scroll { x: 0.0, y: scroll_y },
        ] {
            state.apply(&command).unwrap();
        }
        state
    }

    fn plan_for(state: &GridState) -> RenderPlan {
        RenderPlan::build(
            state,
            &state.offsets(Axis::Row),
            &state.offsets(Axis::Column),
        )
    }

    #[test]
    fn test_plan_at_top() {
        let state = state(0.0);
        let plan = plan_for(&state);
        assert_eq!(plan.total_width, 60.0);
        assert_eq!(plan.total_height, 90.0);
        assert_eq!(plan.rows.len(), 2);
        assert_eq!(plan.cell_count(), 4);
        assert_eq!(plan.rows[1].y, 30.0);
        assert_eq!(plan.rows[1].cells[1].x, 30.0);
        assert_eq!(plan.rows[1].cells[1].value, "1,1");
    }

    #[test]
    fn test_plan_uses_absolute_slot_sizes() {
        let mut state = state(31.0);
        state
            .apply(&GridCommand::SetSize {
                axis: Axis::Row,
                index: 2,
                size: 50.0,
            })
            .unwrap();
        let plan = plan_for(&state);
        assert_eq!(plan.visible_rows, VisibleRange { first: 1, last: 3 });
        let last = plan.rows.last().unwrap();
        assert_eq!(last.row, 2);
        assert_eq!(last.y, 60.0);
        assert_eq!(last.height, 50.0);
    }

    #[test]
    fn test_empty_grid_plan() {
        let state = GridState::default();
        let plan = plan_for(&state);
        assert!(plan.rows.is_empty());
        assert_eq!(plan.total_height, 0.0);
    }
}
