//! Closed set of grid mutations.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::Axis;

/// A grid mutation, tagged by `"type"` so hosts can dispatch plain action objects:
///
/// ```json
/// { "type": "insertRow", "index": -1 }
/// ```
///
/// Negative indices count from the end. For inserts `-1` appends; for
/// `setSize` and removals `-1` is the last slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GridCommand {
    /// Create the grid. Fails if it already exists
    Init { rows: usize, columns: usize },
    /// Destructively replace the grid with a fresh one
    Reset { rows: usize, columns: usize },
    /// Host viewport size changed
    Resize { width: f32, height: f32 },
    /// Host scroll position changed
    Scroll { x: f32, y: f32 },
    /// Align the viewport bottom with the content bottom
    ScrollToBottom,
    InsertRow { index: i64 },
    InsertColumn { index: i64 },
    /// Commit a measured row height or column width
    SetSize { axis: Axis, index: i64, size: f32 },
    RemoveRow { index: i64 },
    RemoveColumn { index: i64 },
}

impl GridCommand {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Reset { .. } => "reset",
            Self::Resize { .. } => "resize",
            Self::Scroll { .. } => "scroll",
            Self::ScrollToBottom => "scrollToBottom",
            Self::InsertRow { .. } => "insertRow",
            Self::InsertColumn { .. } => "insertColumn",
            Self::SetSize { .. } => "setSize",
            Self::RemoveRow { .. } => "removeRow",
            Self::RemoveColumn { .. } => "removeColumn",
        }
    }

    /// Whether the command changes row/column structure or sizes.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::InsertRow { .. }
                | Self::InsertColumn { .. }
                | Self::SetSize { .. }
                | Self::RemoveRow { .. }
                | Self::RemoveColumn { .. }
        )
    }

    /// Decode a single command.
    ///
    /// # Errors
    /// Returns an error if the JSON does not describe a known command.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a JSON array of commands.
    ///
    /// # Errors
    /// Returns an error if any element does not describe a known command.
    pub fn script_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_tagged_commands() {
        assert_eq!(
            GridCommand::from_json(r#"{"type":"insertRow","index":-1}"#).unwrap(),
            GridCommand::InsertRow { index: -1 }
        );
        assert_eq!(
            GridCommand::from_json(r#"{"type":"scrollToBottom"}"#).unwrap(),
            GridCommand::ScrollToBottom
        );
        assert_eq!(
            GridCommand::from_json(r#"{"type":"setSize","axis":"column","index":2,"size":55}"#)
                .unwrap(),
            GridCommand::SetSize {
                axis: Axis::Column,
                index: 2,
                size: 55.0
            }
        );
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(GridCommand::from_json(r#"{"type":"setWidth","index":0}"#).is_err());
    }

    #[test]
    fn test_script() {
        let script = GridCommand::script_from_json(
            r#"[{"type":"init","rows":3,"columns":2},{"type":"resize","width":60,"height":40}]"#,
        )
        .unwrap();
        assert_eq!(script.len(), 2);
        assert_eq!(script.first().map(GridCommand::kind), Some("init"));
        assert!(!script.iter().any(GridCommand::is_structural));
    }
}
