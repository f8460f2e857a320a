//! Structured error types for vgrid.
//!
//! Every rejected mutation leaves the grid state untouched and reports one of
//! these variants to the host.

use crate::layout::Axis;

/// All errors that can occur while mutating or driving a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Slot index outside the valid range for the axis (after negative-index normalisation).
    #[error("{axis} index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Axis the index was applied to.
        axis: Axis,
        /// Index as supplied by the caller.
        index: i64,
        /// Slot count of the axis at the time of the call.
        len: usize,
    },

    /// Negative or non-finite slot size.
    #[error("invalid {axis} size: {size}")]
    InvalidSize {
        /// Axis the size was meant for.
        axis: Axis,
        /// Offending value.
        size: f32,
    },

    /// Structural mutation issued before `init`.
    #[error("grid is not initialized")]
    NotInitialized,

    /// `init` issued on a grid that already has content. Use `reset` instead.
    #[error("grid is already initialized; use reset to replace it")]
    AlreadyInitialized,

    /// Command or config decoding failure.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = GridError::IndexOutOfRange {
            axis: Axis::Row,
            index: 7,
            len: 3,
        };
        assert_eq!(err.to_string(), "row index 7 out of range (len 3)");
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: GridError = parse_err.into();
        assert!(matches!(err, GridError::Json(_)));
    }
}
