//! Per-grid configuration.

use serde::{Deserialize, Serialize};

use super::CompensationPolicy;
use crate::error::Result;
use crate::layout::{Axis, AxisLayout};

/// Default slot size for both axes, in pixels
pub const DEFAULT_SLOT_SIZE: f32 = 30.0;

/// Placeholder written into every cell of an inserted row
pub const NEW_ROW_LABEL: &str = "new Row";

/// Placeholder written into every cell of an inserted column
pub const NEW_COLUMN_LABEL: &str = "new Col";

/// Grid configuration, fixed for the lifetime of a grid instance.
///
/// Every field is optional when deserializing:
///
/// ```json
/// { "defaultRowHeight": 24, "compensation": "anchor" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Height of rows without a committed size
    pub default_row_height: f32,
    /// Width of columns without a committed size
    pub default_column_width: f32,
    /// Scroll compensation applied on insert/remove
    pub compensation: CompensationPolicy,
    /// Cell value for inserted rows
    pub new_row_label: String,
    /// Cell value for inserted columns
    pub new_column_label: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_row_height: DEFAULT_SLOT_SIZE,
            default_column_width: DEFAULT_SLOT_SIZE,
            compensation: CompensationPolicy::default(),
            new_row_label: NEW_ROW_LABEL.to_string(),
            new_column_label: NEW_COLUMN_LABEL.to_string(),
        }
    }
}

impl GridConfig {
    /// Parse a config from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    /// Returns an error on malformed JSON or invalid default sizes.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both default sizes are finite and non-negative.
    ///
    /// # Errors
    /// Returns `InvalidSize` for the first offending axis.
    pub fn validate(&self) -> Result<()> {
        AxisLayout::validate_size(Axis::Row, self.default_row_height)?;
        AxisLayout::validate_size(Axis::Column, self.default_column_width)?;
        Ok(())
    }

    /// Default size along `axis`
    pub fn default_size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Row => self.default_row_height,
            Axis::Column => self.default_column_width,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GridConfig::from_json(r#"{"defaultRowHeight": 24}"#).unwrap();
        assert_eq!(config.default_row_height, 24.0);
        assert_eq!(config.default_column_width, DEFAULT_SLOT_SIZE);
        assert_eq!(config.compensation, CompensationPolicy::ForwardWalk);
        assert_eq!(config.new_row_label, NEW_ROW_LABEL);
    }

    #[test]
    fn test_policy_from_json() {
        let config = GridConfig::from_json(r#"{"compensation": "anchor"}"#).unwrap();
        assert_eq!(config.compensation, CompensationPolicy::Anchor);
    }

    #[test]
    fn test_negative_default_rejected() {
        let err = GridConfig::from_json(r#"{"defaultColumnWidth": -5}"#).unwrap_err();
        assert!(matches!(
            err,
            GridError::InvalidSize {
                axis: Axis::Column,
                ..
            }
        ));
    }
}
