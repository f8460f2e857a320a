//! Grid store: state, commands and the transition function.
//!
//! The host owns a [`GridState`] value and feeds it [`GridCommand`]s one at a
//! time. All derived data (offsets, visible ranges) is recomputed from the
//! state on read.

mod command;
mod compensate;
mod config;
mod content;
mod state;

pub use command::GridCommand;
pub use compensate::CompensationPolicy;
pub use config::{GridConfig, DEFAULT_SLOT_SIZE, NEW_COLUMN_LABEL, NEW_ROW_LABEL};
pub use content::GridContent;
pub use state::{reduce, GridState};
