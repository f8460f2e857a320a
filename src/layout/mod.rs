//! Layout engine for virtualizing a grid along its two axes.
//!
//! This module handles:
//! - Per-slot sizing state (known sizes, defaults) for rows and columns
//! - Prefix sums turning sizes into cumulative offsets
//! - Resolving the visible slot range for a scroll window
//! - Viewport and scroll offset state

mod axis;
mod offsets;
mod range;
mod viewport;

pub use axis::{Axis, AxisLayout};
pub use offsets::{compute_offsets, CumulativeOffsets};
pub use range::{find_range, VisibleRange, OVERSCAN};
pub use viewport::{scroll_window, ScrollOffset, Viewport};
