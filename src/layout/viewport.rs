//! Viewport and scroll state.
//!
//! Both are replaced verbatim by the host. Scroll offsets are not clamped
//! against the content extent; range resolution tolerates any value.

use serde::{Deserialize, Serialize};

use super::Axis;

/// Visible area size in pixels, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport extent along `axis` (height for rows, width for columns)
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }
}

/// Scroll position in content coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset along `axis` (`y` for rows, `x` for columns)
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Row => self.y,
            Axis::Column => self.x,
        }
    }

    pub(crate) fn shift(&mut self, axis: Axis, delta: f32) {
        match axis {
            Axis::Row => self.y += delta,
            Axis::Column => self.x += delta,
        }
    }

    /// Convert content coordinates to screen coordinates
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.x, y - self.y)
    }

    /// Convert screen coordinates to content coordinates
    pub fn to_content(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (screen_x + self.x, screen_y + self.y)
    }
}

/// Scroll window `[min, max)` along `axis`.
pub fn scroll_window(viewport: &Viewport, scroll: &ScrollOffset, axis: Axis) -> (f32, f32) {
    let min = scroll.along(axis);
    (min, min + viewport.extent(axis))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_window_per_axis() {
        let viewport = Viewport::new(60.0, 40.0);
        let scroll = ScrollOffset::new(5.0, 31.0);
        assert_eq!(scroll_window(&viewport, &scroll, Axis::Row), (31.0, 71.0));
        assert_eq!(scroll_window(&viewport, &scroll, Axis::Column), (5.0, 65.0));
    }

    #[test]
    fn test_coordinate_round_trip() {
        let scroll = ScrollOffset::new(100.0, 250.0);
        assert_eq!(scroll.to_screen(130.0, 260.0), (30.0, 10.0));
        assert_eq!(scroll.to_content(30.0, 10.0), (130.0, 260.0));
    }

    #[test]
    fn test_shift() {
        let mut scroll = ScrollOffset::default();
        scroll.shift(Axis::Row, 30.0);
        scroll.shift(Axis::Column, -10.0);
        assert_eq!(scroll, ScrollOffset::new(-10.0, 30.0));
    }
}
