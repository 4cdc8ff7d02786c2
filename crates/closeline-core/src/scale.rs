// File: crates/closeline-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms for the plotted area.

use crate::geometry::clamp;

/// Value Y coordinate (e.g., price).
pub type Value = f64;

/// Horizontal category scale: evenly spreads `count` slots across
/// [left_px, right_px]. A single slot sits on the left edge, matching a
/// category axis without offset.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl IndexScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        if self.count < 2 {
            return self.left_px;
        }
        let step = (self.right_px - self.left_px) / (self.count - 1) as f32;
        self.left_px + step * index as f32
    }

    /// Nearest slot index for a pixel position, clamped to the scale range.
    pub fn nearest_index(&self, px: f32) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        if self.count < 2 {
            return Some(0);
        }
        let step = (self.right_px - self.left_px) / (self.count - 1) as f32;
        let raw = ((px - self.left_px) / step).round();
        let idx = clamp(raw, 0.0, (self.count - 1) as f32) as usize;
        Some(idx)
    }
}

/// Vertical value scale mapping [vmin, vmax] to [top_px, bottom_px] linearly.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
