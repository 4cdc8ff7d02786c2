// File: crates/closeline-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Pixel rectangle in left/top/right/bottom form. The plotted area (inside the
/// chart margins) is expressed with this type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> f32 { self.right - self.left }
    pub const fn height(&self) -> f32 { self.bottom - self.top }

    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left && x <= self.right
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
