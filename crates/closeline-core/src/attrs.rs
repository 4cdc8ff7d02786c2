// File: crates/closeline-core/src/attrs.rs
// Summary: Per-draw visual attribute resolvers (area gradient, point radii).
// All functions here are pure and cheap; the harness re-evaluates them on
// every frame instead of caching across frames.

use crate::geometry::Rect;
use crate::types::Rgba;

/// Radius of the highlighted most-recent point.
pub const LAST_POINT_RADIUS: f32 = 5.0;

/// Gradient stop: offset in [0, 1] along the gradient axis, plus color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Vertical linear gradient bound to concrete pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub y0: f32,
    pub y1: f32,
    pub stops: Vec<GradientStop>,
}

/// Area fill for the line: translucent accent at the top of the plotted area
/// fading to fully transparent at its bottom. Returns `None` before the first
/// layout pass, when the plotted area is not known yet. Must be recomputed
/// whenever the area bounds change (resize).
pub fn area_gradient(area: Option<&Rect>, accent: Rgba) -> Option<LinearGradient> {
    let area = area?;
    Some(LinearGradient {
        y0: area.top,
        y1: area.bottom,
        stops: vec![
            GradientStop { offset: 0.0, color: accent.with_alpha(77) },
            GradientStop { offset: 1.0, color: accent.transparent() },
        ],
    })
}

/// Per-point radii for a plotted series of length `len`: every point hidden
/// except the most recent one. Recomputed whenever the length changes.
pub fn point_radii(len: usize) -> Vec<f32> {
    let mut radii = vec![0.0; len];
    if let Some(last) = radii.last_mut() {
        *last = LAST_POINT_RADIUS;
    }
    radii
}
