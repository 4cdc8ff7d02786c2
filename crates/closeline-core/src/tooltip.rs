// File: crates/closeline-core/src/tooltip.rs
// Summary: Tooltip anchor model and positioner objects.
// The positioner is an explicit object handed to the chart at construction,
// not a name in a process-wide registry.

use crate::geometry::Rect;

/// A point selected by the engine's hit-testing for the current pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivePoint {
    pub index: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YAlign {
    Top,
    Bottom,
}

/// On-screen anchor for the tooltip box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipAnchor {
    pub x: f32,
    pub y: f32,
    pub x_align: XAlign,
    pub y_align: YAlign,
}

/// Computes the tooltip anchor for the current active set. `None` is the
/// "no position" signal: the tooltip is suppressed, no coordinate is implied.
pub trait TooltipPositioner {
    fn position(&self, active: &[ActivePoint], area: &Rect) -> Option<TooltipAnchor>;
}

/// The engine's default anchor: average position of the active set.
pub fn average_position(active: &[ActivePoint]) -> Option<(f32, f32)> {
    if active.is_empty() {
        return None;
    }
    let n = active.len() as f32;
    let x = active.iter().map(|p| p.x).sum::<f32>() / n;
    let y = active.iter().map(|p| p.y).sum::<f32>() / n;
    Some((x, y))
}

/// Anchors the tooltip at the top edge of the plotted area while tracking the
/// active set's average x, centered horizontally and hanging below the anchor.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopAnchorPositioner;

impl TooltipPositioner for TopAnchorPositioner {
    fn position(&self, active: &[ActivePoint], area: &Rect) -> Option<TooltipAnchor> {
        let (x, _) = average_position(active)?;
        Some(TooltipAnchor {
            x,
            y: area.top,
            x_align: XAlign::Center,
            y_align: YAlign::Bottom,
        })
    }
}
