// File: crates/closeline-core/src/surface.rs
// Summary: Canvas-primitive contract supplied by the rendering engine, plus a
// recording implementation for tests and headless runs.

use crate::attrs::LinearGradient;
use crate::types::Rgba;

/// Drawing primitives the rendering engine exposes to the chart. Mirrors a 2D
/// canvas context: stroke/fill state is mutable and save/restore bracketed.
pub trait DrawSurface {
    fn save(&mut self);
    fn restore(&mut self);

    fn set_line_width(&mut self, width: f32);
    fn set_line_dash(&mut self, dash: &[f32]);
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_fill_color(&mut self, color: Rgba);
    fn set_fill_gradient(&mut self, gradient: &LinearGradient);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn circle(&mut self, x: f32, y: f32, radius: f32);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    SetLineWidth(f32),
    SetLineDash(Vec<f32>),
    SetStrokeColor(Rgba),
    SetFillColor(Rgba),
    SetFillGradient(LinearGradient),
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    ClosePath,
    Stroke,
    Fill,
    Circle(f32, f32, f32),
}

/// Surface that records every call instead of rasterizing. Used by the tests
/// to assert exact draw sequences and by the demo for headless output.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) { self.ops.clear(); }

    /// Number of recorded calls since construction or the last `clear`.
    pub fn op_count(&self) -> usize { self.ops.len() }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) { self.ops.push(DrawOp::Save); }
    fn restore(&mut self) { self.ops.push(DrawOp::Restore); }

    fn set_line_width(&mut self, width: f32) { self.ops.push(DrawOp::SetLineWidth(width)); }
    fn set_line_dash(&mut self, dash: &[f32]) { self.ops.push(DrawOp::SetLineDash(dash.to_vec())); }
    fn set_stroke_color(&mut self, color: Rgba) { self.ops.push(DrawOp::SetStrokeColor(color)); }
    fn set_fill_color(&mut self, color: Rgba) { self.ops.push(DrawOp::SetFillColor(color)); }
    fn set_fill_gradient(&mut self, gradient: &LinearGradient) {
        self.ops.push(DrawOp::SetFillGradient(gradient.clone()));
    }

    fn begin_path(&mut self) { self.ops.push(DrawOp::BeginPath); }
    fn move_to(&mut self, x: f32, y: f32) { self.ops.push(DrawOp::MoveTo(x, y)); }
    fn line_to(&mut self, x: f32, y: f32) { self.ops.push(DrawOp::LineTo(x, y)); }
    fn close_path(&mut self) { self.ops.push(DrawOp::ClosePath); }
    fn stroke(&mut self) { self.ops.push(DrawOp::Stroke); }
    fn fill(&mut self) { self.ops.push(DrawOp::Fill); }

    fn circle(&mut self, x: f32, y: f32, radius: f32) {
        self.ops.push(DrawOp::Circle(x, y, radius));
    }
}
