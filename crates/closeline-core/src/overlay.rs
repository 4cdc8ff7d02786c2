// File: crates/closeline-core/src/overlay.rs
// Summary: Draw-completion hook trait and the crosshair overlay.

use crate::chart::RenderContext;
use crate::surface::DrawSurface;
use crate::types::Rgba;

/// Hook invoked once per completed draw pass. Implementations must be
/// stateless across frames: everything they need arrives in the context, and
/// invoking them on an idle frame must leave the surface untouched.
pub trait DrawHook {
    fn id(&self) -> &'static str;
    fn after_draw(&self, ctx: &RenderContext<'_>, surface: &mut dyn DrawSurface);
}

/// Dashed vertical guideline at the active point's x, spanning the y scale's
/// top to bottom. Surface state it touches (width, dash, stroke color) is
/// bracketed by save/restore so later draws are unaffected.
#[derive(Clone, Copy, Debug)]
pub struct CrosshairOverlay {
    pub color: Rgba,
}

impl Default for CrosshairOverlay {
    fn default() -> Self {
        Self { color: Rgba::from_argb(77, 0, 0, 0) }
    }
}

impl DrawHook for CrosshairOverlay {
    fn id(&self) -> &'static str { "crosshair" }

    fn after_draw(&self, ctx: &RenderContext<'_>, surface: &mut dyn DrawSurface) {
        let Some(active) = ctx.active.first() else { return };
        let x = active.x;
        let top = ctx.y_scale.top_px;
        let bottom = ctx.y_scale.bottom_px;

        surface.save();
        surface.set_line_width(1.0);
        surface.set_line_dash(&[3.0, 3.0]);
        surface.set_stroke_color(self.color);

        surface.begin_path();
        surface.move_to(x, top);
        surface.line_to(x, bottom);
        surface.stroke();

        surface.restore();
    }
}
