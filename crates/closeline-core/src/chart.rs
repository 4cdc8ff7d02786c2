// File: crates/closeline-core/src/chart.rs
// Summary: Declarative line-chart configuration and the headless render pass
// driving the engine-supplied surface.

use crate::attrs::{area_gradient, point_radii, LinearGradient};
use crate::dataset::ChartDataset;
use crate::geometry::Rect;
use crate::grid::linspace;
use crate::overlay::{CrosshairOverlay, DrawHook};
use crate::scale::{IndexScale, ValueScale};
use crate::surface::DrawSurface;
use crate::theme::Theme;
use crate::tooltip::{ActivePoint, TooltipAnchor, TooltipPositioner, TopAnchorPositioner};
use crate::types::{Insets, Rgba};

/// Resolves the area fill for the current plotted bounds (`None` pre-layout).
pub type FillResolver = fn(Option<&Rect>, Rgba) -> Option<LinearGradient>;
/// Resolves per-point radii for the current series length.
pub type RadiusResolver = fn(usize) -> Vec<f32>;

/// Static style plus callback-valued attributes for the single line series.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub label: String,
    pub border_color: Rgba,
    pub border_width: f32,
    pub point_background: Rgba,
    /// Curve smoothing hint for engines that support it; the headless pass
    /// draws straight segments.
    pub tension: f32,
    pub fill: bool,
    pub background_fill: FillResolver,
    pub point_radius: RadiusResolver,
}

impl Dataset {
    /// The stock-price line: accent stroke, gradient fill, last point marked.
    pub fn price_line(label: impl Into<String>, accent: Rgba) -> Self {
        Self {
            label: label.into(),
            border_color: accent,
            border_width: 2.0,
            point_background: accent,
            tension: 0.1,
            fill: true,
            background_fill: area_gradient,
            point_radius: point_radii,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChartOptions {
    pub insets: Insets,
    /// Upper bound on horizontal grid lines (y axis ticks).
    pub y_tick_limit: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { insets: Insets::default(), y_tick_limit: 5 }
    }
}

/// Per-frame layout produced by the engine: plotted pixel area and scales.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub chart_area: Rect,
    pub x_scale: IndexScale,
    pub y_scale: ValueScale,
}

/// Engine-side per-frame state handed to draw hooks. Transient: built for one
/// draw call and discarded.
pub struct RenderContext<'a> {
    pub chart_area: Rect,
    pub x_scale: &'a IndexScale,
    pub y_scale: &'a ValueScale,
    pub active: &'a [ActivePoint],
}

/// What a render pass produced, for callers that inspect rather than paint.
#[derive(Clone, Debug)]
pub struct Frame {
    pub chart_area: Rect,
    pub active: Vec<ActivePoint>,
    pub tooltip: Option<TooltipAnchor>,
    pub point_radii: Vec<f32>,
}

pub struct LineChart {
    pub data: ChartDataset,
    pub dataset: Dataset,
    pub options: ChartOptions,
    pub theme: Theme,
    positioner: Box<dyn TooltipPositioner>,
    hooks: Vec<Box<dyn DrawHook>>,
}

impl LineChart {
    /// Chart with the default price-line styling, top-anchored tooltip and
    /// crosshair hook. The positioner is an owned object, not a global name.
    pub fn new(data: ChartDataset, theme: Theme) -> Self {
        let dataset = Dataset::price_line("Stock price", theme.accent);
        Self {
            data,
            dataset,
            options: ChartOptions::default(),
            theme,
            positioner: Box::new(TopAnchorPositioner),
            hooks: vec![Box::new(CrosshairOverlay { color: theme.crosshair })],
        }
    }

    pub fn with_positioner(mut self, positioner: Box<dyn TooltipPositioner>) -> Self {
        self.positioner = positioner;
        self
    }

    pub fn add_hook(&mut self, hook: Box<dyn DrawHook>) {
        self.hooks.push(hook);
    }

    /// Replace the plotted dataset (period change, fresh fetch).
    pub fn set_data(&mut self, data: ChartDataset) {
        self.data = data;
    }

    /// Layout pass: plotted area from the surface size and insets, category
    /// x scale over the dataset, linear y scale over the value range with a
    /// 2% margin.
    pub fn layout(&self, width: i32, height: i32) -> Layout {
        let ins = self.options.insets;
        let chart_area = Rect::from_ltrb(
            ins.left as f32,
            ins.top as f32,
            (width - ins.right as i32) as f32,
            (height - ins.bottom as i32) as f32,
        );
        let (vmin, vmax) = match self.data.value_range() {
            Some((lo, hi)) => {
                let margin = (hi - lo) * 0.02;
                (lo - margin, hi + margin)
            }
            None => (0.0, 1.0),
        };
        Layout {
            chart_area,
            x_scale: IndexScale::new(chart_area.left, chart_area.right, self.data.len()),
            y_scale: ValueScale::new(chart_area.top, chart_area.bottom, vmin, vmax),
        }
    }

    /// Nearest-index hit testing (`mode: index`, no intersect requirement).
    /// A gap at the nearest index yields no active point.
    pub fn hit_test(&self, layout: &Layout, pointer_x: f32) -> Vec<ActivePoint> {
        if !layout.chart_area.contains_x(pointer_x) {
            return Vec::new();
        }
        let Some(index) = layout.x_scale.nearest_index(pointer_x) else {
            return Vec::new();
        };
        match self.data.values.get(index).copied().flatten() {
            Some(value) => vec![ActivePoint {
                index,
                x: layout.x_scale.to_px(index),
                y: layout.y_scale.to_px(value),
            }],
            None => Vec::new(),
        }
    }

    /// One full draw pass against the engine surface. With an empty dataset
    /// only the background is painted (the loading/empty state short-circuit).
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        width: i32,
        height: i32,
        pointer_x: Option<f32>,
    ) -> Frame {
        fill_rect(
            surface,
            &Rect::from_ltwh(0.0, 0.0, width as f32, height as f32),
            self.theme.background,
        );

        let layout = self.layout(width, height);
        if self.data.is_empty() {
            return Frame {
                chart_area: layout.chart_area,
                active: Vec::new(),
                tooltip: None,
                point_radii: Vec::new(),
            };
        }

        self.draw_grid(surface, &layout);
        self.draw_series(surface, &layout);

        let active = match pointer_x {
            Some(px) => self.hit_test(&layout, px),
            None => Vec::new(),
        };
        let tooltip = self.positioner.position(&active, &layout.chart_area);
        let radii = (self.dataset.point_radius)(self.data.len());

        let ctx = RenderContext {
            chart_area: layout.chart_area,
            x_scale: &layout.x_scale,
            y_scale: &layout.y_scale,
            active: &active,
        };
        for hook in &self.hooks {
            hook.after_draw(&ctx, surface);
        }

        Frame { chart_area: layout.chart_area, active, tooltip, point_radii: radii }
    }

    fn draw_grid(&self, surface: &mut dyn DrawSurface, layout: &Layout) {
        let area = &layout.chart_area;

        // Horizontal value gridlines, capped at the tick limit.
        surface.save();
        surface.set_line_width(1.0);
        surface.set_stroke_color(self.theme.grid);
        for y in linspace(area.top, area.bottom, self.options.y_tick_limit) {
            surface.begin_path();
            surface.move_to(area.left, y);
            surface.line_to(area.right, y);
            surface.stroke();
        }

        // X tick marks only where a label is visible, so the window edges
        // stay clean (the first/last label is always blank).
        surface.set_stroke_color(self.theme.tick);
        for (i, label) in self.data.labels.iter().enumerate() {
            if label.is_empty() {
                continue;
            }
            let x = layout.x_scale.to_px(i);
            surface.begin_path();
            surface.move_to(x, area.bottom);
            surface.line_to(x, area.bottom + 4.0);
            surface.stroke();
        }
        surface.restore();
    }

    fn draw_series(&self, surface: &mut dyn DrawSurface, layout: &Layout) {
        let area = &layout.chart_area;

        // Area fill under the line, recomputed against the current bounds.
        if self.dataset.fill {
            if let Some(gradient) =
                (self.dataset.background_fill)(Some(area), self.dataset.border_color)
            {
                if let Some((first, last)) = self.fill_span(surface, layout) {
                    surface.line_to(last, area.bottom);
                    surface.line_to(first, area.bottom);
                    surface.close_path();
                    surface.set_fill_gradient(&gradient);
                    surface.fill();
                }
            }
        }

        // The line itself; gaps break the path.
        surface.set_stroke_color(self.dataset.border_color);
        surface.set_line_width(self.dataset.border_width);
        surface.begin_path();
        let mut pen_down = false;
        for (i, value) in self.data.values.iter().enumerate() {
            let Some(v) = value else {
                pen_down = false;
                continue;
            };
            let x = layout.x_scale.to_px(i);
            let y = layout.y_scale.to_px(*v);
            if pen_down {
                surface.line_to(x, y);
            } else {
                surface.move_to(x, y);
                pen_down = true;
            }
        }
        surface.stroke();

        // Point markers, radius resolved per draw.
        let radii = (self.dataset.point_radius)(self.data.len());
        surface.set_fill_color(self.dataset.point_background);
        for (i, radius) in radii.iter().enumerate() {
            if *radius <= 0.0 {
                continue;
            }
            if let Some(v) = self.data.values.get(i).copied().flatten() {
                surface.circle(layout.x_scale.to_px(i), layout.y_scale.to_px(v), *radius);
            }
        }
    }

    /// Trace the value polyline as an open path for the area fill. Returns the
    /// first and last plotted x, or `None` when every value is a gap.
    fn fill_span(&self, surface: &mut dyn DrawSurface, layout: &Layout) -> Option<(f32, f32)> {
        let mut first = None;
        let mut last = None;
        surface.begin_path();
        for (i, value) in self.data.values.iter().enumerate() {
            let Some(v) = value else { continue };
            let x = layout.x_scale.to_px(i);
            let y = layout.y_scale.to_px(*v);
            if first.is_none() {
                surface.move_to(x, y);
                first = Some(x);
            } else {
                surface.line_to(x, y);
            }
            last = Some(x);
        }
        Some((first?, last?))
    }
}

fn fill_rect(surface: &mut dyn DrawSurface, rect: &Rect, color: Rgba) {
    surface.set_fill_color(color);
    surface.begin_path();
    surface.move_to(rect.left, rect.top);
    surface.line_to(rect.right, rect.top);
    surface.line_to(rect.right, rect.bottom);
    surface.line_to(rect.left, rect.bottom);
    surface.close_path();
    surface.fill();
}
