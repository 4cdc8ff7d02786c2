// File: crates/closeline-core/tests/crosshair.rs
// Purpose: Validate the crosshair draw hook's surface interaction.

use chrono::NaiveDate;
use closeline_core::{
    ActivePoint, ChartDataset, CrosshairOverlay, DrawHook, DrawOp, IndexScale, LineChart,
    QuoteRecord, Rect, RecordingSurface, RenderContext, Rgba, Theme, ValueScale, HEIGHT, WIDTH,
};

fn context<'a>(
    x_scale: &'a IndexScale,
    y_scale: &'a ValueScale,
    active: &'a [ActivePoint],
) -> RenderContext<'a> {
    RenderContext {
        chart_area: Rect::from_ltrb(56.0, 24.0, 1000.0, 592.0),
        x_scale,
        y_scale,
        active,
    }
}

#[test]
fn idle_frame_touches_nothing() {
    let x = IndexScale::new(56.0, 1000.0, 6);
    let y = ValueScale::new(24.0, 592.0, 99.0, 107.0);
    let mut surface = RecordingSurface::new();

    CrosshairOverlay::default().after_draw(&context(&x, &y, &[]), &mut surface);
    assert_eq!(surface.op_count(), 0);
}

#[test]
fn active_frame_draws_one_dashed_guideline() {
    let x = IndexScale::new(56.0, 1000.0, 6);
    let y = ValueScale::new(24.0, 592.0, 99.0, 107.0);
    let active = [ActivePoint { index: 3, x: 622.4, y: 300.0 }];
    let mut surface = RecordingSurface::new();

    CrosshairOverlay::default().after_draw(&context(&x, &y, &active), &mut surface);

    assert_eq!(
        surface.ops,
        vec![
            DrawOp::Save,
            DrawOp::SetLineWidth(1.0),
            DrawOp::SetLineDash(vec![3.0, 3.0]),
            DrawOp::SetStrokeColor(Rgba::from_argb(77, 0, 0, 0)),
            DrawOp::BeginPath,
            DrawOp::MoveTo(622.4, 24.0),
            DrawOp::LineTo(622.4, 592.0),
            DrawOp::Stroke,
            DrawOp::Restore,
        ]
    );
}

#[test]
fn guideline_uses_first_active_point() {
    let x = IndexScale::new(56.0, 1000.0, 6);
    let y = ValueScale::new(24.0, 592.0, 99.0, 107.0);
    let active = [
        ActivePoint { index: 1, x: 244.8, y: 410.0 },
        ActivePoint { index: 2, x: 433.6, y: 220.0 },
    ];
    let mut surface = RecordingSurface::new();

    CrosshairOverlay::default().after_draw(&context(&x, &y, &active), &mut surface);
    assert!(surface.ops.contains(&DrawOp::MoveTo(244.8, 24.0)));
    assert!(!surface.ops.iter().any(|op| matches!(op, DrawOp::MoveTo(x, _) if *x == 433.6)));
}

#[test]
fn guideline_color_follows_the_theme() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let window: Vec<QuoteRecord> = (0..6)
        .map(|i| QuoteRecord::at(start + chrono::Days::new(i), 100.0 + i as f64))
        .collect();

    for theme in [Theme::light(), Theme::dark()] {
        let crosshair = theme.crosshair;
        let chart = LineChart::new(ChartDataset::from_window(&window), theme);
        let layout = chart.layout(WIDTH, HEIGHT);

        let mut surface = RecordingSurface::new();
        chart.render(&mut surface, WIDTH, HEIGHT, Some(layout.x_scale.to_px(3)));

        let dash_at = surface
            .ops
            .iter()
            .position(|op| *op == DrawOp::SetLineDash(vec![3.0, 3.0]))
            .expect("crosshair drew");
        assert_eq!(surface.ops[dash_at + 1], DrawOp::SetStrokeColor(crosshair));
    }
}

#[test]
fn hook_is_safe_to_invoke_every_frame() {
    let x = IndexScale::new(56.0, 1000.0, 6);
    let y = ValueScale::new(24.0, 592.0, 99.0, 107.0);
    let active = [ActivePoint { index: 0, x: 56.0, y: 500.0 }];
    let mut surface = RecordingSurface::new();

    let hook = CrosshairOverlay::default();
    hook.after_draw(&context(&x, &y, &active), &mut surface);
    let per_frame = surface.op_count();
    hook.after_draw(&context(&x, &y, &active), &mut surface);
    assert_eq!(surface.op_count(), per_frame * 2);
    // State is bracketed: restore closes what save opened.
    assert_eq!(surface.ops.first(), Some(&DrawOp::Save));
    assert_eq!(surface.ops.last(), Some(&DrawOp::Restore));
}
