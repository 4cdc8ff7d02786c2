// File: crates/demo/src/main.rs
// Summary: Demo fetches a closing-price series (HTTP or CSV) and runs one
// headless render pass, printing the dataset and frame summary.

use anyhow::{Context, Result};
use closeline_core::{
    load_quotes_csv, ChartView, DrawOp, EodHttpSource, LineChart, Period, PriceChartApp,
    QuoteRecord, QuoteSource, RecordingSurface, StaticSource, Theme, HEIGHT, WIDTH,
};
use std::path::Path;

// The provider's public demo token; good enough for the sample symbol.
const API_TOKEN: &str = "demo";
const DEFAULT_SYMBOL: &str = "MCD.US";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Arg 1: symbol or CSV path; arg 2: theme name.
    let input = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SYMBOL.to_string());
    let theme = closeline_core::theme::find(
        &std::env::args().nth(2).unwrap_or_else(|| "light".to_string()),
    );

    if Path::new(&input).exists() {
        println!("Using CSV input: {input}");
        let series = load_quotes_csv(&input)
            .with_context(|| format!("failed to load CSV '{input}'"))?;
        run(StaticSource::new(series), theme)
    } else {
        println!("Fetching {input} from the quote provider");
        run(EodHttpSource::new(input.as_str(), API_TOKEN), theme)
    }
}

fn run<S: QuoteSource>(source: S, theme: Theme) -> Result<()> {
    let mut app = PriceChartApp::mount(source).context("initial quote fetch failed")?;

    for period in [Period::Daily, Period::Weekly, Period::Monthly] {
        app.set_period(period)
            .with_context(|| format!("fetch for period '{}' failed", period.code()))?;
        println!(
            "period {}: {} records in window",
            period.code(),
            app.plot_window().len()
        );
    }

    app.set_period(Period::Daily)?;
    let ChartView::Ready(dataset) = app.view() else {
        anyhow::bail!("no data to plot");
    };
    println!("labels: {:?}", dataset.labels);
    print_window(app.plot_window());

    let chart = LineChart::new(dataset, theme);
    let layout = chart.layout(WIDTH, HEIGHT);

    // Hover the most recent point so the tooltip and crosshair engage.
    let pointer_x = layout.x_scale.to_px(chart.data.len().saturating_sub(1));
    let mut surface = RecordingSurface::new();
    let frame = chart.render(&mut surface, WIDTH, HEIGHT, Some(pointer_x));

    println!(
        "plotted area: ({:.0},{:.0})-({:.0},{:.0})",
        frame.chart_area.left, frame.chart_area.top, frame.chart_area.right, frame.chart_area.bottom
    );
    println!("point radii: {:?}", frame.point_radii);
    match frame.tooltip {
        Some(anchor) => println!("tooltip anchor: ({:.1}, {:.1})", anchor.x, anchor.y),
        None => println!("tooltip suppressed (no active point)"),
    }
    let strokes = surface.ops.iter().filter(|op| matches!(op, DrawOp::Stroke)).count();
    println!("recorded {} surface calls ({} strokes)", surface.op_count(), strokes);

    Ok(())
}

fn print_window(window: &[QuoteRecord]) {
    for record in window {
        match record.close {
            Some(close) => println!("  {}  close {:.2}", record.date, close),
            None => println!("  {}  close n/a", record.date),
        }
    }
}
