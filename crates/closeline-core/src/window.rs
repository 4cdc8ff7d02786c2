// File: crates/closeline-core/src/window.rs
// Summary: Windowing engine; selects the record suffix to plot for a period.

use crate::quote::{Period, QuoteRecord};

/// Fixed daily window: today plus the five prior trading days.
pub const DAILY_WINDOW: usize = 6;

/// Select the plot window for `period` out of the fetched series.
///
/// Daily keeps the last [`DAILY_WINDOW`] records; weekly and monthly plot the
/// series as fetched (any truncation already happened server-side through the
/// requested granularity). Pure projection: the result is always a contiguous
/// suffix of `series`, never reordered, and empty input yields an empty window.
pub fn select(series: &[QuoteRecord], period: Period) -> &[QuoteRecord] {
    match period {
        Period::Daily => {
            let start = series.len().saturating_sub(DAILY_WINDOW);
            &series[start..]
        }
        Period::Weekly | Period::Monthly => series,
    }
}
