// File: crates/closeline-core/src/app.rs
// Summary: Event-driven app state; period selection drives fetch and dataset.

use tracing::{debug, info};

use crate::dataset::ChartDataset;
use crate::error::QuoteError;
use crate::quote::{Period, QuoteRecord};
use crate::quotes::QuoteSource;
use crate::window;

/// What the presentation layer should show right now.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartView {
    /// No series fetched yet (or the initial fetch failed); render nothing.
    Loading,
    Ready(ChartDataset),
}

/// Single-symbol chart state machine: holds the selected period and the last
/// successfully fetched series. Fetches run synchronously on mount and on
/// every period change, so a stale response can never overwrite a newer one.
pub struct PriceChartApp<S: QuoteSource> {
    source: S,
    period: Period,
    series: Option<Vec<QuoteRecord>>,
}

impl<S: QuoteSource> PriceChartApp<S> {
    /// App in the loading state; no fetch has happened yet.
    pub fn new(source: S) -> Self {
        Self { source, period: Period::default(), series: None }
    }

    /// Create the app and run the initial fetch for the default period.
    pub fn mount(source: S) -> Result<Self, QuoteError> {
        let mut app = Self::new(source);
        app.refresh()?;
        Ok(app)
    }

    pub fn period(&self) -> Period { self.period }

    /// Switch period and refetch. On error the period sticks but the last
    /// fetched series is kept, so the view degrades to stale data rather than
    /// hanging in the loading state forever.
    pub fn set_period(&mut self, period: Period) -> Result<(), QuoteError> {
        self.period = period;
        self.refresh()
    }

    /// Fetch the series for the current period and replace the held one.
    pub fn refresh(&mut self) -> Result<(), QuoteError> {
        debug!(period = self.period.code(), "fetching quote series");
        let series = self.source.fetch(self.period)?;
        info!(records = series.len(), period = self.period.code(), "quote series updated");
        self.series = Some(series);
        Ok(())
    }

    pub fn is_loading(&self) -> bool { self.series.is_none() }

    /// The window of records currently selected for display.
    pub fn plot_window(&self) -> &[QuoteRecord] {
        match &self.series {
            Some(series) => window::select(series, self.period),
            None => &[],
        }
    }

    pub fn view(&self) -> ChartView {
        if self.series.is_none() {
            return ChartView::Loading;
        }
        ChartView::Ready(ChartDataset::from_window(self.plot_window()))
    }
}
