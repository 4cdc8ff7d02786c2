// File: crates/closeline-core/src/quotes.rs
// Summary: Quote sources (EOD HTTP provider, in-memory, CSV file loader).

use std::path::Path;

use tracing::debug;

use crate::error::QuoteError;
use crate::quote::{Period, QuoteRecord};

/// Default base URL of the EOD historical data provider.
pub const DEFAULT_BASE_URL: &str = "https://eodhistoricaldata.com/api";

/// Provider of an ordered (ascending by date) quote series for one symbol.
/// The period is forwarded as the provider-side granularity filter.
pub trait QuoteSource {
    fn fetch(&self, period: Period) -> Result<Vec<QuoteRecord>, QuoteError>;
}

/// Blocking HTTP source issuing
/// `GET {base}/eod/{SYMBOL}?api_token=..&fmt=json&period=<d|w|m>`.
pub struct EodHttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
    symbol: String,
    api_token: String,
}

impl EodHttpSource {
    pub fn new(symbol: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            symbol: symbol.into(),
            api_token: api_token.into(),
        }
    }

    /// Point the source at a different provider host (tests, mirrors).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, period: Period) -> String {
        format!(
            "{}/eod/{}?api_token={}&fmt=json&period={}",
            self.base_url,
            self.symbol,
            self.api_token,
            period.code()
        )
    }
}

impl QuoteSource for EodHttpSource {
    fn fetch(&self, period: Period) -> Result<Vec<QuoteRecord>, QuoteError> {
        let url = self.url(period);
        debug!(%url, "requesting quote series");
        let body = self.client.get(&url).send()?.error_for_status()?.text()?;
        let series: Vec<QuoteRecord> = serde_json::from_str(&body)?;
        debug!(records = series.len(), "decoded quote series");
        Ok(series)
    }
}

/// In-memory source returning a fixed series regardless of period. The series
/// plays the role of an already-granularity-filtered provider response.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    pub series: Vec<QuoteRecord>,
}

impl StaticSource {
    pub fn new(series: Vec<QuoteRecord>) -> Self { Self { series } }
}

impl QuoteSource for StaticSource {
    fn fetch(&self, _period: Period) -> Result<Vec<QuoteRecord>, QuoteError> {
        Ok(self.series.clone())
    }
}

/// Load a quote series from a CSV file with `date,open,high,low,close,volume`
/// headers. Rows are kept in file order; the provider contract (ascending
/// dates) is the caller's responsibility.
pub fn load_quotes_csv(path: impl AsRef<Path>) -> Result<Vec<QuoteRecord>, QuoteError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())?;

    let mut out = Vec::new();
    for rec in rdr.deserialize::<QuoteRecord>() {
        out.push(rec?);
    }
    debug!(records = out.len(), "loaded quote csv");
    Ok(out)
}
