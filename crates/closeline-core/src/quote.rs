// File: crates/closeline-core/src/quote.rs
// Summary: Quote record model and period granularity as sent to the provider.

use chrono::NaiveDate;
use serde::Deserialize;

/// One end-of-day record, as received from the quote provider. Ordered
/// ascending by date within a series; dates are unique.
///
/// `close` is optional: a record without a close plots as a gap instead of
/// failing the render pass.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct QuoteRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub open: f64,
    #[serde(default)]
    pub high: f64,
    #[serde(default)]
    pub low: f64,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub volume: f64,
}

impl QuoteRecord {
    /// Convenience constructor for a date + close pair (tests, fixtures).
    pub fn at(date: NaiveDate, close: f64) -> Self {
        Self { date, open: 0.0, high: 0.0, low: 0.0, close: Some(close), volume: 0.0 }
    }
}

/// Display granularity for the series, also sent to the provider as its
/// single-character period filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Provider wire code (`period=` query value).
    pub const fn code(self) -> &'static str {
        match self {
            Period::Daily => "d",
            Period::Weekly => "w",
            Period::Monthly => "m",
        }
    }
}
