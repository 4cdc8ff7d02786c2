// File: crates/closeline-core/src/dataset.rs
// Summary: Chart-facing dataset view built 1:1 from a plot window.

use crate::label::label_for;
use crate::quote::QuoteRecord;

/// Labels and close values for the plotted window. `labels[i]` corresponds to
/// `values[i]` for all i; a `None` value is a gap (record without a close).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl ChartDataset {
    /// Build the dataset from a plot window, applying the label formatter to
    /// every record.
    pub fn from_window(window: &[QuoteRecord]) -> Self {
        let n = window.len();
        let labels = window
            .iter()
            .enumerate()
            .map(|(i, r)| label_for(r, i, n))
            .collect();
        let values = window.iter().map(|r| r.close).collect();
        Self { labels, values }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Min/max over the non-gap values, if any exist.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut any = false;
        for v in self.values.iter().flatten() {
            lo = lo.min(*v);
            hi = hi.max(*v);
            any = true;
        }
        if any { Some((lo, hi)) } else { None }
    }
}
