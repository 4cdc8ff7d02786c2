// File: crates/closeline-core/src/label.rs
// Summary: Axis label formatter with blank first/last labels.

use crate::quote::QuoteRecord;

/// Display label for the record at `index` in a window of `window_len`.
///
/// The first and last slots are always blank, reserving visual space at the
/// axis edges; interior slots get an abbreviated month + day ("Jan 5"). A
/// window of length 1 yields a single blank label.
pub fn label_for(record: &QuoteRecord, index: usize, window_len: usize) -> String {
    if window_len == 0 || index == 0 || index == window_len - 1 {
        return String::new();
    }
    record.date.format("%b %-d").to_string()
}
