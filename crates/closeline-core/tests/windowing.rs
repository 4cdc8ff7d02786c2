// File: crates/closeline-core/tests/windowing.rs
// Purpose: Validate the period windowing policy over fetched series.

use chrono::NaiveDate;
use closeline_core::{select, Period, QuoteRecord, DAILY_WINDOW};

fn series(n: usize) -> Vec<QuoteRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..n)
        .map(|i| QuoteRecord::at(start + chrono::Days::new(i as u64), 100.0 + i as f64))
        .collect()
}

#[test]
fn daily_returns_last_six() {
    let s = series(10);
    let window = select(&s, Period::Daily);
    assert_eq!(window.len(), DAILY_WINDOW);
    assert_eq!(window, &s[4..]);
}

#[test]
fn daily_keeps_order() {
    let s = series(30);
    let window = select(&s, Period::Daily);
    for pair in window.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn daily_short_series_is_identity() {
    let s = series(4);
    assert_eq!(select(&s, Period::Daily), &s[..]);
}

#[test]
fn weekly_and_monthly_are_identity() {
    let s = series(200);
    assert_eq!(select(&s, Period::Weekly), &s[..]);
    assert_eq!(select(&s, Period::Monthly), &s[..]);
}

#[test]
fn empty_series_yields_empty_window() {
    for period in [Period::Daily, Period::Weekly, Period::Monthly] {
        assert!(select(&[], period).is_empty());
    }
}
