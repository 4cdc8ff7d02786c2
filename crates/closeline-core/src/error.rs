// File: crates/closeline-core/src/error.rs
// Summary: Error types for quote retrieval and decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode quote series: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read quote csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed quote record: {0}")]
    Record(String),
}
