//! Error taxonomy shared by the store, the price providers and the tracker.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the durable transaction store. Fatal at startup.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to open transaction store at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Transaction store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Corrupt transaction row {row}: {reason}")]
    CorruptRow { row: i64, reason: String },

    #[error("Transaction store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid caller-supplied configuration. Surfaced, never recovered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unknown report format: {0}")]
    UnknownReportFormat(String),
}

/// Failures talking to the external price service.
///
/// These never leave [`crate::core::market::Company`]; they are logged and
/// downgraded to "price unavailable".
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid price service URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Request error for symbol {symbol}: {source}")]
    Request {
        symbol: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request timed out for symbol {symbol}")]
    Timeout { symbol: String },

    #[error("HTTP error: {status} for symbol: {symbol}")]
    Http {
        symbol: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to parse price response for {symbol}: {source}")]
    Parse {
        symbol: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors returned by [`crate::tracker::Tracker`] operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
