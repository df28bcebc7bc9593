//! Core business logic abstractions

pub mod account;
pub mod config;
pub mod error;
pub mod log;
pub mod market;
pub mod portfolio;
pub mod price;
pub mod report;
pub mod transaction;

// Re-export main types for cleaner imports
pub use account::Account;
pub use error::{ConfigurationError, MarketDataError, StorageError, TrackerError};
pub use price::{PriceHistory, PricePoint, PriceProvider};
pub use report::ReportFormat;
pub use transaction::Transaction;
