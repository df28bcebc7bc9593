//! Ledger entries

use chrono::{Local, NaiveDateTime, SubsecRound};
use std::fmt::Display;

/// Format used when persisting timestamps. Parsing accepts any ISO-8601
/// date-time `NaiveDateTime` understands.
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One immutable ledger entry. Expenses carry a negative amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    amount: f64,
    category: String,
    timestamp: NaiveDateTime,
    description: String,
}

impl Transaction {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        timestamp: NaiveDateTime,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            timestamp,
            description: description.into(),
        }
    }

    /// Creates a transaction stamped with the current local time, truncated
    /// to the microsecond precision the store keeps.
    pub fn now(amount: f64, category: impl Into<String>, description: impl Into<String>) -> Self {
        let timestamp = Local::now().naive_local().trunc_subsecs(6);
        Self::new(amount, category, timestamp, description)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn iso_timestamp(&self) -> String {
        self.timestamp.format(ISO_TIMESTAMP_FORMAT).to_string()
    }
}

/// Renders the ledger line `<date> | <category>: $<amount> - <description>`.
impl Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {}: ${:.2} - {}",
            self.timestamp, self.category, self.amount, self.description
        )
    }
}

/// Parses a persisted ISO-8601 timestamp, with or without fractional seconds.
pub fn parse_iso_timestamp(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    text.trim().parse::<NaiveDateTime>()
}
