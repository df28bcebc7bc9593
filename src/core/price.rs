//! Pricing abstractions and core types

use crate::core::error::MarketDataError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: Option<f64>,
}

/// Time-indexed closes returned by a single refresh, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistory {
    pub points: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Close of the most recent bar that has one. Trailing bars without a
    /// close (an in-progress session) are skipped.
    pub fn latest_close(&self) -> Option<f64> {
        self.points.iter().rev().find_map(|p| p.close)
    }
}

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetches the 1-day price history for `symbol`. An unknown symbol or a
    /// closed market may legitimately yield an empty history.
    async fn fetch_history(&self, symbol: &str) -> Result<PriceHistory, MarketDataError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(ts: i64, close: Option<f64>) -> PricePoint {
        PricePoint {
            timestamp: Utc.timestamp_opt(ts, 0).unwrap(),
            close,
        }
    }

    #[test]
    fn test_latest_close() {
        assert_eq!(PriceHistory::default().latest_close(), None);

        let history = PriceHistory::new(vec![point(1, Some(10.0)), point(2, Some(11.5))]);
        assert_eq!(history.latest_close(), Some(11.5));

        let history = PriceHistory::new(vec![point(1, Some(10.0)), point(2, None)]);
        assert_eq!(history.latest_close(), Some(10.0));

        let history = PriceHistory::new(vec![point(1, None)]);
        assert_eq!(history.latest_close(), None);
    }
}
