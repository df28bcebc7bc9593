use crate::core::price::{PriceHistory, PriceProvider};
use tracing::{debug, warn};

/// A tracked ticker and the result of its most recent refresh.
///
/// Quotes are transient: nothing here is persisted, and the price is absent
/// until [`Company::update`] has run at least once.
#[derive(Debug, Clone)]
pub struct Company {
    symbol: String,
    history: Option<PriceHistory>,
}

impl Company {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            history: None,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Best-effort refresh. Any provider failure is logged and recorded as
    /// "no data", which makes [`Company::current_price`] absent again.
    pub async fn update(&mut self, provider: &dyn PriceProvider) -> Option<f64> {
        match provider.fetch_history(&self.symbol).await {
            Ok(history) => {
                debug!(symbol = %self.symbol, points = history.points.len(), "Refreshed price history");
                self.history = Some(history);
            }
            Err(e) => {
                warn!(symbol = %self.symbol, error = %e, "Price lookup failed, treating as unavailable");
                self.history = Some(PriceHistory::default());
            }
        }
        self.current_price()
    }

    /// Latest close from the last refresh. Never re-fetches.
    pub fn current_price(&self) -> Option<f64> {
        self.history.as_ref().and_then(PriceHistory::latest_close)
    }
}
