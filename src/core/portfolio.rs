use crate::core::market::Company;
use crate::core::price::PriceProvider;
use futures::future::join_all;
use tracing::debug;

/// Latest prices keyed by symbol, in first-tracked order. Each symbol
/// appears once; re-inserting a symbol overwrites its price in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteTable {
    entries: Vec<(String, Option<f64>)>,
}

impl QuoteTable {
    pub fn insert(&mut self, symbol: &str, price: Option<f64>) {
        match self.entries.iter_mut().find(|(s, _)| s == symbol) {
            Some(entry) => entry.1 = price,
            None => self.entries.push((symbol.to_string(), price)),
        }
    }

    /// `None` if the symbol is untracked, `Some(None)` if its price is unavailable.
    pub fn get(&self, symbol: &str) -> Option<Option<f64>> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, price)| *price)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.entries.iter().map(|(s, p)| (s.as_str(), *p))
    }
}

/// Tracked symbols in tracking order. Duplicates are kept; there is no removal.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    companies: Vec<Company>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symbol without validating it against the price service.
    pub fn track(&mut self, symbol: &str) {
        self.companies.push(Company::new(symbol));
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Refreshes every tracked company and collects the latest prices.
    ///
    /// Fetches run concurrently since each only touches its own company.
    /// Results are folded in tracking order, so for a duplicated symbol the
    /// last entry wins.
    pub async fn current_prices(&mut self, provider: &dyn PriceProvider) -> QuoteTable {
        debug!("Refreshing prices for {} tracked symbols", self.companies.len());
        let prices = join_all(self.companies.iter_mut().map(|c| c.update(provider))).await;

        let mut table = QuoteTable::default();
        for (company, price) in self.companies.iter().zip(prices) {
            table.insert(company.symbol(), price);
        }
        table
    }
}
