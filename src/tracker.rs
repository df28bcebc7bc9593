//! Application-level operations over the ledger, the store and the portfolio.

use crate::core::account::Account;
use crate::core::error::TrackerError;
use crate::core::portfolio::{Portfolio, QuoteTable};
use crate::core::price::PriceProvider;
use crate::core::report::ReportFormat;
use crate::core::transaction::Transaction;
use crate::store::TransactionStore;
use std::io::Write;
use tracing::{debug, error, info};

pub struct Tracker<S: TransactionStore> {
    store: S,
    provider: Box<dyn PriceProvider>,
    account: Account,
    portfolio: Portfolio,
}

impl<S: TransactionStore> Tracker<S> {
    /// Initializes the store and reloads every persisted transaction, in
    /// store order, into a fresh account.
    pub fn open(
        store: S,
        provider: Box<dyn PriceProvider>,
        account_name: &str,
    ) -> Result<Self, TrackerError> {
        store.initialize()?;

        let mut account = Account::new(account_name);
        for row in store.scan_all()? {
            account.add_transaction(row.into_transaction()?);
        }
        info!(
            "Loaded {} transactions into {}",
            account.transactions().len(),
            account.name()
        );

        Ok(Self {
            store,
            provider,
            account,
            portfolio: Portfolio::new(),
        })
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records a transaction stamped with the current time.
    ///
    /// The in-memory append happens first and is not rolled back: if the
    /// durable write fails, the account and the store disagree until the
    /// process exits.
    pub fn add_transaction(
        &mut self,
        amount: f64,
        category: &str,
        description: &str,
    ) -> Result<(), TrackerError> {
        let transaction = Transaction::now(amount, category, description);
        let iso_timestamp = transaction.iso_timestamp();
        self.account.add_transaction(transaction);

        if let Err(e) = self
            .store
            .append(amount, category, &iso_timestamp, description)
        {
            error!(
                error = %e,
                "Transaction kept in memory but not persisted; ledger and store have diverged"
            );
            return Err(e.into());
        }

        info!("Added transaction: {category} {amount:.2} ({description})");
        Ok(())
    }

    pub fn track_company(&mut self, symbol: &str) {
        self.portfolio.track(symbol);
        info!("Tracking company: {symbol}");
    }

    pub async fn company_prices(&mut self) -> QuoteTable {
        self.portfolio.current_prices(self.provider.as_ref()).await
    }

    /// Refreshes all tracked prices and writes one line per unique symbol.
    pub async fn show_company_prices<W: Write>(
        &mut self,
        out: &mut W,
    ) -> Result<QuoteTable, TrackerError> {
        let prices = self.company_prices().await;
        for (symbol, price) in prices.iter() {
            writeln!(out, "{}", price_line(symbol, price)).map_err(TrackerError::Output)?;
        }
        Ok(prices)
    }

    /// Writes the account report in `format`. An unknown format fails before
    /// anything is written.
    pub fn generate_report<W: Write>(&self, format: &str, out: &mut W) -> Result<(), TrackerError> {
        let format: ReportFormat = format.parse()?;
        debug!("Generating {format} report");
        out.write_all(format.render(&self.account).as_bytes())
            .map_err(TrackerError::Output)
    }
}

pub fn price_line(symbol: &str, price: Option<f64>) -> String {
    match price {
        Some(price) => format!("{symbol}: ${price:.2}"),
        None => format!("{symbol}: Price not available"),
    }
}
