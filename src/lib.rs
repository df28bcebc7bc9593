pub mod cli;
pub mod core;
pub mod providers;
pub mod store;
pub mod tracker;

use crate::core::config::AppConfig;
use crate::providers::YahooFinanceProvider;
use crate::store::SqliteStore;
use crate::tracker::Tracker;
use anyhow::{Context, Result};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Demo,
    Add {
        amount: f64,
        category: String,
        description: String,
    },
    List,
    Prices {
        symbols: Vec<String>,
    },
    Report {
        format: String,
    },
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

/// Opens the configured database and reloads the ledger from it.
pub fn open_tracker(config: &AppConfig) -> Result<Tracker<SqliteStore>> {
    let db_path = config.database_path()?;
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

    let yahoo = &config.providers.yahoo;
    let provider = YahooFinanceProvider::new(&yahoo.base_url, yahoo.timeout())?;

    let tracker = Tracker::open(store, Box::new(provider), &config.account_name)
        .with_context(|| format!("Failed to load transactions from {}", db_path.display()))?;
    Ok(tracker)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Finance Tracker starting...");

    let config = load_config(config_path)?;
    let mut tracker = open_tracker(&config)?;

    match command {
        AppCommand::Demo => cli::demo::run(&mut tracker, &config.symbols).await,
        AppCommand::Add {
            amount,
            category,
            description,
        } => cli::ledger::add(&mut tracker, amount, &category, &description),
        AppCommand::List => cli::ledger::list(&tracker),
        AppCommand::Prices { symbols } => {
            let all: Vec<String> = config.symbols.iter().chain(&symbols).cloned().collect();
            cli::prices::run(&mut tracker, &all).await
        }
        AppCommand::Report { format } => cli::report::run(&tracker, &format),
    }
}
