use super::ui;
use crate::store::TransactionStore;
use crate::tracker::Tracker;
use anyhow::Result;
use std::io::Write;

/// Tracks `symbols` and prints the latest price of every tracked company.
pub async fn run<S: TransactionStore>(tracker: &mut Tracker<S>, symbols: &[String]) -> Result<()> {
    for symbol in symbols {
        tracker.track_company(symbol);
    }

    if tracker.portfolio().is_empty() {
        println!("No companies tracked.");
        return Ok(());
    }

    let pb = ui::new_spinner("Fetching prices...");
    let mut lines = Vec::new();
    let result = tracker.show_company_prices(&mut lines).await;
    pb.finish_and_clear();
    result?;

    std::io::stdout().lock().write_all(&lines)?;
    Ok(())
}
