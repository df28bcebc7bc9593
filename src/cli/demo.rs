use crate::store::TransactionStore;
use crate::tracker::Tracker;
use anyhow::Result;
use tracing::info;

/// The fixed walkthrough run when no command is given: two transactions,
/// the configured symbols, their prices, and a text report.
pub async fn run<S: TransactionStore>(tracker: &mut Tracker<S>, symbols: &[String]) -> Result<()> {
    info!("Running demo sequence");

    tracker.add_transaction(1000.0, "Salary", "April Salary")?;
    tracker.add_transaction(-150.0, "Groceries", "Weekly groceries")?;

    super::prices::run(tracker, symbols).await?;
    super::report::run(tracker, "text")
}
