use crate::store::TransactionStore;
use crate::tracker::Tracker;
use anyhow::Result;

pub fn run<S: TransactionStore>(tracker: &Tracker<S>, format: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    tracker.generate_report(format, &mut stdout)?;
    Ok(())
}
