//! Report rendering for an [`Account`].

use crate::core::account::{Account, format_balance};
use crate::core::error::ConfigurationError;
use std::fmt::Display;
use std::str::FromStr;

pub const TEXT_REPORT_HEADER: &str = "=== Financial Report ===";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ReportFormat::Text => "text",
            }
        )
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            _ => Err(ConfigurationError::UnknownReportFormat(s.to_string())),
        }
    }
}

impl ReportFormat {
    /// Renders the account's current in-memory state, newline terminated.
    pub fn render(&self, account: &Account) -> String {
        match self {
            ReportFormat::Text => render_text(account),
        }
    }
}

fn render_text(account: &Account) -> String {
    let mut output = format!("{TEXT_REPORT_HEADER}\nAccount: {}\n", account.name());
    for line in account.list_transactions() {
        output.push_str(&line);
        output.push('\n');
    }
    output.push_str(&format!("Balance: {}\n", format_balance(account.balance())));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transaction::Transaction;
    use chrono::NaiveDate;

    #[test]
    fn test_format_lookup() {
        assert_eq!("text".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!(" TEXT ".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!(
            "bogus".parse::<ReportFormat>(),
            Err(ConfigurationError::UnknownReportFormat("bogus".to_string()))
        );
        assert_eq!(
            "bogus".parse::<ReportFormat>().unwrap_err().to_string(),
            "unknown report format: bogus"
        );
        assert_eq!(ReportFormat::Text.to_string(), "text");
    }

    #[test]
    fn test_text_report_layout() {
        let ts = NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let mut account = Account::new("Personal Account");
        account.add_transaction(Transaction::new(1000.0, "Salary", ts, "April Salary"));
        account.add_transaction(Transaction::new(-150.0, "Groceries", ts, "Weekly groceries"));

        let expected = "\
=== Financial Report ===
Account: Personal Account
2024-04-01 08:00:00 | Salary: $1000.00 - April Salary
2024-04-01 08:00:00 | Groceries: $-150.00 - Weekly groceries
Balance: 850.0
";
        assert_eq!(ReportFormat::Text.render(&account), expected);
    }

    #[test]
    fn test_text_report_empty_account() {
        let account = Account::new("Empty");
        assert_eq!(
            ReportFormat::Text.render(&account),
            "=== Financial Report ===\nAccount: Empty\nBalance: 0.0\n"
        );
    }
}
