use crate::core::transaction::Transaction;

/// The single in-memory ledger. Transactions keep load order, then append order.
#[derive(Debug, Clone, Default)]
pub struct Account {
    name: String,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transactions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends without validating sign or category.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Sum of all signed amounts; recomputed on every call. An empty
    /// account is positive zero.
    pub fn balance(&self) -> f64 {
        self.transactions
            .iter()
            .fold(0.0, |acc, t| acc + t.amount())
    }

    pub fn list_transactions(&self) -> Vec<String> {
        self.transactions.iter().map(ToString::to_string).collect()
    }
}

/// Formats a balance the way the report prints it: shortest round-trip
/// digits in plain decimal notation, always with a fractional part
/// (`850.0`, `849.99`, `10000000000000000.0`).
pub fn format_balance(balance: f64) -> String {
    let digits = balance.to_string();
    if balance.is_finite() && !digits.contains('.') {
        format!("{digits}.0")
    } else {
        digits
    }
}
