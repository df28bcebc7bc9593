use super::ui;
use crate::core::account::{Account, format_balance};
use crate::store::TransactionStore;
use crate::tracker::Tracker;
use anyhow::Result;
use comfy_table::Cell;

pub fn add<S: TransactionStore>(
    tracker: &mut Tracker<S>,
    amount: f64,
    category: &str,
    description: &str,
) -> Result<()> {
    tracker.add_transaction(amount, category, description)?;
    println!(
        "Balance: {}",
        ui::style_text(
            &format_balance(tracker.account().balance()),
            ui::StyleType::TotalValue
        )
    );
    Ok(())
}

pub fn list<S: TransactionStore>(tracker: &Tracker<S>) -> Result<()> {
    println!("{}", display_as_table(tracker.account()));
    Ok(())
}

fn display_as_table(account: &Account) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Category"),
        ui::header_cell("Amount"),
        ui::header_cell("Description"),
    ]);

    for t in account.transactions() {
        table.add_row(vec![
            Cell::new(t.timestamp().format("%Y-%m-%d %H:%M")),
            Cell::new(t.category()),
            ui::amount_cell(t.amount()),
            Cell::new(t.description()),
        ]);
    }

    let balance = account.balance();
    let balance_style = if balance >= 0.0 {
        ui::StyleType::TotalValue
    } else {
        ui::StyleType::Error
    };

    let mut output = format!(
        "Account: {}\n\n",
        ui::style_text(account.name(), ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{}: {}",
        ui::style_text("Balance", ui::StyleType::TotalLabel),
        ui::style_text(&format!("{balance:.2}"), balance_style)
    ));
    output
}
