//! Transaction display formatting
//!
//! Register-style listing and a detail view.

use crate::models::Transaction;

use super::report::{format_amount, truncate};

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let marker = if txn.is_income { "+" } else { "-" };
    let description = if txn.description.is_empty() {
        "(no description)"
    } else {
        txn.description.as_str()
    };

    format!(
        "{:>4}  {:10}  {} {:24}  {:>5}  {:>12}",
        txn.id,
        txn.date,
        marker,
        truncate(description, 24),
        txn.category_id,
        format_amount(symbol, txn.amount)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:26}  {:>5}  {:>12}\n",
        "ID", "Date", "Description", "Cat", "Amount"
    ));
    output.push_str(&"-".repeat(67));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    category_name: Option<&str>,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date));
    output.push_str(&format!("Amount:      {}\n", format_amount(symbol, txn.amount)));
    output.push_str(&format!("Type:        {}\n", txn.kind()));

    match category_name {
        Some(name) => output.push_str(&format!("Category:    {} ({})\n", name, txn.category_id)),
        None => output.push_str(&format!("Category:    {} (unknown)\n", txn.category_id)),
    }

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}
