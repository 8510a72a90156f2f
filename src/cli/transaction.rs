//! Transaction CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{TrackerError, TrackerResult};
use crate::models::month::{today, validate_date, validate_month_year};
use crate::models::{Transaction, TransactionId};
use crate::storage::RecordStore;

use super::category::resolve_category_id;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List transactions
    List {
        /// Only transactions in this month (YYYY-MM)
        #[arg(short, long, conflicts_with = "category")]
        month: Option<String>,
        /// Only transactions in this category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Record a new transaction
    Add {
        /// Amount (e.g., "45.67")
        amount: f64,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Record as income instead of an expense
        #[arg(long)]
        income: bool,
        /// Explicit ID instead of the next free one
        #[arg(long)]
        id: Option<i32>,
    },

    /// Show transaction details
    Show {
        /// Transaction ID
        id: TransactionId,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: TransactionId,
        /// New amount
        #[arg(short, long)]
        amount: Option<f64>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Mark as income
        #[arg(long, conflicts_with = "expense")]
        income: bool,
        /// Mark as expense
        #[arg(long)]
        expense: bool,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: TransactionId,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut RecordStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::List { month, category } => {
            let transactions = match (month, category) {
                (Some(month), _) => {
                    validate_month_year(&month)?;
                    store.get_transactions_by_month(month.trim())
                }
                (None, Some(category)) => {
                    let id = resolve_category_id(store, &category)?;
                    store.get_transactions_by_category(id)
                }
                (None, None) => store.get_all_transactions(),
            };
            print!("{}", format_transaction_register(&transactions, symbol));
        }

        TransactionCommands::Add {
            amount,
            category,
            description,
            date,
            income,
            id,
        } => {
            let date = match date {
                Some(date) => {
                    validate_date(&date)?;
                    date.trim().to_string()
                }
                None => today(),
            };
            let category_id = resolve_category_id(store, &category)?;
            let id = id.map(TransactionId::new).unwrap_or(TransactionId::UNASSIGNED);

            let txn = Transaction::with_id(id, date, amount, description, category_id, income);
            let id = store.add_transaction(txn)?;
            println!("Recorded transaction {}", id);
        }

        TransactionCommands::Show { id } => {
            let txn = store
                .get_transaction(id)
                .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;
            let category = store.get_category(txn.category_id);
            print!(
                "{}",
                format_transaction_details(&txn, category.as_ref().map(|c| c.name.as_str()), symbol)
            );
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            description,
            date,
            income,
            expense,
        } => {
            let mut txn = store
                .get_transaction(id)
                .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

            if amount.is_none()
                && category.is_none()
                && description.is_none()
                && date.is_none()
                && !income
                && !expense
            {
                println!("No changes specified.");
                return Ok(());
            }

            if let Some(amount) = amount {
                txn.amount = amount;
            }
            if let Some(category) = category {
                txn.category_id = resolve_category_id(store, &category)?;
            }
            if let Some(description) = description {
                txn.description = description;
            }
            if let Some(date) = date {
                validate_date(&date)?;
                txn.date = date.trim().to_string();
            }
            if income {
                txn.is_income = true;
            } else if expense {
                txn.is_income = false;
            }

            store.update_transaction(txn)?;
            println!("Updated transaction {}", id);
        }

        TransactionCommands::Delete { id } => {
            store.delete_transaction(id)?;
            println!("Deleted transaction {}", id);
        }
    }

    Ok(())
}
