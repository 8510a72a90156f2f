//! Budget CLI commands
//!
//! Monthly allocations per category, and allocated-versus-spent status.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::budget::{format_budget_list, format_budget_status};
use crate::error::{TrackerError, TrackerResult};
use crate::models::month::validate_month_year;
use crate::models::Budget;
use crate::storage::RecordStore;

use super::category::resolve_category_id;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List budgets
    List {
        /// Only budgets for this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set a budget for a category and month (fails if one already exists)
    #[command(alias = "add")]
    Set {
        /// Category name or ID
        category: String,
        /// Allocated amount
        amount: f64,
        /// Budget month (YYYY-MM), defaults to the report month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Change the allocation of an existing budget
    Update {
        /// Category name or ID
        category: String,
        /// New allocated amount
        amount: f64,
        /// Budget month (YYYY-MM), defaults to the report month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete a budget
    Delete {
        /// Category name or ID
        category: String,
        /// Budget month (YYYY-MM), defaults to the report month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show allocated versus spent for a month
    Status {
        /// Month (YYYY-MM), defaults to the report month
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Validate an optional month argument, falling back to the configured month
pub fn month_or_default(month: Option<String>, settings: &Settings) -> TrackerResult<String> {
    let month = month
        .map(|m| m.trim().to_string())
        .unwrap_or_else(|| settings.report_month());
    validate_month_year(&month)?;
    Ok(month)
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &mut RecordStore,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::List { month } => {
            let budgets = match month {
                Some(month) => {
                    validate_month_year(&month)?;
                    store.get_budgets_by_month(month.trim())
                }
                None => store.get_all_budgets(),
            };
            print!("{}", format_budget_list(&budgets, symbol));
        }

        BudgetCommands::Set {
            category,
            amount,
            month,
        } => {
            let month = month_or_default(month, settings)?;
            let category_id = resolve_category_id(store, &category)?;
            let budget = Budget::new(category_id, month, amount);
            let key = budget.key();

            store.add_budget(budget)?;
            println!("Set budget {} to {:.2}", key, amount);
        }

        BudgetCommands::Update {
            category,
            amount,
            month,
        } => {
            let month = month_or_default(month, settings)?;
            let category_id = resolve_category_id(store, &category)?;
            let mut budget = store
                .get_budget(category_id, &month)
                .ok_or_else(|| {
                    TrackerError::budget_not_found(format!("{}/{}", category_id, month))
                })?;
            budget.allocated_amount = amount;
            let key = budget.key();

            store.update_budget(budget)?;
            println!("Updated budget {} to {:.2}", key, amount);
        }

        BudgetCommands::Delete { category, month } => {
            let month = month_or_default(month, settings)?;
            let category_id = resolve_category_id(store, &category)?;

            store.delete_budget(category_id, &month)?;
            println!("Deleted budget {}/{}", category_id, month);
        }

        BudgetCommands::Status { month } => {
            let month = month_or_default(month, settings)?;
            let statuses = store.budget_status(&month);

            println!("Budget status for {}", month);
            print!(
                "{}",
                format_budget_status(&statuses, symbol, |s| {
                    store.get_category(s.category_id).map(|c| c.name)
                })
            );
        }
    }

    Ok(())
}
