//! CLI commands for reports

use clap::Subcommand;

use crate::config::Settings;
use crate::display::summary::{format_month_summary, format_monthly_totals};
use crate::error::TrackerResult;
use crate::storage::RecordStore;

use super::budget::month_or_default;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expenses and per-category net totals for one month
    Summary {
        /// Month (YYYY-MM), defaults to the report month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Totals per month across all transactions
    Monthly {
        /// Show income instead of expenses
        #[arg(long)]
        income: bool,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &RecordStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { month } => {
            let month = month_or_default(month, settings)?;
            print!(
                "{}",
                format_month_summary(
                    &month,
                    store.total_income(&month),
                    store.total_expense(&month),
                    &store.category_totals(&month),
                    &store.get_all_categories(),
                    symbol,
                )
            );
        }

        ReportCommands::Monthly { income } => {
            let title = if income {
                "Income by month"
            } else {
                "Expenses by month"
            };
            print!(
                "{}",
                format_monthly_totals(&store.monthly_totals(income), title, symbol)
            );
        }
    }

    Ok(())
}
