//! Budget display formatting

use crate::models::Budget;
use crate::storage::BudgetStatus;

use super::report::{format_amount, format_bar, separator, truncate};

/// Format budgets as a table
pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:>8}  {:<7}  {:>12}\n", "Category", "Month", "Allocated"));
    output.push_str(&format!("{}\n", separator(31)));

    for budget in budgets {
        output.push_str(&format!(
            "{:>8}  {:<7}  {:>12}\n",
            budget.category_id,
            budget.month_year,
            format_amount(symbol, budget.allocated_amount)
        ));
    }

    output
}

/// Format allocated versus spent for a month's budgets
///
/// `name_of` maps a category ID to a display name; unknown IDs fall back to
/// `#<id>`.
pub fn format_budget_status<F>(statuses: &[BudgetStatus], symbol: &str, name_of: F) -> String
where
    F: Fn(&BudgetStatus) -> Option<String>,
{
    if statuses.is_empty() {
        return "No budgets set for this month.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16}  {:>12}  {:>12}  {:>12}  {}\n",
        "Category", "Allocated", "Spent", "Remaining", "Usage"
    ));
    output.push_str(&format!("{}\n", separator(72)));

    for status in statuses {
        let name = name_of(status).unwrap_or_else(|| format!("#{}", status.category_id));
        let flag = if status.is_overspent() { " OVER" } else { "" };
        output.push_str(&format!(
            "{:<16}  {:>12}  {:>12}  {:>12}  {}{}\n",
            truncate(&name, 16),
            format_amount(symbol, status.allocated),
            format_amount(symbol, status.spent),
            format_amount(symbol, status.remaining),
            format_bar(status.spent, status.allocated, 10),
            flag
        ));
    }

    output
}
