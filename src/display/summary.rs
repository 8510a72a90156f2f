//! Monthly summary and trend formatting

use std::collections::BTreeMap;

use crate::models::{Category, CategoryId};

use super::report::{format_amount, format_amount_colored, format_bar, separator, truncate};

/// Format the income/expense summary for one month with per-category net totals
pub fn format_month_summary(
    month_year: &str,
    income: f64,
    expense: f64,
    category_totals: &BTreeMap<CategoryId, f64>,
    categories: &[Category],
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Summary for {}\n", month_year));
    output.push_str(&format!("{}\n", separator(40)));
    output.push_str(&format!("Total income:   {:>14}\n", format_amount(symbol, income)));
    output.push_str(&format!("Total expenses: {:>14}\n", format_amount(symbol, expense)));
    output.push_str(&format!(
        "Net:            {:>14}\n",
        format_amount_colored(symbol, income - expense)
    ));

    if category_totals.is_empty() {
        return output;
    }

    output.push_str("\nBy category:\n");
    for (id, total) in category_totals {
        let name = categories
            .iter()
            .find(|c| c.id == *id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("Category {}", id));
        output.push_str(&format!(
            "  {:<20} {:>14}\n",
            truncate(&name, 20),
            format_amount(symbol, *total)
        ));
    }

    output
}

/// Format per-month totals with a bar scaled to the largest month
pub fn format_monthly_totals(totals: &BTreeMap<String, f64>, title: &str, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", title));
    output.push_str(&format!("{}\n", separator(48)));

    if totals.is_empty() {
        output.push_str("No transactions found.\n");
        return output;
    }

    let max = totals.values().cloned().fold(0.0_f64, f64::max);
    for (month, total) in totals {
        output.push_str(&format!(
            "{:<8} {:>14}  {}\n",
            month,
            format_amount(symbol, *total),
            format_bar(*total, max, 20)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_summary() {
        let categories = vec![Category::with_id(CategoryId::new(1), "Groceries", "", "#4CAF50")];
        let mut totals = BTreeMap::new();
        totals.insert(CategoryId::new(0), 3000.0);
        totals.insert(CategoryId::new(1), -45.67);

        let output = format_month_summary("2025-05", 3000.0, 1245.67, &totals, &categories, "$");
        assert!(output.contains("Summary for 2025-05"));
        assert!(output.contains("$1245.67"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("Category 0"));
        assert!(output.contains("-$45.67"));
    }

    #[test]
    fn test_monthly_totals() {
        let mut totals = BTreeMap::new();
        totals.insert("2025-04".to_string(), 50.0);
        totals.insert("2025-05".to_string(), 100.0);

        let output = format_monthly_totals(&totals, "Expenses by month", "$");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("2025-04"));
        assert!(lines[3].contains("$100.00"));

        let empty = format_monthly_totals(&BTreeMap::new(), "Income by month", "$");
        assert!(empty.contains("No transactions found."));
    }
}
