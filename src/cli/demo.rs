//! Sample data walkthrough
//!
//! Seeds three categories, three transactions and three May 2025 budgets,
//! then prints the month's analysis and reloads the data directory to show
//! what was persisted. Records that already exist are reported and skipped.

use tracing::info;

use crate::config::Settings;
use crate::display::report::format_amount;
use crate::error::TrackerResult;
use crate::models::{Budget, Category, CategoryId, Transaction};
use crate::storage::RecordStore;

/// Month the sample data lives in
pub const DEMO_MONTH: &str = "2025-05";

/// Seed the sample data and print the analysis
pub fn run_demo(store: &mut RecordStore, settings: &Settings) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    println!("Categories:");
    let groceries = add_category(
        store,
        Category::new("Groceries", "Food and household items", "#4CAF50"),
    );
    let utilities = add_category(
        store,
        Category::new("Utilities", "Electricity, water, internet", "#2196F3"),
    );
    let entertainment = add_category(
        store,
        Category::new("Entertainment", "Movies, games, etc.", "#F44336"),
    );

    println!("\nTransactions:");
    let transactions = [
        Transaction::new("2025-05-08", 45.67, "Weekly groceries", groceries, false),
        Transaction::new("2025-05-01", 3000.00, "Monthly salary", CategoryId::UNASSIGNED, true),
        Transaction::new("2025-05-05", 1200.00, "Rent payment", utilities, false),
    ];
    for txn in transactions {
        match store.add_transaction(txn) {
            Ok(id) => {
                if let Some(stored) = store.get_transaction(id) {
                    println!("  Added {}", stored);
                }
            }
            Err(e) => println!("  Skipped transaction: {}", e),
        }
    }

    println!("\nBudgets:");
    let budgets = [
        Budget::new(groceries, DEMO_MONTH, 300.00),
        Budget::new(utilities, DEMO_MONTH, 1500.00),
        Budget::new(entertainment, DEMO_MONTH, 200.00),
    ];
    for budget in budgets {
        let rendered = budget.to_string();
        match store.add_budget(budget) {
            Ok(()) => println!("  Added {}", rendered),
            Err(e) => println!("  Skipped budget: {}", e),
        }
    }

    let income = store.total_income(DEMO_MONTH);
    let expense = store.total_expense(DEMO_MONTH);
    println!("\nFinancial analysis for {}:", DEMO_MONTH);
    println!("  Total income:   {}", format_amount(symbol, income));
    println!("  Total expenses: {}", format_amount(symbol, expense));
    println!("  Net:            {}", format_amount(symbol, income - expense));

    println!("\nCategory totals:");
    for (id, total) in store.category_totals(DEMO_MONTH) {
        if let Some(category) = store.get_category(id) {
            println!("  {}: {}", category.name, format_amount(symbol, total));
        }
    }

    let reloaded = RecordStore::open(store.data_dir())?;
    println!("\nAfter reload from {}:", store.data_dir().display());
    println!("  Categories:   {}", reloaded.get_all_categories().len());
    println!("  Transactions: {}", reloaded.get_all_transactions().len());
    println!("  Budgets:      {}", reloaded.get_all_budgets().len());

    info!("Demo data seeded into {}", store.data_dir().display());
    Ok(())
}

/// Add a category, reusing an existing one with the same name
fn add_category(store: &mut RecordStore, category: Category) -> CategoryId {
    if let Some(existing) = store
        .get_all_categories()
        .into_iter()
        .find(|c| c.name == category.name)
    {
        println!("  Using existing category: {}", existing);
        return existing.id;
    }

    let rendered_name = category.name.clone();
    match store.add_category(category) {
        Ok(id) => {
            if let Some(stored) = store.get_category(id) {
                println!("  Added {}", stored);
            }
            id
        }
        Err(e) => {
            println!("  Skipped category {}: {}", rendered_name, e);
            CategoryId::UNASSIGNED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_demo_seeds_sample_month() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = RecordStore::open(temp_dir.path()).unwrap();

        run_demo(&mut store, &Settings::default()).unwrap();

        assert_eq!(store.get_all_categories().len(), 3);
        assert_eq!(store.get_all_transactions().len(), 3);
        assert_eq!(store.get_budgets_by_month(DEMO_MONTH).len(), 3);
        assert!((store.total_income(DEMO_MONTH) - 3000.0).abs() < EPSILON);
        assert!((store.total_expense(DEMO_MONTH) - 1245.67).abs() < EPSILON);
    }

    #[test]
    fn test_demo_twice_skips_existing_budgets() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = RecordStore::open(temp_dir.path()).unwrap();

        run_demo(&mut store, &Settings::default()).unwrap();
        run_demo(&mut store, &Settings::default()).unwrap();

        assert_eq!(store.get_all_categories().len(), 3);
        assert_eq!(store.get_all_transactions().len(), 6);
        assert_eq!(store.get_all_budgets().len(), 3);
    }
}
