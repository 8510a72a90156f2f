//! Aggregate queries over the in-memory records
//!
//! Pure reads: nothing here touches the disk. Months are matched on the
//! "YYYY-MM" prefix of each transaction date.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{month_prefix, CategoryId};

use super::RecordStore;

/// Allocated versus spent for one budget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category_id: CategoryId,
    pub month_year: String,
    pub allocated: f64,
    /// Sum of expense amounts for the category in the month
    pub spent: f64,
    pub remaining: f64,
}

impl BudgetStatus {
    pub fn is_overspent(&self) -> bool {
        self.remaining < 0.0
    }
}

impl RecordStore {
    /// Sum of income amounts in the month
    pub fn total_income(&self, month_year: &str) -> f64 {
        self.transactions
            .in_month(month_year)
            .filter(|t| t.is_income)
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of expense amounts in the month
    pub fn total_expense(&self, month_year: &str) -> f64 {
        self.transactions
            .in_month(month_year)
            .filter(|t| !t.is_income)
            .map(|t| t.amount)
            .sum()
    }

    /// Net total for one category in the month: income adds, expense subtracts
    pub fn category_total(&self, category_id: CategoryId, month_year: &str) -> f64 {
        self.transactions
            .in_month(month_year)
            .filter(|t| t.category_id == category_id)
            .map(|t| t.signed_amount())
            .sum()
    }

    /// Net total per category in the month
    ///
    /// Every known category appears, at 0.0 if it has no activity. Transactions
    /// pointing at unknown category IDs still get an entry.
    pub fn category_totals(&self, month_year: &str) -> BTreeMap<CategoryId, f64> {
        let mut totals: BTreeMap<CategoryId, f64> = self
            .categories
            .all()
            .iter()
            .map(|c| (c.id, 0.0))
            .collect();

        for txn in self.transactions.in_month(month_year) {
            *totals.entry(txn.category_id).or_insert(0.0) += txn.signed_amount();
        }

        totals
    }

    /// Summed amounts per month for income (`true`) or expense (`false`)
    /// transactions; months without matching transactions are absent
    pub fn monthly_totals(&self, is_income: bool) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();

        for txn in self.transactions.all().iter().filter(|t| t.is_income == is_income) {
            *totals
                .entry(month_prefix(&txn.date).to_string())
                .or_insert(0.0) += txn.amount;
        }

        totals
    }

    /// Allocated, spent and remaining for every budget in the month
    pub fn budget_status(&self, month_year: &str) -> Vec<BudgetStatus> {
        self.budgets
            .for_month(month_year)
            .map(|budget| {
                let spent: f64 = self
                    .transactions
                    .in_month(month_year)
                    .filter(|t| !t.is_income && t.category_id == budget.category_id)
                    .map(|t| t.amount)
                    .sum();
                BudgetStatus {
                    category_id: budget.category_id,
                    month_year: budget.month_year.clone(),
                    allocated: budget.allocated_amount,
                    spent,
                    remaining: budget.allocated_amount - spent,
                }
            })
            .collect()
    }
}
