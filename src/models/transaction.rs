//! Transaction model
//!
//! A dated income or expense amount attached to a category. Amounts are
//! non-negative by convention; the `is_income` flag carries the direction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::month::month_prefix;
use crate::error::{TrackerError, TrackerResult};

/// A financial transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier (zero until inserted)
    pub id: TransactionId,

    /// Transaction date, "YYYY-MM-DD"
    pub date: String,

    /// Amount, always stored as entered
    pub amount: f64,

    /// Free-form description
    pub description: String,

    /// Referenced category; not checked against the category collection
    pub category_id: CategoryId,

    /// Income (true) or expense (false)
    pub is_income: bool,
}

impl Transaction {
    /// Create a transaction that will receive its ID on insert
    pub fn new(
        date: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        category_id: CategoryId,
        is_income: bool,
    ) -> Self {
        Self::with_id(
            TransactionId::UNASSIGNED,
            date,
            amount,
            description,
            category_id,
            is_income,
        )
    }

    /// Create a fully-populated transaction
    pub fn with_id(
        id: TransactionId,
        date: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        category_id: CategoryId,
        is_income: bool,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            amount,
            description: description.into(),
            category_id,
            is_income,
        }
    }

    /// The "YYYY-MM" prefix of the date
    pub fn month_year(&self) -> &str {
        month_prefix(&self.date)
    }

    /// Whether this transaction falls in the given "YYYY-MM" month
    pub fn in_month(&self, month_year: &str) -> bool {
        self.month_year() == month_year
    }

    /// Amount with income positive and expense negative
    pub fn signed_amount(&self) -> f64 {
        if self.is_income {
            self.amount
        } else {
            -self.amount
        }
    }

    /// "Income" or "Expense"
    pub fn kind(&self) -> &'static str {
        if self.is_income {
            "Income"
        } else {
            "Expense"
        }
    }

    /// Reject amounts that JSON cannot represent
    pub fn validate(&self) -> TrackerResult<()> {
        if self.amount.is_finite() {
            Ok(())
        } else {
            Err(TrackerError::non_finite_amount("Transaction", self.amount))
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction [ID: {}, Date: {}, Amount: {:.2}, Description: {}, Category ID: {}, Type: {}]",
            self.id,
            self.date,
            self.amount,
            self.description,
            self.category_id,
            self.kind()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_finite() {
        let ok = Transaction::new("2025-05-01", 0.0, "x", CategoryId::new(1), true);
        assert!(ok.validate().is_ok());

        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let txn = Transaction::new("2025-05-01", amount, "x", CategoryId::new(1), true);
            assert!(matches!(txn.validate(), Err(TrackerError::Validation(_))));
        }
    }

    #[test]
    fn test_month_matching() {
        let txn = Transaction::new("2025-06-01", 10.0, "x", CategoryId::new(1), false);
        assert_eq!(txn.month_year(), "2025-06");
        assert!(txn.in_month("2025-06"));
        assert!(!txn.in_month("2025-05"));
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::new("2025-05-01", 3000.0, "Salary", CategoryId::UNASSIGNED, true);
        let expense = Transaction::new("2025-05-08", 45.67, "Groceries", CategoryId::new(1), false);
        assert_eq!(income.signed_amount(), 3000.0);
        assert_eq!(expense.signed_amount(), -45.67);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::with_id(
            TransactionId::new(1),
            "2025-05-08",
            45.67,
            "Weekly groceries",
            CategoryId::new(1),
            false,
        );
        assert_eq!(
            txn.to_string(),
            "Transaction [ID: 1, Date: 2025-05-08, Amount: 45.67, Description: Weekly groceries, Category ID: 1, Type: Expense]"
        );
    }

    #[test]
    fn test_short_date_uses_whole_string() {
        let txn = Transaction::new("2025", 1.0, "", CategoryId::new(1), true);
        assert_eq!(txn.month_year(), "2025");
        assert!(!txn.in_month("2025-01"));
    }
}
