//! Budget model
//!
//! A monthly allocation for one category. Identity is the pair
//! (category_id, month_year); there is no surrogate ID.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use crate::error::{TrackerError, TrackerResult};

/// Composite key identifying a budget
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BudgetKey {
    pub category_id: CategoryId,
    pub month_year: String,
}

impl BudgetKey {
    pub fn new(category_id: CategoryId, month_year: impl Into<String>) -> Self {
        Self {
            category_id,
            month_year: month_year.into(),
        }
    }
}

impl fmt::Display for BudgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category_id, self.month_year)
    }
}

/// Amount allocated to a category for one month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Category this allocation belongs to
    pub category_id: CategoryId,

    /// Month in "YYYY-MM" form
    pub month_year: String,

    /// Allocated amount
    pub allocated_amount: f64,
}

impl Budget {
    /// Create a budget allocation
    pub fn new(
        category_id: CategoryId,
        month_year: impl Into<String>,
        allocated_amount: f64,
    ) -> Self {
        Self {
            category_id,
            month_year: month_year.into(),
            allocated_amount,
        }
    }

    /// The composite identity of this budget
    pub fn key(&self) -> BudgetKey {
        BudgetKey::new(self.category_id, self.month_year.clone())
    }

    /// Whether this budget has the given composite identity
    pub fn matches(&self, category_id: CategoryId, month_year: &str) -> bool {
        self.category_id == category_id && self.month_year == month_year
    }

    /// Reject amounts that JSON cannot represent
    pub fn validate(&self) -> TrackerResult<()> {
        if self.allocated_amount.is_finite() {
            Ok(())
        } else {
            Err(TrackerError::non_finite_amount("Budget", self.allocated_amount))
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Budget [Category ID: {}, Month: {}, Allocated Amount: {:.2}]",
            self.category_id, self.month_year, self.allocated_amount
        )
    }
}
