//! Budget repository
//!
//! Budgets are keyed by (category, month) and have no ID counter.

use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, BudgetKey, CategoryId};

use super::codec::{decode_collection, encode_collection};
use super::file_io::{load_document, save_document};

/// In-memory budget collection backed by one JSON file
#[derive(Debug)]
pub struct BudgetRepository {
    path: PathBuf,
    budgets: Vec<Budget>,
}

impl BudgetRepository {
    /// Create an empty repository for the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: Vec::new(),
        }
    }

    /// Replace the collection with the file contents
    ///
    /// On failure the collection is left empty rather than stale.
    pub fn load(&mut self) -> TrackerResult<usize> {
        match load_document(&self.path).and_then(decode_collection::<Budget>) {
            Ok(budgets) => {
                self.budgets = budgets;
                Ok(self.budgets.len())
            }
            Err(e) => {
                self.budgets.clear();
                Err(e)
            }
        }
    }

    /// Write the whole collection to disk
    pub fn save(&self) -> TrackerResult<()> {
        let document = encode_collection(&self.budgets)?;
        save_document(&self.path, &document)
    }

    /// Append a budget; fails if one already exists for the same key
    pub fn insert(&mut self, budget: Budget) -> TrackerResult<()> {
        if self.position(budget.category_id, &budget.month_year).is_some() {
            return Err(TrackerError::duplicate("Budget", budget.key().to_string()));
        }
        self.budgets.push(budget);
        Ok(())
    }

    /// Overwrite the stored budget with the same key, returning the old one
    pub fn replace(&mut self, budget: Budget) -> TrackerResult<Budget> {
        let index = self
            .position(budget.category_id, &budget.month_year)
            .ok_or_else(|| TrackerError::budget_not_found(budget.key().to_string()))?;
        Ok(std::mem::replace(&mut self.budgets[index], budget))
    }

    /// Remove a budget by key, returning it
    pub fn remove(&mut self, category_id: CategoryId, month_year: &str) -> TrackerResult<Budget> {
        let index = self.position(category_id, month_year).ok_or_else(|| {
            TrackerError::budget_not_found(BudgetKey::new(category_id, month_year).to_string())
        })?;
        Ok(self.budgets.remove(index))
    }

    /// Look up a budget by key
    pub fn get(&self, category_id: CategoryId, month_year: &str) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|b| b.matches(category_id, month_year))
    }

    /// All budgets in insertion order
    pub fn all(&self) -> &[Budget] {
        &self.budgets
    }

    /// Budgets for exactly this month, in insertion order
    pub fn for_month<'a>(&'a self, month_year: &'a str) -> impl Iterator<Item = &'a Budget> {
        self.budgets.iter().filter(move |b| b.month_year == month_year)
    }

    /// Count budgets
    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    fn position(&self, category_id: CategoryId, month_year: &str) -> Option<usize> {
        self.budgets
            .iter()
            .position(|b| b.matches(category_id, month_year))
    }
}
