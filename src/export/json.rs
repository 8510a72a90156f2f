//! JSON Export functionality
//!
//! Writes every collection into a single timestamped document.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Category, Transaction};
use crate::storage::RecordStore;

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    pub categories: Vec<Category>,

    pub transactions: Vec<Transaction>,

    pub budgets: Vec<Budget>,
}

impl FullExport {
    /// Snapshot the store's collections
    pub fn from_store(store: &RecordStore) -> Self {
        Self {
            exported_at: Utc::now(),
            categories: store.get_all_categories(),
            transactions: store.get_all_transactions(),
            budgets: store.get_all_budgets(),
        }
    }
}

/// Export the full store as pretty-printed JSON
pub fn export_full_json<W: Write>(store: &RecordStore, writer: &mut W) -> TrackerResult<()> {
    let export = FullExport::from_store(store);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrackerError::Export(format!("Failed to write JSON: {}", e)))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;
    use tempfile::TempDir;

    #[test]
    fn test_full_export_document() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = RecordStore::open(temp_dir.path()).unwrap();
        store
            .add_category(Category::new("Groceries", "Food", "#4CAF50"))
            .unwrap();
        store
            .add_transaction(Transaction::new(
                "2025-05-08",
                45.67,
                "Food",
                CategoryId::new(1),
                false,
            ))
            .unwrap();
        store
            .add_budget(Budget::new(CategoryId::new(1), "2025-05", 300.0))
            .unwrap();

        let mut buffer = Vec::new();
        export_full_json(&store, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert!(value["exportedAt"].is_string());
        assert_eq!(value["categories"][0]["name"], "Groceries");
        assert_eq!(value["transactions"][0]["categoryId"], 1);
        assert_eq!(value["budgets"][0]["monthYear"], "2025-05");
    }

    #[test]
    fn test_export_parses_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::open(temp_dir.path()).unwrap();

        let mut buffer = Vec::new();
        export_full_json(&store, &mut buffer).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert!(parsed.categories.is_empty());
        assert!(parsed.transactions.is_empty());
        assert!(parsed.budgets.is_empty());
    }
}
