//! Storage layer for the budget tracker
//!
//! `RecordStore` owns the three in-memory collections, assigns IDs, enforces
//! identity uniqueness and writes every collection back to disk after each
//! mutation. Reads never touch the disk.
//!
//! The data directory holds exactly three JSON list documents:
//! `transactions.json`, `categories.json` and `budgets.json`.

pub mod analysis;
pub mod budgets;
pub mod categories;
pub mod codec;
pub mod file_io;
pub mod transactions;

pub use analysis::BudgetStatus;
pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use codec::{decode_collection, encode_collection};
pub use file_io::{empty_document, load_document, save_document};
pub use transactions::TransactionRepository;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, BudgetKey, Category, CategoryId, Transaction, TransactionId};

pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const BUDGETS_FILE: &str = "budgets.json";

/// Which collection files were read successfully during a reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub transactions: bool,
    pub categories: bool,
    pub budgets: bool,
}

impl LoadReport {
    /// True if at least one collection loaded
    pub fn any_loaded(&self) -> bool {
        self.transactions || self.categories || self.budgets
    }

    /// True if every collection loaded
    pub fn all_loaded(&self) -> bool {
        self.transactions && self.categories && self.budgets
    }
}

/// The single owner of all records and their persistence
#[derive(Debug)]
pub struct RecordStore {
    data_dir: PathBuf,
    transactions: TransactionRepository,
    categories: CategoryRepository,
    budgets: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl RecordStore {
    /// Open the store rooted at `data_dir`, creating the directory if needed
    /// and loading whatever data it holds
    ///
    /// Unreadable collection files do not fail construction; they load as
    /// empty and are reported through `tracing`.
    pub fn open(data_dir: impl Into<PathBuf>) -> TrackerResult<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        let mut store = Self {
            transactions: TransactionRepository::new(data_dir.join(TRANSACTIONS_FILE)),
            categories: CategoryRepository::new(data_dir.join(CATEGORIES_FILE)),
            budgets: BudgetRepository::new(data_dir.join(BUDGETS_FILE)),
            data_dir,
            audit: None,
        };

        let report = store.load_all();
        if !report.any_loaded() {
            warn!("No data could be loaded from {}", store.data_dir.display());
        } else if !report.all_loaded() {
            warn!(
                ?report,
                "Some collections in {} failed to load",
                store.data_dir.display()
            );
        }

        Ok(store)
    }

    /// Record every successful mutation in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// The directory holding the collection files
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // === Persistence ===

    /// Reload every collection from disk, replacing the in-memory state
    ///
    /// Each file loads independently; a file that fails leaves its
    /// collection empty. ID counters are recomputed from the loaded records.
    pub fn load_all(&mut self) -> LoadReport {
        let report = LoadReport {
            transactions: log_load("transactions", self.transactions.load()),
            categories: log_load("categories", self.categories.load()),
            budgets: log_load("budgets", self.budgets.load()),
        };
        debug!(?report, "Loaded data from {}", self.data_dir.display());
        report
    }

    /// Write all three collections to disk
    ///
    /// Every file is attempted even if an earlier one fails; the error lists
    /// each file that could not be written.
    pub fn save_all(&self) -> TrackerResult<()> {
        let results = [
            (TRANSACTIONS_FILE, self.transactions.save()),
            (CATEGORIES_FILE, self.categories.save()),
            (BUDGETS_FILE, self.budgets.save()),
        ];

        let failures: Vec<String> = results
            .into_iter()
            .filter_map(|(file, result)| {
                result.err().map(|e| {
                    warn!("Failed to save {}: {}", file, e);
                    format!("{}: {}", file, e)
                })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(TrackerError::Storage(failures.join("; ")))
        }
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!("Failed to write audit entry: {}", e);
            }
        }
    }

    // === Categories ===

    /// Add a category, assigning the next ID when its ID is zero
    ///
    /// Returns the stored ID. An ID collision fails without touching memory
    /// or disk.
    pub fn add_category(&mut self, category: Category) -> TrackerResult<CategoryId> {
        let stored = self.categories.insert(category)?;
        self.save_all()?;
        self.record(AuditEntry::create(
            EntityType::Category,
            stored.id.to_string(),
            &stored,
        ));
        Ok(stored.id)
    }

    /// Replace the category with the same ID
    pub fn update_category(&mut self, category: Category) -> TrackerResult<()> {
        let before = self.categories.replace(category.clone())?;
        self.save_all()?;
        self.record(AuditEntry::update(
            EntityType::Category,
            category.id.to_string(),
            &before,
            &category,
        ));
        Ok(())
    }

    /// Delete a category
    ///
    /// Transactions and budgets that reference it are left as they are.
    pub fn delete_category(&mut self, id: CategoryId) -> TrackerResult<()> {
        let removed = self.categories.remove(id)?;
        self.save_all()?;
        self.record(AuditEntry::delete(EntityType::Category, id.to_string(), &removed));
        Ok(())
    }

    /// Look up a category by ID
    pub fn get_category(&self, id: CategoryId) -> Option<Category> {
        self.categories.get(id).cloned()
    }

    /// Snapshot of all categories in insertion order
    pub fn get_all_categories(&self) -> Vec<Category> {
        self.categories.all().to_vec()
    }

    /// The ID the next category without one will receive
    pub fn next_category_id(&self) -> CategoryId {
        self.categories.next_id()
    }

    // === Transactions ===

    /// Add a transaction, assigning the next ID when its ID is zero
    ///
    /// The category reference is not checked.
    pub fn add_transaction(&mut self, transaction: Transaction) -> TrackerResult<TransactionId> {
        transaction.validate()?;
        let stored = self.transactions.insert(transaction)?;
        self.save_all()?;
        self.record(AuditEntry::create(
            EntityType::Transaction,
            stored.id.to_string(),
            &stored,
        ));
        Ok(stored.id)
    }

    /// Replace the transaction with the same ID
    pub fn update_transaction(&mut self, transaction: Transaction) -> TrackerResult<()> {
        transaction.validate()?;
        let before = self.transactions.replace(transaction.clone())?;
        self.save_all()?;
        self.record(AuditEntry::update(
            EntityType::Transaction,
            transaction.id.to_string(),
            &before,
            &transaction,
        ));
        Ok(())
    }

    /// Delete a transaction
    pub fn delete_transaction(&mut self, id: TransactionId) -> TrackerResult<()> {
        let removed = self.transactions.remove(id)?;
        self.save_all()?;
        self.record(AuditEntry::delete(
            EntityType::Transaction,
            id.to_string(),
            &removed,
        ));
        Ok(())
    }

    /// Look up a transaction by ID
    pub fn get_transaction(&self, id: TransactionId) -> Option<Transaction> {
        self.transactions.get(id).cloned()
    }

    /// Snapshot of all transactions in insertion order
    pub fn get_all_transactions(&self) -> Vec<Transaction> {
        self.transactions.all().to_vec()
    }

    /// Transactions referencing exactly this category ID
    pub fn get_transactions_by_category(&self, category_id: CategoryId) -> Vec<Transaction> {
        self.transactions.by_category(category_id).cloned().collect()
    }

    /// Transactions whose date starts with the "YYYY-MM" month
    pub fn get_transactions_by_month(&self, month_year: &str) -> Vec<Transaction> {
        self.transactions.in_month(month_year).cloned().collect()
    }

    /// The ID the next transaction without one will receive
    pub fn next_transaction_id(&self) -> TransactionId {
        self.transactions.next_id()
    }

    // === Budgets ===

    /// Add a budget; fails if one exists for the same category and month
    pub fn add_budget(&mut self, budget: Budget) -> TrackerResult<()> {
        budget.validate()?;
        let key = budget.key();
        self.budgets.insert(budget.clone())?;
        self.save_all()?;
        self.record(AuditEntry::create(EntityType::Budget, key.to_string(), &budget));
        Ok(())
    }

    /// Replace the budget with the same category and month
    pub fn update_budget(&mut self, budget: Budget) -> TrackerResult<()> {
        budget.validate()?;
        let before = self.budgets.replace(budget.clone())?;
        self.save_all()?;
        self.record(AuditEntry::update(
            EntityType::Budget,
            budget.key().to_string(),
            &before,
            &budget,
        ));
        Ok(())
    }

    /// Delete the budget for a category and month
    pub fn delete_budget(
        &mut self,
        category_id: CategoryId,
        month_year: &str,
    ) -> TrackerResult<()> {
        let removed = self.budgets.remove(category_id, month_year)?;
        self.save_all()?;
        self.record(AuditEntry::delete(
            EntityType::Budget,
            BudgetKey::new(category_id, month_year).to_string(),
            &removed,
        ));
        Ok(())
    }

    /// Look up the budget for a category and month
    pub fn get_budget(&self, category_id: CategoryId, month_year: &str) -> Option<Budget> {
        self.budgets.get(category_id, month_year).cloned()
    }

    /// Snapshot of all budgets in insertion order
    pub fn get_all_budgets(&self) -> Vec<Budget> {
        self.budgets.all().to_vec()
    }

    /// Budgets whose month is exactly `month_year`
    pub fn get_budgets_by_month(&self, month_year: &str) -> Vec<Budget> {
        self.budgets.for_month(month_year).cloned().collect()
    }
}

fn log_load(name: &str, result: TrackerResult<usize>) -> bool {
    match result {
        Ok(count) => {
            debug!("Loaded {} {}", count, name);
            true
        }
        Err(e) => {
            warn!("Failed to load {}: {}", name, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, RecordStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::open(temp_dir.path().join("data")).unwrap();
        (temp_dir, store)
    }

    fn category(name: &str) -> Category {
        Category::new(name, format!("{} things", name), "#4CAF50")
    }

    #[test]
    fn test_open_creates_directory_and_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("data");
        let store = RecordStore::open(&dir).unwrap();

        assert!(dir.is_dir());
        assert!(store.get_all_categories().is_empty());
        assert!(store.get_all_transactions().is_empty());
        assert!(store.get_all_budgets().is_empty());
        assert_eq!(store.next_category_id(), CategoryId::new(1));
    }

    #[test]
    fn test_open_fails_when_directory_cannot_be_created() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = RecordStore::open(blocker.join("data")).unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_mutation_writes_all_three_files() {
        let (_temp_dir, mut store) = open_store();
        store.add_category(category("Groceries")).unwrap();

        for file in [TRANSACTIONS_FILE, CATEGORIES_FILE, BUDGETS_FILE] {
            assert!(store.data_dir().join(file).exists(), "{} missing", file);
        }
        let text = fs::read_to_string(store.data_dir().join(TRANSACTIONS_FILE)).unwrap();
        assert_eq!(text.trim(), "[]");
    }

    #[test]
    fn test_unique_ids_and_collision_rejected() {
        let (_temp_dir, mut store) = open_store();
        let a = store.add_category(category("A")).unwrap();
        let b = store.add_category(category("B")).unwrap();
        assert_ne!(a, b);

        let err = store
            .add_category(Category::with_id(a, "Clash", "", ""))
            .unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(store.get_all_categories().len(), 2);
        assert_eq!(store.get_category(a).unwrap().name, "A");
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let (_temp_dir, mut store) = open_store();
        let id = store.add_category(category("Food")).unwrap();

        store
            .update_category(Category::with_id(id, "Groceries", "", "#000000"))
            .unwrap();
        let stored = store.get_category(id).unwrap();
        assert_eq!(stored.name, "Groceries");
        assert_eq!(stored.description, "");

        let err = store
            .update_category(Category::with_id(CategoryId::new(42), "X", "", ""))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_category_leaves_references() {
        let (_temp_dir, mut store) = open_store();
        let id = store.add_category(category("Fun")).unwrap();
        store
            .add_transaction(Transaction::new("2025-05-10", 20.0, "Movie", id, false))
            .unwrap();
        store.add_budget(Budget::new(id, "2025-05", 50.0)).unwrap();

        store.delete_category(id).unwrap();
        assert!(store.get_category(id).is_none());
        assert_eq!(store.get_transactions_by_category(id).len(), 1);
        assert!(store.get_budget(id, "2025-05").is_some());

        assert!(store.delete_category(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_round_trip_through_fresh_store() {
        let (temp_dir, mut store) = open_store();
        let cat = store.add_category(category("Groceries")).unwrap();
        store
            .add_transaction(Transaction::new("2025-05-08", 45.67, "Weekly groceries", cat, false))
            .unwrap();
        store
            .add_transaction(Transaction::new(
                "2025-05-01",
                3000.0,
                "Monthly salary",
                CategoryId::UNASSIGNED,
                true,
            ))
            .unwrap();
        store.add_budget(Budget::new(cat, "2025-05", 300.0)).unwrap();

        let reopened = RecordStore::open(temp_dir.path().join("data")).unwrap();
        assert_eq!(reopened.get_all_categories(), store.get_all_categories());
        assert_eq!(reopened.get_all_transactions(), store.get_all_transactions());
        assert_eq!(reopened.get_all_budgets(), store.get_all_budgets());
    }

    #[test]
    fn test_next_id_after_reload_follows_max() {
        let (temp_dir, mut store) = open_store();
        for id in [1, 3, 7] {
            store
                .add_transaction(Transaction::with_id(
                    TransactionId::new(id),
                    "2025-05-01",
                    1.0,
                    "",
                    CategoryId::new(1),
                    false,
                ))
                .unwrap();
        }

        let mut reopened = RecordStore::open(temp_dir.path().join("data")).unwrap();
        let id = reopened
            .add_transaction(Transaction::new("2025-05-02", 1.0, "", CategoryId::new(1), false))
            .unwrap();
        assert_eq!(id, TransactionId::new(8));
    }

    #[test]
    fn test_malformed_file_only_affects_its_collection() {
        let (temp_dir, mut store) = open_store();
        store.add_category(category("Keep")).unwrap();
        store
            .add_transaction(Transaction::new("2025-05-01", 1.0, "", CategoryId::new(1), true))
            .unwrap();
        fs::write(store.data_dir().join(TRANSACTIONS_FILE), "{ broken").unwrap();

        let report = store.load_all();
        assert!(!report.transactions);
        assert!(report.categories);
        assert!(report.any_loaded());
        assert!(!report.all_loaded());
        assert!(store.get_all_transactions().is_empty());
        assert_eq!(store.get_all_categories().len(), 1);

        // Still usable afterwards
        let reopened = RecordStore::open(temp_dir.path().join("data")).unwrap();
        assert_eq!(reopened.get_all_categories().len(), 1);
    }

    #[test]
    fn test_missing_field_is_a_load_failure() {
        let (_temp_dir, mut store) = open_store();
        fs::write(
            store.data_dir().join(BUDGETS_FILE),
            r#"[{"categoryId": 1, "monthYear": "2025-05"}]"#,
        )
        .unwrap();

        let report = store.load_all();
        assert!(!report.budgets);
        assert!(report.transactions && report.categories);
        assert!(store.get_all_budgets().is_empty());
    }

    #[test]
    fn test_budget_composite_uniqueness() {
        let (_temp_dir, mut store) = open_store();
        let cat = CategoryId::new(2);
        store.add_budget(Budget::new(cat, "2025-05", 300.0)).unwrap();

        let err = store.add_budget(Budget::new(cat, "2025-05", 999.0)).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(store.get_budget(cat, "2025-05").unwrap().allocated_amount, 300.0);

        store.update_budget(Budget::new(cat, "2025-05", 450.0)).unwrap();
        assert_eq!(store.get_budget(cat, "2025-05").unwrap().allocated_amount, 450.0);

        store.delete_budget(cat, "2025-05").unwrap();
        assert!(store.get_budget(cat, "2025-05").is_none());
        assert!(store.delete_budget(cat, "2025-05").unwrap_err().is_not_found());
    }

    #[test]
    fn test_budgets_by_month_is_exact_match() {
        let (_temp_dir, mut store) = open_store();
        store.add_budget(Budget::new(CategoryId::new(1), "2025-05", 1.0)).unwrap();
        store.add_budget(Budget::new(CategoryId::new(2), "2025-05", 2.0)).unwrap();
        store.add_budget(Budget::new(CategoryId::new(1), "2025-06", 3.0)).unwrap();

        assert_eq!(store.get_budgets_by_month("2025-05").len(), 2);
        assert!(store.get_budgets_by_month("2025").is_empty());
    }

    #[test]
    fn test_save_failure_reported_but_memory_kept() {
        let (temp_dir, mut store) = open_store();
        let data_dir = temp_dir.path().join("data");
        fs::remove_dir_all(&data_dir).unwrap();

        let err = store.add_category(category("Orphan")).unwrap_err();
        assert!(err.is_storage());
        assert!(err.to_string().contains(CATEGORIES_FILE));
        assert_eq!(store.get_all_categories().len(), 1);
    }

    #[test]
    fn test_mutations_are_audited() {
        let (temp_dir, store) = open_store();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut store = store.with_audit(logger.clone());

        let id = store.add_category(category("A")).unwrap();
        store
            .update_category(Category::with_id(id, "B", "", ""))
            .unwrap();
        store.delete_category(id).unwrap();
        let _ = store.delete_category(id);

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[1].diff_summary.as_deref().unwrap().contains("name"));
    }

    #[test]
    fn test_non_finite_transaction_amounts_rejected() {
        let (temp_dir, mut store) = open_store();
        let id = store
            .add_transaction(Transaction::new(
                "2025-05-08",
                45.67,
                "Shop",
                CategoryId::new(1),
                false,
            ))
            .unwrap();

        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let bad = Transaction::new("2025-05-09", amount, "Bad", CategoryId::new(1), false);
            let err = store.add_transaction(bad).unwrap_err();
            assert!(err.is_validation());

            let err = store
                .update_transaction(Transaction::with_id(
                    id,
                    "2025-05-08",
                    amount,
                    "Shop",
                    CategoryId::new(1),
                    false,
                ))
                .unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(store.get_all_transactions().len(), 1);
        assert_eq!(store.get_transaction(id).unwrap().amount, 45.67);
        assert_eq!(store.next_transaction_id(), TransactionId::new(2));

        let reopened = RecordStore::open(temp_dir.path().join("data")).unwrap();
        assert_eq!(reopened.get_all_transactions().len(), 1);
    }

    #[test]
    fn test_non_finite_budget_amounts_rejected() {
        let (temp_dir, mut store) = open_store();
        store.add_budget(Budget::new(CategoryId::new(1), "2025-05", 300.0)).unwrap();

        for amount in [f64::NAN, f64::INFINITY] {
            let err = store
                .add_budget(Budget::new(CategoryId::new(2), "2025-05", amount))
                .unwrap_err();
            assert!(err.is_validation());

            let err = store
                .update_budget(Budget::new(CategoryId::new(1), "2025-05", amount))
                .unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(store.get_all_budgets().len(), 1);
        let kept = store.get_budget(CategoryId::new(1), "2025-05").unwrap();
        assert_eq!(kept.allocated_amount, 300.0);

        let reopened = RecordStore::open(temp_dir.path().join("data")).unwrap();
        assert_eq!(reopened.get_all_budgets().len(), 1);
    }

    #[test]
    fn test_open_with_max_category_id_keeps_other_collections() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(
            data_dir.join(CATEGORIES_FILE),
            r#"[{"id": 2147483647, "name": "Edge", "description": "", "color": ""}]"#,
        )
        .unwrap();
        fs::write(
            data_dir.join(TRANSACTIONS_FILE),
            r#"[{"id": 3, "date": "2025-05-01", "amount": 10.0, "description": "Coffee",
                 "categoryId": 1, "isIncome": false}]"#,
        )
        .unwrap();

        let mut store = RecordStore::open(&data_dir).unwrap();
        assert!(store.get_all_categories().is_empty());
        assert_eq!(store.next_category_id(), CategoryId::new(1));
        assert_eq!(store.get_all_transactions().len(), 1);
        assert_eq!(store.next_transaction_id(), TransactionId::new(4));

        let report = store.load_all();
        assert!(!report.categories);
        assert!(report.transactions);
        assert!(report.any_loaded());
        assert!(!report.all_loaded());
    }

    #[test]
    fn test_explicit_max_id_insert_leaves_store_unchanged() {
        let (_temp_dir, mut store) = open_store();

        let err = store
            .add_category(Category::with_id(CategoryId::new(i32::MAX), "Edge", "", ""))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.get_all_categories().is_empty());
        assert_eq!(store.next_category_id(), CategoryId::new(1));

        let err = store
            .add_transaction(Transaction::with_id(
                TransactionId::new(i32::MAX),
                "2025-05-01",
                1.0,
                "Edge",
                CategoryId::new(1),
                false,
            ))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.get_all_transactions().is_empty());
        assert_eq!(store.next_transaction_id(), TransactionId::new(1));
    }
}
