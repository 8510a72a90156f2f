//! Handle-based access to record stores
//!
//! Embedding layers (UI shells, foreign-function wrappers) cannot hold a
//! `RecordStore` directly. They create one through a [`HandleRegistry`], get an
//! opaque integer [`Handle`] back and pass it to every call. Arguments and
//! results are primitives or JSON text:
//!
//! - inserts that assign an ID return it, or `-1` on failure
//! - other mutations return `bool`
//! - collection reads return a JSON array (`"[]"` on failure)
//! - single-record reads return a JSON object, or `None`
//! - category totals are a JSON object keyed by the stringified category ID
//!
//! Calls against an unknown or destroyed handle return the failure value and
//! log a warning. Errors never cross this boundary.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::TrackerResult;
use crate::models::{Budget, Category, CategoryId, Transaction, TransactionId};
use crate::storage::RecordStore;

/// Opaque identifier for a live store
pub type Handle = u64;

/// Returned in place of an ID when an insert fails
pub const INVALID_ID: i32 = -1;

const EMPTY_ARRAY: &str = "[]";

#[derive(Default)]
struct Registry {
    next_handle: Handle,
    stores: HashMap<Handle, RecordStore>,
}

/// Mutex-guarded table of live record stores
#[derive(Default)]
pub struct HandleRegistry {
    inner: Mutex<Registry>,
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store rooted at `data_path` and register it
    ///
    /// Returns `None` if the directory cannot be created.
    pub fn create(&self, data_path: impl Into<PathBuf>) -> Option<Handle> {
        let data_path = data_path.into();
        let store = match RecordStore::open(&data_path) {
            Ok(store) => store,
            Err(e) => {
                warn!("Failed to open store at {}: {}", data_path.display(), e);
                return None;
            }
        };

        let mut registry = self.lock();
        registry.next_handle += 1;
        let handle = registry.next_handle;
        registry.stores.insert(handle, store);
        debug!(handle, "Registered store at {}", data_path.display());
        Some(handle)
    }

    /// Drop the store behind `handle`; false if it was not registered
    pub fn destroy(&self, handle: Handle) -> bool {
        let removed = self.lock().stores.remove(&handle).is_some();
        if !removed {
            warn!(handle, "destroy called with unknown handle");
        }
        removed
    }

    /// Number of live handles
    pub fn len(&self) -> usize {
        self.lock().stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // === Categories ===

    pub fn add_category(&self, handle: Handle, name: &str, description: &str, color: &str) -> i32 {
        self.with_store(handle, "add_category", INVALID_ID, |store| {
            id_or_invalid(store.add_category(Category::new(name, description, color)))
        })
    }

    pub fn update_category(
        &self,
        handle: Handle,
        id: i32,
        name: &str,
        description: &str,
        color: &str,
    ) -> bool {
        self.with_store(handle, "update_category", false, |store| {
            succeeded(store.update_category(Category::with_id(
                CategoryId::new(id),
                name,
                description,
                color,
            )))
        })
    }

    pub fn delete_category(&self, handle: Handle, id: i32) -> bool {
        self.with_store(handle, "delete_category", false, |store| {
            succeeded(store.delete_category(CategoryId::new(id)))
        })
    }

    pub fn get_category(&self, handle: Handle, id: i32) -> Option<String> {
        self.with_store(handle, "get_category", None, |store| {
            store.get_category(CategoryId::new(id)).and_then(|c| to_json(&c))
        })
    }

    pub fn get_all_categories(&self, handle: Handle) -> String {
        self.read_array(handle, "get_all_categories", |store| {
            to_json(&store.get_all_categories())
        })
    }

    // === Transactions ===

    pub fn add_transaction(
        &self,
        handle: Handle,
        date: &str,
        amount: f64,
        description: &str,
        category_id: i32,
        is_income: bool,
    ) -> i32 {
        self.with_store(handle, "add_transaction", INVALID_ID, |store| {
            id_or_invalid(store.add_transaction(Transaction::new(
                date,
                amount,
                description,
                CategoryId::new(category_id),
                is_income,
            )))
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update_transaction(
        &self,
        handle: Handle,
        id: i32,
        date: &str,
        amount: f64,
        description: &str,
        category_id: i32,
        is_income: bool,
    ) -> bool {
        self.with_store(handle, "update_transaction", false, |store| {
            succeeded(store.update_transaction(Transaction::with_id(
                TransactionId::new(id),
                date,
                amount,
                description,
                CategoryId::new(category_id),
                is_income,
            )))
        })
    }

    pub fn delete_transaction(&self, handle: Handle, id: i32) -> bool {
        self.with_store(handle, "delete_transaction", false, |store| {
            succeeded(store.delete_transaction(TransactionId::new(id)))
        })
    }

    pub fn get_transaction(&self, handle: Handle, id: i32) -> Option<String> {
        self.with_store(handle, "get_transaction", None, |store| {
            store
                .get_transaction(TransactionId::new(id))
                .and_then(|t| to_json(&t))
        })
    }

    pub fn get_all_transactions(&self, handle: Handle) -> String {
        self.read_array(handle, "get_all_transactions", |store| {
            to_json(&store.get_all_transactions())
        })
    }

    pub fn get_transactions_by_category(&self, handle: Handle, category_id: i32) -> String {
        self.read_array(handle, "get_transactions_by_category", |store| {
            to_json(&store.get_transactions_by_category(CategoryId::new(category_id)))
        })
    }

    pub fn get_transactions_by_month(&self, handle: Handle, month_year: &str) -> String {
        self.read_array(handle, "get_transactions_by_month", |store| {
            to_json(&store.get_transactions_by_month(month_year))
        })
    }

    // === Budgets ===

    pub fn add_budget(
        &self,
        handle: Handle,
        category_id: i32,
        month_year: &str,
        amount: f64,
    ) -> bool {
        self.with_store(handle, "add_budget", false, |store| {
            succeeded(store.add_budget(Budget::new(
                CategoryId::new(category_id),
                month_year,
                amount,
            )))
        })
    }

    pub fn update_budget(
        &self,
        handle: Handle,
        category_id: i32,
        month_year: &str,
        amount: f64,
    ) -> bool {
        self.with_store(handle, "update_budget", false, |store| {
            succeeded(store.update_budget(Budget::new(
                CategoryId::new(category_id),
                month_year,
                amount,
            )))
        })
    }

    pub fn delete_budget(&self, handle: Handle, category_id: i32, month_year: &str) -> bool {
        self.with_store(handle, "delete_budget", false, |store| {
            succeeded(store.delete_budget(CategoryId::new(category_id), month_year))
        })
    }

    pub fn get_budget(&self, handle: Handle, category_id: i32, month_year: &str) -> Option<String> {
        self.with_store(handle, "get_budget", None, |store| {
            store
                .get_budget(CategoryId::new(category_id), month_year)
                .and_then(|b| to_json(&b))
        })
    }

    pub fn get_all_budgets(&self, handle: Handle) -> String {
        self.read_array(handle, "get_all_budgets", |store| to_json(&store.get_all_budgets()))
    }

    pub fn get_budgets_by_month(&self, handle: Handle, month_year: &str) -> String {
        self.read_array(handle, "get_budgets_by_month", |store| {
            to_json(&store.get_budgets_by_month(month_year))
        })
    }

    // === Analysis ===

    pub fn total_income(&self, handle: Handle, month_year: &str) -> f64 {
        self.with_store(handle, "total_income", 0.0, |store| store.total_income(month_year))
    }

    pub fn total_expense(&self, handle: Handle, month_year: &str) -> f64 {
        self.with_store(handle, "total_expense", 0.0, |store| store.total_expense(month_year))
    }

    pub fn category_total(&self, handle: Handle, category_id: i32, month_year: &str) -> f64 {
        self.with_store(handle, "category_total", 0.0, |store| {
            store.category_total(CategoryId::new(category_id), month_year)
        })
    }

    /// Net totals per category as `{"<id>": total, ...}`
    pub fn category_totals(&self, handle: Handle, month_year: &str) -> String {
        self.with_store(handle, "category_totals", "{}".to_string(), |store| {
            let keyed: BTreeMap<String, f64> = store
                .category_totals(month_year)
                .into_iter()
                .map(|(id, total)| (id.to_string(), total))
                .collect();
            to_json(&keyed).unwrap_or_else(|| "{}".to_string())
        })
    }

    /// Totals per month as `{"YYYY-MM": total, ...}`
    pub fn monthly_totals(&self, handle: Handle, is_income: bool) -> String {
        self.with_store(handle, "monthly_totals", "{}".to_string(), |store| {
            to_json(&store.monthly_totals(is_income)).unwrap_or_else(|| "{}".to_string())
        })
    }

    // === Persistence ===

    /// Reload every collection; true if at least one file loaded
    pub fn load_all(&self, handle: Handle) -> bool {
        self.with_store(handle, "load_all", false, |store| store.load_all().any_loaded())
    }

    pub fn save_all(&self, handle: Handle) -> bool {
        self.with_store(handle, "save_all", false, |store| succeeded(store.save_all()))
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn with_store<R>(
        &self,
        handle: Handle,
        operation: &str,
        failure: R,
        f: impl FnOnce(&mut RecordStore) -> R,
    ) -> R {
        let mut registry = self.lock();
        match registry.stores.get_mut(&handle) {
            Some(store) => f(store),
            None => {
                warn!(handle, "{} called with unknown handle", operation);
                failure
            }
        }
    }

    fn read_array(
        &self,
        handle: Handle,
        operation: &str,
        f: impl FnOnce(&RecordStore) -> Option<String>,
    ) -> String {
        self.with_store(handle, operation, None, |store| f(store))
            .unwrap_or_else(|| EMPTY_ARRAY.to_string())
    }
}

fn id_or_invalid<T: Into<i32>>(result: TrackerResult<T>) -> i32 {
    match result {
        Ok(id) => id.into(),
        Err(e) => {
            debug!("Insert failed: {}", e);
            INVALID_ID
        }
    }
}

fn succeeded(result: TrackerResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            debug!("Operation failed: {}", e);
            false
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!("Failed to serialize result: {}", e);
            None
        }
    }
}
