//! Budget Tracker - personal finance records with JSON persistence
//!
//! This library keeps three collections (categories, income/expense
//! transactions and monthly per-category budgets), writes them to a directory
//! of JSON files after every change and computes monthly aggregates over them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Entity types and integer ID wrappers
//! - `storage`: The record store, its JSON codec and file layer, and aggregate queries
//! - `audit`: Append-only log of every mutation
//! - `config`: Base directory resolution and user settings
//! - `display`: Terminal formatting
//! - `export`: JSON and CSV export
//! - `cli`: Command handlers for the `budget` binary
//! - `handle`: Handle-based API for embedding layers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_tracker::models::{Category, Transaction};
//! use budget_tracker::RecordStore;
//!
//! # fn main() -> budget_tracker::TrackerResult<()> {
//! let mut store = RecordStore::open("data")?;
//! let groceries = store.add_category(Category::new("Groceries", "Food", "#4CAF50"))?;
//! store.add_transaction(Transaction::new("2025-05-08", 45.67, "Weekly shop", groceries, false))?;
//!
//! assert_eq!(store.category_total(groceries, "2025-05"), -45.67);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod handle;
pub mod models;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
pub use handle::{Handle, HandleRegistry};
pub use storage::RecordStore;
