//! Core data models for the budget tracker
//!
//! Plain records: categories, transactions and monthly budgets, plus the
//! integer ID wrappers and month helpers they share.

pub mod budget;
pub mod category;
pub mod ids;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetKey};
pub use category::Category;
pub use ids::{CategoryId, TransactionId};
pub use month::month_prefix;
pub use transaction::Transaction;
