//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for categories, transactions, budgets
//! and monthly reports.

pub mod budget;
pub mod category;
pub mod report;
pub mod summary;
pub mod transaction;

pub use budget::{format_budget_list, format_budget_status};
pub use category::{format_category_details, format_category_list};
pub use report::{format_amount, truncate};
pub use summary::{format_month_summary, format_monthly_totals};
pub use transaction::{format_transaction_details, format_transaction_register};
