//! Export module
//!
//! - JSON: every collection in one timestamped document
//! - CSV: transactions, spreadsheet-compatible

pub mod csv;
pub mod json;

pub use csv::export_transactions_csv;
pub use json::{export_full_json, FullExport};
