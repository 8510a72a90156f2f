//! CSV Export functionality
//!
//! Transactions only; one row per record in store order. Amounts are written
//! in their shortest exact form, so a row reads back to the stored value.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::storage::RecordStore;

/// Column names, matching the stored field names
pub const TRANSACTION_HEADER: [&str; 6] =
    ["id", "date", "amount", "description", "categoryId", "isIncome"];

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(store: &RecordStore, writer: W) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(TRANSACTION_HEADER)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for txn in store.get_all_transactions() {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.clone(),
                txn.amount.to_string(),
                txn.description.clone(),
                txn.category_id.to_string(),
                txn.is_income.to_string(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
