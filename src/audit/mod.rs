//! Audit logging
//!
//! Records every create, update and delete made through the record store,
//! with before/after snapshots, in an append-only JSON-lines file.
//!
//! - `AuditEntry`: one operation with timestamp, entity kind and identity.
//! - `AuditLogger`: appends entries to and reads them back from the log file.
//! - `generate_diff`: top-level field diff used for update entries.
//!
//! The log is kept outside the data directory so that directory only ever
//! holds the three collection files.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
