//! File I/O for JSON documents
//!
//! A missing or zero-byte file is not an error: it reads back as an empty
//! list document, which is what a first run sees. Writes overwrite the target
//! in place and are not atomic.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::TrackerError;

/// The document a missing or empty file reads as
pub fn empty_document() -> Value {
    Value::Array(Vec::new())
}

/// Read a JSON document from a file
///
/// Returns an empty list document if the file doesn't exist or is empty.
/// Unreadable or malformed files are reported as storage errors.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value, TrackerError> {
    let path = path.as_ref();

    if !path.exists() {
        debug!("{} does not exist, treating as empty", path.display());
        return Ok(empty_document());
    }

    let metadata = fs::metadata(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to stat {}: {}", path.display(), e)))?;
    if metadata.len() == 0 {
        debug!("{} is empty, treating as empty", path.display());
        return Ok(empty_document());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| TrackerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write a JSON document to a file as pretty-printed text, replacing any
/// existing contents
pub fn save_document<P: AsRef<Path>>(path: P, document: &Value) -> Result<(), TrackerError> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| {
        TrackerError::Storage(format!("Failed to open {} for writing: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document).map_err(|e| {
        TrackerError::Storage(format!("Failed to write {}: {}", path.display(), e))
    })?;
    writeln!(writer)
        .and_then(|_| writer.flush())
        .map_err(|e| TrackerError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}
