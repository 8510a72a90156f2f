//! CLI commands for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Subcommand;

use crate::config::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_full_json, export_transactions_csv};
use crate::storage::RecordStore;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export categories, transactions and budgets as one JSON document
    Json {
        /// Output file path (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export transactions to CSV
    Csv {
        /// Output file path (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    store: &RecordStore,
    paths: &TrackerPaths,
    cmd: ExportCommands,
) -> TrackerResult<()> {
    match cmd {
        ExportCommands::Json { output } => {
            let output = output_path(paths, output, "json")?;
            let mut writer = create_writer(&output)?;
            export_full_json(store, &mut writer)?;
            println!("Full export written to: {}", output.display());
        }
        ExportCommands::Csv { output } => {
            let output = output_path(paths, output, "csv")?;
            let writer = create_writer(&output)?;
            export_transactions_csv(store, writer)?;
            println!(
                "Exported {} transactions to: {}",
                store.get_all_transactions().len(),
                output.display()
            );
        }
    }

    Ok(())
}

/// The requested path, or a timestamped file in the exports directory
fn output_path(
    paths: &TrackerPaths,
    output: Option<PathBuf>,
    extension: &str,
) -> TrackerResult<PathBuf> {
    if let Some(path) = output {
        return Ok(path);
    }

    let dir = paths.export_dir();
    std::fs::create_dir_all(&dir).map_err(|e| {
        TrackerError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    Ok(dir.join(format!("budget-export-{}.{}", stamp, extension)))
}

fn create_writer(path: &Path) -> TrackerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_goes_to_exports_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let path = output_path(&paths, None, "csv").unwrap();
        assert!(path.starts_with(paths.export_dir()));
        assert_eq!(path.extension().unwrap(), "csv");
        assert!(paths.export_dir().is_dir());
    }

    #[test]
    fn test_json_export_to_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = RecordStore::open(paths.data_dir()).unwrap();
        let output = temp_dir.path().join("out.json");

        handle_export_command(
            &store,
            &paths,
            ExportCommands::Json {
                output: Some(output.clone()),
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        assert!(contents.contains("\"exportedAt\""));
    }
}
