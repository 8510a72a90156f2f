use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use budget_tracker::audit::AuditLogger;
use budget_tracker::cli::{
    handle_budget_command, handle_category_command, handle_export_command, handle_report_command,
    handle_transaction_command, run_demo,
};
use budget_tracker::config::paths::HOME_ENV_VAR;
use budget_tracker::config::{Settings, TrackerPaths};
use budget_tracker::storage::RecordStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal finance tracker for categories, transactions and monthly budgets",
    long_about = "Keeps categories, income and expense transactions, and monthly \
                  per-category budgets in plain JSON files, and reports monthly \
                  totals from the command line."
)]
struct Cli {
    /// Base directory for data, settings and the audit log
    #[arg(long, global = true, env = HOME_ENV_VAR)]
    home: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(budget_tracker::cli::CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(budget_tracker::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(budget_tracker::cli::BudgetCommands),

    /// Monthly reports
    #[command(subcommand)]
    Report(budget_tracker::cli::ReportCommands),

    /// Export data to JSON or CSV
    #[command(subcommand)]
    Export(budget_tracker::cli::ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,

    /// Seed sample data and print the May 2025 analysis
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let paths = match cli.home {
        Some(home) => TrackerPaths::with_base_dir(home),
        None => TrackerPaths::new()?,
    };
    debug!("Using base directory {}", paths.base_dir().display());

    let settings = Settings::load_or_create(&paths)?;
    let audit = AuditLogger::new(paths.audit_log());

    let mut store = RecordStore::open(paths.data_dir())?;
    if settings.audit_enabled {
        store = store.with_audit(audit.clone());
    }

    match cli.command {
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut store, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&store, &paths, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            let entries = audit.read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Report month:    {}", settings.report_month());
            println!();
            println!("Records:");
            println!(
                "  Categories:   {} (next ID {})",
                store.get_all_categories().len(),
                store.next_category_id()
            );
            println!(
                "  Transactions: {} (next ID {})",
                store.get_all_transactions().len(),
                store.next_transaction_id()
            );
            println!("  Budgets:      {}", store.get_all_budgets().len());
        }
        Some(Commands::Demo) => {
            run_demo(&mut store, &settings)?;
        }
        None => {
            println!("Budget Tracker - categories, transactions and monthly budgets");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget demo' to load sample data.");
        }
    }

    Ok(())
}

/// Honor RUST_LOG if set, otherwise log this crate at `level` to stderr
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "budget_tracker={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
