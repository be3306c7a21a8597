use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_budget_command, handle_category_command, handle_expense_command,
    handle_export_command, BudgetCommands, CategoryCommands, ExpenseCommands, ExportCommands,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::models::CategoryRegistry;
use expense_tracker::services::LedgerService;
use expense_tracker::storage::Storage;
use expense_tracker::store::WorkbookStore;

/// Environment variable holding the log filter (e.g. "info", "expense_tracker=debug")
const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track expenses and per-category budgets",
    long_about = "Record expenses against a fixed set of categories and keep \
                  per-category budgets in step with what has been spent. Data \
                  lives in a workbook with an 'expenses' and a 'budgets' sheet."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Export sheets to CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Create the settings file and an empty workbook
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = WorkbookStore::new(
        paths.workbook_file(&settings.workbook_title),
        settings.workbook_title.clone(),
    );
    let storage = Storage::new(&store);
    let registry = CategoryRegistry::default();
    let ledger = LedgerService::new(&storage, &registry).with_date_window(settings.date_window_days);

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            storage.initialize()?;
            handle_expense_command(&ledger, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            storage.initialize()?;
            handle_budget_command(&ledger, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&registry, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            storage.initialize()?;
            handle_export_command(&ledger, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.initialize()?;
            println!("Workbook: {}", store.path().display());
            println!("Initialization complete!");
            println!();
            println!("Run 'expense category list' to see the available categories.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Workbook:       {}", store.path().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "yes" } else { "no (run 'expense init')" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Date window:      ±{} days", settings.date_window_days);
        }
        None => {
            println!("Expense Tracker - expenses and budgets from the terminal");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
