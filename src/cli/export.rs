//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_budgets_csv, export_expenses_csv};
use crate::services::LedgerService;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the expenses sheet to CSV
    Expenses {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the budgets sheet to CSV
    Budgets {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn create_output(path: &PathBuf) -> LedgerResult<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| LedgerError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}

/// Handle an export command
pub fn handle_export_command(ledger: &LedgerService, cmd: ExportCommands) -> LedgerResult<()> {
    match cmd {
        ExportCommands::Expenses { output } => match output {
            Some(path) => {
                let count = export_expenses_csv(ledger, create_output(&path)?)?;
                println!("Exported {} expense(s) to {}", count, path.display());
            }
            None => {
                export_expenses_csv(ledger, io::stdout().lock())?;
            }
        },
        ExportCommands::Budgets { output } => match output {
            Some(path) => {
                let count = export_budgets_csv(ledger, create_output(&path)?)?;
                println!("Exported {} budget(s) to {}", count, path.display());
            }
            None => {
                export_budgets_csv(ledger, io::stdout().lock())?;
            }
        },
    }

    Ok(())
}
