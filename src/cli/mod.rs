//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod expense;
pub mod export;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, SHEET_DATE_FORMAT};

/// Parse an amount argument such as "45.50"
pub fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| LedgerError::Validation(e.to_string()))
}

/// Parse a DD/MM/YYYY date argument
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), SHEET_DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!("Invalid date '{}', expected DD/MM/YYYY", input))
    })
}

/// Ask a yes/no question on stdin; anything but "y"/"yes" (or EOF) is a no
pub fn confirm(prompt: &str) -> LedgerResult<bool> {
    print!("{} (y/n): ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
