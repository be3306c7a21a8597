//! Expense CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_table, format_recorded_expense};
use crate::error::LedgerResult;
use crate::services::LedgerService;

use super::{parse_amount, parse_date};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Short description (up to 25 characters)
        description: String,
        /// Amount (e.g., "45.50")
        amount: String,
        /// Category name
        category: String,
        /// Expense date (DD/MM/YYYY), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recorded expenses
    List {
        /// Only show expenses in this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &LedgerService,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => Local::now().date_naive(),
            };

            let recorded = ledger.record_expense(&description, amount, date, &category)?;
            println!("{}", format_recorded_expense(&recorded, symbol));
        }
        ExpenseCommands::List { category } => {
            let expenses = match category {
                Some(category) => ledger.list_expenses_by_category(&category)?,
                None => ledger.list_expenses()?,
            };
            println!(
                "{}",
                format_expense_table(&expenses, symbol, &settings.date_format)
            );
        }
    }

    Ok(())
}
