//! Budget CLI commands
//!
//! Implements CLI commands for setting budgets, viewing them and
//! reconciling them against the expenses sheet.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_budget_table, format_budget_upsert, format_category_totals, format_corrections,
};
use crate::error::LedgerResult;
use crate::services::LedgerService;

use super::{confirm, parse_amount};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List all budgets
    List,

    /// Set the budget for a category (creates it if missing)
    Set {
        /// Category name
        category: String,
        /// Budget amount (e.g., "200" or "200.00")
        amount: String,
        /// Overwrite an existing budget without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Show spending per category against budgets
    Totals,

    /// Recompute every budget from the recorded expenses
    Reconcile,
}

/// Handle a budget command
pub fn handle_budget_command(
    ledger: &LedgerService,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::List => {
            let budgets = ledger.list_budgets()?;
            println!("{}", format_budget_table(&budgets, symbol));
        }
        BudgetCommands::Set {
            category,
            amount,
            yes,
        } => {
            let amount = parse_amount(&amount)?;

            let confirmed = match ledger.find_budget(&category)? {
                Some(existing) if !yes => confirm(&format!(
                    "A {} budget of {} already exists. Overwrite it?",
                    existing.category,
                    existing.budget_amount.format_with_symbol(symbol)
                ))?,
                _ => yes,
            };

            let outcome = ledger.upsert_budget(&category, amount, confirmed)?;
            println!("{}", format_budget_upsert(&outcome, symbol));
        }
        BudgetCommands::Totals => {
            let totals = ledger.category_totals()?;
            println!("{}", format_category_totals(&totals, symbol));
        }
        BudgetCommands::Reconcile => {
            let corrections = ledger.reconcile_budgets()?;
            println!("{}", format_corrections(&corrections, symbol));
        }
    }

    Ok(())
}
