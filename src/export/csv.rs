//! CSV Export functionality
//!
//! Exports the expenses and budgets sheets to CSV, one header row followed by
//! the rows in sheet order, with amounts and dates in their sheet form.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BUDGET_HEADERS, EXPENSE_HEADERS};
use crate::services::LedgerService;

fn export_err(e: csv::Error) -> LedgerError {
    LedgerError::Export(e.to_string())
}

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(ledger: &LedgerService, writer: W) -> LedgerResult<usize> {
    let expenses = ledger.list_expenses()?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPENSE_HEADERS).map_err(export_err)?;
    for expense in &expenses {
        csv_writer.write_record(expense.to_row()).map_err(export_err)?;
    }
    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(expenses.len())
}

/// Export all budgets to CSV
pub fn export_budgets_csv<W: Write>(ledger: &LedgerService, writer: W) -> LedgerResult<usize> {
    let budgets = ledger.list_budgets()?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(BUDGET_HEADERS).map_err(export_err)?;
    for budget in &budgets {
        csv_writer.write_record(budget.to_row()).map_err(export_err)?;
    }
    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(budgets.len())
}
