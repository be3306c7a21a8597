//! Tabular store abstraction
//!
//! The ledger persists into a spreadsheet-like store holding two named
//! tables, "expenses" and "budgets". Each table is an ordered list of rows of
//! text cells; row 1 is the header and data starts at row 2.
//!
//! The store offers no transactions. Every call is one blocking round trip and
//! callers re-read whatever rows they need on each operation.

pub mod file_io;
pub mod memory;
pub mod workbook;

pub use memory::MemoryStore;
pub use workbook::WorkbookStore;

use std::fmt;

use crate::error::LedgerResult;
use crate::models::{BUDGET_HEADERS, EXPENSE_HEADERS};

/// Sheet row of the first data row (row 1 is the header)
pub const FIRST_DATA_ROW: usize = 2;

/// The two tables the ledger works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Expenses,
    Budgets,
}

impl Table {
    pub const ALL: [Table; 2] = [Table::Expenses, Table::Budgets];

    /// Worksheet name inside the store
    pub fn name(&self) -> &'static str {
        match self {
            Table::Expenses => "expenses",
            Table::Budgets => "budgets",
        }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Table::Expenses => &EXPENSE_HEADERS,
            Table::Budgets => &BUDGET_HEADERS,
        }
    }

    pub fn header_row(&self) -> Vec<String> {
        self.headers().iter().map(|h| h.to_string()).collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Row-oriented access to the external store
///
/// `sheet_row` values are 1-based and count the header, so the first data row
/// is [`FIRST_DATA_ROW`]. Column indexes in `update_cells` are zero-based.
pub trait TabularStore {
    /// Create the table with its header row if it does not exist yet
    fn ensure_table(&self, table: Table) -> LedgerResult<()>;

    /// Read every data row of a table, header excluded, in sheet order
    fn read_rows(&self, table: Table) -> LedgerResult<Vec<Vec<String>>>;

    /// Append a data row at the end of a table
    fn append_row(&self, table: Table, row: Vec<String>) -> LedgerResult<()>;

    /// Overwrite some cells of one existing data row in a single write
    fn update_cells(
        &self,
        table: Table,
        sheet_row: usize,
        cells: &[(usize, String)],
    ) -> LedgerResult<()>;
}

/// Apply a cell update to an in-memory table that still includes its header
///
/// Shared by the store implementations so they agree on addressing rules.
pub(crate) fn apply_cell_update(
    table: Table,
    rows: &mut [Vec<String>],
    sheet_row: usize,
    cells: &[(usize, String)],
) -> LedgerResult<()> {
    use crate::error::LedgerError;

    // rows[0] is the header, so sheet row N lives at index N - 1
    if sheet_row < FIRST_DATA_ROW || sheet_row > rows.len() {
        return Err(LedgerError::Storage(format!(
            "Row {} does not exist in the {} sheet",
            sheet_row, table
        )));
    }

    let width = table.headers().len();
    if let Some((column, _)) = cells.iter().find(|(column, _)| *column >= width) {
        return Err(LedgerError::Storage(format!(
            "Column {} does not exist in the {} sheet",
            column + 1,
            table
        )));
    }

    let row = &mut rows[sheet_row - 1];
    for (column, value) in cells {
        if row.len() <= *column {
            row.resize(column + 1, String::new());
        }
        row[*column] = value.clone();
    }

    Ok(())
}
