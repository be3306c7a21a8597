//! Storage layer for the expense tracker
//!
//! Typed repositories over the two sheets of a [`TabularStore`]. Repositories
//! hold no rows of their own: every call goes to the store.

pub mod budgets;
pub mod expenses;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;

use std::fmt;

use crate::error::{LedgerError, LedgerResult};
use crate::models::RowDecodeError;
use crate::store::{Table, TabularStore, FIRST_DATA_ROW};

/// Zero-based position of a record among a sheet's data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowPosition(usize);

impl RowPosition {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// 1-based sheet row, skipping the header
    pub const fn sheet_row(&self) -> usize {
        self.0 + FIRST_DATA_ROW
    }
}

impl fmt::Display for RowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.sheet_row())
    }
}

/// Main storage coordinator that provides access to both repositories
pub struct Storage<'a> {
    store: &'a dyn TabularStore,
    pub expenses: ExpenseRepository<'a>,
    pub budgets: BudgetRepository<'a>,
}

impl<'a> Storage<'a> {
    pub fn new(store: &'a dyn TabularStore) -> Self {
        Self {
            store,
            expenses: ExpenseRepository::new(store),
            budgets: BudgetRepository::new(store),
        }
    }

    /// Make sure both sheets exist with their header rows
    pub fn initialize(&self) -> LedgerResult<()> {
        for table in Table::ALL {
            self.store.ensure_table(table)?;
        }
        Ok(())
    }
}

/// Decode every data row of a sheet, naming the sheet row on failure
pub(crate) fn decode_rows<T, F>(table: Table, rows: Vec<Vec<String>>, decode: F) -> LedgerResult<Vec<T>>
where
    F: Fn(&[String]) -> Result<T, RowDecodeError>,
{
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            decode(row.as_slice()).map_err(|e| {
                LedgerError::Storage(format!(
                    "Invalid {} in the {} sheet: {}",
                    RowPosition::new(index),
                    table,
                    e
                ))
            })
        })
        .collect()
}
