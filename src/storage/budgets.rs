//! Budget repository
//!
//! Read, append and in-place update access to the budgets sheet. Category
//! uniqueness is checked by reading the sheet before appending; the store has
//! no transactions, so the check and the append are separate round trips.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{same_category, Budget, BudgetFields};
use crate::store::{Table, TabularStore};

use super::{decode_rows, RowPosition};

/// Repository for the budgets sheet
pub struct BudgetRepository<'a> {
    store: &'a dyn TabularStore,
}

impl<'a> BudgetRepository<'a> {
    pub fn new(store: &'a dyn TabularStore) -> Self {
        Self { store }
    }

    /// Every budget, in sheet order
    pub fn all(&self) -> LedgerResult<Vec<Budget>> {
        let rows = self.store.read_rows(Table::Budgets)?;
        decode_rows(Table::Budgets, rows, Budget::from_row)
    }

    /// Every budget paired with its row position, in sheet order
    pub fn all_with_positions(&self) -> LedgerResult<Vec<(RowPosition, Budget)>> {
        Ok(self
            .all()?
            .into_iter()
            .enumerate()
            .map(|(index, budget)| (RowPosition::new(index), budget))
            .collect())
    }

    /// Find the budget for `category` (case-insensitive)
    pub fn find_by_category(&self, category: &str) -> LedgerResult<Option<(RowPosition, Budget)>> {
        Ok(self
            .all_with_positions()?
            .into_iter()
            .find(|(_, budget)| same_category(&budget.category, category)))
    }

    /// Append a budget for a category that has none yet
    pub fn append(&self, budget: &Budget) -> LedgerResult<()> {
        if self.find_by_category(&budget.category)?.is_some() {
            return Err(LedgerError::duplicate_category(&budget.category));
        }
        self.store.append_row(Table::Budgets, budget.to_row())
    }

    /// Overwrite the given numeric columns of an existing budget row
    pub fn update_fields(&self, position: RowPosition, fields: BudgetFields) -> LedgerResult<()> {
        if fields.is_empty() {
            return Ok(());
        }
        self.store
            .update_cells(Table::Budgets, position.sheet_row(), &fields.cells())
    }

    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.store.read_rows(Table::Budgets)?.len())
    }
}
