//! Expense repository
//!
//! Read and append access to the expenses sheet.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{same_category, Expense, Money};
use crate::store::{Table, TabularStore};

use super::decode_rows;

/// Repository for the expenses sheet
pub struct ExpenseRepository<'a> {
    store: &'a dyn TabularStore,
}

impl<'a> ExpenseRepository<'a> {
    pub fn new(store: &'a dyn TabularStore) -> Self {
        Self { store }
    }

    /// Append a new expense row
    pub fn append(&self, expense: &Expense) -> LedgerResult<()> {
        self.store.append_row(Table::Expenses, expense.to_row())
    }

    /// Every expense, in sheet order
    pub fn all(&self) -> LedgerResult<Vec<Expense>> {
        let rows = self.store.read_rows(Table::Expenses)?;
        decode_rows(Table::Expenses, rows, Expense::from_row)
    }

    /// Expenses whose category matches `category` case-insensitively, in sheet order
    pub fn by_category(&self, category: &str) -> LedgerResult<Vec<Expense>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|e| same_category(&e.category, category))
            .collect())
    }

    /// Total spent in `category`; zero when nothing matches
    pub fn sum_by_category(&self, category: &str) -> LedgerResult<Money> {
        let expenses = self.by_category(category)?;
        Money::checked_sum(expenses.iter().map(|e| e.amount))
            .ok_or_else(|| LedgerError::total_out_of_range(category))
    }

    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.store.read_rows(Table::Expenses)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn expense(description: &str, cents: i64, category: &str) -> Expense {
        Expense::new(
            description,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            category,
        )
    }

    #[test]
    fn test_append_and_all_keep_order() {
        let store = MemoryStore::new();
        let repo = ExpenseRepository::new(&store);

        repo.append(&expense("Rent", 90000, "Housing")).unwrap();
        repo.append(&expense("Milk", 129, "Groceries")).unwrap();

        let all = repo.all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].description, "Rent");
        assert_eq!(all[1].description, "Milk");
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_sum_by_category_is_case_insensitive() {
        let store = MemoryStore::new();
        let repo = ExpenseRepository::new(&store);

        repo.append(&expense("Milk", 3333, "Groceries")).unwrap();
        repo.append(&expense("Bread", 3334, "groceries")).unwrap();
        repo.append(&expense("Bus", 250, "Transportation")).unwrap();

        assert_eq!(repo.sum_by_category("GROCERIES").unwrap(), Money::from_cents(6667));
        assert_eq!(repo.by_category("groceries").unwrap().len(), 2);
    }

    #[test]
    fn test_sum_with_no_matches_is_zero() {
        let store = MemoryStore::new();
        let repo = ExpenseRepository::new(&store);
        assert_eq!(repo.sum_by_category("Healthcare").unwrap(), Money::zero());
    }

    #[test]
    fn test_sum_past_range_is_rejected() {
        let store = MemoryStore::new();
        let repo = ExpenseRepository::new(&store);

        let half = crate::models::MAX_CENTS / 2 + 1;
        repo.append(&expense("Yacht", half, "Other")).unwrap();
        repo.append(&expense("Island", half, "Other")).unwrap();

        assert!(repo.sum_by_category("Other").unwrap_err().is_validation());
    }

    #[test]
    fn test_store_failure_propagates() {
        let store = MemoryStore::new();
        let repo = ExpenseRepository::new(&store);
        store.set_online(false);

        assert!(repo.append(&expense("Milk", 129, "Groceries")).unwrap_err().is_store_unavailable());
        assert!(repo.all().unwrap_err().is_store_unavailable());
    }
}
