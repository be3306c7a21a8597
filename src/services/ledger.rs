//! Ledger service
//!
//! The operations the command line calls: recording expenses, listing both
//! sheets, setting budgets and reporting per-category totals. Inputs arrive
//! already parsed; this layer canonicalizes categories, enforces the record
//! rules and routes budget changes through the reconciliation engine.

use chrono::{Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{same_category, Budget, CategoryRegistry, Expense, Money};
use crate::services::reconciliation::{BudgetUpsert, Correction, ReconciliationEngine};
use crate::storage::Storage;

/// Default number of days either side of today an expense may be dated
pub const DEFAULT_DATE_WINDOW_DAYS: i64 = 365;

/// An expense that was written, with the budget it moved (if any)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedExpense {
    pub expense: Expense,
    pub budget: Option<Budget>,
}

/// Spending in one category, with its budget when one is set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub spent: Money,
    pub budget: Option<Budget>,
}

/// Service for recording expenses and managing budgets
pub struct LedgerService<'a> {
    storage: &'a Storage<'a>,
    registry: &'a CategoryRegistry,
    date_window_days: i64,
    today: Option<NaiveDate>,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage<'a>, registry: &'a CategoryRegistry) -> Self {
        Self {
            storage,
            registry,
            date_window_days: DEFAULT_DATE_WINDOW_DAYS,
            today: None,
        }
    }

    /// Override how far from today an expense may be dated
    pub fn with_date_window(mut self, days: i64) -> Self {
        self.date_window_days = days;
        self
    }

    /// Pin "today" instead of reading the local clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn engine(&self) -> ReconciliationEngine<'a> {
        ReconciliationEngine::new(self.storage)
    }

    fn canonical_category(&self, category: &str) -> LedgerResult<&'a str> {
        self.registry
            .canonicalize(category)
            .ok_or_else(|| LedgerError::category_not_found(category.trim()))
    }

    /// Record a new expense and apply it to its category's budget
    ///
    /// The expense row is written first. If the budget update then fails the
    /// error is returned and the budget stays behind until the next recompute.
    pub fn record_expense(
        &self,
        description: &str,
        amount: Money,
        date: NaiveDate,
        category: &str,
    ) -> LedgerResult<RecordedExpense> {
        let category = self.canonical_category(category)?;
        let expense = Expense::new(description.trim(), amount, date, category);
        expense
            .validate(self.today(), self.date_window_days)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.expenses.append(&expense)?;
        tracing::info!(
            description = %expense.description,
            amount = %expense.amount,
            category = %expense.category,
            "Recorded expense"
        );

        let budget = self.engine().apply_new_expense(category, amount)?;

        Ok(RecordedExpense { expense, budget })
    }

    /// Every expense, in sheet order
    pub fn list_expenses(&self) -> LedgerResult<Vec<Expense>> {
        self.storage.expenses.all()
    }

    /// Expenses in one category, in sheet order
    pub fn list_expenses_by_category(&self, category: &str) -> LedgerResult<Vec<Expense>> {
        let category = self.canonical_category(category)?;
        self.storage.expenses.by_category(category)
    }

    /// Every budget, in sheet order
    pub fn list_budgets(&self) -> LedgerResult<Vec<Budget>> {
        self.storage.budgets.all()
    }

    /// The budget for a category, if one is set
    pub fn find_budget(&self, category: &str) -> LedgerResult<Option<Budget>> {
        let category = self.canonical_category(category)?;
        Ok(self
            .storage
            .budgets
            .find_by_category(category)?
            .map(|(_, budget)| budget))
    }

    /// Set the budget amount for a category
    ///
    /// A new budget is created when none exists. An existing one is recomputed
    /// from the expenses sheet only when `confirm_overwrite` is set.
    pub fn upsert_budget(
        &self,
        category: &str,
        amount: Money,
        confirm_overwrite: bool,
    ) -> LedgerResult<BudgetUpsert> {
        let category = self.canonical_category(category)?;
        // Amount rules only; spending is filled in by the engine
        Budget::new(category, amount, Money::zero()).validate()?;

        let existing = self.storage.budgets.find_by_category(category)?;
        self.engine()
            .set_or_update_budget(category, amount, existing, confirm_overwrite)
    }

    /// Recompute every budget from the expenses sheet
    pub fn reconcile_budgets(&self) -> LedgerResult<Vec<Correction>> {
        self.engine().reconcile_all()
    }

    /// Spending per registry category, in registry order
    pub fn category_totals(&self) -> LedgerResult<Vec<CategoryTotal>> {
        let expenses = self.storage.expenses.all()?;
        let budgets = self.storage.budgets.all()?;

        self.registry
            .names()
            .map(|category| {
                let spent = Money::checked_sum(
                    expenses
                        .iter()
                        .filter(|e| same_category(&e.category, category))
                        .map(|e| e.amount),
                )
                .ok_or_else(|| LedgerError::total_out_of_range(category))?;
                let budget = budgets
                    .iter()
                    .find(|b| same_category(&b.category, category))
                    .cloned();
                Ok(CategoryTotal {
                    category: category.to_string(),
                    spent,
                    budget,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Table, TabularStore};

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn test_create_then_spend() {
        let store = MemoryStore::new();
        let storage = Storage::new(&store);
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry).with_today(today());

        let outcome = ledger.upsert_budget("Utilities", cents(20000), false).unwrap();
        assert_eq!(
            outcome,
            BudgetUpsert::Created(Budget::new("Utilities", cents(20000), cents(0)))
        );
        assert_eq!(
            store.read_rows(Table::Budgets).unwrap()[0],
            vec!["Utilities", "200.00", "0.00", "200.00"]
        );

        let recorded = ledger
            .record_expense("Electric bill", cents(4550), march(1), "Utilities")
            .unwrap();
        let budget = recorded.budget.unwrap();
        assert_eq!(budget.current_expenses, cents(4550));
        assert_eq!(budget.remaining_budget, cents(15450));
        assert_eq!(
            store.read_rows(Table::Budgets).unwrap()[0],
            vec!["Utilities", "200.00", "45.50", "154.50"]
        );
    }

    #[test]
    fn test_drifted_budget_self_heals_on_edit() {
        let store = MemoryStore::with_rows(
            Table::Budgets,
            vec![vec!["Groceries".into(), "150.00".into(), "40.00".into(), "110.00".into()]],
        );
        let storage = Storage::new(&store);
        for (description, amount) in [("Market", 3000), ("Bakery", 2500)] {
            storage
                .expenses
                .append(&Expense::new(description, cents(amount), march(2), "Groceries"))
                .unwrap();
        }
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry).with_today(today());

        let outcome = ledger.upsert_budget("Groceries", cents(15000), true).unwrap();
        match outcome {
            BudgetUpsert::Updated { previous, budget } => {
                assert_eq!(previous.current_expenses, cents(4000));
                assert_eq!(budget, Budget::new("Groceries", cents(15000), cents(5500)));
                assert_eq!(budget.remaining_budget, cents(9500));
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_case_insensitive_budget_match() {
        let store = MemoryStore::new();
        let storage = Storage::new(&store);
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry).with_today(today());

        ledger.upsert_budget("Groceries", cents(10000), false).unwrap();
        let recorded = ledger
            .record_expense("Milk", cents(129), march(3), "groceries")
            .unwrap();

        assert_eq!(recorded.expense.category, "Groceries");
        assert_eq!(recorded.budget.unwrap().current_expenses, cents(129));
    }

    #[test]
    fn test_rounding_boundary() {
        let store = MemoryStore::new();
        let storage = Storage::new(&store);
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry).with_today(today());

        ledger.upsert_budget("Personal", cents(10000), false).unwrap();
        ledger
            .record_expense("Haircut", Money::parse("33.33").unwrap(), march(4), "Personal")
            .unwrap();
        ledger
            .record_expense("Gym", Money::parse("33.34").unwrap(), march(5), "Personal")
            .unwrap();

        let budget = ledger.find_budget("Personal").unwrap().unwrap();
        assert_eq!(budget.current_expenses.to_string(), "66.67");
        assert_eq!(budget.remaining_budget.to_string(), "33.33");
    }

    #[test]
    fn test_invariants_hold_after_every_expense() {
        let store = MemoryStore::new();
        let storage = Storage::new(&store);
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry).with_today(today());

        ledger.upsert_budget("Dining Out", cents(5000), false).unwrap();
        for (day, amount) in [(1, 1999), (2, 1), (3, 2550), (4, 999)] {
            ledger
                .record_expense("Meal", cents(amount), march(day), "dining out")
                .unwrap();

            let budget = ledger.find_budget("Dining Out").unwrap().unwrap();
            let actual = storage.expenses.sum_by_category("Dining Out").unwrap();
            assert_eq!(budget.current_expenses, actual);
            assert!(budget.is_consistent());
        }
        assert!(ledger.find_budget("Dining Out").unwrap().unwrap().is_overspent());
    }

    #[test]
    fn test_expense_without_budget_leaves_budgets_alone() {
        let store = MemoryStore::new();
        let storage = Storage::new(&store);
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry).with_today(today());
        ledger.upsert_budget("Housing", cents(90000), false).unwrap();
        let before = store.read_rows(Table::Budgets).unwrap();

        let recorded = ledger
            .record_expense("Cinema", cents(1200), march(6), "Entertainment")
            .unwrap();

        assert!(recorded.budget.is_none());
        assert_eq!(store.read_rows(Table::Budgets).unwrap(), before);
    }

    #[test]
    fn test_record_rejects_bad_input() {
        let store = MemoryStore::new();
        let storage = Storage::new(&store);
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry).with_today(today());

        let unknown = ledger.record_expense("Dog food", cents(100), march(1), "Pets");
        assert!(unknown.unwrap_err().is_not_found());

        let long = ledger.record_expense(&"x".repeat(26), cents(100), march(1), "Other");
        assert!(long.unwrap_err().is_validation());

        let far = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let future = ledger.record_expense("Later", cents(100), far, "Other");
        assert!(future.unwrap_err().is_validation());

        assert!(ledger.list_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_rejects_negative_amount() {
        let store = MemoryStore::new();
        let storage = Storage::new(&store);
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry);

        let err = ledger.upsert_budget("Housing", cents(-1), false).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_expense_past_money_range_leaves_budget_untouched() {
        let store = MemoryStore::new();
        let storage = Storage::new(&store);
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry).with_today(today());
        ledger.upsert_budget("Other", cents(0), false).unwrap();

        let half = cents(crate::models::MAX_CENTS / 2 + 1);
        ledger.record_expense("Yacht", half, march(1), "Other").unwrap();
        let before = ledger.find_budget("Other").unwrap().unwrap();

        let err = ledger
            .record_expense("Island", half, march(2), "Other")
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.find_budget("Other").unwrap().unwrap(), before);

        let totals = ledger.category_totals().unwrap_err();
        assert!(totals.is_validation());
        assert!(ledger.reconcile_budgets().unwrap_err().is_validation());
    }

    #[test]
    fn test_huge_date_window_accepts_any_date() {
        let store = MemoryStore::new();
        let storage = Storage::new(&store);
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry)
            .with_today(today())
            .with_date_window(100_000_000);

        let long_ago = NaiveDate::from_ymd_opt(1800, 1, 1).unwrap();
        let recorded = ledger
            .record_expense("Heirloom", cents(100), long_ago, "Other")
            .unwrap();
        assert_eq!(recorded.expense.date, long_ago);
        assert_eq!(ledger.list_expenses().unwrap()[0].date, long_ago);
    }

    #[test]
    fn test_store_unavailable_surfaces() {
        let store = MemoryStore::new();
        let storage = Storage::new(&store);
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry).with_today(today());
        store.set_online(false);

        let err = ledger
            .record_expense("Bus", cents(250), march(1), "Transportation")
            .unwrap_err();
        assert!(err.is_store_unavailable());
        assert!(ledger.list_budgets().unwrap_err().is_store_unavailable());
    }

    #[test]
    fn test_list_by_category_and_totals() {
        let store = MemoryStore::new();
        let storage = Storage::new(&store);
        let registry = CategoryRegistry::default();
        let ledger = LedgerService::new(&storage, &registry).with_today(today());

        ledger.upsert_budget("Transportation", cents(6000), false).unwrap();
        ledger.record_expense("Bus", cents(250), march(1), "Transportation").unwrap();
        ledger.record_expense("Train", cents(1450), march(2), "transportation").unwrap();
        ledger.record_expense("Rent", cents(90000), march(1), "Housing").unwrap();

        let transport = ledger.list_expenses_by_category("TRANSPORTATION").unwrap();
        assert_eq!(transport.len(), 2);
        assert_eq!(transport[1].description, "Train");

        let totals = ledger.category_totals().unwrap();
        assert_eq!(totals.len(), registry.len());
        let housing = &totals[0];
        assert_eq!(housing.category, "Housing");
        assert_eq!(housing.spent, cents(90000));
        assert!(housing.budget.is_none());
        let transportation = totals
            .iter()
            .find(|t| t.category == "Transportation")
            .unwrap();
        assert_eq!(transportation.spent, cents(1700));
        assert_eq!(
            transportation.budget.as_ref().unwrap().remaining_budget,
            cents(4300)
        );
    }
}
