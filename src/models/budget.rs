//! Budget model
//!
//! A budget caps spending for one category. Alongside the cap it carries two
//! derived figures, current expenses and remaining budget, which the
//! reconciliation engine keeps in line with the expenses sheet.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{Money, MAX_CENTS};
use super::row::{money_cell, text_cell, RowDecodeError};

/// Column headers of the budgets sheet, in order
pub const BUDGET_HEADERS: [&str; 4] = [
    "budget category",
    "budget amount",
    "current expenses",
    "remaining budget",
];

/// Zero-based column indexes of the budgets sheet
pub const BUDGET_AMOUNT_COLUMN: usize = 1;
pub const CURRENT_EXPENSES_COLUMN: usize = 2;
pub const REMAINING_BUDGET_COLUMN: usize = 3;

/// A per-category budget record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub budget_amount: Money,
    pub current_expenses: Money,
    /// May go negative once spending passes the budget
    pub remaining_budget: Money,
}

impl Budget {
    /// Create a budget with its remaining figure derived from the other two
    pub fn new(category: impl Into<String>, budget_amount: Money, current_expenses: Money) -> Self {
        Self {
            category: category.into(),
            budget_amount,
            current_expenses,
            remaining_budget: budget_amount - current_expenses,
        }
    }

    /// Add one expense on top of the stored current expenses
    ///
    /// Leaves the budget untouched if either figure would leave the supported
    /// money range.
    pub fn apply_expense(&mut self, amount: Money) -> Result<(), BudgetValidationError> {
        let current_expenses = self
            .current_expenses
            .checked_add(amount)
            .ok_or(BudgetValidationError::AmountOutOfRange)?;
        let remaining_budget = self
            .budget_amount
            .checked_sub(current_expenses)
            .ok_or(BudgetValidationError::AmountOutOfRange)?;

        self.current_expenses = current_expenses;
        self.remaining_budget = remaining_budget;
        Ok(())
    }

    /// Replace every figure from an authoritative recompute
    pub fn recompute(&mut self, budget_amount: Money, current_expenses: Money) {
        self.budget_amount = budget_amount;
        self.current_expenses = current_expenses;
        self.remaining_budget = budget_amount - current_expenses;
    }

    /// Whether the remaining figure agrees with budget minus expenses
    pub fn is_consistent(&self) -> bool {
        self.remaining_budget == self.budget_amount - self.current_expenses
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining_budget.is_negative()
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if self.budget_amount.is_negative() {
            return Err(BudgetValidationError::NegativeBudget);
        }

        if self.budget_amount.cents() > MAX_CENTS {
            return Err(BudgetValidationError::AmountOutOfRange);
        }

        Ok(())
    }

    /// Encode as a budgets sheet row
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.budget_amount.to_string(),
            self.current_expenses.to_string(),
            self.remaining_budget.to_string(),
        ]
    }

    /// Decode a budgets sheet row
    ///
    /// The stored figures are taken as-is; a stale remaining budget is left for
    /// reconciliation to correct.
    pub fn from_row(row: &[String]) -> Result<Self, RowDecodeError> {
        Ok(Self {
            category: text_cell(row, 0, BUDGET_HEADERS[0])?,
            budget_amount: money_cell(row, BUDGET_AMOUNT_COLUMN, BUDGET_HEADERS[1])?,
            current_expenses: money_cell(row, CURRENT_EXPENSES_COLUMN, BUDGET_HEADERS[2])?,
            remaining_budget: money_cell(row, REMAINING_BUDGET_COLUMN, BUDGET_HEADERS[3])?,
        })
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: budget {} spent {} remaining {}",
            self.category, self.budget_amount, self.current_expenses, self.remaining_budget
        )
    }
}

/// A partial overwrite of a budget row's numeric columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetFields {
    pub budget_amount: Option<Money>,
    pub current_expenses: Option<Money>,
    pub remaining_budget: Option<Money>,
}

impl BudgetFields {
    /// The two derived figures only, as written by an incremental update
    pub fn spend(budget: &Budget) -> Self {
        Self {
            budget_amount: None,
            current_expenses: Some(budget.current_expenses),
            remaining_budget: Some(budget.remaining_budget),
        }
    }

    /// Every numeric column, as written by a full recompute
    pub fn all(budget: &Budget) -> Self {
        Self {
            budget_amount: Some(budget.budget_amount),
            ..Self::spend(budget)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.budget_amount.is_none()
            && self.current_expenses.is_none()
            && self.remaining_budget.is_none()
    }

    /// (zero-based column, cell text) pairs for the fields that are set
    pub fn cells(&self) -> Vec<(usize, String)> {
        [
            (BUDGET_AMOUNT_COLUMN, self.budget_amount),
            (CURRENT_EXPENSES_COLUMN, self.current_expenses),
            (REMAINING_BUDGET_COLUMN, self.remaining_budget),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v.to_string())))
        .collect()
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeBudget,
    AmountOutOfRange,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NegativeBudget => write!(f, "Budget amount cannot be negative"),
            Self::AmountOutOfRange => write!(
                f,
                "Budget figures exceed the largest supported amount ({})",
                Money::from_cents(MAX_CENTS)
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_remaining() {
        let budget = Budget::new("Utilities", Money::from_cents(20000), Money::zero());
        assert_eq!(budget.remaining_budget, Money::from_cents(20000));
        assert!(budget.is_consistent());
    }

    #[test]
    fn test_apply_expense() {
        let mut budget = Budget::new("Utilities", Money::from_cents(20000), Money::zero());
        budget.apply_expense(Money::from_cents(4550)).unwrap();
        assert_eq!(budget.current_expenses, Money::from_cents(4550));
        assert_eq!(budget.remaining_budget, Money::from_cents(15450));
    }

    #[test]
    fn test_overspent_goes_negative() {
        let mut budget = Budget::new("Dining Out", Money::from_cents(1000), Money::zero());
        budget.apply_expense(Money::from_cents(1250)).unwrap();
        assert_eq!(budget.remaining_budget, Money::from_cents(-250));
        assert!(budget.is_overspent());
        assert!(budget.is_consistent());
    }

    #[test]
    fn test_apply_expense_past_range_is_rejected() {
        let mut budget = Budget::new("Other", Money::zero(), Money::from_cents(MAX_CENTS - 100));
        let before = budget.clone();

        assert_eq!(
            budget.apply_expense(Money::from_cents(101)),
            Err(BudgetValidationError::AmountOutOfRange)
        );
        assert_eq!(budget, before);

        budget.apply_expense(Money::from_cents(100)).unwrap();
        assert_eq!(budget.current_expenses, Money::from_cents(MAX_CENTS));
    }

    #[test]
    fn test_validate() {
        let negative = Budget::new("Housing", Money::from_cents(-1), Money::zero());
        assert_eq!(negative.validate(), Err(BudgetValidationError::NegativeBudget));

        let blank = Budget::new(" ", Money::zero(), Money::zero());
        assert_eq!(blank.validate(), Err(BudgetValidationError::EmptyCategory));

        let huge = Budget::new("Housing", Money::from_cents(MAX_CENTS + 1), Money::zero());
        assert_eq!(huge.validate(), Err(BudgetValidationError::AmountOutOfRange));

        let fine = Budget::new("Housing", Money::from_cents(90000), Money::zero());
        assert!(fine.validate().is_ok());
    }

    #[test]
    fn test_from_row_keeps_stale_figures() {
        let row: Vec<String> = ["groceries", "150.00", "40.00", "999.00"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let budget = Budget::from_row(&row).unwrap();
        assert_eq!(budget.category, "groceries");
        assert_eq!(budget.remaining_budget, Money::from_cents(99900));
        assert!(!budget.is_consistent());
    }

    #[test]
    fn test_fields_cells() {
        let budget = Budget::new("Utilities", Money::from_cents(20000), Money::from_cents(4550));
        assert_eq!(
            BudgetFields::spend(&budget).cells(),
            vec![(2, "45.50".to_string()), (3, "154.50".to_string())]
        );
        assert_eq!(BudgetFields::all(&budget).cells().len(), 3);
        assert!(BudgetFields::default().is_empty());
    }
}
