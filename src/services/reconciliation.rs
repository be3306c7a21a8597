//! Budget reconciliation
//!
//! Keeps each budget's current expenses and remaining budget in line with the
//! expenses sheet. There are two paths:
//!
//! - **Incremental**: a newly recorded expense is added on top of the stored
//!   current expenses. The stored figure is trusted and nothing is re-read from
//!   the expenses sheet.
//! - **Full recompute**: setting or editing a budget sums the expenses sheet
//!   from scratch, so any drift in the stored figure is corrected. Repeating a
//!   recompute always lands on the same row.

use std::collections::HashMap;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, BudgetFields, Money};
use crate::storage::{RowPosition, Storage};

/// Result of setting a budget amount for a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetUpsert {
    /// No budget existed; a new row was appended
    Created(Budget),
    /// The existing row was recomputed with the new amount
    Updated { previous: Budget, budget: Budget },
    /// A budget exists and overwriting was not confirmed; nothing changed
    Declined(Budget),
}

impl BudgetUpsert {
    /// The budget as it stands after the operation
    pub fn budget(&self) -> &Budget {
        match self {
            Self::Created(budget) | Self::Declined(budget) => budget,
            Self::Updated { budget, .. } => budget,
        }
    }
}

/// A budget row whose stored figures were corrected by a recompute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub position: RowPosition,
    pub before: Budget,
    pub after: Budget,
}

/// Engine that writes reconciled figures back to the budgets sheet
pub struct ReconciliationEngine<'a> {
    storage: &'a Storage<'a>,
}

impl<'a> ReconciliationEngine<'a> {
    pub fn new(storage: &'a Storage<'a>) -> Self {
        Self { storage }
    }

    /// Add one newly recorded expense to its category's budget
    ///
    /// Returns the updated budget, or `None` when the category has no budget
    /// (the budgets sheet is left untouched).
    pub fn apply_new_expense(&self, category: &str, amount: Money) -> LedgerResult<Option<Budget>> {
        let Some((position, mut budget)) = self.storage.budgets.find_by_category(category)? else {
            tracing::debug!(category, "No budget for category, skipping reconciliation");
            return Ok(None);
        };

        budget.apply_expense(amount)?;
        self.storage
            .budgets
            .update_fields(position, BudgetFields::spend(&budget))?;

        tracing::info!(
            category = %budget.category,
            current_expenses = %budget.current_expenses,
            remaining_budget = %budget.remaining_budget,
            "Applied expense to budget"
        );

        Ok(Some(budget))
    }

    /// Create or recompute the budget for `category` with `new_amount`
    ///
    /// `existing` is the caller's lookup of the current budget row. When it is
    /// present the row is only overwritten if `confirm_overwrite` is set;
    /// otherwise the existing budget is reported back unchanged.
    pub fn set_or_update_budget(
        &self,
        category: &str,
        new_amount: Money,
        existing: Option<(RowPosition, Budget)>,
        confirm_overwrite: bool,
    ) -> LedgerResult<BudgetUpsert> {
        match existing {
            Some((_, previous)) if !confirm_overwrite => {
                tracing::debug!(category = %previous.category, "Budget overwrite declined");
                Ok(BudgetUpsert::Declined(previous))
            }
            Some((position, previous)) => {
                let current_expenses = self.storage.expenses.sum_by_category(category)?;

                let mut budget = previous.clone();
                budget.recompute(new_amount, current_expenses);
                self.storage
                    .budgets
                    .update_fields(position, BudgetFields::all(&budget))?;

                if previous.current_expenses != current_expenses {
                    tracing::warn!(
                        category = %budget.category,
                        stored = %previous.current_expenses,
                        actual = %current_expenses,
                        "Corrected drifted current expenses"
                    );
                }
                tracing::info!(
                    category = %budget.category,
                    budget_amount = %budget.budget_amount,
                    "Updated budget"
                );

                Ok(BudgetUpsert::Updated { previous, budget })
            }
            None => {
                let current_expenses = self.storage.expenses.sum_by_category(category)?;
                let budget = Budget::new(category, new_amount, current_expenses);
                self.storage.budgets.append(&budget)?;

                tracing::info!(
                    category = %budget.category,
                    budget_amount = %budget.budget_amount,
                    current_expenses = %budget.current_expenses,
                    "Created budget"
                );

                Ok(BudgetUpsert::Created(budget))
            }
        }
    }

    /// Recompute every budget row from the expenses sheet, keeping its amount
    ///
    /// Only rows whose stored figures disagree are written. Returns the
    /// corrections made, in sheet order.
    pub fn reconcile_all(&self) -> LedgerResult<Vec<Correction>> {
        let mut spent: HashMap<String, Money> = HashMap::new();
        for expense in self.storage.expenses.all()? {
            let total = spent.entry(expense.category.trim().to_lowercase()).or_default();
            *total = total
                .checked_add(expense.amount)
                .ok_or_else(|| LedgerError::total_out_of_range(&expense.category))?;
        }

        let mut corrections = Vec::new();
        for (position, before) in self.storage.budgets.all_with_positions()? {
            let current_expenses = spent
                .get(&before.category.trim().to_lowercase())
                .copied()
                .unwrap_or_default();

            let mut after = before.clone();
            after.recompute(before.budget_amount, current_expenses);
            if after == before {
                continue;
            }

            self.storage
                .budgets
                .update_fields(position, BudgetFields::spend(&after))?;
            tracing::warn!(
                category = %after.category,
                stored = %before.current_expenses,
                actual = %after.current_expenses,
                "Corrected budget during reconciliation"
            );
            corrections.push(Correction {
                position,
                before,
                after,
            });
        }

        Ok(corrections)
    }
}
