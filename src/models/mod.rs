//! Core data models for the expense tracker
//!
//! This module contains the records held in the two sheets (expenses and
//! budgets), the money type they share, and the category registry.

pub mod budget;
pub mod category;
pub mod expense;
pub mod money;
pub mod row;

pub use budget::{Budget, BudgetFields, BudgetValidationError, BUDGET_HEADERS};
pub use category::{same_category, CategoryRegistry, DEFAULT_CATEGORIES};
pub use expense::{Expense, ExpenseValidationError, EXPENSE_HEADERS, MAX_DESCRIPTION_LEN};
pub use money::{Money, MoneyParseError, MAX_CENTS};
pub use row::{RowDecodeError, SHEET_DATE_FORMAT};
