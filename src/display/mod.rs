//! Display formatting for terminal output
//!
//! Renders expenses, budgets and operation outcomes as text tables and
//! one-line summaries.

pub mod budget;
pub mod category;
pub mod expense;

pub use budget::{
    format_budget_table, format_budget_upsert, format_category_totals, format_corrections,
};
pub use category::format_category_list;
pub use expense::{format_expense_table, format_recorded_expense};
