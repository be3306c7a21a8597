//! Export module for the expense tracker
//!
//! Provides CSV export of both sheets (spreadsheet-compatible).

pub mod csv;

pub use self::csv::{export_budgets_csv, export_expenses_csv};
