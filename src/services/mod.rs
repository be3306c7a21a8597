//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! input rules, category canonicalization and budget reconciliation.

pub mod ledger;
pub mod reconciliation;

pub use ledger::{CategoryTotal, LedgerService, RecordedExpense, DEFAULT_DATE_WINDOW_DAYS};
pub use reconciliation::{BudgetUpsert, Correction, ReconciliationEngine};
