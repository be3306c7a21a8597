//! Expense Tracker - expenses and per-category budgets kept in a workbook
//!
//! This library records expenses against a fixed set of categories and keeps
//! an optional budget per category consistent with them. Both live as sheets
//! of an external tabular store; the library itself keeps no state between
//! calls.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records, money and the category registry
//! - `store`: The tabular store trait and its implementations
//! - `storage`: Typed repositories over the two sheets
//! - `services`: Reconciliation engine and the ledger service
//! - `display`, `export`, `cli`: Terminal output, CSV export and commands
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::{CategoryRegistry, Money};
//! use expense_tracker::services::LedgerService;
//! use expense_tracker::storage::Storage;
//! use expense_tracker::store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let storage = Storage::new(&store);
//! let registry = CategoryRegistry::default();
//! let ledger = LedgerService::new(&storage, &registry);
//!
//! ledger.upsert_budget("Utilities", Money::from_cents(20000), false)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{LedgerError, LedgerResult};
