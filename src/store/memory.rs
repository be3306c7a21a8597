//! In-memory tabular store
//!
//! Holds both sheets in process memory. Used by tests and as a scratch store;
//! it can be switched offline to simulate an unreachable remote service.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};

use super::{apply_cell_update, Table, TabularStore};

/// Tabular store backed by process memory
#[derive(Debug)]
pub struct MemoryStore {
    /// Each table's rows, header included at index 0
    sheets: RwLock<HashMap<Table, Vec<Vec<String>>>>,
    online: AtomicBool,
}

impl MemoryStore {
    /// Create a store with both tables present and empty
    pub fn new() -> Self {
        let sheets = Table::ALL
            .iter()
            .map(|table| (*table, vec![table.header_row()]))
            .collect();

        Self {
            sheets: RwLock::new(sheets),
            online: AtomicBool::new(true),
        }
    }

    /// Create a store pre-filled with data rows for one table
    pub fn with_rows(table: Table, rows: Vec<Vec<String>>) -> Self {
        let store = Self::new();
        if let Ok(mut sheets) = store.sheets.write() {
            sheets.entry(table).or_default().extend(rows);
        }
        store
    }

    /// Simulate the store going offline (or coming back)
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn check_online(&self) -> LedgerResult<()> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(LedgerError::StoreUnavailable(
                "the in-memory store is offline".into(),
            ))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TabularStore for MemoryStore {
    fn ensure_table(&self, table: Table) -> LedgerResult<()> {
        self.check_online()?;
        let mut sheets = self
            .sheets
            .write()
            .map_err(|e| LedgerError::StoreUnavailable(format!("Failed to acquire write lock: {}", e)))?;

        sheets.entry(table).or_insert_with(|| vec![table.header_row()]);
        Ok(())
    }

    fn read_rows(&self, table: Table) -> LedgerResult<Vec<Vec<String>>> {
        self.check_online()?;
        let sheets = self
            .sheets
            .read()
            .map_err(|e| LedgerError::StoreUnavailable(format!("Failed to acquire read lock: {}", e)))?;

        Ok(sheets
            .get(&table)
            .map(|rows| rows.iter().skip(1).cloned().collect())
            .unwrap_or_default())
    }

    fn append_row(&self, table: Table, row: Vec<String>) -> LedgerResult<()> {
        self.check_online()?;
        let mut sheets = self
            .sheets
            .write()
            .map_err(|e| LedgerError::StoreUnavailable(format!("Failed to acquire write lock: {}", e)))?;

        sheets
            .entry(table)
            .or_insert_with(|| vec![table.header_row()])
            .push(row);
        Ok(())
    }

    fn update_cells(
        &self,
        table: Table,
        sheet_row: usize,
        cells: &[(usize, String)],
    ) -> LedgerResult<()> {
        self.check_online()?;
        let mut sheets = self
            .sheets
            .write()
            .map_err(|e| LedgerError::StoreUnavailable(format!("Failed to acquire write lock: {}", e)))?;

        let rows = sheets
            .entry(table)
            .or_insert_with(|| vec![table.header_row()]);
        apply_cell_update(table, rows, sheet_row, cells)
    }
}
