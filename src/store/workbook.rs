//! JSON workbook store
//!
//! Persists the sheets as a single JSON workbook file. Each call reads the file,
//! applies its change and writes the whole workbook back atomically, so the
//! file stays the single source of truth between calls.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;

use super::file_io::{read_json, write_json_atomic};
use super::{apply_cell_update, Table, TabularStore};

/// On-disk workbook layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Workbook {
    #[serde(default)]
    title: String,
    /// Sheet name -> rows, header row first
    #[serde(default)]
    sheets: BTreeMap<String, Vec<Vec<String>>>,
}

impl Workbook {
    fn sheet_mut(&mut self, table: Table) -> &mut Vec<Vec<String>> {
        self.sheets
            .entry(table.name().to_string())
            .or_insert_with(|| vec![table.header_row()])
    }
}

/// Tabular store backed by a JSON workbook file
#[derive(Debug, Clone)]
pub struct WorkbookStore {
    path: PathBuf,
    title: String,
}

impl WorkbookStore {
    pub fn new(path: PathBuf, title: impl Into<String>) -> Self {
        Self {
            path,
            title: title.into(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> LedgerResult<Workbook> {
        let mut workbook: Workbook = read_json(&self.path)?;
        if workbook.title.is_empty() {
            workbook.title = self.title.clone();
        }
        Ok(workbook)
    }

    fn modify<F>(&self, table: Table, change: F) -> LedgerResult<()>
    where
        F: FnOnce(&mut Vec<Vec<String>>) -> LedgerResult<()>,
    {
        let mut workbook = self.load()?;
        change(workbook.sheet_mut(table))?;
        write_json_atomic(&self.path, &workbook)
    }
}

impl TabularStore for WorkbookStore {
    fn ensure_table(&self, table: Table) -> LedgerResult<()> {
        let workbook = self.load()?;
        if self.exists() && workbook.sheets.contains_key(table.name()) {
            return Ok(());
        }
        tracing::info!(sheet = table.name(), path = %self.path.display(), "Creating sheet");
        self.modify(table, |_| Ok(()))
    }

    fn read_rows(&self, table: Table) -> LedgerResult<Vec<Vec<String>>> {
        let workbook = self.load()?;
        let rows = workbook
            .sheets
            .get(table.name())
            .map(|rows| rows.iter().skip(1).cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        tracing::debug!(sheet = table.name(), rows = rows.len(), "Read sheet");
        Ok(rows)
    }

    fn append_row(&self, table: Table, row: Vec<String>) -> LedgerResult<()> {
        self.modify(table, |rows| {
            rows.push(row);
            Ok(())
        })
    }

    fn update_cells(
        &self,
        table: Table,
        sheet_row: usize,
        cells: &[(usize, String)],
    ) -> LedgerResult<()> {
        self.modify(table, |rows| apply_cell_update(table, rows, sheet_row, cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, WorkbookStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("expense_tracker.json");
        let store = WorkbookStore::new(path, "expense_tracker");
        (temp_dir, store)
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.read_rows(Table::Budgets).unwrap().is_empty());
        assert!(!store.exists());
    }

    #[test]
    fn test_ensure_table_writes_headers() {
        let (_temp_dir, store) = create_test_store();
        store.ensure_table(Table::Expenses).unwrap();
        store.ensure_table(Table::Budgets).unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["title"], "expense_tracker");
        assert_eq!(value["sheets"]["budgets"][0][0], "budget category");
        assert_eq!(value["sheets"]["expenses"][0][3], "category");
    }

    #[test]
    fn test_append_update_and_reload() {
        let (_temp_dir, store) = create_test_store();
        store
            .append_row(Table::Budgets, row(&["Utilities", "200.00", "0.00", "200.00"]))
            .unwrap();
        store
            .update_cells(Table::Budgets, 2, &[(2, "45.50".into()), (3, "154.50".into())])
            .unwrap();

        let reopened = WorkbookStore::new(store.path().clone(), "ignored");
        let rows = reopened.read_rows(Table::Budgets).unwrap();
        assert_eq!(rows, vec![row(&["Utilities", "200.00", "45.50", "154.50"])]);
    }

    #[test]
    fn test_update_missing_row_leaves_file_untouched() {
        let (_temp_dir, store) = create_test_store();
        store.ensure_table(Table::Budgets).unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        assert!(store.update_cells(Table::Budgets, 2, &[(1, "1.00".into())]).is_err());
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }
}
