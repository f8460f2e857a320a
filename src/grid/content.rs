//! Row-major cell storage.

use serde::{Deserialize, Serialize};

/// Cell values, `rows[r][c]`. Dimensions track the row/column layouts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridContent {
    rows: Vec<Vec<String>>,
}

impl GridContent {
    /// Fill `rows x columns` cells with `"{row},{column}"` labels.
    pub fn with_placeholders(rows: usize, columns: usize) -> Self {
        let rows = (0..rows)
            .map(|r| (0..columns).map(|c| format!("{r},{c}")).collect())
            .collect();
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell value at `(row, column)`
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub(crate) fn insert_row(&mut self, at: usize, columns: usize, label: &str) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, vec![label.to_string(); columns]);
    }

    pub(crate) fn insert_column(&mut self, at: usize, label: &str) {
        for cells in &mut self.rows {
            let at = at.min(cells.len());
            cells.insert(at, label.to_string());
        }
    }

    pub(crate) fn remove_row(&mut self, at: usize) {
        if at < self.rows.len() {
            self.rows.remove(at);
        }
    }

    pub(crate) fn remove_column(&mut self, at: usize) {
        for cells in &mut self.rows {
            if at < cells.len() {
                cells.remove(at);
            }
        }
    }
}
