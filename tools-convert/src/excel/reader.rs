//! Read the first worksheet of a workbook into memory

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Reader, open_workbook_auto};

use super::cell::cell_to_string;

/// Column labels plus data rows of one worksheet
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    /// Labels from the header row; blank header cells become ""
    pub headers: Vec<String>,
    /// Data rows in file order, header excluded
    pub rows: Vec<Vec<Data>>,
}

impl Sheet {
    /// Build a sheet from raw rows, treating the first as the header row
    pub fn from_rows(mut rows: Vec<Vec<Data>>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let headers = rows
            .remove(0)
            .iter()
            .map(|c| cell_to_string(c).unwrap_or_default())
            .collect();

        Self { headers, rows }
    }

    /// Index of the first column carrying `label`
    pub fn column_index(&self, label: &str) -> Option<usize> {
        if label.is_empty() {
            return None;
        }
        self.headers.iter().position(|h| h == label)
    }

    /// Cell under `label` in `row`, `None` when the column does not exist
    pub fn cell<'a>(&self, row: &'a [Data], label: &str) -> Option<&'a Data> {
        self.column_index(label).and_then(|col| row.get(col))
    }

    /// Render a row as `{label: value, ...}` for diagnostics
    pub fn describe_row(&self, row: &[Data]) -> String {
        let fields: Vec<String> = self
            .headers
            .iter()
            .enumerate()
            .map(|(col, label)| {
                let value = row
                    .get(col)
                    .and_then(cell_to_string)
                    .unwrap_or_else(|| "<empty>".to_string());
                format!("{}: {}", label, value)
            })
            .collect();
        format!("{{{}}}", fields.join(", "))
    }
}

/// Open a workbook (xlsx, xlsm, xls, ods) and load its first sheet
pub fn read_first_sheet<P: AsRef<Path>>(path: P) -> Result<Sheet> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .with_context(|| format!("Excel file has no sheets: {}", path.display()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    log::debug!(
        "Sheet '{}' used range is {} rows x {} columns",
        sheet_name,
        range.height(),
        range.width()
    );

    let rows: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();
    Ok(Sheet::from_rows(rows))
}
