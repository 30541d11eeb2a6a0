//! Spreadsheet rows to tool records

use std::collections::BTreeSet;
use std::fs;

use anyhow::{Context, Result};
use calamine::Data;

use super::{ToolRecord, UNCATEGORIZED, cols, write_tools_json};
use crate::config::ConvertConfig;
use crate::excel::{Sheet, cell_to_string, read_first_sheet};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub record_count: usize,
    pub category_count: usize,
}

/// Project every data row onto a record, in row order
///
/// Row `i` (0-based) gets id `i + 1`. A missing column or blank cell falls
/// back to "" or, for the category, to [`UNCATEGORIZED`].
pub fn records_from_sheet(sheet: &Sheet) -> Vec<ToolRecord> {
    sheet
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let ordinal = idx + 1;
            log::debug!("Processing row {}: {}", ordinal, sheet.describe_row(row));
            build_record(sheet, row, ordinal)
        })
        .collect()
}

fn build_record(sheet: &Sheet, row: &[Data], ordinal: usize) -> ToolRecord {
    let field = |label: &str, default: &str| {
        sheet
            .cell(row, label)
            .and_then(cell_to_string)
            .unwrap_or_else(|| default.to_string())
    };

    ToolRecord {
        id: ordinal.to_string(),
        name: field(cols::NAME, ""),
        url: field(cols::URL, ""),
        description: field(cols::NOTES, ""),
        category: field(cols::TYPE, UNCATEGORIZED),
    }
}

/// Read the configured spreadsheet and write its records as JSON
pub fn convert(config: &ConvertConfig) -> Result<ConversionSummary> {
    log::info!("Reading Excel file {}", config.input.display());
    let sheet = read_first_sheet(&config.input)?;

    log::info!("Columns: {:?}", sheet.headers);
    log_preview(&sheet, config.preview_rows);

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let records = records_from_sheet(&sheet);
    let output_path = config.output_path();
    write_tools_json(&records, &output_path)?;

    let categories: BTreeSet<&str> = records.iter().map(|r| r.category.as_str()).collect();
    log::info!(
        "Wrote {} records in {} categories to {}",
        records.len(),
        categories.len(),
        output_path.display()
    );

    Ok(ConversionSummary {
        record_count: records.len(),
        category_count: categories.len(),
    })
}

fn log_preview(sheet: &Sheet, limit: usize) {
    if sheet.rows.is_empty() {
        log::info!("Sheet has no data rows");
        return;
    }

    log::info!("First {} rows:", limit.min(sheet.rows.len()));
    for (idx, row) in sheet.rows.iter().take(limit).enumerate() {
        log::info!("  {}: {}", idx + 1, sheet.describe_row(row));
    }
}
