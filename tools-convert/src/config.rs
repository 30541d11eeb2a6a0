//! Conversion settings
//!
//! Every field has a fixed default, so running without arguments always reads
//! `出海工具站收藏夹.xlsx` and writes `data/tools.json`.

use std::path::PathBuf;

/// Spreadsheet read when no `--input` is given
pub const DEFAULT_INPUT: &str = "出海工具站收藏夹.xlsx";

/// Directory the JSON file is written into
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Name of the JSON file inside the output directory
pub const OUTPUT_FILE_NAME: &str = "tools.json";

/// Rows shown in the diagnostic preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub preview_rows: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl ConvertConfig {
    /// Full path of the JSON file this run writes
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }
}
