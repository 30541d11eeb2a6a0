//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConvertConfig, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, DEFAULT_PREVIEW_ROWS};

/// Convert the tool bookmarks spreadsheet into a JSON array of records
#[derive(Parser, Debug)]
#[command(name = "tools-convert", version, about)]
pub struct Cli {
    /// Spreadsheet to read (first sheet only)
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory to write tools.json into, created if missing
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Number of rows to show in the preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,
}

impl From<Cli> for ConvertConfig {
    fn from(cli: Cli) -> Self {
        ConvertConfig {
            input: cli.input,
            output_dir: cli.output_dir,
            preview_rows: cli.preview_rows,
        }
    }
}
