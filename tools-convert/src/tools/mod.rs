//! Tool bookmark records and the spreadsheet to JSON conversion

mod convert;
mod writer;

use serde::{Deserialize, Serialize};

pub use convert::{ConversionSummary, convert};
pub use writer::write_tools_json;

/// Source column labels
pub mod cols {
    pub const NAME: &str = "网站名称";
    pub const URL: &str = "网址";
    pub const NOTES: &str = "备注";
    pub const TYPE: &str = "类型";
}

/// Category used when the type column is missing or blank
pub const UNCATEGORIZED: &str = "未分类";

/// One spreadsheet row as written to tools.json
///
/// Field order here is the key order in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// 1-based row ordinal as a decimal string
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub category: String,
}
