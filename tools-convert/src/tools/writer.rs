//! Write tool records as pretty-printed JSON

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::ToolRecord;

const INDENT: &[u8] = b"  ";

/// Serialize records as a JSON array with two-space indentation
///
/// Non-ASCII text is emitted as-is, and there is no trailing newline.
pub fn to_json_bytes(records: &[ToolRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .context("Failed to serialize tool records")?;
    Ok(buf)
}

/// Write records to `path`, replacing any previous content
///
/// The whole document is serialized before the file is opened, so a failure
/// here never leaves a half-written file behind.
pub fn write_tools_json(records: &[ToolRecord], path: &Path) -> Result<()> {
    let bytes = to_json_bytes(records)?;
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
