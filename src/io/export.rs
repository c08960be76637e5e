//! JSON output of the ranked facilities.
//!
//! The output is a pretty-printed array (4-space indent) whose objects carry
//! the `RankedResult` fields in declaration order. Missing ratings and scores
//! serialize as `null`.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::RankedResult;
use crate::error::AppError;

const INDENT: &[u8] = b"    ";

/// Write the ranked results as a JSON array followed by a newline.
pub fn write_results_json<W: Write>(mut writer: W, results: &[RankedResult]) -> Result<(), AppError> {
    let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    results
        .serialize(&mut ser)
        .map_err(|e| AppError::output(format!("Failed to write JSON output: {e}")))?;
    writeln!(writer).map_err(|e| AppError::output(format!("Failed to write JSON output: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::output(format!("Failed to flush JSON output: {e}")))?;
    Ok(())
}

/// Render the ranked results as a JSON string (with trailing newline).
pub fn format_results_json(results: &[RankedResult]) -> Result<String, AppError> {
    let mut buf = Vec::new();
    write_results_json(&mut buf, results)?;
    String::from_utf8(buf).map_err(|e| AppError::output(format!("JSON output is not UTF-8: {e}")))
}
