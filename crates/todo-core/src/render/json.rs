//! JSON output

use crate::comment::StructuredComment;
use crate::error::Result;

/// Render comments as a pretty-printed JSON array
pub fn render_json(records: &[StructuredComment]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
