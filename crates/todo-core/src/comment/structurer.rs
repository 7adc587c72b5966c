//! Turning a raw marked comment into a structured record
//!
//! The payload after the marker is `user ; date ; text`. Only the first two
//! semicolons delimit fields; with fewer than two the whole payload is text.

use super::extractor::match_marker;
use super::model::{count_importance, StructuredComment};
use crate::date;
use std::path::Path;

/// Field delimiter inside a marked comment payload
pub const FIELD_DELIMITER: char = ';';

/// How a payload was split into fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSplit<'a> {
    /// At least two delimiters: `user ; date ; text`, where `text` keeps any
    /// further delimiters verbatim
    Delimited {
        user: &'a str,
        date: &'a str,
        text: &'a str,
    },
    /// Fewer than two delimiters: everything is text
    TextOnly(&'a str),
}

/// Split a payload into its raw (untrimmed) fields
pub fn split_fields(payload: &str) -> FieldSplit<'_> {
    let mut parts = payload.splitn(3, FIELD_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(user), Some(date), Some(text)) => FieldSplit::Delimited { user, date, text },
        _ => FieldSplit::TextOnly(payload),
    }
}

/// Structure one raw marked comment found in the file at `path`.
///
/// Text that does not start with a marked comment opener is treated as a
/// bare payload, so this never fails.
pub fn structure(raw: &str, path: &Path, id: u64) -> StructuredComment {
    let payload = match_marker(raw).payload().unwrap_or(raw);

    let (user, date, text) = match split_fields(payload) {
        FieldSplit::Delimited {
            user,
            date: raw_date,
            text,
        } => (user.trim(), date::handle(raw_date), text.trim()),
        FieldSplit::TextOnly(text) => ("", String::new(), text.trim()),
    };

    StructuredComment {
        id,
        importance: count_importance(text),
        user: user.to_string(),
        date,
        text: text.to_string(),
        file: base_name(&path.to_string_lossy()).to_string(),
    }
}

/// The part of a path after the last `/` or `\`
pub fn base_name(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}
