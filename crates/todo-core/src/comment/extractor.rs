//! Marked comment extraction
//!
//! A marked comment is a `//` line comment whose body starts with `TODO`
//! (any case, optional leading whitespace) followed by a separator: a colon,
//! whitespace, or the end of the line.

use super::model::StructuredComment;
use super::structurer::structure;
use crate::source::RawFile;

/// Line comment opener
pub const COMMENT_OPENER: &str = "//";

/// Marker token, matched case-insensitively
pub const TODO_MARKER: &str = "TODO";

/// Outcome of looking for the marker at a comment opener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerMatch<'a> {
    /// Marker and separator found; `payload` is the rest of the line with
    /// leading whitespace removed
    Marked { payload: &'a str },
    /// Not a comment opener, or the body does not start with the marker
    NotMarked,
}

impl<'a> MarkerMatch<'a> {
    /// The payload if the marker matched
    pub fn payload(self) -> Option<&'a str> {
        match self {
            MarkerMatch::Marked { payload } => Some(payload),
            MarkerMatch::NotMarked => None,
        }
    }
}

/// Match the marker against text starting at a comment opener
pub fn match_marker(comment: &str) -> MarkerMatch<'_> {
    let Some(body) = comment.strip_prefix(COMMENT_OPENER) else {
        return MarkerMatch::NotMarked;
    };

    let body = body.trim_start();
    let marker_len = TODO_MARKER.len();
    match body.get(..marker_len) {
        Some(token) if token.eq_ignore_ascii_case(TODO_MARKER) => {}
        _ => return MarkerMatch::NotMarked,
    }

    let after = &body[marker_len..];
    let rest = after.trim_start();

    if let Some(payload) = rest.strip_prefix(':') {
        // `TODO:` and `TODO  :` both use the colon as separator
        MarkerMatch::Marked {
            payload: payload.trim_start(),
        }
    } else if rest.len() < after.len() || rest.is_empty() {
        MarkerMatch::Marked { payload: rest }
    } else {
        // `TODOs`, `TODO-list` and the like
        MarkerMatch::NotMarked
    }
}

/// Find the marked comment on a single line, if any.
///
/// The returned slice starts at the comment opener that carries the marker
/// and runs to the end of the line.
fn marked_on_line(line: &str) -> Option<&str> {
    line.char_indices()
        .map(|(i, _)| &line[i..])
        .filter(|tail| tail.starts_with(COMMENT_OPENER))
        .find(|tail| matches!(match_marker(tail), MarkerMatch::Marked { .. }))
}

/// Lazily yield every marked comment in `content`, in file order
pub fn extract_marked(content: &str) -> impl Iterator<Item = &str> {
    content.lines().filter_map(marked_on_line)
}

/// Running id counter shared across the files of one collection pass
#[derive(Debug, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next id
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Lazily extract and structure every marked comment in a file, drawing ids
/// from `ids`
pub fn extract_comments<'a>(
    file: &'a RawFile,
    ids: &'a mut IdSequence,
) -> impl Iterator<Item = StructuredComment> + 'a {
    extract_marked(&file.content).map(move |raw| structure(raw, &file.path, ids.next_id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_match_marker_separators() {
        assert_eq!(match_marker("// TODO fix").payload(), Some("fix"));
        assert_eq!(match_marker("//TODO: fix").payload(), Some("fix"));
        assert_eq!(match_marker("//   todo   :   fix").payload(), Some("fix"));
        assert_eq!(match_marker("// ToDo\tfix").payload(), Some("fix"));
        assert_eq!(match_marker("// TODO").payload(), Some(""));
        assert_eq!(match_marker("// TODO:").payload(), Some(""));
    }

    #[test]
    fn test_match_marker_only_one_colon_is_separator() {
        assert_eq!(match_marker("// TODO:: fix").payload(), Some(": fix"));
    }

    #[test]
    fn test_match_marker_rejects() {
        assert_eq!(match_marker("// TODOs are fun"), MarkerMatch::NotMarked);
        assert_eq!(match_marker("// see TODO: later"), MarkerMatch::NotMarked);
        assert_eq!(match_marker("/ TODO x"), MarkerMatch::NotMarked);
        assert_eq!(match_marker("// TOD"), MarkerMatch::NotMarked);
        assert_eq!(match_marker("// ТODO кириллица"), MarkerMatch::NotMarked);
    }

    #[test]
    fn test_extract_marked_lines() {
        let content = "\
// TODO first
let a = 1; // todo: trailing
// not a TODO here
/// TODO doc comment
const url = \"http://x\"; // TODO after url
/* TODO block */
";
        let found: Vec<&str> = extract_marked(content).collect();
        assert_eq!(
            found,
            vec![
                "// TODO first",
                "// todo: trailing",
                "// TODO doc comment",
                "// TODO after url",
            ]
        );
    }

    #[test]
    fn test_extract_marked_empty() {
        assert_eq!(extract_marked("").count(), 0);
        assert_eq!(extract_marked("fn main() {}\n").count(), 0);
    }

    #[test]
    fn test_extract_comments_uses_shared_sequence() {
        let a = RawFile::new("a.js", "// TODO one\n// TODO two\n");
        let b = RawFile::new("b.js", "// TODO three\n");
        let mut ids = IdSequence::new();

        let first: Vec<u64> = extract_comments(&a, &mut ids).map(|c| c.id).collect();
        let second: Vec<u64> = extract_comments(&b, &mut ids).map(|c| c.id).collect();

        assert_eq!(first, vec![0, 1]);
        assert_eq!(second, vec![2]);
    }
}
