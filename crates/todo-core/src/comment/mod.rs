//! Marked comment module
//!
//! Handles finding marked TODO comments in source text and turning them
//! into structured records.

pub mod model;
pub mod extractor;
pub mod structurer;

pub use model::StructuredComment;
pub use extractor::{extract_comments, extract_marked, match_marker, IdSequence, MarkerMatch};
pub use structurer::{split_fields, structure, FieldSplit};

use crate::source::RawFile;
use tracing::{debug, trace};

/// Build the full comment collection for a set of files.
///
/// Ids are assigned across all files in the order given, then in file order.
/// Records with no user, date or text are dropped.
pub fn collect_comments(files: &[RawFile]) -> Vec<StructuredComment> {
    let mut ids = IdSequence::new();
    let mut comments = Vec::new();

    for file in files {
        let before = comments.len();
        for comment in extract_comments(file, &mut ids) {
            if comment.is_empty() {
                trace!("Dropping empty marked comment {} in {:?}", comment.id, file.path);
                continue;
            }
            comments.push(comment);
        }
        if comments.len() > before {
            debug!("{} marked comment(s) in {:?}", comments.len() - before, file.path);
        }
    }

    comments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect_assigns_ids_across_files() {
        let files = vec![
            RawFile::new("src/a.js", "// TODO first\n// TODO second\n"),
            RawFile::new("src/b.js", "let x; // TODO third\n"),
        ];
        let comments = collect_comments(&files);

        let summary: Vec<(u64, &str, &str)> = comments
            .iter()
            .map(|c| (c.id, c.text.as_str(), c.file.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, "first", "a.js"),
                (1, "second", "a.js"),
                (2, "third", "b.js"),
            ]
        );
    }

    #[test]
    fn test_collect_drops_empty_records() {
        let files = vec![RawFile::new(
            "a.js",
            "// TODO:\n// TODO ;;\n// TODO ; not-a-date ;\n// TODO kept\n",
        )];
        let comments = collect_comments(&files);
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "kept");
    }

    #[test]
    fn test_collect_is_deterministic() {
        let files = vec![
            RawFile::new("a.js", "// TODO bob; 2019; one!\n"),
            RawFile::new("b.js", "// TODO two\n"),
        ];
        assert_eq!(collect_comments(&files), collect_comments(&files));
    }
}
