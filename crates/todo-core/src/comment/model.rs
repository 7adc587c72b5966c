//! Structured comment model

use crate::date;
use serde::{Deserialize, Serialize};

/// A marked TODO comment broken into its fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredComment {
    /// Scan-order sequence number, only used to break sort ties
    pub id: u64,
    /// Number of `!` characters in `text`
    pub importance: usize,
    /// Declared author, empty if none
    pub user: String,
    /// Canonical date (`yyyy`, `yyyy-mm` or `yyyy-mm-dd`), empty if none
    pub date: String,
    /// Free text
    pub text: String,
    /// Base name of the file the comment was found in
    pub file: String,
}

impl StructuredComment {
    /// True when there is no user, date or text
    pub fn is_empty(&self) -> bool {
        self.user.is_empty() && self.date.is_empty() && self.text.is_empty()
    }

    /// True when the text carries at least one `!`
    pub fn is_important(&self) -> bool {
        self.importance > 0
    }

    /// The date padded to `yyyy-mm-dd`, for comparisons
    pub fn extended_date(&self) -> String {
        date::extend(&self.date)
    }
}

/// Count the `!` characters in a comment text
pub fn count_importance(text: &str) -> usize {
    text.chars().filter(|&c| c == '!').count()
}
