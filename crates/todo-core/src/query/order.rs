//! Filters and orderings over structured comments
//!
//! Every ordering falls back to ascending `id`, so results are stable with
//! respect to scan order.

use super::{Query, SortCriterion, DATE_TIP, USER_TIP};
use crate::comment::StructuredComment;
use crate::date;
use crate::error::{Result, TodoError};
use std::cmp::Ordering;
use tracing::debug;

/// Apply a query to an already collected set of comments
pub fn apply(query: &Query, comments: Vec<StructuredComment>) -> Result<Vec<StructuredComment>> {
    match query {
        Query::All => Ok(comments),
        Query::Important => Ok(important(comments)),
        Query::ByUser(prefix) => {
            if prefix.trim().is_empty() {
                return Err(TodoError::Usage(USER_TIP.to_string()));
            }
            Ok(by_user(comments, prefix.trim()))
        }
        Query::ByDate(raw) => {
            let since = date::extend(&date::handle(raw));
            if since.is_empty() {
                return Err(TodoError::Usage(DATE_TIP.to_string()));
            }
            Ok(since_date(comments, &since))
        }
        Query::Sorted(criterion) => Ok(sorted(comments, *criterion)),
    }
}

/// Keep comments with importance above zero
pub fn important(comments: Vec<StructuredComment>) -> Vec<StructuredComment> {
    comments.into_iter().filter(|c| c.is_important()).collect()
}

/// Keep comments whose user starts with `prefix`, ignoring case
pub fn by_user(comments: Vec<StructuredComment>, prefix: &str) -> Vec<StructuredComment> {
    let prefix = prefix.to_lowercase();
    comments
        .into_iter()
        .filter(|c| c.user.to_lowercase().starts_with(&prefix))
        .collect()
}

/// Keep comments dated on or after `since` (an extended date), oldest first.
///
/// Undated comments never qualify.
pub fn since_date(comments: Vec<StructuredComment>, since: &str) -> Vec<StructuredComment> {
    let mut dated: Vec<(String, StructuredComment)> = comments
        .into_iter()
        .map(|c| (c.extended_date(), c))
        .filter(|(extended, _)| !extended.is_empty() && extended.as_str() >= since)
        .collect();

    dated.sort_by(|(da, a), (db, b)| da.cmp(db).then(a.id.cmp(&b.id)));
    dated.into_iter().map(|(_, c)| c).collect()
}

/// Sort the full collection by `criterion`
pub fn sorted(mut comments: Vec<StructuredComment>, criterion: SortCriterion) -> Vec<StructuredComment> {
    debug!("Sorting {} comment(s) by {}", comments.len(), criterion);
    match criterion {
        SortCriterion::Importance => {
            comments.sort_by(|a, b| b.importance.cmp(&a.importance).then(a.id.cmp(&b.id)))
        }
        SortCriterion::User => comments.sort_by(|a, b| compare_users(a, b).then(a.id.cmp(&b.id))),
        SortCriterion::Date => comments.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id))),
    }
    comments
}

/// Case-insensitive user order with anonymous comments after named ones
fn compare_users(a: &StructuredComment, b: &StructuredComment) -> Ordering {
    match (a.user.is_empty(), b.user.is_empty()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.user.to_lowercase().cmp(&b.user.to_lowercase()),
    }
}
