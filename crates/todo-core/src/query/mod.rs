//! Query module
//!
//! Filters and sort orders over the structured comment collection.

pub mod engine;
pub mod order;

pub use engine::QueryEngine;

use crate::date;
use crate::error::{Result, TodoError};
use std::fmt;
use std::str::FromStr;

/// Tip shown when `user` is given no name
pub const USER_TIP: &str = "Tip: give a user name or prefix, e.g. `user romochka`";

/// Tip shown when `sort` is given no or an unknown criterion
pub const SORT_TIP: &str = "Tip: sort by one of: importance, user, date";

/// Tip shown when `date` is given no or an unparsable date
pub const DATE_TIP: &str =
    "Tip: give a date as yyyy, yyyy-mm, yyyy-mm-dd, mm-yyyy or dd-mm-yyyy, e.g. `date 2019-01`";

/// Sort order for the full collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Most `!` first
    Importance,
    /// Case-insensitive by user, anonymous comments last
    User,
    /// Newest date first
    Date,
}

impl SortCriterion {
    /// Parse a criterion name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "importance" => Some(SortCriterion::Importance),
            "user" => Some(SortCriterion::User),
            "date" => Some(SortCriterion::Date),
            _ => None,
        }
    }

    /// Name as accepted by [`SortCriterion::parse`]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Importance => "importance",
            SortCriterion::User => "user",
            SortCriterion::Date => "date",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortCriterion {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| TodoError::Usage(SORT_TIP.to_string()))
    }
}

/// A query over the comment collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Everything, in scan order
    All,
    /// Comments with at least one `!`
    Important,
    /// Comments whose user starts with the prefix, ignoring case
    ByUser(String),
    /// Comments dated on or after the given date, oldest first
    ByDate(String),
    /// Everything, in the given order
    Sorted(SortCriterion),
}

impl Query {
    /// Build a user query from an optional command argument
    pub fn by_user(prefix: Option<&str>) -> Result<Self> {
        match prefix.map(str::trim) {
            Some(prefix) if !prefix.is_empty() => Ok(Query::ByUser(prefix.to_string())),
            _ => Err(TodoError::Usage(USER_TIP.to_string())),
        }
    }

    /// Build a date query from an optional command argument
    pub fn by_date(raw: Option<&str>) -> Result<Self> {
        let raw = raw.unwrap_or_default();
        if date::handle(raw).is_empty() {
            return Err(TodoError::Usage(DATE_TIP.to_string()));
        }
        Ok(Query::ByDate(raw.trim().to_string()))
    }

    /// Build a sort query from an optional command argument
    pub fn sorted(criterion: Option<&str>) -> Result<Self> {
        criterion
            .unwrap_or_default()
            .parse::<SortCriterion>()
            .map(Query::Sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_criterion_parse() {
        assert_eq!(SortCriterion::parse("importance"), Some(SortCriterion::Importance));
        assert_eq!(SortCriterion::parse("USER"), Some(SortCriterion::User));
        assert_eq!(SortCriterion::parse(" Date "), Some(SortCriterion::Date));
        assert_eq!(SortCriterion::parse("size"), None);
        assert_eq!(SortCriterion::parse(""), None);
    }

    #[test]
    fn test_sort_criterion_name_parses_back() {
        for criterion in [SortCriterion::Importance, SortCriterion::User, SortCriterion::Date] {
            assert_eq!(SortCriterion::parse(criterion.as_str()), Some(criterion));
            assert_eq!(criterion.to_string(), criterion.as_str());
        }
    }

    #[test]
    fn test_sort_criterion_from_str_is_usage_error() {
        let err = "size".parse::<SortCriterion>().unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.to_string(), SORT_TIP);
    }

    #[test]
    fn test_query_by_user() {
        assert_eq!(
            Query::by_user(Some("romochka")).unwrap(),
            Query::ByUser("romochka".to_string())
        );
        assert_eq!(
            Query::by_user(Some("john doe")).unwrap(),
            Query::ByUser("john doe".to_string())
        );
        assert!(Query::by_user(None).unwrap_err().is_usage());
        assert!(Query::by_user(Some("  ")).unwrap_err().is_usage());
    }

    #[test]
    fn test_query_by_date() {
        assert_eq!(
            Query::by_date(Some("15-02-2019")).unwrap(),
            Query::ByDate("15-02-2019".to_string())
        );
        assert!(Query::by_date(None).unwrap_err().is_usage());
        assert!(Query::by_date(Some("yesterday")).unwrap_err().is_usage());
        assert!(Query::by_date(Some("2019-13")).unwrap_err().is_usage());
    }

    #[test]
    fn test_query_sorted() {
        assert_eq!(
            Query::sorted(Some("importance")).unwrap(),
            Query::Sorted(SortCriterion::Importance)
        );
        assert!(Query::sorted(None).unwrap_err().is_usage());
        assert!(Query::sorted(Some("file")).unwrap_err().is_usage());
    }
}
