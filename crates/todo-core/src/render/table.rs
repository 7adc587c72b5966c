//! Fixed-width console table
//!
//! Column widths are computed per call from the records being shown, then
//! consumed by [`render_with`]. No state is kept between calls.

use crate::comment::StructuredComment;
use serde::{Deserialize, Serialize};

/// Marker placed at the end of truncated cells
const ELLIPSIS: &str = "...";

/// Width taken by the importance column and the column separators
const FIXED_WIDTH: usize = 25;

/// Width bounds for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLimits {
    /// Width used even when every value is shorter
    pub min: usize,
    /// Width never exceeded; longer values are truncated
    pub max: usize,
}

impl ColumnLimits {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Width fitting the longest value within the bounds
    fn fit(&self, longest: usize) -> usize {
        longest.max(self.min).min(self.max)
    }
}

/// Width bounds for every column.
///
/// Bounds left out of a config section keep that column's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TableOverrides")]
pub struct TableLimits {
    pub user: ColumnLimits,
    pub date: ColumnLimits,
    pub text: ColumnLimits,
    pub file: ColumnLimits,
}

impl Default for TableLimits {
    fn default() -> Self {
        Self {
            user: ColumnLimits::new(4, 10),
            date: ColumnLimits::new(4, 10),
            text: ColumnLimits::new(7, 50),
            file: ColumnLimits::new(8, 15),
        }
    }
}

/// `[table]` section as written, any bound may be missing
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TableOverrides {
    user: LimitOverrides,
    date: LimitOverrides,
    text: LimitOverrides,
    file: LimitOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LimitOverrides {
    min: Option<usize>,
    max: Option<usize>,
}

impl LimitOverrides {
    fn over(self, defaults: ColumnLimits) -> ColumnLimits {
        ColumnLimits {
            min: self.min.unwrap_or(defaults.min),
            max: self.max.unwrap_or(defaults.max),
        }
    }
}

impl From<TableOverrides> for TableLimits {
    fn from(overrides: TableOverrides) -> Self {
        let defaults = TableLimits::default();
        Self {
            user: overrides.user.over(defaults.user),
            date: overrides.date.over(defaults.date),
            text: overrides.text.over(defaults.text),
            file: overrides.file.over(defaults.file),
        }
    }
}

/// Column widths for one rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub user: usize,
    pub date: usize,
    pub text: usize,
    pub file: usize,
}

impl ColumnWidths {
    /// Length of the dashed separator line
    pub fn full_length(&self) -> usize {
        FIXED_WIDTH + self.user + self.date + self.text + self.file
    }
}

/// Compute column widths for `records`
pub fn compute_column_widths(records: &[StructuredComment], limits: &TableLimits) -> ColumnWidths {
    ColumnWidths {
        user: limits.user.fit(longest(records, |r| r.user.as_str())),
        date: limits.date.fit(longest(records, |r| r.date.as_str())),
        text: limits.text.fit(longest(records, |r| r.text.as_str())),
        file: limits.file.fit(longest(records, |r| r.file.as_str())),
    }
}

fn longest(records: &[StructuredComment], field: impl Fn(&StructuredComment) -> &str) -> usize {
    records.iter().map(|r| char_len(field(r))).max().unwrap_or(0)
}

/// Render `records` with the default column limits
pub fn render(records: &[StructuredComment]) -> String {
    render_with(records, &TableLimits::default())
}

/// Render `records` as a table.
///
/// The header is always printed. Dashed separators enclose the body and are
/// left out when there are no records.
pub fn render_with(records: &[StructuredComment], limits: &TableLimits) -> String {
    let widths = compute_column_widths(records, limits);

    let mut table = format_row("!", "user", "date", "comment", "fileName", &widths);
    if records.is_empty() {
        return table;
    }

    let separator = format!("{}\n", "-".repeat(widths.full_length()));
    table.push_str(&separator);
    for record in records {
        let mark = if record.is_important() { "!" } else { " " };
        table.push_str(&format_row(
            mark,
            &record.user,
            &record.date,
            &record.text,
            &record.file,
            &widths,
        ));
    }
    table.push_str(&separator);

    table
}

fn format_row(mark: &str, user: &str, date: &str, text: &str, file: &str, widths: &ColumnWidths) -> String {
    format!(
        "  {}  |  {}  |  {}  |  {}  |  {}  \n",
        mark,
        fit_cell(user, widths.user),
        fit_cell(date, widths.date),
        fit_cell(text, widths.text),
        fit_cell(file, widths.file),
    )
}

/// Pad `value` to `width`, or cut it and append an ellipsis
fn fit_cell(value: &str, width: usize) -> String {
    let len = char_len(value);
    if len <= width {
        format!("{}{}", value, " ".repeat(width - len))
    } else {
        let kept: String = value.chars().take(width.saturating_sub(ELLIPSIS.len())).collect();
        format!("{}{}", kept, ELLIPSIS)
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::model::count_importance;
    use pretty_assertions::assert_eq;

    fn comment(user: &str, date: &str, text: &str, file: &str) -> StructuredComment {
        StructuredComment {
            id: 0,
            importance: count_importance(text),
            user: user.to_string(),
            date: date.to_string(),
            text: text.to_string(),
            file: file.to_string(),
        }
    }

    #[test]
    fn test_widths_use_minimums() {
        let widths = compute_column_widths(&[], &TableLimits::default());
        assert_eq!(
            widths,
            ColumnWidths {
                user: 4,
                date: 4,
                text: 7,
                file: 8
            }
        );
        assert_eq!(widths.full_length(), 48);
    }

    #[test]
    fn test_widths_grow_to_caps() {
        let records = vec![
            comment("romochka", "2019-01-01", "fix race!!", "main.js"),
            comment("a-very-long-user-name", "", &"x".repeat(80), "a_really_long_file_name.js"),
        ];
        let widths = compute_column_widths(&records, &TableLimits::default());
        assert_eq!(
            widths,
            ColumnWidths {
                user: 10,
                date: 10,
                text: 50,
                file: 15
            }
        );
    }

    #[test]
    fn test_fit_cell() {
        assert_eq!(fit_cell("ab", 4), "ab  ");
        assert_eq!(fit_cell("abcd", 4), "abcd");
        assert_eq!(fit_cell("abcdefghijk", 10), "abcdefg...");
        assert_eq!(fit_cell("привет мир!", 8), "приве...");
    }

    #[test]
    fn test_render_empty_prints_header_only() {
        let table = render(&[]);
        assert_eq!(table, "  !  |  user  |  date  |  comment  |  fileName  \n");
    }

    #[test]
    fn test_render_rows() {
        let records = vec![
            comment("bob", "2019", "fix!", "a.js"),
            comment("", "", "note", "b.js"),
        ];
        let table = render(&records);
        let lines: Vec<&str> = table.lines().collect();
        let separator = "-".repeat(48);

        assert_eq!(
            lines,
            vec![
                "  !  |  user  |  date  |  comment  |  fileName  ",
                separator.as_str(),
                "  !  |  bob   |  2019  |  fix!     |  a.js      ",
                "     |        |        |  note     |  b.js      ",
                separator.as_str(),
            ]
        );
    }

    #[test]
    fn test_render_truncates_long_text() {
        let records = vec![comment("", "", &"y".repeat(60), "a.js")];
        let table = render(&records);
        let expected = format!("{}...", "y".repeat(47));
        assert!(table.contains(&expected));
        assert!(!table.contains(&"y".repeat(48)));
    }

    #[test]
    fn test_custom_limits() {
        let limits = TableLimits {
            text: ColumnLimits::new(7, 10),
            ..TableLimits::default()
        };
        let records = vec![comment("", "", "abcdefghijklmnop", "a.js")];
        let table = render_with(&records, &limits);
        assert!(table.contains("|  abcdefg...  |"));
    }
}
