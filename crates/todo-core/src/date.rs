//! Date handling for marked comments
//!
//! Comment dates are free-form strings written by hand. They are normalized
//! into a canonical `yyyy`, `yyyy-mm` or `yyyy-mm-dd` string, which sorts
//! correctly under plain lexicographic comparison because every component is
//! zero-padded and the most significant one comes first.

/// Shape of a whitespace-free date string, as recognized by [`classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// `yyyy`, `yyyy-mm` or `yyyy-mm-dd` (range not checked)
    Canonical,
    /// `dd-mm-yyyy`
    DayMonthYear,
    /// `mm-yyyy`
    MonthYear,
    /// Anything else
    Unrecognized,
}

/// Classify a date string that has already had its whitespace removed
pub fn classify(compact: &str) -> DateShape {
    let parts: Vec<&str> = compact.split('-').collect();
    match parts.as_slice() {
        [day, month, year] if is_digits(day, 2) && is_digits(month, 2) && is_digits(year, 4) => {
            DateShape::DayMonthYear
        }
        [month, year] if is_digits(month, 2) && is_digits(year, 4) => DateShape::MonthYear,
        [year, rest @ ..] if is_digits(year, 4) && rest.len() <= 2 && rest.iter().all(|p| is_digits(p, 2)) => {
            DateShape::Canonical
        }
        _ => DateShape::Unrecognized,
    }
}

/// Strip whitespace and rewrite day-first or month-first dates to year-first.
///
/// Strings of any other shape are returned without their whitespace and are
/// left for [`validate`] to reject.
pub fn normalize(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    match classify(&compact) {
        DateShape::DayMonthYear => {
            let parts: Vec<&str> = compact.split('-').collect();
            format!("{}-{}-{}", parts[2], parts[1], parts[0])
        }
        DateShape::MonthYear => {
            let parts: Vec<&str> = compact.split('-').collect();
            format!("{}-{}", parts[1], parts[0])
        }
        DateShape::Canonical | DateShape::Unrecognized => compact,
    }
}

/// Check that a normalized date is canonical and in range.
///
/// Year must be 1000-9999, month 01-12 and day 01-31. The day bound is the
/// same for every month, leap years included.
pub fn validate(normalized: &str) -> bool {
    let parts: Vec<&str> = normalized.split('-').collect();
    if parts.is_empty() || parts.len() > 3 {
        return false;
    }

    let year = parts[0];
    if !is_digits(year, 4) || year.starts_with('0') {
        return false;
    }

    if let Some(month) = parts.get(1) {
        if !in_range(month, 1, 12) {
            return false;
        }
    }

    if let Some(day) = parts.get(2) {
        if !in_range(day, 1, 31) {
            return false;
        }
    }

    true
}

/// Normalize then validate. Returns the canonical date, or an empty string
/// when the input is absent or invalid.
pub fn handle(raw: &str) -> String {
    let normalized = normalize(raw);
    if validate(&normalized) {
        normalized
    } else {
        String::new()
    }
}

/// Pad a canonical date to full `yyyy-mm-dd`, defaulting month and day to `01`.
///
/// Only used for comparisons; the empty string maps to itself.
pub fn extend(date: &str) -> String {
    match date.split('-').count() {
        _ if date.is_empty() => String::new(),
        1 => format!("{}-01-01", date),
        2 => format!("{}-01", date),
        _ => date.to_string(),
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn in_range(s: &str, min: u32, max: u32) -> bool {
    is_digits(s, 2)
        && s.parse::<u32>()
            .map(|n| (min..=max).contains(&n))
            .unwrap_or(false)
}
