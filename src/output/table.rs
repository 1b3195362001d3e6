//! Shared helpers for the fixed-width table views.

use chrono::{Datelike, NaiveDate};

/// Truncates a string to at most `max_len` characters, replacing the tail
/// with `...` when it does not fit. Counts characters, not bytes, so
/// multi-byte team names never get split mid-codepoint.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{head}...")
}

/// Renders a compact date range for the tournaments table.
///
/// Same month: `Jan 05-12 '26`. Spanning months: `Jan 28-Feb 02 '26`.
/// The year is always the start date's.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    let year = start.year() % 100;
    if start.month() == end.month() {
        format!(
            "{} {:02}-{:02} '{:02}",
            month_abbrev(start.month()),
            start.day(),
            end.day(),
            year
        )
    } else {
        format!(
            "{} {:02}-{} {:02} '{:02}",
            month_abbrev(start.month()),
            start.day(),
            month_abbrev(end.month()),
            end.day(),
            year
        )
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("NRG", 10), "NRG");
        assert_eq!(truncate("exactly-10", 10), "exactly-10");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        assert_eq!(truncate("a very long tournament name", 10), "a very ...");
        assert_eq!(truncate("a very ...", 10).chars().count(), 10);
    }

    #[test]
    fn test_truncate_is_char_safe() {
        let name = "Münchner Löwen Esports";
        let out = truncate(name, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_format_date_range_same_month() {
        assert_eq!(
            format_date_range(day("2026-01-05"), day("2026-01-12")),
            "Jan 05-12 '26"
        );
    }

    #[test]
    fn test_format_date_range_spanning_months() {
        assert_eq!(
            format_date_range(day("2026-01-28"), day("2026-02-02")),
            "Jan 28-Feb 02 '26"
        );
    }
}
