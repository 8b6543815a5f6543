//! Date helper functions

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Moment.js tokens, longest first so that `MMMM` wins over `MM`
const TOKENS: &[&str] = &[
    "YYYY", "MMMM", "dddd", "MMM", "ddd", "YY", "MM", "Do", "DD", "HH", "hh", "mm", "ss", "M",
    "D", "H", "h", "A",
];

/// Format a date using a Moment.js-compatible format string
///
/// Text inside `[...]` is emitted literally.
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD")    // -> "2024-01-15"
/// format_date(&date, "MMMM Do, YYYY") // -> "January 15th, 2024"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::with_capacity(format.len() + 8);
    let mut rest = format;

    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix('[') {
            let end = stripped.find(']').unwrap_or(stripped.len());
            out.push_str(&stripped[..end]);
            rest = stripped.get(end + 1..).unwrap_or("");
            continue;
        }

        match TOKENS.iter().find(|t| rest.starts_with(**t)) {
            Some(token) => {
                out.push_str(&format_token(date, token));
                rest = &rest[token.len()..];
            }
            None => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }
    }

    out
}

fn format_token<Tz: TimeZone>(date: &DateTime<Tz>, token: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match token {
        "YYYY" => date.format("%Y").to_string(),
        "YY" => date.format("%y").to_string(),
        "MMMM" => date.format("%B").to_string(),
        "MMM" => date.format("%b").to_string(),
        "MM" => date.format("%m").to_string(),
        "M" => date.month().to_string(),
        "Do" => ordinal(date.day()),
        "DD" => date.format("%d").to_string(),
        "D" => date.day().to_string(),
        "dddd" => date.format("%A").to_string(),
        "ddd" => date.format("%a").to_string(),
        "HH" => date.format("%H").to_string(),
        "H" => date.hour().to_string(),
        "hh" => date.format("%I").to_string(),
        "h" => date.hour12().1.to_string(),
        "mm" => date.format("%M").to_string(),
        "ss" => date.format("%S").to_string(),
        "A" => date.format("%p").to_string(),
        other => other.to_string(),
    }
}

/// English ordinal for a day of month (1st, 2nd, 3rd, 4th, 11th, ...)
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_format_date() {
        let date = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2024-01-15");
        assert_eq!(format_date(&date, "YYYY/MM/DD"), "2024/01/15");
        assert_eq!(format_date(&date, "HH:mm:ss"), "10:30:00");
    }

    #[test]
    fn test_long_format_with_ordinal() {
        let date = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date, "MMMM Do, YYYY"), "January 15th, 2024");
        let date = Local.with_ymd_and_hms(2020, 3, 2, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date, "MMM Do YY"), "Mar 2nd 20");
    }

    #[test]
    fn test_escaped_literal() {
        let date = Local.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date, "[Day] D"), "Day 5");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(31), "31st");
    }
}
