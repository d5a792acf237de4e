//! Date format strings
//!
//! Date columns reach the visual as ISO-8601 text. They are formatted with
//! .NET-style patterns (`yyyy-MM-dd`, `dddd, MMMM d`, `h:mm tt`) or the
//! standard single-letter date formats.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::FormatError;

/// Parse ISO-8601 date or date-time text. Offsets are dropped, keeping the
/// wall-clock time as written.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Expand standard and named date formats to their custom pattern
fn expand_standard(format: &str) -> Result<&str, FormatError> {
    let pattern = match format {
        "d" | "Short Date" => "M/d/yyyy",
        "D" | "Long Date" => "dddd, MMMM d, yyyy",
        "f" => "dddd, MMMM d, yyyy h:mm tt",
        "F" => "dddd, MMMM d, yyyy h:mm:ss tt",
        "g" => "M/d/yyyy h:mm tt",
        "G" | "General Date" => "M/d/yyyy h:mm:ss tt",
        "t" | "Short Time" => "h:mm tt",
        "T" | "Long Time" => "h:mm:ss tt",
        "M" | "m" => "MMMM d",
        "Y" | "y" => "MMMM yyyy",
        "s" => "yyyy-MM-dd'T'HH:mm:ss",
        "u" => "yyyy-MM-dd HH:mm:ss'Z'",
        other if other.chars().count() == 1 => {
            return Err(FormatError::Unsupported(other.to_string()));
        }
        other => other,
    };
    Ok(pattern)
}

/// Format `dt` with a standard or custom date format.
pub fn format_date(dt: &NaiveDateTime, format: &str) -> Result<String, FormatError> {
    let pattern = expand_standard(format)?;
    let mut out = String::new();
    let mut has_token = false;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            'y' | 'M' | 'd' | 'H' | 'h' | 'm' | 's' | 't' | 'f' | 'F' => {
                let mut run = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    run += 1;
                }
                has_token = true;
                out.push_str(&render_token(dt, c, run));
            }
            '\'' | '"' => loop {
                match chars.next() {
                    Some(q) if q == c => break,
                    Some(other) => out.push(other),
                    None => return Err(FormatError::UnterminatedLiteral(c)),
                }
            },
            '\\' => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => return Err(FormatError::TrailingEscape),
            },
            other => out.push(other),
        }
    }

    if !has_token {
        return Err(FormatError::NotADateFormat(format.to_string()));
    }
    Ok(out)
}

fn padded(value: u32, run: usize) -> String {
    if run >= 2 {
        format!("{:0width$}", value, width = run.min(2))
    } else {
        value.to_string()
    }
}

fn render_token(dt: &NaiveDateTime, token: char, run: usize) -> String {
    match token {
        'y' => {
            let year = dt.year();
            if run <= 2 {
                padded(year.rem_euclid(100) as u32, run)
            } else {
                format!("{:0width$}", year, width = run)
            }
        }
        'M' => match run {
            1 | 2 => padded(dt.month(), run),
            3 => dt.format("%b").to_string(),
            _ => dt.format("%B").to_string(),
        },
        'd' => match run {
            1 | 2 => padded(dt.day(), run),
            3 => dt.format("%a").to_string(),
            _ => dt.format("%A").to_string(),
        },
        'H' => padded(dt.hour(), run),
        'h' => padded(dt.hour12().1, run),
        'm' => padded(dt.minute(), run),
        's' => padded(dt.second(), run),
        't' => {
            let meridiem = if dt.hour12().0 { "PM" } else { "AM" };
            if run == 1 {
                meridiem[..1].to_string()
            } else {
                meridiem.to_string()
            }
        }
        'f' | 'F' => {
            let digits = format!("{:09}", dt.nanosecond() % 1_000_000_000);
            let fraction = &digits[..run.min(9)];
            if token == 'F' {
                fraction.trim_end_matches('0').to_string()
            } else {
                fraction.to_string()
            }
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_milli_opt(14, 5, 9, 250)
            .unwrap()
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(parse_date("2024-03-07"), NaiveDate::from_ymd_opt(2024, 3, 7).unwrap().and_hms_opt(0, 0, 0));
        assert_eq!(parse_date("2024-03-07T14:05:09.250"), Some(sample()));
        assert_eq!(parse_date("2024-03-07T14:05:09.250+02:00"), Some(sample()));
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("42"), None);
    }

    #[test]
    fn test_custom_patterns() {
        let dt = sample();
        assert_eq!(format_date(&dt, "yyyy-MM-dd").unwrap(), "2024-03-07");
        assert_eq!(format_date(&dt, "dd MMM yyyy HH:mm").unwrap(), "07 Mar 2024 14:05");
        assert_eq!(format_date(&dt, "dddd, MMMM d").unwrap(), "Thursday, March 7");
        assert_eq!(format_date(&dt, "h:mm:ss.fff tt").unwrap(), "2:05:09.250 PM");
        assert_eq!(format_date(&dt, "yy/M/d").unwrap(), "24/3/7");
    }

    #[test]
    fn test_standard_formats() {
        let dt = sample();
        assert_eq!(format_date(&dt, "d").unwrap(), "3/7/2024");
        assert_eq!(format_date(&dt, "D").unwrap(), "Thursday, March 7, 2024");
        assert_eq!(format_date(&dt, "t").unwrap(), "2:05 PM");
        assert_eq!(format_date(&dt, "s").unwrap(), "2024-03-07T14:05:09");
        assert_eq!(format_date(&dt, "Long Time").unwrap(), "2:05:09 PM");
    }

    #[test]
    fn test_quoted_literals() {
        let dt = sample();
        assert_eq!(format_date(&dt, "'Week of' MMM d").unwrap(), "Week of Mar 7");
    }

    #[test]
    fn test_non_date_formats_are_rejected() {
        let dt = sample();
        assert!(matches!(format_date(&dt, "#,0"), Err(FormatError::NotADateFormat(_))));
        assert!(matches!(format_date(&dt, "Q"), Err(FormatError::Unsupported(_))));
    }
}
