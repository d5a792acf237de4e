//! Value formatting
//!
//! A Rust rendition of the host's shared value formatter: cell values are
//! turned into display strings keyed by the column's format string. Numbers
//! take .NET-style custom or standard numeric formats, ISO-8601 text takes
//! date formats, and anything the formatter can't make sense of falls back
//! to the default stringification instead of failing.

pub mod numeric;
#[cfg(feature = "chrono")]
pub mod date;

use thiserror::Error;

use crate::models::PrimitiveValue;

/// Text shown for null/missing values
pub const BLANK: &str = "(Blank)";

/// Why a format string couldn't be applied. Never leaves this module:
/// callers get the default stringification instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unterminated {0} literal")]
    UnterminatedLiteral(char),

    #[error("format ends with an escape character")]
    TrailingEscape,

    #[error("unsupported format: {0}")]
    Unsupported(String),

    #[error("value is not an integer")]
    NotAnInteger,

    #[error("not a date format: {0}")]
    NotADateFormat(String),
}

/// Format a cell value with an optional format string.
pub fn format_value(value: &PrimitiveValue, format: Option<&str>) -> String {
    let format = format.map(str::trim).filter(|f| !f.is_empty());

    match value {
        PrimitiveValue::Null => BLANK.to_string(),
        PrimitiveValue::Bool(true) => "True".to_string(),
        PrimitiveValue::Bool(false) => "False".to_string(),
        PrimitiveValue::Number(n) => match format {
            Some(f) => numeric::format_number(*n, f).unwrap_or_else(|e| {
                log::debug!("Falling back to default number formatting for {:?}: {}", f, e);
                js_number(*n)
            }),
            None => js_number(*n),
        },
        PrimitiveValue::Text(text) => match format {
            Some(f) => format_text(text, f),
            None => text.clone(),
        },
    }
}

#[cfg(feature = "chrono")]
fn format_text(text: &str, format: &str) -> String {
    match date::parse_date(text) {
        Some(dt) => date::format_date(&dt, format).unwrap_or_else(|e| {
            log::debug!("Leaving date text unformatted for {:?}: {}", format, e);
            text.to_string()
        }),
        None => text.to_string(),
    }
}

#[cfg(not(feature = "chrono"))]
fn format_text(text: &str, _format: &str) -> String {
    text.to_string()
}

/// Stringify a number the way JavaScript does (`40`, `0.5`, `1e+21`, `NaN`).
///
/// Layout values in the view model are interpolated into strings by the
/// host, so they have to match its number printing exactly.
pub fn js_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }

    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_number_integers_have_no_fraction() {
        assert_eq!(js_number(40.0), "40");
        assert_eq!(js_number(-3.0), "-3");
    }

    #[test]
    fn test_js_number_fractions() {
        assert_eq!(js_number(0.5), "0.5");
        assert_eq!(js_number(33.333333333333336), "33.333333333333336");
    }

    #[test]
    fn test_js_number_special_values() {
        assert_eq!(js_number(f64::NAN), "NaN");
        assert_eq!(js_number(f64::INFINITY), "Infinity");
        assert_eq!(js_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(js_number(-0.0), "0");
    }

    #[test]
    fn test_js_number_exponent_forms() {
        assert_eq!(js_number(1e21), "1e+21");
        assert_eq!(js_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_format_null_and_bool() {
        assert_eq!(format_value(&PrimitiveValue::Null, Some("#,0")), "(Blank)");
        assert_eq!(format_value(&PrimitiveValue::Bool(true), None), "True");
        assert_eq!(format_value(&PrimitiveValue::Bool(false), None), "False");
    }

    #[test]
    fn test_format_number_with_and_without_format() {
        assert_eq!(format_value(&PrimitiveValue::Number(42.0), Some("#,0")), "42");
        assert_eq!(format_value(&PrimitiveValue::Number(1234.5), None), "1234.5");
        assert_eq!(format_value(&PrimitiveValue::Number(1234.5), Some("  ")), "1234.5");
    }

    #[test]
    fn test_unusable_format_falls_back() {
        assert_eq!(format_value(&PrimitiveValue::Number(12.5), Some("0'abc")), "12.5");
        assert_eq!(format_value(&PrimitiveValue::Number(12.5), Some("X")), "12.5");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_date_text_takes_date_format() {
        let date = PrimitiveValue::Text("2024-03-07".into());
        assert_eq!(format_value(&date, Some("yyyy-MM-dd")), "2024-03-07");
        assert_eq!(format_value(&date, Some("d")), "3/7/2024");

        let timestamp = PrimitiveValue::Text("2024-03-07T14:05:09.250Z".into());
        assert_eq!(format_value(&timestamp, Some("dd MMM yyyy HH:mm")), "07 Mar 2024 14:05");
        // Numeric formats don't apply to dates
        assert_eq!(format_value(&date, Some("#,0")), "2024-03-07");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let value = PrimitiveValue::Text("North".into());
        assert_eq!(format_value(&value, Some("#,0")), "North");
        assert_eq!(format_value(&value, None), "North");
    }
}
