//! Numeric format strings
//!
//! Supports the .NET-style formats the host attaches to numeric columns:
//!
//! - standard formats: a letter plus optional precision (`N2`, `F0`, `P1`,
//!   `C2`, `D5`, `G`)
//! - named formats (`General Number`, `Standard`, `Fixed`, `Percent`,
//!   `Currency`)
//! - custom formats built from `0`, `#`, `.`, `,`, `%`, quoted literals and
//!   `\` escapes, with up to three `;`-separated sections for positive,
//!   negative and zero values

use super::{js_number, FormatError};

/// Format `value` with `format`.
pub fn format_number(value: f64, format: &str) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Ok(js_number(value));
    }

    if let Some(result) = format_named(value, format) {
        return result;
    }

    if is_standard_format(format) {
        return format_standard(value, format);
    }

    format_custom(value, format)
}

fn format_named(value: f64, format: &str) -> Option<Result<String, FormatError>> {
    let custom = match format {
        "General" | "General Number" => return Some(Ok(js_number(value))),
        "Standard" => "#,0.00",
        "Fixed" => "0.00",
        "Percent" => "0.00%",
        "Currency" => "$#,0.00;-$#,0.00",
        _ => return None,
    };
    Some(format_custom(value, custom))
}

/// A letter optionally followed by up to two digits
fn is_standard_format(format: &str) -> bool {
    let mut chars = format.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            let rest = chars.as_str();
            rest.len() <= 2 && rest.chars().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

fn format_standard(value: f64, format: &str) -> Result<String, FormatError> {
    let (letter, digits) = format.split_at(1);
    let precision: Option<usize> = digits.parse().ok();
    let decimals = |default: usize| {
        let p = precision.unwrap_or(default);
        if p == 0 {
            String::new()
        } else {
            format!(".{}", "0".repeat(p))
        }
    };

    match letter {
        "N" | "n" => format_custom(value, &format!("#,0{}", decimals(2))),
        "F" | "f" => format_custom(value, &format!("0{}", decimals(2))),
        "P" | "p" => format_custom(value, &format!("#,0{}%", decimals(2))),
        "C" | "c" => {
            let body = format!("#,0{}", decimals(2));
            format_custom(value, &format!("${};-${}", body, body))
        }
        "D" | "d" => {
            if value.fract() != 0.0 {
                return Err(FormatError::NotAnInteger);
            }
            format_custom(value, &"0".repeat(precision.unwrap_or(1).max(1)))
        }
        "G" | "g" => Ok(js_number(value)),
        _ => Err(FormatError::Unsupported(format.to_string())),
    }
}

/// One parsed section of a custom format
#[derive(Debug, Default, PartialEq)]
struct NumberPattern {
    prefix: String,
    suffix: String,
    min_int: usize,
    min_frac: usize,
    max_frac: usize,
    grouping: bool,
    /// Power of ten applied before rendering (+2 per `%`, -3 per scaling `,`)
    scale: i32,
    has_digits: bool,
}

impl NumberPattern {
    fn parse(section: &str) -> Result<Self, FormatError> {
        let mut pattern = NumberPattern::default();
        let mut in_fraction = false;
        let mut pending_commas = 0;
        let mut frac_placeholders = 0;
        let mut chars = section.chars();

        while let Some(c) = chars.next() {
            match c {
                '0' | '#' => {
                    pattern.has_digits = true;
                    if in_fraction {
                        frac_placeholders += 1;
                        if c == '0' {
                            pattern.min_frac = frac_placeholders;
                        }
                    } else {
                        if pending_commas > 0 {
                            pattern.grouping = true;
                            pending_commas = 0;
                        }
                        if c == '0' {
                            pattern.min_int += 1;
                        }
                    }
                }
                '.' => {
                    pattern.scale -= 3 * pending_commas;
                    pending_commas = 0;
                    in_fraction = true;
                }
                ',' => {
                    if pattern.has_digits && !in_fraction {
                        pending_commas += 1;
                    }
                }
                '%' => {
                    pattern.scale += 2;
                    pattern.push_literal("%");
                }
                '\u{2030}' => {
                    pattern.scale += 3;
                    pattern.push_literal("\u{2030}");
                }
                'E' | 'e' if pattern.has_digits => {
                    return Err(FormatError::Unsupported(section.to_string()));
                }
                '\'' | '"' => {
                    let mut literal = String::new();
                    loop {
                        match chars.next() {
                            Some(q) if q == c => break,
                            Some(other) => literal.push(other),
                            None => return Err(FormatError::UnterminatedLiteral(c)),
                        }
                    }
                    pattern.push_literal(&literal);
                }
                '\\' => match chars.next() {
                    Some(escaped) => pattern.push_literal(&escaped.to_string()),
                    None => return Err(FormatError::TrailingEscape),
                },
                other => pattern.push_literal(&other.to_string()),
            }
        }

        // Commas right before the end of the number scale by 1000 each
        pattern.scale -= 3 * pending_commas;
        pattern.max_frac = frac_placeholders;
        Ok(pattern)
    }

    fn push_literal(&mut self, literal: &str) {
        if self.has_digits {
            self.suffix.push_str(literal);
        } else {
            self.prefix.push_str(literal);
        }
    }

    fn scaled(&self, value: f64) -> f64 {
        value * 10f64.powi(self.scale)
    }

    /// Render the absolute value of `value`; the caller owns the sign.
    fn render(&self, value: f64) -> String {
        if !self.has_digits {
            return format!("{}{}", self.prefix, self.suffix);
        }

        let rounded = round_half_away(self.scaled(value).abs(), self.max_frac);
        let fixed = format!("{:.*}", self.max_frac, rounded);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i.to_string(), f.to_string()),
            None => (fixed.clone(), String::new()),
        };

        let mut frac = frac_part;
        while frac.len() > self.min_frac && frac.ends_with('0') {
            frac.pop();
        }

        let mut int = if int_part == "0" && self.min_int == 0 {
            String::new()
        } else {
            int_part
        };
        if int.len() < self.min_int {
            int = format!("{}{}", "0".repeat(self.min_int - int.len()), int);
        }
        if self.grouping {
            int = group_thousands(&int);
        }

        let mut out = String::with_capacity(self.prefix.len() + int.len() + frac.len() + self.suffix.len() + 1);
        out.push_str(&self.prefix);
        out.push_str(&int);
        if !frac.is_empty() {
            out.push('.');
            out.push_str(&frac);
        }
        out.push_str(&self.suffix);
        out
    }

    fn rounds_to_zero(&self, value: f64) -> bool {
        !self.has_digits || round_half_away(self.scaled(value).abs(), self.max_frac) == 0.0
    }
}

fn format_custom(value: f64, format: &str) -> Result<String, FormatError> {
    let sections = split_sections(format)?;
    let patterns = sections
        .iter()
        .map(|s| NumberPattern::parse(s))
        .collect::<Result<Vec<_>, _>>()?;

    let positive = &patterns[0];
    let negative = patterns.get(1).filter(|_| !sections[1].is_empty());
    let zero = patterns.get(2);

    let (pattern, explicit_sign) = if value < 0.0 {
        match negative {
            Some(p) => (p, true),
            None => (positive, false),
        }
    } else {
        (positive, false)
    };

    // A value that rounds to zero never takes the negative section
    if pattern.rounds_to_zero(value) {
        if let Some(zero) = zero {
            return Ok(zero.render(0.0));
        }
        return Ok(positive.render(0.0));
    }

    let body = pattern.render(value);
    if value < 0.0 && !explicit_sign {
        Ok(format!("-{}", body))
    } else {
        Ok(body)
    }
}

/// Split on `;` outside quotes and escapes
fn split_sections(format: &str) -> Result<Vec<String>, FormatError> {
    let mut sections = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => {
                quote = None;
                current.push(c);
            }
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                current.push(c);
            }
            (None, '\\') => {
                current.push(c);
                match chars.next() {
                    Some(escaped) => current.push(escaped),
                    None => return Err(FormatError::TrailingEscape),
                }
            }
            (None, ';') => sections.push(std::mem::take(&mut current)),
            (None, c) => current.push(c),
        }
    }

    if let Some(q) = quote {
        return Err(FormatError::UnterminatedLiteral(q));
    }

    sections.push(current);
    sections.truncate(3);
    Ok(sections)
}

fn round_half_away(value: f64, decimals: usize) -> f64 {
    if decimals > 15 {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let shifted = value * factor;
    if shifted.abs() >= 1e15 {
        return value;
    }
    shifted.round() / factor
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64, format: &str) -> String {
        format_number(value, format).unwrap()
    }

    #[test]
    fn test_grouped_integer() {
        assert_eq!(fmt(42.0, "#,0"), "42");
        assert_eq!(fmt(1234567.0, "#,0"), "1,234,567");
        assert_eq!(fmt(1234.6, "#,0"), "1,235");
        assert_eq!(fmt(-1234.0, "#,0"), "-1,234");
    }

    #[test]
    fn test_fixed_and_optional_decimals() {
        assert_eq!(fmt(3.14159, "0.00"), "3.14");
        assert_eq!(fmt(3.1, "0.0#"), "3.1");
        assert_eq!(fmt(3.146, "0.0#"), "3.15");
        assert_eq!(fmt(0.5, "#.##"), ".5");
        assert_eq!(fmt(2.5, "0"), "3");
    }

    #[test]
    fn test_min_integer_digits() {
        assert_eq!(fmt(7.0, "000"), "007");
        assert_eq!(fmt(1234.0, "00"), "1234");
    }

    #[test]
    fn test_percent() {
        assert_eq!(fmt(0.1234, "0.0%"), "12.3%");
        assert_eq!(fmt(0.5, "0 %"), "50 %");
    }

    #[test]
    fn test_scaling_commas() {
        assert_eq!(fmt(1_500_000.0, "#,0,,\"M\""), "2M");
        assert_eq!(fmt(12_345.0, "#,0,\"K\""), "12K");
        assert_eq!(fmt(12_345.0, "0,.0K"), "12.3K");
    }

    #[test]
    fn test_literals_and_escapes() {
        assert_eq!(fmt(5.0, "\\$#,0.00"), "$5.00");
        assert_eq!(fmt(5.0, "'USD '0"), "USD 5");
        assert_eq!(fmt(5.0, "0\" units\""), "5 units");
    }

    #[test]
    fn test_sections() {
        let format = "\\$#,0.00;(\\$#,0.00);\\$#,0.00";
        assert_eq!(fmt(1234.5, format), "$1,234.50");
        assert_eq!(fmt(-1234.5, format), "($1,234.50)");
        assert_eq!(fmt(0.0, format), "$0.00");

        assert_eq!(fmt(0.0, "0;-0;\"zero\""), "zero");
        assert_eq!(fmt(0.001, "0;-0;\"zero\""), "zero");
    }

    #[test]
    fn test_negative_rounding_to_zero_uses_first_section() {
        assert_eq!(fmt(-0.4, "0;(0)"), "0");
        assert_eq!(fmt(-0.004, "#,0.00;(#,0.00)"), "0.00");
        assert_eq!(fmt(-0.004, "0.00;(0.00);\"nil\""), "nil");
        assert_eq!(fmt(-0.6, "0;(0)"), "(1)");
    }

    #[test]
    fn test_empty_negative_section_uses_first_with_sign() {
        assert_eq!(fmt(-5.0, "0.0;;\"none\""), "-5.0");
    }

    #[test]
    fn test_standard_formats() {
        assert_eq!(fmt(1234.567, "N"), "1,234.57");
        assert_eq!(fmt(1234.567, "N0"), "1,235");
        assert_eq!(fmt(1234.567, "F1"), "1234.6");
        assert_eq!(fmt(0.256, "P0"), "26%");
        assert_eq!(fmt(-9.5, "C2"), "-$9.50");
        assert_eq!(fmt(42.0, "D4"), "0042");
        assert_eq!(fmt(1234.5, "G"), "1234.5");
    }

    #[test]
    fn test_standard_integer_format_rejects_fractions() {
        assert_eq!(format_number(1.5, "D"), Err(FormatError::NotAnInteger));
    }

    #[test]
    fn test_named_formats() {
        assert_eq!(fmt(1234.5, "Standard"), "1,234.50");
        assert_eq!(fmt(0.125, "Percent"), "12.50%");
        assert_eq!(fmt(2.0, "General Number"), "2");
    }

    #[test]
    fn test_errors() {
        assert_eq!(format_number(1.0, "0'x"), Err(FormatError::UnterminatedLiteral('\'')));
        assert_eq!(format_number(1.0, "0\\"), Err(FormatError::TrailingEscape));
        assert!(matches!(format_number(1.0, "0.00E+00"), Err(FormatError::Unsupported(_))));
        assert!(matches!(format_number(1.0, "X"), Err(FormatError::Unsupported(_))));
    }

    #[test]
    fn test_literal_only_format() {
        assert_eq!(fmt(9.0, "\"n/a\""), "n/a");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(fmt(f64::NAN, "#,0"), "NaN");
    }
}
