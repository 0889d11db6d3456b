// ============================================================================
// Entry Parsing and Display Formatting
// Conversions between keypad text and f64 values
// ============================================================================

/// Text shown in place of a non-finite result.
pub const ERROR_TOKEN: &str = "Error";

/// Maximum number of characters a formatted value may occupy on the display.
pub const MAX_DISPLAY_LEN: usize = 14;

/// Fractional digits rendered for non-integer values (before trailing zeros are stripped).
pub const FRACTION_DIGITS: usize = 10;

/// Fractional digits of the mantissa when falling back to scientific notation.
pub const SCIENTIFIC_DIGITS: usize = 8;

/// Parse keypad text into a number.
///
/// - Empty (or whitespace-only) text is `0`
/// - Both `.` and `,` are accepted as the decimal separator
/// - Anything unparseable yields `NaN`, which later renders as [`ERROR_TOKEN`]
///
/// # Example
/// ```
/// use calculator_engine::numeric::parse_entry;
///
/// assert_eq!(parse_entry(""), 0.0);
/// assert_eq!(parse_entry("12,5"), 12.5);
/// assert!(parse_entry("abc").is_nan());
/// ```
pub fn parse_entry(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .replacen(',', ".", 1)
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

/// Render a number for the display.
///
/// Integers render as plain decimal text, other values with up to
/// [`FRACTION_DIGITS`] fractional digits and trailing zeros stripped.
/// Anything longer than [`MAX_DISPLAY_LEN`] switches to scientific notation,
/// and is cut to the display width if it still does not fit. The cut can leave
/// a mangled exponent; it is a display contract, not a numeric one.
pub fn format_number(num: f64) -> String {
    if !num.is_finite() {
        return ERROR_TOKEN.to_string();
    }

    let text = if num.fract() == 0.0 {
        format_integer(num)
    } else {
        format_fraction(num)
    };

    if text.len() <= MAX_DISPLAY_LEN {
        return text;
    }

    let mut scientific = to_exponential(num, SCIENTIFIC_DIGITS);
    scientific.truncate(MAX_DISPLAY_LEN);
    scientific
}

/// Whether the text is the error placeholder.
#[inline]
pub fn is_error_token(text: &str) -> bool {
    text == ERROR_TOKEN
}

fn format_integer(num: f64) -> String {
    // Also folds -0 into "0"
    if num == 0.0 {
        return "0".to_string();
    }
    format!("{}", num)
}

fn format_fraction(num: f64) -> String {
    let fixed = format!("{:.*}", FRACTION_DIGITS, num);
    let stripped = fixed.trim_end_matches('0').trim_end_matches('.');
    match stripped {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Scientific notation with an explicit exponent sign, e.g. `1.23456789e+14`.
fn to_exponential(num: f64, digits: usize) -> String {
    let raw = format!("{:.*e}", digits, num);
    match raw.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{}e{}", mantissa, exponent)
        },
        Some((mantissa, exponent)) => format!("{}e+{}", mantissa, exponent),
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry(""), 0.0);
        assert_eq!(parse_entry("   "), 0.0);
        assert_eq!(parse_entry("42"), 42.0);
        assert_eq!(parse_entry("-3"), -3.0);
        assert_eq!(parse_entry("12,5"), 12.5);
        assert_eq!(parse_entry("1."), 1.0);
        assert_eq!(parse_entry(".5"), 0.5);
        assert_eq!(parse_entry("1.23456789e+14"), 123_456_789_000_000.0);
    }

    #[test]
    fn test_parse_entry_invalid_is_nan() {
        assert!(parse_entry("abc").is_nan());
        assert!(parse_entry(ERROR_TOKEN).is_nan());
        assert!(parse_entry("-").is_nan());
        assert!(parse_entry("1.2.3").is_nan());
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-220.0), "-220");
        assert_eq!(format_number(12_345_678_901_234.0), "12345678901234");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666667");
        assert_eq!(format_number(1e-11), "0");
        assert_eq!(format_number(-1e-11), "0");
    }

    #[test]
    fn test_format_scientific_fallback() {
        assert_eq!(format_number(123_456_789_012_345.0), "1.23456789e+14");
        assert_eq!(format_number(1e21), "1.00000000e+21");
        assert_eq!(format_number(123_456.123_456_789), "1.23456123e+5");
    }

    #[test]
    fn test_format_truncates_to_display_width() {
        let text = format_number(-123_456_789_012_345.0);
        assert_eq!(text, "-1.23456789e+1");
        assert_eq!(text.len(), MAX_DISPLAY_LEN);
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY), ERROR_TOKEN);
        assert_eq!(format_number(f64::NEG_INFINITY), ERROR_TOKEN);
        assert_eq!(format_number(f64::NAN), ERROR_TOKEN);
        assert!(is_error_token(&format_number(1.0 / 0.0)));
    }

    proptest! {
        #[test]
        fn prop_integer_round_trip(n in -1_000_000_000_000i64..1_000_000_000_000i64) {
            let text = format_number(n as f64);
            prop_assert_eq!(format_number(parse_entry(&text)), text);
        }

        #[test]
        fn prop_decimal_round_trip(n in -999_999_999i64..999_999_999i64) {
            let text = format_number(n as f64 / 10_000.0);
            prop_assert_eq!(format_number(parse_entry(&text)), text);
        }

        #[test]
        fn prop_output_fits_display(x in any::<f64>()) {
            prop_assert!(format_number(x).len() <= MAX_DISPLAY_LEN);
        }
    }
}
