// Utility functions shared across the engine and its callers.

// Dot-as-thousands / comma-as-decimal number handling ("1.234,56").
pub mod brazilian_format {
    use std::str::FromStr;
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    #[error("Failed to parse decimal '{input}'")]
    pub struct ParseFailure {
        pub input: String,
    }

    // Parses decimals like "1.234,56" or "123,45" into f64.
    // An empty (or all-whitespace) string is 0.0, not a failure: callers that
    // need "absent" to mean something else must check before parsing.
    pub fn parse_decimal(s: &str) -> Result<f64, ParseFailure> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }

        let normalized = trimmed
            .replace('.', "")  // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        match f64::from_str(&normalized) {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParseFailure { input: s.to_string() }),
        }
    }

    // Formats a value as "1.234,56": two decimals, '.' grouping, ',' decimal point.
    // The sign goes in front, as produced by the standard fixed-point formatter.
    pub fn format_currency(value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.2}", value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        if value.is_sign_negative() {
            out.push('-');
        }
        let len = int_part.len();
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push('.');
            }
            out.push(digit);
        }
        out.push(',');
        out.push_str(frac_part);
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_decimal_simple() {
            assert_eq!(parse_decimal("123,45").unwrap(), 123.45);
        }

        #[test]
        fn test_parse_decimal_with_thousands() {
            assert_eq!(parse_decimal("1.234,56").unwrap(), 1234.56);
        }

        #[test]
        fn test_parse_decimal_large_number() {
            assert_eq!(parse_decimal("600.822.115,84").unwrap(), 600822115.84);
        }

        #[test]
        fn test_parse_decimal_empty_is_zero() {
            assert_eq!(parse_decimal("").unwrap(), 0.0);
            assert_eq!(parse_decimal("   ").unwrap(), 0.0);
        }

        #[test]
        fn test_parse_decimal_trims_whitespace() {
            assert_eq!(parse_decimal("  6,00 ").unwrap(), 6.0);
        }

        #[test]
        fn test_parse_decimal_invalid() {
            let err = parse_decimal("abc").unwrap_err();
            assert_eq!(err.input, "abc");
            assert_eq!(err.to_string(), "Failed to parse decimal 'abc'");
            assert!(parse_decimal("12,34,56").is_err());
            assert!(parse_decimal("1.234,56 EUR").is_err());
        }

        #[test]
        fn test_parse_decimal_rejects_non_finite() {
            assert!(parse_decimal("inf").is_err());
            assert!(parse_decimal("NaN").is_err());
            assert!(parse_decimal("-infinity").is_err());
        }

        #[test]
        fn test_parse_decimal_negative() {
            assert_eq!(parse_decimal("-1.234,56").unwrap(), -1234.56);
        }

        #[test]
        fn test_format_currency_grouping() {
            assert_eq!(format_currency(0.0), "0,00");
            assert_eq!(format_currency(5.5), "5,50");
            assert_eq!(format_currency(123.0), "123,00");
            assert_eq!(format_currency(1234.56), "1.234,56");
            assert_eq!(format_currency(999999.999), "1.000.000,00");
            assert_eq!(format_currency(600822115.84), "600.822.115,84");
        }

        #[test]
        fn test_format_currency_negative_sign_leads() {
            assert_eq!(format_currency(-1234.56), "-1.234,56");
            assert_eq!(format_currency(-12.0), "-12,00");
            assert_eq!(format_currency(-123456.0), "-123.456,00");
        }

        #[test]
        fn test_format_currency_negative_zero_keeps_sign() {
            assert_eq!(format_currency(-0.0), "-0,00");
            assert_eq!(format_currency(-0.001), "-0,00");
        }

        #[test]
        fn test_format_currency_non_finite() {
            assert_eq!(format_currency(f64::INFINITY), "inf");
            assert_eq!(format_currency(f64::NAN), "NaN");
        }

        #[test]
        fn test_format_then_parse_round_trip() {
            let samples = [
                0.0, 0.01, 1.0, 12.345, 999.995, 1234.56, -1234.56, 10_000.0,
                3_000_000.129, 8_123_456_789.5, -0.4,
            ];
            for x in samples {
                let back = parse_decimal(&format_currency(x)).unwrap();
                assert!((back - x).abs() <= 0.005 + 1e-9, "{} came back as {}", x, back);
            }
        }
    }
}
