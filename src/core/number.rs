//! Conversions between display text and numbers.

/// Parse display text into a number.
///
/// Uses the longest leading numeric prefix (`[+-]digits[.digits]`), so
/// entry artifacts such as `"1.2.3"` read as `1.2` and `"5."` as `5`.
/// Text with no leading number, including the `Error` display, reads as NaN.
/// `Infinity` and `-Infinity` read back as the infinities [`stringify`]
/// produces.
///
/// # Example
///
/// ```rust
/// use keypad::core::parse;
///
/// assert_eq!(parse("42"), 42.0);
/// assert_eq!(parse("1.2.3"), 1.2);
/// assert!(parse("Error").is_nan());
/// ```
pub fn parse(text: &str) -> f64 {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first().copied() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            seen_digit = true;
        }
    }

    if !seen_digit {
        return f64::NAN;
    }

    rest[..end]
        .parse::<f64>()
        .map(|value| sign * value)
        .unwrap_or(f64::NAN)
}

/// Render a number as display text.
///
/// Finite values use the shortest decimal text that reads back as the same
/// `f64`, with no rounding applied (`0.1 + 0.2` shows as
/// `0.30000000000000004`). Integral values have no fractional part and
/// negative zero shows as `0`.
///
/// # Example
///
/// ```rust
/// use keypad::core::stringify;
///
/// assert_eq!(stringify(5.0), "5");
/// assert_eq!(stringify(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(stringify(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn stringify(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse("0"), 0.0);
        assert_eq!(parse("123"), 123.0);
        assert_eq!(parse("3.25"), 3.25);
        assert_eq!(parse("-7.5"), -7.5);
    }

    #[test]
    fn parses_entry_artifacts_leniently() {
        assert_eq!(parse("1.2.3"), 1.2);
        assert_eq!(parse("5."), 5.0);
        assert_eq!(parse(".5"), 0.5);
        assert_eq!(parse("12abc"), 12.0);
    }

    #[test]
    fn text_without_a_number_is_nan() {
        assert!(parse("Error").is_nan());
        assert!(parse(".").is_nan());
        assert!(parse("").is_nan());
        assert!(parse("-").is_nan());
        assert!(parse("NaN").is_nan());
    }

    #[test]
    fn parses_infinities() {
        assert_eq!(parse("Infinity"), f64::INFINITY);
        assert_eq!(parse("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn stringifies_without_rounding() {
        assert_eq!(stringify(20.0), "20");
        assert_eq!(stringify(-1.0), "-1");
        assert_eq!(stringify(1.5), "1.5");
        assert_eq!(stringify(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(stringify(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn stringifies_special_values() {
        assert_eq!(stringify(-0.0), "0");
        assert_eq!(stringify(f64::NAN), "NaN");
        assert_eq!(stringify(f64::INFINITY), "Infinity");
    }

    #[test]
    fn stringify_output_parses_back() {
        for value in [0.5, -12.75, 1e-7, 123456789.0, 0.1 + 0.2] {
            assert_eq!(parse(&stringify(value)), value);
        }
    }
}
