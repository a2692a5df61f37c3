use super::is_space;
use crate::Parsed;

/// Parses the longest base-10 integer prefix of `s`.
///
/// Leading whitespace and a single `+`/`-` sign are skipped. Parsing stops at
/// the first non-digit; if no digit was read the result is [`Parsed::NaN`].
/// Values outside the `i64` range saturate.
pub fn parse_int(s: &str) -> Parsed<i64> {
    let s = s.trim_start_matches(is_space);
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = count_digits(rest.as_bytes());
    if len == 0 {
        return Parsed::NaN;
    }

    let value = rest.as_bytes()[..len].iter().fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Parsed::Number(value)
}

/// Parses the longest decimal floating-point prefix of `s`.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, or the literal `Infinity`. Returns `f64::NAN` when no prefix
/// forms a number.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start_matches(is_space);
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    // The exponent only counts when at least one digit follows the marker.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_plain() {
        assert_eq!(parse_int("42"), Parsed::Number(42));
        assert_eq!(parse_int("-17"), Parsed::Number(-17));
        assert_eq!(parse_int("+8"), Parsed::Number(8));
    }

    #[test]
    fn test_int_stops_at_first_non_digit() {
        assert_eq!(parse_int("  12px"), Parsed::Number(12));
        assert_eq!(parse_int("3.99"), Parsed::Number(3));
        assert_eq!(parse_int("0x1A"), Parsed::Number(0));
        assert_eq!(parse_int("1e3"), Parsed::Number(1));
    }

    #[test]
    fn test_int_without_digits_is_nan() {
        assert!(parse_int("").is_nan());
        assert!(parse_int("   ").is_nan());
        assert!(parse_int("abc").is_nan());
        assert!(parse_int("-").is_nan());
        assert!(parse_int("+-1").is_nan());
        assert!(parse_int(" - 1").is_nan());
    }

    #[test]
    fn test_int_saturates() {
        assert_eq!(parse_int("99999999999999999999"), Parsed::Number(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999"), Parsed::Number(i64::MIN));
        assert_eq!(parse_int("-9223372036854775808"), Parsed::Number(i64::MIN));
    }

    #[test]
    fn test_float_plain() {
        assert_eq!(parse_float("3.25"), 3.25);
        assert_eq!(parse_float("-0.5"), -0.5);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("\n\t 2"), 2.0);
    }

    #[test]
    fn test_float_exponent() {
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2.5E-1"), 0.25);
        assert_eq!(parse_float("4e"), 4.0);
        assert_eq!(parse_float("4e+"), 4.0);
        assert_eq!(parse_float("1e400"), f64::INFINITY);
    }

    #[test]
    fn test_float_stops_at_invalid_char() {
        assert_eq!(parse_float("3.25abc"), 3.25);
        assert_eq!(parse_float("1.2.3"), 1.2);
        assert_eq!(parse_float("10,5"), 10.0);
    }

    #[test]
    fn test_float_infinity_is_case_sensitive() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityx"), f64::NEG_INFINITY);
        assert!(parse_float("infinity").is_nan());
        assert!(parse_float("inf").is_nan());
        assert!(parse_float("NaN").is_nan());
    }

    #[test]
    fn test_float_without_digits_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-.e5").is_nan());
        assert!(parse_float("e5").is_nan());
    }
}
