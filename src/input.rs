//! Lenient coercion of free-form numeric input.
//!
//! Malformed input never fails, it falls back to a default instead.

/// Parse the longest numeric prefix, ignoring leading whitespace.
///
/// `"50wh"` parses as `50`, `"abc"` does not parse at all.
#[must_use]
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let input = input.trim_start();
    let bytes = input.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if input[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let mut n_digits = count_digits(&bytes[end..]);
    end += n_digits;
    if bytes.get(end) == Some(&b'.') {
        let n_fraction_digits = count_digits(&bytes[end + 1..]);
        if n_digits != 0 || n_fraction_digits != 0 {
            end += 1 + n_fraction_digits;
        }
        n_digits += n_fraction_digits;
    }
    if n_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let n_exponent_digits = count_digits(&bytes[exponent_end..]);
        if n_exponent_digits != 0 {
            end = exponent_end + n_exponent_digits;
        }
    }

    input[..end].parse().ok()
}

/// Parsed value, or the default when nothing parses or the value is zero.
#[must_use]
pub fn coerce_or(input: &str, default: f64) -> f64 {
    parse_leading_float(input).filter(|value| *value != 0.0 && !value.is_nan()).unwrap_or(default)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_leading_float("100"), Some(100.0));
        assert_eq!(parse_leading_float("  3.7"), Some(3.7));
        assert_eq!(parse_leading_float("-5"), Some(-5.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_leading_float("50wh"), Some(50.0));
        assert_eq!(parse_leading_float("99.9 Wh"), Some(99.9));
        assert_eq!(parse_leading_float("1e3mAh"), Some(1000.0));
        assert_eq!(parse_leading_float("2e"), Some(2.0));
        assert_eq!(parse_leading_float("1.2.3"), Some(1.2));
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_leading_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("wh50"), None);
    }

    #[test]
    fn test_coerce_or() {
        assert_abs_diff_eq!(coerce_or("160", f64::INFINITY), 160.0);
        assert_abs_diff_eq!(coerce_or("", 0.0), 0.0);
        assert_eq!(coerce_or("abc", f64::INFINITY), f64::INFINITY);
        assert_eq!(coerce_or("0", f64::INFINITY), f64::INFINITY);
    }
}
