//! Integer and float literal parsing.
//!
//! Integers use base auto-detection from the literal prefix: `0x` is hex,
//! `0o` or a bare leading `0` is octal, `0b` is binary, anything else decimal.
//! Underscores are accepted only between digits (or right after a prefix).
//! Partially valid literals such as `12abc` are rejected wholesale.

/// Parse an unsigned literal. Signs are rejected.
pub(crate) fn parse_uint(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }
    if s.contains('_') && !underscore_ok(s) {
        return None;
    }

    let (radix, body) = split_radix(s);
    let digits: String = body.chars().filter(|c| *c != '_').collect();

    // A lone "0" is the octal prefix with nothing after it.
    if digits.is_empty() {
        return (radix == 8 && body.len() == s.len() - 1).then_some(0);
    }
    // `from_str_radix` tolerates a leading '+'; a literal must not.
    if !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    u64::from_str_radix(&digits, radix).ok()
}

/// Parse a signed literal with an optional leading `+` or `-`.
pub(crate) fn parse_int(s: &str) -> Option<i64> {
    let (negative, magnitude) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = parse_uint(magnitude)?;

    if negative {
        (magnitude <= 1 << 63).then(|| (magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Parse a decimal or scientific float literal.
///
/// Overflow to infinity is a failure unless the literal spells out an
/// infinity itself.
pub(crate) fn parse_float(s: &str) -> Option<f64> {
    let v: f64 = s.parse().ok()?;
    if v.is_infinite() && !s.to_ascii_lowercase().contains("inf") {
        return None;
    }
    Some(v)
}

fn split_radix(s: &str) -> (u32, &str) {
    let bytes = s.as_bytes();
    if bytes[0] != b'0' {
        return (10, s);
    }
    if bytes.len() >= 3 {
        match bytes[1].to_ascii_lowercase() {
            b'b' => return (2, &s[2..]),
            b'o' => return (8, &s[2..]),
            b'x' => return (16, &s[2..]),
            _ => {}
        }
    }
    (8, &s[1..])
}

/// Underscores must sit between digits, or between a base prefix and a digit.
fn underscore_ok(s: &str) -> bool {
    #[derive(PartialEq)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let bytes = s.as_bytes();
    let mut saw = Saw::Start;
    let mut i = 0;
    let mut hex = false;

    if bytes.len() >= 2 && bytes[0] == b'0' && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        i = 2;
        saw = Saw::Digit;
        hex = bytes[1].to_ascii_lowercase() == b'x';
    }

    for &b in &bytes[i..] {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            saw = Saw::Digit;
            continue;
        }
        if b == b'_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
            continue;
        }
        if saw == Saw::Underscore {
            return false;
        }
        saw = Saw::Other;
    }

    saw != Saw::Underscore
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Some(0))]
    #[case("42", Some(42))]
    #[case("-42", Some(-42))]
    #[case("+7", Some(7))]
    #[case("0x1A", Some(26))]
    #[case("0X1a", Some(26))]
    #[case("-0x10", Some(-16))]
    #[case("0o17", Some(15))]
    #[case("017", Some(15))]
    #[case("0b101", Some(5))]
    #[case("1_000", Some(1000))]
    #[case("0x_ff", Some(255))]
    #[case("-9223372036854775808", Some(i64::MIN))]
    #[case("9223372036854775807", Some(i64::MAX))]
    #[case("9223372036854775808", None)]
    #[case("", None)]
    #[case("-", None)]
    #[case("12abc", None)]
    #[case("08", None)]
    #[case("0x", None)]
    #[case("0x+1", None)]
    #[case("1__0", None)]
    #[case("_1", None)]
    #[case("1_", None)]
    #[case(" 1", None)]
    #[case("1.5", None)]
    fn signed_literals(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_int(input), expected);
    }

    #[rstest]
    #[case("18446744073709551615", Some(u64::MAX))]
    #[case("0xffffffffffffffff", Some(u64::MAX))]
    #[case("18446744073709551616", None)]
    #[case("-1", None)]
    #[case("+1", None)]
    fn unsigned_literals(#[case] input: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_uint(input), expected);
    }

    #[rstest]
    #[case("1.5", Some(1.5))]
    #[case("-2e3", Some(-2000.0))]
    #[case(".25", Some(0.25))]
    #[case("+Inf", Some(f64::INFINITY))]
    #[case("-infinity", Some(f64::NEG_INFINITY))]
    #[case("1e400", None)]
    #[case("1_0.0", None)]
    #[case("12abc", None)]
    #[case("", None)]
    fn float_literals(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_float(input), expected);
    }

    #[test]
    fn nan_literal_parses() {
        assert!(parse_float("NaN").is_some_and(f64::is_nan));
    }
}
