//! Lenient integer parsing for command arguments.

/// Parse the leading integer of `token`, the way the console has always
/// coerced numeric arguments.
///
/// An optional `+`/`-` sign is followed by as many ASCII digits as are
/// present; parsing stops at the first other character. A token without
/// leading digits parses as `0`. Values saturate at the `i64` bounds.
#[must_use]
pub fn parse_leading_int(token: &str) -> i64 {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_plain_integer() {
        assert_eq!(parse_leading_int("42"), 42);
    }

    #[test]
    fn should_parse_negative_integer() {
        assert_eq!(parse_leading_int("-248"), -248);
    }

    #[test]
    fn should_accept_explicit_plus_sign() {
        assert_eq!(parse_leading_int("+7"), 7);
    }

    #[test]
    fn should_stop_at_first_non_digit() {
        assert_eq!(parse_leading_int("12abc"), 12);
    }

    #[test]
    fn should_return_zero_when_no_leading_digits() {
        assert_eq!(parse_leading_int("monday"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("-"), 0);
    }

    #[test]
    fn should_saturate_on_overflow() {
        assert_eq!(parse_leading_int("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_leading_int("-99999999999999999999999"), i64::MIN);
    }
}
