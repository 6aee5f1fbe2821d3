//! CSS length helpers.

/// Parses the leading number of a CSS value, ignoring whatever unit
/// follows it.
///
/// Accepts optional leading whitespace, a sign, a decimal part and an
/// exponent. Returns `None` if the value does not start with a number.
///
/// # Examples
///
/// ```
/// use mmds_core::units::parse_leading_number;
///
/// assert_eq!(parse_leading_number("45em"), Some(45.0));
/// assert_eq!(parse_leading_number("0.25rem"), Some(0.25));
/// assert_eq!(parse_leading_number(".5rem"), Some(0.5));
/// assert_eq!(parse_leading_number("700"), Some(700.0));
/// assert_eq!(parse_leading_number("em"), None);
/// ```
pub fn parse_leading_number(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}
