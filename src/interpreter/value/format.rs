/// Number of significant digits used when no precision is requested.
pub const DEFAULT_PRECISION: usize = 6;

/// Formats a decimal in general notation with `precision` significant digits.
///
/// Scientific notation is used when the decimal exponent is below `-4` or at
/// least `precision`; fixed notation otherwise. Trailing zeros and a trailing
/// decimal point are removed. A precision of zero is treated as one.
///
/// # Example
/// ```
/// use lithp::interpreter::value::format::format_general;
///
/// assert_eq!(format_general(3.5, 6), "3.5");
/// assert_eq!(format_general(-2.0, 6), "-2");
/// assert_eq!(format_general(1e10, 6), "1e+10");
/// assert_eq!(format_general(0.0001, 6), "0.0001");
/// assert_eq!(format_general(0.00001, 6), "1e-05");
/// assert_eq!(format_general(123456.7, 6), "123457");
/// assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
/// assert_eq!(format_general(1.0 / 3.0, 10), "0.3333333333");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }
    if value == 0.0 {
        let text = if value.is_sign_negative() { "-0" } else { "0" };
        return text.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let limit = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing follows it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
