/// Widens an integer to the floating-point type used for arithmetic.
///
/// Integers beyond `2^53` in magnitude round to the nearest representable
/// value.
///
/// ## Example
/// ```
/// use lithp::util::num::widen;
///
/// assert_eq!(widen(-42), -42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn widen(value: i64) -> f64 {
    value as f64
}

/// Narrows a floating-point value to an integer, truncating toward zero.
///
/// Values beyond the `i64` range saturate at `i64::MIN` / `i64::MAX` and NaN
/// narrows to zero.
///
/// ## Example
/// ```
/// use lithp::util::num::narrow;
///
/// assert_eq!(narrow(2.9), 2);
/// assert_eq!(narrow(-2.9), -2);
/// assert_eq!(narrow(1e30), i64::MAX);
/// assert_eq!(narrow(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn narrow(value: f64) -> i64 {
    value.trunc() as i64
}

/// Parses integer literal text.
///
/// ## Returns
/// - `Some(i64)`: The value, if it fits.
/// - `None`: If the text is out of range or malformed.
///
/// ## Example
/// ```
/// use lithp::util::num::parse_integer;
///
/// assert_eq!(parse_integer("-17"), Some(-17));
/// assert_eq!(parse_integer("9223372036854775808"), None);
/// ```
#[must_use]
pub fn parse_integer(text: &str) -> Option<i64> {
    text.parse().ok()
}

/// Parses decimal literal text.
///
/// The standard parser saturates instead of failing, so overflow to infinity
/// and underflow of a non-zero literal to zero are both rejected here.
///
/// ## Returns
/// - `Some(f64)`: The value, if it is representable.
/// - `None`: If the text is out of range or malformed.
///
/// ## Example
/// ```
/// use lithp::util::num::parse_decimal;
///
/// assert_eq!(parse_decimal("-2.5"), Some(-2.5));
/// assert_eq!(parse_decimal("0.000"), Some(0.0));
///
/// let huge = format!("1{}.0", "0".repeat(400));
/// assert_eq!(parse_decimal(&huge), None);
///
/// let tiny = format!("0.{}1", "0".repeat(400));
/// assert_eq!(parse_decimal(&tiny), None);
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;

    if !value.is_finite() {
        return None;
    }
    if value == 0.0 && text.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        return None;
    }

    Some(value)
}
