use crate::{
    error::ErrorKind,
    interpreter::value::core::Value,
    util::num::{parse_decimal, parse_integer},
};

/// Evaluates integer literal text.
///
/// # Returns
/// `Value::Integer`, or `Value::Error(BadIntegerLiteral)` if the text is out
/// of range.
///
/// # Example
/// ```
/// use lithp::{
///     error::ErrorKind,
///     interpreter::{evaluator::literal::eval_integer_literal, value::core::Value},
/// };
///
/// assert_eq!(eval_integer_literal("-9223372036854775808"), Value::Integer(i64::MIN));
/// assert_eq!(eval_integer_literal("9223372036854775808"),
///            Value::Error(ErrorKind::BadIntegerLiteral));
/// ```
#[must_use]
pub fn eval_integer_literal(text: &str) -> Value {
    parse_integer(text).map_or(Value::Error(ErrorKind::BadIntegerLiteral), Value::Integer)
}

/// Evaluates decimal literal text.
///
/// # Returns
/// `Value::Decimal`, or `Value::Error(BadDecimalLiteral)` if the text is out
/// of range.
#[must_use]
pub fn eval_decimal_literal(text: &str) -> Value {
    parse_decimal(text).map_or(Value::Error(ErrorKind::BadDecimalLiteral), Value::Decimal)
}
