use crate::{
    ast::Function,
    error::ErrorKind,
    interpreter::value::core::{NumericKind, Value},
    util::num::{narrow, widen},
};

/// Combines two values with a function given by its symbol.
///
/// Symbols that do not name a function yield `Error(BadOperator)`, unless an
/// operand is already an error, which takes precedence. A conforming parse
/// never produces such a symbol, so this path only matters for callers that
/// build operators from other sources.
///
/// # Example
/// ```
/// use lithp::{
///     error::ErrorKind,
///     interpreter::{evaluator::binary::combine, value::core::Value},
/// };
///
/// assert_eq!(combine(Value::Integer(2), Value::Decimal(0.5), "+"), Value::Decimal(2.5));
/// assert_eq!(combine(Value::Integer(2), Value::Integer(3), "@"),
///            Value::Error(ErrorKind::BadOperator));
/// ```
#[must_use]
pub fn combine(left: Value, right: Value, symbol: &str) -> Value {
    match symbol.parse::<Function>() {
        Ok(function) => combine_with(function, left, right),
        Err(_) => match (left, right) {
            (Value::Error(_), _) => left,
            (_, Value::Error(_)) => right,
            _ => Value::Error(ErrorKind::BadOperator),
        },
    }
}

/// Combines two values with a function.
///
/// An error operand is returned unchanged, the left one first. Otherwise the
/// result is a decimal if either operand is, and an integer if both are. Both
/// operands are widened to `f64` for the arithmetic and the result is
/// narrowed back, truncating toward zero, when it is an integer.
///
/// `%` works on the truncated integer forms of both operands whatever the
/// result kind. Division and remainder by zero yield `Error(DivideByZero)`,
/// and so does raising zero to a negative power.
///
/// Widening is lossy: integers beyond `2^53` in magnitude are rounded before
/// the arithmetic, so `+ 9007199254740993 0` gives `9007199254740992`.
/// Integer results that overflow saturate at the `i64` bounds (see
/// [`narrow`]).
///
/// # Example
/// ```
/// use lithp::{
///     ast::Function,
///     error::ErrorKind,
///     interpreter::{evaluator::binary::combine_with, value::core::Value},
/// };
///
/// assert_eq!(combine_with(Function::Div, Value::Integer(7), Value::Integer(2)),
///            Value::Integer(3));
/// assert_eq!(combine_with(Function::Div, Value::Integer(7), Value::Decimal(2.0)),
///            Value::Decimal(3.5));
/// assert_eq!(combine_with(Function::Mod, Value::Decimal(7.9), Value::Integer(3)),
///            Value::Decimal(1.0));
/// assert_eq!(combine_with(Function::Div, Value::Integer(1), Value::Integer(0)),
///            Value::Error(ErrorKind::DivideByZero));
/// assert_eq!(combine_with(Function::Pow, Value::Integer(0), Value::Integer(-1)),
///            Value::Error(ErrorKind::DivideByZero));
/// ```
#[must_use]
pub fn combine_with(function: Function, left: Value, right: Value) -> Value {
    let (x, y, kind) = match (left.as_decimal(), right.as_decimal()) {
        (Err(kind), _) | (_, Err(kind)) => return Value::Error(kind),
        (Ok(x), Ok(y)) => (x, y, result_kind(&left, &right)),
    };

    match apply(function, x, y) {
        Ok(result) => match kind {
            NumericKind::Integer => Value::Integer(narrow(result)),
            NumericKind::Decimal => Value::Decimal(result),
        },
        Err(kind) => Value::Error(kind),
    }
}

/// Picks the numeric kind of a result from its two numeric operands.
fn result_kind(left: &Value, right: &Value) -> NumericKind {
    match (left.kind(), right.kind()) {
        (Some(NumericKind::Decimal), _) | (_, Some(NumericKind::Decimal)) => NumericKind::Decimal,
        _ => NumericKind::Integer,
    }
}

/// Applies a function to two widened operands.
fn apply(function: Function, x: f64, y: f64) -> Result<f64, ErrorKind> {
    match function {
        Function::Add => Ok(x + y),
        Function::Sub => Ok(x - y),
        Function::Mul => Ok(x * y),
        Function::Div => {
            if y == 0.0 {
                return Err(ErrorKind::DivideByZero);
            }
            Ok(x / y)
        },
        Function::Mod => {
            let (a, b) = (narrow(x), narrow(y));
            if b == 0 {
                return Err(ErrorKind::DivideByZero);
            }
            Ok(widen(a.wrapping_rem(b)))
        },
        Function::Pow => {
            if x == 0.0 && y < 0.0 {
                return Err(ErrorKind::DivideByZero);
            }
            Ok(x.powf(y))
        },
        Function::Min => Ok(if y < x { y } else { x }),
        Function::Max => Ok(if y > x { y } else { x }),
    }
}
