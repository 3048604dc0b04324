use crate::{ast::Function, interpreter::value::core::Value};

/// Evaluates an application that has exactly one operand.
///
/// Only `-` has a single-operand meaning: it negates the operand and keeps
/// its numeric kind. Every other function returns the operand unchanged.
/// Errors pass through either way.
///
/// # Example
/// ```
/// use lithp::{
///     ast::Function,
///     interpreter::{evaluator::unary::eval_single, value::core::Value},
/// };
///
/// assert_eq!(eval_single(Function::Sub, Value::Integer(5)), Value::Integer(-5));
/// assert_eq!(eval_single(Function::Sub, Value::Decimal(5.5)), Value::Decimal(-5.5));
/// assert_eq!(eval_single(Function::Max, Value::Integer(5)), Value::Integer(5));
/// ```
#[must_use]
pub fn eval_single(function: Function, value: Value) -> Value {
    match function {
        Function::Sub => negate(value),
        Function::Add
        | Function::Mul
        | Function::Div
        | Function::Mod
        | Function::Pow
        | Function::Min
        | Function::Max => value,
    }
}

/// Negates a value, preserving its numeric kind.
///
/// Negating `i64::MIN` saturates at `i64::MAX`.
#[must_use]
pub fn negate(value: Value) -> Value {
    match value {
        Value::Integer(n) => Value::Integer(n.saturating_neg()),
        Value::Decimal(d) => Value::Decimal(-d),
        Value::Error(_) => value,
    }
}
