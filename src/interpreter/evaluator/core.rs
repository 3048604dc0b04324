use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            binary::combine_with,
            literal::{eval_decimal_literal, eval_integer_literal},
            unary::eval_single,
        },
        value::core::Value,
    },
};

/// Evaluates a tree and returns the resulting value.
///
/// This is the main entry point for evaluation. It never fails: numeric and
/// operator failures come back as `Value::Error`.
///
/// An application with one operand follows the single-operand rule (see
/// [`eval_single`]). With two or more operands, every operand is evaluated
/// exactly once, in source order, and combined into a running accumulator.
/// Operands after an error are still evaluated; their values are discarded
/// because the error passes through [`combine_with`] unchanged.
///
/// # Example
/// ```
/// use lithp::{
///     error::ErrorKind,
///     interpreter::{evaluator::core::evaluate, parser::core::parse, value::core::Value},
/// };
///
/// let expr = parse("- 10 1 2 3").unwrap();
/// assert_eq!(evaluate(&expr), Value::Integer(4));
///
/// let expr = parse("+ (/ 1 0) 3").unwrap();
/// assert_eq!(evaluate(&expr), Value::Error(ErrorKind::DivideByZero));
/// ```
#[must_use]
pub fn evaluate(expr: &Expr) -> Value {
    match expr {
        Expr::IntegerLiteral { text, .. } => eval_integer_literal(text),
        Expr::DecimalLiteral { text, .. } => eval_decimal_literal(text),
        Expr::Application { function,
                            first,
                            rest,
                            column, } => {
            let first = evaluate(first);
            let result = if rest.is_empty() {
                eval_single(*function, first)
            } else {
                rest.iter()
                    .fold(first, |acc, operand| combine_with(*function, acc, evaluate(operand)))
            };

            log::trace!("({function} ...) at column {column} = {result:?}");
            result
        },
    }
}
