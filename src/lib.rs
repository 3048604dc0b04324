//! # lithp
//!
//! lithp is an interactive calculator for fully-parenthesized prefix
//! arithmetic. Each line is a function symbol (`+ - * / % ^ min max`) applied
//! to one or more operands, where an operand is a number or another
//! parenthesized application:
//!
//! ```text
//! lithp> * (+ 1 2) (max 3 4.5)
//! 13.5
//! ```
//!
//! Integers and decimals mix freely; evaluation failures such as division by
//! zero are ordinary values that pass through enclosing applications.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of a parsed line.
///
/// This module declares the `Expr` enum for literals and applications and the
/// closed set of `Function` symbols. Nodes record their source column for
/// error reporting.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines `ParseError` for input that does not match the grammar.
/// - Defines `ErrorKind` for failures carried inside evaluated values.
pub mod error;
/// Orchestrates lexing, parsing, and evaluation.
///
/// This module ties together the lexer, parser, evaluator, and value
/// representation.
pub mod interpreter;
/// Numeric conversion and literal parsing helpers.
pub mod util;

pub use crate::{
    error::{ErrorKind, ParseError},
    interpreter::{
        evaluator::{binary::combine, core::evaluate},
        parser::core::parse,
        value::core::Value,
    },
};

/// Parses and evaluates one line.
///
/// # Errors
/// Returns a `ParseError` if the line does not match the grammar. Evaluation
/// itself cannot fail; evaluation errors come back as `Value::Error`.
///
/// # Examples
/// ```
/// use lithp::{ErrorKind, Value, get_result};
///
/// assert_eq!(get_result("max 3 7 2").unwrap(), Value::Integer(7));
/// assert_eq!(get_result("/ 5 0").unwrap(), Value::Error(ErrorKind::DivideByZero));
///
/// // Every line must start with a function.
/// assert!(get_result("5").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, ParseError> {
    let expr = parse(source)?;
    Ok(evaluate(&expr))
}

/// Points a caret at the column of a syntax error.
///
/// The result is the source line, a line with `^` under the offending
/// column, and the error description.
///
/// # Examples
/// ```
/// use lithp::{caret_diagnostic, parse};
///
/// let error = parse("+ 1 (2 3)").unwrap_err();
/// let text = caret_diagnostic("+ 1 (2 3)", &error);
/// let lines: Vec<_> = text.lines().collect();
///
/// assert_eq!(lines[0], "+ 1 (2 3)");
/// assert_eq!(lines[1], "     ^");
/// assert!(lines[2].starts_with("Error at column 6:"));
/// ```
#[must_use]
pub fn caret_diagnostic(source: &str, error: &ParseError) -> String {
    let indent = " ".repeat(error.column().saturating_sub(1));
    format!("{source}\n{indent}^\n{error}")
}

/// Parses, evaluates, and formats one line for display.
///
/// Decimals are printed with `precision` significant digits.
///
/// # Errors
/// Returns the caret diagnostic from [`caret_diagnostic`] if the line does
/// not match the grammar.
///
/// # Examples
/// ```
/// use lithp::render_line;
///
/// assert_eq!(render_line("/ 1.0 3", 3), Ok("0.333".to_string()));
/// assert_eq!(render_line("% 1 0", 6), Ok("Error: division by zero".to_string()));
/// assert!(render_line("5 x", 6).is_err());
/// ```
pub fn render_line(source: &str, precision: usize) -> Result<String, String> {
    get_result(source).map(|value| format!("{value:.precision$}"))
                      .map_err(|error| caret_diagnostic(source, &error))
}
