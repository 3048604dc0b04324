/// Syntax errors.
///
/// Defines all error types that can occur while lexing and parsing a line of
/// input. A syntax error means the line does not match the grammar; no tree is
/// produced and nothing is evaluated.
pub mod parse_error;
/// Evaluation error kinds.
///
/// Evaluation never fails outright. Numeric and operator failures are carried
/// as ordinary values (`Value::Error`) whose kind is defined here.
pub mod eval_error;

pub use eval_error::ErrorKind;
pub use parse_error::ParseError;
