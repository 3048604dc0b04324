/// Core parsing logic and the line-level entry point.
///
/// Holds the token cursor, the `ParseResult` alias, and the rule that a line
/// is a function symbol followed by one or more operands spanning the whole
/// input.
pub mod core;

/// Application and operand parsing.
///
/// Implements the recursive `expr := number | '(' function expr+ ')'` rule,
/// including the nesting limit.
pub mod application;

/// Utility functions for the parser.
///
/// Provides helpers for turning tokens into function symbols and literal
/// nodes.
pub mod utils;
