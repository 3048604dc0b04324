use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Lexemes, parser::utils::describe},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum depth of nested parentheses accepted in one line.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A cursor over the lexemes of one line.
///
/// Tokens are lexed on demand, so unrecognized text is only reported once the
/// grammar reaches it. The parser also remembers the column just past the end
/// of the input, so that errors at end of input still carry a position.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) tokens: Peekable<Lexemes<'a>>,
    pub(in crate::interpreter::parser) end:    usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over one line of text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let lexemes = Lexemes::new(source);
        let end = lexemes.end_column();
        Self { tokens: lexemes.peekable(),
               end }
    }

    /// Parses a full line.
    ///
    /// A line has no bare-expression form: it must itself be the application
    /// of a function symbol to one or more operands, and it must consume
    /// every token.
    ///
    /// Grammar: `line := function expr+`
    ///
    /// # Returns
    /// An `Expr::Application` node for the whole line.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the line is empty or lacks an operand.
    /// - `UnexpectedToken` if the line does not start with a function symbol.
    /// - `UnexpectedTrailingTokens` if a `)` or a function is left over.
    /// - Propagates any errors from operand parsing.
    pub fn parse_line(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_application_body(0)?;

        if let Some((lexeme, column)) = self.tokens.next() {
            return Err(ParseError::UnexpectedTrailingTokens { token: describe(&lexeme),
                                                              column });
        }

        Ok(expr)
    }
}

/// Parses one line of text into a tree.
///
/// This is the entry point for parsing: it lexes and parses the text as a
/// `line`.
///
/// # Errors
/// Returns a `ParseError` describing the expected construct and its column
/// at the first point where the text leaves the grammar. No partial tree is
/// returned.
///
/// # Example
/// ```
/// use lithp::{ast::{Expr, Function}, interpreter::parser::core::parse};
///
/// let expr = parse("+ 1 (* 2 3)").unwrap();
/// assert!(matches!(expr, Expr::Application { function: Function::Add, .. }));
/// assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
///
/// assert!(parse("5").is_err());
/// assert!(parse("").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let expr = Parser::new(source).parse_line()?;

    log::debug!("parsed {expr}");
    Ok(expr)
}
