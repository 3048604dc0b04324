use logos::Logos;

use crate::ast::Function;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Numeric literals keep their text; conversion is left to the evaluator.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Decimal literal tokens, such as `3.14` or `-0.5`.
    #[regex(r"-?[0-9]+\.[0-9]+", |lex| lex.slice().to_string())]
    Decimal(String),
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `min`
    #[token("min")]
    Min,
    /// `max`
    #[token("max")]
    Max,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns the function symbol this token stands for, if any.
    #[must_use]
    pub const fn as_function(&self) -> Option<Function> {
        match self {
            Self::Plus => Some(Function::Add),
            Self::Minus => Some(Function::Sub),
            Self::Star => Some(Function::Mul),
            Self::Slash => Some(Function::Div),
            Self::Percent => Some(Function::Mod),
            Self::Caret => Some(Function::Pow),
            Self::Min => Some(Function::Min),
            Self::Max => Some(Function::Max),
            Self::Decimal(_) | Self::Integer(_) | Self::LParen | Self::RParen => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decimal(text) | Self::Integer(text) => f.write_str(text),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            other => match other.as_function() {
                Some(function) => f.write_str(function.symbol()),
                None => Ok(()),
            },
        }
    }
}

/// One lexed item: a token, or the text of a run that forms no token.
pub type Lexeme = Result<Token, String>;

/// A lazy stream of `(Lexeme, column)` pairs over one line.
///
/// Columns are 1-based character positions. Text that forms no token is
/// yielded as `Err` in place, so the parser can report it against the
/// construct it expected at that point.
///
/// # Example
/// ```
/// use lithp::interpreter::lexer::{Lexemes, Token};
///
/// let mut lexemes = Lexemes::new("(max 1 -2.5) @");
/// assert_eq!(lexemes.next(), Some((Ok(Token::LParen), 1)));
/// assert_eq!(lexemes.next(), Some((Ok(Token::Max), 2)));
/// assert_eq!(lexemes.nth(1), Some((Ok(Token::Decimal("-2.5".to_string())), 8)));
/// assert_eq!(lexemes.nth(1), Some((Err("@".to_string()), 14)));
/// assert_eq!(lexemes.next(), None);
/// ```
pub struct Lexemes<'a> {
    lexer:  logos::Lexer<'a, Token>,
    source: &'a str,
    offset: usize,
    column: usize,
}

impl<'a> Lexemes<'a> {
    /// Starts lexing `source` from its first character.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { lexer: Token::lexer(source),
               source,
               offset: 0,
               column: 1 }
    }

    /// Returns the column just past the last character of the line.
    #[must_use]
    pub fn end_column(&self) -> usize {
        self.column + self.source[self.offset..].chars().count()
    }

    /// Advances the running column to a byte offset at or past the last one.
    fn column_at(&mut self, offset: usize) -> usize {
        self.column += self.source[self.offset..offset].chars().count();
        self.offset = offset;
        self.column
    }
}

impl Iterator for Lexemes<'_> {
    type Item = (Lexeme, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next()?;
        let column = self.column_at(self.lexer.span().start);
        Some((token.map_err(|()| self.lexer.slice().to_string()), column))
    }
}
