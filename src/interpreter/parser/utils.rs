use crate::{
    ast::Expr,
    interpreter::lexer::{Lexeme, Token},
};

/// Builds a literal node from a numeric token.
///
/// # Returns
/// `Some(Expr::IntegerLiteral)` or `Some(Expr::DecimalLiteral)` for numeric
/// tokens, `None` for anything else.
pub(in crate::interpreter::parser) fn literal(token: &Token, column: usize) -> Option<Expr> {
    match token {
        Token::Integer(text) => Some(Expr::IntegerLiteral { text: text.clone(),
                                                            column }),
        Token::Decimal(text) => Some(Expr::DecimalLiteral { text: text.clone(),
                                                            column }),
        _ => None,
    }
}

/// Splits a negative literal into its unsigned part.
///
/// The lexer greedily reads `-5` as one literal. Where the grammar wants a
/// function symbol, the `-` belongs to the function instead and the rest is
/// the first operand, one column to the right.
///
/// # Returns
/// The unsigned literal, or `None` if `token` is not a negative literal.
pub(in crate::interpreter::parser) fn split_negative_literal(token: &Token,
                                                             column: usize)
                                                             -> Option<Expr> {
    match token {
        Token::Integer(text) | Token::Decimal(text) => {
            let digits = text.strip_prefix('-')?;
            let unsigned = match token {
                Token::Integer(_) => Token::Integer(digits.to_string()),
                _ => Token::Decimal(digits.to_string()),
            };
            literal(&unsigned, column + 1)
        },
        _ => None,
    }
}

/// Returns the source text of a lexeme for error messages.
pub(in crate::interpreter::parser) fn describe(lexeme: &Lexeme) -> String {
    match lexeme {
        Ok(tok) => tok.to_string(),
        Err(text) => text.clone(),
    }
}
