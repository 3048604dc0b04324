use crate::{
    ast::{Expr, Function},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_NESTING_DEPTH, ParseResult, Parser},
            utils::{describe, literal, split_negative_literal},
        },
    },
};

const EXPECTED_FUNCTION: &str = "a function ('+', '-', '*', '/', '%', '^', 'min' or 'max')";
const EXPECTED_OPERAND: &str = "a number or '('";
const EXPECTED_OPERAND_OR_CLOSE: &str = "a number, '(' or ')'";
const EXPECTED_OPERAND_OR_END: &str = "a number, '(' or end of input";

impl Parser<'_> {
    /// Parses a function symbol followed by one or more operands.
    ///
    /// This is the body shared by a whole line and by a parenthesized
    /// application; the caller deals with any surrounding parentheses.
    ///
    /// Grammar: `function expr+`
    ///
    /// A negative literal in function position, as in `-5 3`, is read as the
    /// `-` function followed by the unsigned literal.
    ///
    /// # Parameters
    /// - `depth`: Number of enclosing parentheses.
    ///
    /// # Returns
    /// An `Expr::Application` with at least one operand.
    ///
    /// # Errors
    /// - `UnexpectedToken` if no function symbol leads the application, or
    ///   unrecognized text follows an operand.
    /// - `UnexpectedEndOfInput` if the function or first operand is missing.
    /// - Propagates any errors from operand parsing.
    pub(in crate::interpreter::parser) fn parse_application_body(&mut self,
                                                                 depth: usize)
                                                                 -> ParseResult<Expr> {
        let (function, column, pending) = self.parse_function()?;

        let first = match pending {
            Some(first) => first,
            None => self.parse_operand(depth)?,
        };

        let mut rest = Vec::new();
        loop {
            match self.tokens.peek() {
                Some((Ok(Token::Integer(_) | Token::Decimal(_) | Token::LParen), _)) => {
                    rest.push(self.parse_operand(depth)?);
                },
                Some((Err(text), column)) => {
                    let expected = if depth == 0 {
                        EXPECTED_OPERAND_OR_END
                    } else {
                        EXPECTED_OPERAND_OR_CLOSE
                    };
                    return Err(ParseError::UnexpectedToken { expected,
                                                             found: text.clone(),
                                                             column: *column });
                },
                _ => break,
            }
        }

        Ok(Expr::Application { function,
                               first: Box::new(first),
                               rest,
                               column })
    }

    /// Parses the function symbol of an application.
    ///
    /// # Returns
    /// The function, its column, and the first operand when it was split off
    /// a negative literal.
    fn parse_function(&mut self) -> ParseResult<(Function, usize, Option<Expr>)> {
        match self.tokens.next() {
            Some((Ok(tok), column)) => {
                if let Some(function) = tok.as_function() {
                    return Ok((function, column, None));
                }
                if let Some(operand) = split_negative_literal(&tok, column) {
                    return Ok((Function::Sub, column, Some(operand)));
                }
                Err(ParseError::UnexpectedToken { expected: EXPECTED_FUNCTION,
                                                  found: tok.to_string(),
                                                  column })
            },
            Some((Err(text), column)) => Err(ParseError::UnexpectedToken { expected: EXPECTED_FUNCTION,
                                                                           found: text,
                                                                           column }),
            None => Err(ParseError::UnexpectedEndOfInput { expected: EXPECTED_FUNCTION,
                                                           column:   self.end, }),
        }
    }

    /// Parses a single operand.
    ///
    /// Grammar: `expr := number | '(' function expr+ ')'`
    ///
    /// # Parameters
    /// - `depth`: Number of enclosing parentheses.
    ///
    /// # Returns
    /// A literal node or a nested `Expr::Application`.
    ///
    /// # Errors
    /// - `NestingTooDeep` past [`MAX_NESTING_DEPTH`] parentheses.
    /// - `ExpectedClosingParen` if the input ends inside parentheses.
    /// - `UnexpectedToken` / `UnexpectedEndOfInput` if no operand is present.
    fn parse_operand(&mut self, depth: usize) -> ParseResult<Expr> {
        match self.tokens.next() {
            Some((Ok(Token::LParen), opened)) => {
                if depth >= MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                            column: opened, });
                }

                let expr = self.parse_application_body(depth + 1)?;

                match self.tokens.next() {
                    Some((Ok(Token::RParen), _)) => Ok(expr),
                    Some((lexeme, column)) => {
                        Err(ParseError::UnexpectedToken { expected: EXPECTED_OPERAND_OR_CLOSE,
                                                          found: describe(&lexeme),
                                                          column })
                    },
                    None => Err(ParseError::ExpectedClosingParen { opened,
                                                                   column: self.end }),
                }
            },
            Some((lexeme, column)) => {
                lexeme.as_ref()
                      .ok()
                      .and_then(|tok| literal(tok, column))
                      .ok_or_else(|| ParseError::UnexpectedToken { expected: EXPECTED_OPERAND,
                                                                   found: describe(&lexeme),
                                                                   column })
            },
            None => Err(ParseError::UnexpectedEndOfInput { expected: EXPECTED_OPERAND,
                                                           column:   self.end, }),
        }
    }
}
