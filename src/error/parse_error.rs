#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant records the 1-based column of the offending input.
pub enum ParseError {
    /// Found a token, or text that forms no token, where a different
    /// construct was expected.
    UnexpectedToken {
        /// Description of what the grammar expected here.
        expected: &'static str,
        /// The token encountered.
        found:    String,
        /// The column where the token starts.
        column:   usize,
    },
    /// Reached the end of input while a construct was still expected.
    UnexpectedEndOfInput {
        /// Description of what the grammar expected here.
        expected: &'static str,
        /// The column just past the end of the input.
        column:   usize,
    },
    /// A closing parenthesis `)` was expected but the input ended.
    ExpectedClosingParen {
        /// The column of the matching `(`.
        opened: usize,
        /// The column just past the end of the input.
        column: usize,
    },
    /// Found extra tokens after a complete line.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The column where the token starts.
        column: usize,
    },
    /// Parentheses were nested deeper than the parser allows.
    NestingTooDeep {
        /// The maximum allowed depth.
        limit:  usize,
        /// The column of the `(` that exceeded the limit.
        column: usize,
    },
}

impl ParseError {
    /// Gets the column from `self`.
    ///
    /// Used to point a caret at the offending input.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column, .. }
            | Self::ExpectedClosingParen { column, .. }
            | Self::UnexpectedTrailingTokens { column, .. }
            | Self::NestingTooDeep { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    column, } => write!(f,
                                                        "Error at column {column}: Expected {expected}, found '{found}'."),

            Self::UnexpectedEndOfInput { expected, column } => write!(f,
                                                                      "Error at column {column}: Expected {expected}, found end of input."),

            Self::ExpectedClosingParen { opened, column } => write!(f,
                                                                    "Error at column {column}: Expected closing parenthesis ')' for '(' at column {opened} but none found."),

            Self::UnexpectedTrailingTokens { token, column } => write!(f,
                                                                      "Error at column {column}: Extra tokens after expression, starting at '{token}'."),

            Self::NestingTooDeep { limit, column } => write!(f,
                                                             "Error at column {column}: Parentheses nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
