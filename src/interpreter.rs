/// The evaluator module computes a value from a tree.
///
/// The evaluator walks the tree bottom-up, converts literals, applies the
/// single-operand rule and folds multi-operand applications from left to
/// right. It is total: failures are values, not errors.
///
/// # Responsibilities
/// - Evaluates every node kind to exactly one `Value`.
/// - Promotes mixed integer/decimal arithmetic to decimals.
/// - Propagates error values through enclosing applications unchanged.
pub mod evaluator;
/// The lexer module tokenizes one line of input.
///
/// The lexer reads the raw text and produces numeric literals, function
/// symbols, and parentheses, each tagged with its column.
///
/// # Responsibilities
/// - Converts the input characters into tokens with source columns.
/// - Keeps literal text intact for later conversion.
/// - Reports text that forms no token.
pub mod lexer;
/// The parser module builds the tree from tokens.
///
/// The parser checks that a line is a function symbol applied to one or more
/// operands, where each operand is a number or a parenthesized application.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates the grammar, reporting the expected construct and column.
/// - Bounds the nesting depth.
pub mod parser;
/// The value module defines the result of evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integer, decimal, or error.
/// - Widens values for arithmetic.
/// - Formats values for output.
pub mod value;
