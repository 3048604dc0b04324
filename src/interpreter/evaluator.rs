/// Core evaluation logic.
///
/// Walks the tree bottom-up and folds each application's operands from left
/// to right.
pub mod core;

/// Literal evaluation.
///
/// Converts captured literal text into integers and decimals, reporting
/// out-of-range text as an error value.
pub mod literal;

/// Single-operand evaluation.
///
/// Implements the one-operand rule, where only `-` has a meaning
/// (negation).
pub mod unary;

/// Binary combination.
///
/// Implements error propagation, numeric promotion, and the arithmetic of
/// every function symbol on two operands.
pub mod binary;
