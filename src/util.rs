/// Numeric conversion helpers.
///
/// This module provides the widening and narrowing conversions used by the
/// evaluator, plus range-checked parsing of literal text. Narrowing never
/// panics: it truncates toward zero and saturates at the `i64` range.
pub mod num;
