/// Output formatting for decimals.
///
/// Renders floating-point values in the compact general notation of C's
/// `%g`: fixed notation for moderate magnitudes, scientific notation only when
/// the exponent demands it, trailing zeros removed.
pub mod format;

pub mod core;
