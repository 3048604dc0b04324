use crate::{
    error::ErrorKind,
    interpreter::value::format::{DEFAULT_PRECISION, format_general},
    util::num::widen,
};

/// Represents the result of evaluating a node.
///
/// A value is exactly one of an integer, a decimal, or an evaluation error.
/// Errors are inert: any computation that consumes one yields it back
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A decimal value (double precision floating-point).
    Decimal(f64),
    /// A failed evaluation.
    Error(ErrorKind),
}

/// The numeric kind of a non-error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    /// Results are narrowed back to `Value::Integer`.
    Integer,
    /// Results stay `Value::Decimal`.
    Decimal,
}

impl Value {
    /// Returns the numeric kind, or `None` for errors.
    #[must_use]
    pub const fn kind(&self) -> Option<NumericKind> {
        match self {
            Self::Integer(_) => Some(NumericKind::Integer),
            Self::Decimal(_) => Some(NumericKind::Decimal),
            Self::Error(_) => None,
        }
    }

    /// Widens a numeric value to `f64`.
    ///
    /// # Returns
    /// - `Ok(f64)`: The widened value.
    /// - `Err(ErrorKind)`: The error carried by `self`.
    ///
    /// # Example
    /// ```
    /// use lithp::{error::ErrorKind, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Integer(3).as_decimal(), Ok(3.0));
    /// assert_eq!(Value::Error(ErrorKind::DivideByZero).as_decimal(),
    ///            Err(ErrorKind::DivideByZero));
    /// ```
    pub fn as_decimal(&self) -> Result<f64, ErrorKind> {
        match self {
            Self::Integer(n) => Ok(widen(*n)),
            Self::Decimal(d) => Ok(*d),
            Self::Error(kind) => Err(*kind),
        }
    }
}

/// Formats the value for the REPL.
///
/// Integers print as signed decimal text, decimals in general notation with
/// six significant digits (or the formatter's precision, as in `{:.10}`), and
/// errors as their fixed sentence.
///
/// # Example
/// ```
/// use lithp::{error::ErrorKind, interpreter::value::core::Value};
///
/// assert_eq!(Value::Integer(-12).to_string(), "-12");
/// assert_eq!(Value::Decimal(3.5).to_string(), "3.5");
/// assert_eq!(format!("{:.3}", Value::Decimal(3.14159)), "3.14");
/// assert_eq!(Value::Error(ErrorKind::BadOperator).to_string(),
///            "Error: invalid operator");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => {
                let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
                f.write_str(&format_general(*d, precision))
            },
            Self::Error(kind) => write!(f, "{kind}"),
        }
    }
}
