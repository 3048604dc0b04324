#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Represents every way an evaluation can fail.
///
/// These are not raised; they travel inside `Value::Error` and pass through
/// enclosing applications unchanged.
pub enum ErrorKind {
    /// Division (or remainder) by zero.
    DivideByZero,
    /// A function symbol with no arithmetic meaning.
    BadOperator,
    /// An integer literal outside the representable range.
    BadIntegerLiteral,
    /// A decimal literal outside the representable range.
    BadDecimalLiteral,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivideByZero => write!(f, "Error: division by zero"),
            Self::BadOperator => write!(f, "Error: invalid operator"),
            Self::BadIntegerLiteral => write!(f, "Error: invalid integer"),
            Self::BadDecimalLiteral => write!(f, "Error: invalid decimal"),
        }
    }
}
