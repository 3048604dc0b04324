use std::{fmt, str::FromStr};

/// A function symbol that may head an application.
///
/// The set of symbols is closed: the lexer only produces tokens for these,
/// so a conforming parse never yields anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `min`
    Min,
    /// `max`
    Max,
}

impl Function {
    /// Every function symbol, in the order the grammar lists them.
    pub const ALL: [Self; 8] = [Self::Add,
                                Self::Sub,
                                Self::Mul,
                                Self::Div,
                                Self::Mod,
                                Self::Pow,
                                Self::Min,
                                Self::Max];

    /// Returns the source text of the symbol.
    ///
    /// ## Example
    /// ```
    /// use lithp::ast::Function;
    ///
    /// assert_eq!(Function::Pow.symbol(), "^");
    /// assert_eq!(Function::Max.symbol(), "max");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when text does not name any [`Function`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFunction(pub String);

impl FromStr for Function {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|function| function.symbol() == s)
                 .ok_or_else(|| UnknownFunction(s.to_string()))
    }
}

/// An abstract syntax tree (AST) node for one line of input.
///
/// An application always has at least one operand; the first is stored apart
/// from the rest so that an empty application cannot be built.
///
/// Literals keep the raw text captured by the lexer; conversion to a number
/// happens during evaluation so that out-of-range literals surface as
/// evaluation errors rather than syntax errors. Every node owns its children
/// outright and the whole tree is dropped once the line has been evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal such as `42` or `-7`.
    IntegerLiteral {
        /// The literal text, including any leading `-`.
        text:   String,
        /// Column (1-based) where the literal starts.
        column: usize,
    },
    /// A decimal literal such as `3.5` or `-0.25`.
    DecimalLiteral {
        /// The literal text, including any leading `-`.
        text:   String,
        /// Column (1-based) where the literal starts.
        column: usize,
    },
    /// A function applied to one or more operands.
    Application {
        /// The function symbol heading the application.
        function: Function,
        /// The first operand.
        first:    Box<Self>,
        /// The remaining operands, in source order.
        rest:     Vec<Self>,
        /// Column (1-based) of the function symbol.
        column:   usize,
    },
}

impl Expr {
    /// Iterates over the operands of an application, in source order.
    /// Literals have no operands.
    pub fn operands(&self) -> impl Iterator<Item = &Self> {
        let (first, rest) = match self {
            Self::Application { first, rest, .. } => (Some(first.as_ref()), rest.as_slice()),
            Self::IntegerLiteral { .. } | Self::DecimalLiteral { .. } => (None, &[][..]),
        };
        first.into_iter().chain(rest)
    }
}

/// Prints the tree back in its fully-parenthesized prefix form.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntegerLiteral { text, .. } | Self::DecimalLiteral { text, .. } => {
                f.write_str(text)
            },
            Self::Application { function, .. } => {
                write!(f, "({function}")?;
                for operand in self.operands() {
                    write!(f, " {operand}")?;
                }
                write!(f, ")")
            },
        }
    }
}
