#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are positioned at the start of the span of the AST node
/// whose evaluation failed.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
        /// The source column where the error occurred.
        col:  usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
        /// The source column where the error occurred.
        col:  usize,
    },
    /// An integer operand was too large to be promoted to a real exactly.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
        /// The source column where the error occurred.
        col:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { line, col } => {
                write!(f, "Division by zero [{line}:{col}]")
            },

            Self::Overflow { line, col } => {
                write!(f, "Integer overflow while trying to compute result [{line}:{col}]")
            },

            Self::LiteralTooLarge { line, col } => {
                write!(f, "Literal is too large [{line}:{col}]")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
