#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
///
/// Every variant carries the 0-indexed line and column of the offending
/// character or token, so callers can point at the exact position.
pub enum ParseError {
    /// Found a character the tokenizer does not recognize.
    ///
    /// Only space and tab are skippable whitespace; in particular a bare
    /// newline inside an expression is reported here, matching the
    /// reference grammar.
    IllegalCharacter {
        /// The character encountered.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        col:       usize,
    },
    /// An integer literal was too large to be represented as an `i64`.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
        /// The source column where the error occurred.
        col:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line of the token found instead.
        line: usize,
        /// The source column of the token found instead.
        col:  usize,
    },
    /// Found a token that no grammar production accepts at this point.
    UnexpectedToken {
        /// Description of what was expected instead.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        col:     usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, line, col } => {
                write!(f, "Illegal character: {character} [{line}:{col}]")
            },

            Self::LiteralTooLarge { line, col } => {
                write!(f, "Literal is too large [{line}:{col}]")
            },

            Self::ExpectedClosingParen { line, col } => {
                write!(f, "Expected ) [{line}:{col}]")
            },

            Self::UnexpectedToken { message, line, col } => {
                write!(f, "{message} [{line}:{col}]")
            },
        }
    }
}

impl std::error::Error for ParseError {}
