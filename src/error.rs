/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing or parsing source
/// text: illegal characters, oversized literals, missing parentheses, and
/// unexpected tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression: division by zero, integer overflow, and failed numeric
/// promotions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// A failure from any stage of the pipeline.
///
/// The pipeline stops at the first error; no partial token list, AST, or
/// value is surfaced alongside it. Every underlying variant carries the
/// 0-indexed line and column of the offending input, and renders as
/// `"{message} [{line}:{col}]"`.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Tokenizing or parsing failed.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
