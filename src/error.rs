/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing an
/// expression. Parse errors include syntax mistakes, unexpected tokens,
/// unbalanced delimiters, and any other issue detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression: rejected constructs and operators, division by zero, overflow,
/// and results outside the real numbers.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by [`evaluate`](crate::evaluate).
///
/// Wraps the phase-specific error enums so callers can treat parsing and
/// evaluation failures uniformly. Every variant is a recoverable condition
/// local to the offending input; nothing here ever aborts the process.
#[derive(Debug)]
pub enum Error {
    /// The input did not parse as a single expression.
    Parse(ParseError),
    /// The parsed expression could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
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
