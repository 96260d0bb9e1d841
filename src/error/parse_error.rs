#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The input contained no tokens at all.
    EmptyInput,
    /// Found an unexpected or unrecognized token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// Byte offset in the source where the error occurred.
        pos:   usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Byte offset in the source where the error occurred.
        pos: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset in the source where the error occurred.
        pos: usize,
    },
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket {
        /// Byte offset in the source where the error occurred.
        pos: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// Byte offset in the source where the error occurred.
        pos:   usize,
    },
    /// Nesting exceeded the configured maximum depth.
    TooDeep {
        /// The configured depth limit.
        limit: usize,
        /// Byte offset in the source where the error occurred.
        pos:   usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Expression is empty."),

            Self::UnexpectedToken { token, pos } => {
                write!(f, "Error at offset {pos}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { pos } => {
                write!(f, "Error at offset {pos}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { pos } => write!(f,
                                                         "Error at offset {pos}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedClosingBracket { pos } => write!(f,
                                                           "Error at offset {pos}: Expected closing bracket ']' but none found."),

            Self::UnexpectedTrailingTokens { token, pos } => write!(f,
                                                                    "Error at offset {pos}: Extra tokens after expression. Check your input: {token}"),

            Self::TooDeep { limit, pos } => write!(f,
                                                   "Error at offset {pos}: Expression nesting exceeds the maximum depth of {limit}."),
        }
    }
}

impl std::error::Error for ParseError {}
