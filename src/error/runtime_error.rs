#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a parsed expression.
pub enum RuntimeError {
    /// A literal of a non-numeric type (string, boolean) appeared.
    UnsupportedConstant {
        /// Byte offset in the source where the error occurred.
        pos: usize,
    },
    /// An operator outside the whitelist appeared.
    UnsupportedOperator {
        /// The rejected operator, as written.
        op:  String,
        /// Byte offset in the source where the error occurred.
        pos: usize,
    },
    /// A construct with no arithmetic meaning appeared (call, name,
    /// attribute access, subscript, collection display).
    InvalidExpression {
        /// Description of the rejected construct.
        details: String,
        /// Byte offset in the source where the error occurred.
        pos:     usize,
    },
    /// A division or modulo operation's right operand was zero.
    DivisionByZero {
        /// Byte offset in the source where the error occurred.
        pos: usize,
    },
    /// The operation's result is not representable as a real number.
    DomainError {
        /// Byte offset in the source where the error occurred.
        pos: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// Byte offset in the source where the error occurred.
        pos: usize,
    },
    /// An integer was too large to be used where a real number is required.
    LiteralTooLarge {
        /// Byte offset in the source where the error occurred.
        pos: usize,
    },
    /// The expression tree was deeper than the configured maximum.
    TooDeep {
        /// The configured depth limit.
        limit: usize,
        /// Byte offset in the source where the error occurred.
        pos:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedConstant { pos } => {
                write!(f, "Error at offset {pos}: Unsupported constant.")
            },
            Self::UnsupportedOperator { op, pos } => {
                write!(f, "Error at offset {pos}: Unsupported operator '{op}'.")
            },
            Self::InvalidExpression { details, pos } => {
                write!(f, "Error at offset {pos}: Invalid expression: {details}.")
            },
            Self::DivisionByZero { pos } => write!(f, "Error at offset {pos}: Division by zero."),
            Self::DomainError { pos } => write!(f,
                                                "Error at offset {pos}: Result is not representable as a real number."),
            Self::Overflow { pos } => write!(f,
                                             "Error at offset {pos}: Integer overflow while trying to compute result."),
            Self::LiteralTooLarge { pos } => {
                write!(f, "Error at offset {pos}: Integer is too large.")
            },
            Self::TooDeep { limit, pos } => write!(f,
                                                   "Error at offset {pos}: Expression nesting exceeds the maximum depth of {limit}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
