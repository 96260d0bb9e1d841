/// Represents a literal value appearing directly in an expression.
///
/// `LiteralValue` covers every raw constant the grammar can produce. Only the
/// numeric variants can be evaluated; booleans and strings parse but are
/// refused during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A quoted string literal.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The grammar deliberately accepts more than the evaluator will compute:
/// names, calls, attribute access, subscripts, comparisons, boolean and
/// bitwise operators, and collection displays all produce nodes here. The
/// evaluator walks this closed set of variants and rejects everything that is
/// not a numeric literal or a whitelisted unary/binary operation, so hostile
/// input fails with a typed error instead of reaching any host facility.
///
/// Every variant carries the byte offset (`pos`) of the construct in the
/// source text for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Byte offset in the source text.
        pos:   usize,
    },
    /// A bare name, such as `x` or `__import__`.
    Name {
        /// The referenced name.
        name: String,
        /// Byte offset in the source text.
        pos:  usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Byte offset in the source text.
        pos:  usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset in the source text.
        pos:   usize,
    },
    /// A short-circuit boolean operation (`and`, `or`).
    BoolOp {
        /// The boolean operator.
        op:    BoolOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset in the source text.
        pos:   usize,
    },
    /// A comparison (e.g. `a < b`, `a == b`).
    Compare {
        /// Left operand.
        left:  Box<Self>,
        /// The comparison operator.
        op:    CompareOperator,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset in the source text.
        pos:   usize,
    },
    /// A call expression, such as `abs(x)`.
    Call {
        /// The expression being called.
        callee:    Box<Self>,
        /// Arguments to the call.
        arguments: Vec<Self>,
        /// Byte offset in the source text.
        pos:       usize,
    },
    /// Attribute access, such as `value.real`.
    Attribute {
        /// The expression whose attribute is accessed.
        object: Box<Self>,
        /// The attribute name.
        name:   String,
        /// Byte offset in the source text.
        pos:    usize,
    },
    /// Subscript access, such as `a[0]`.
    Subscript {
        /// The expression being indexed.
        object: Box<Self>,
        /// The index expression.
        index:  Box<Self>,
        /// Byte offset in the source text.
        pos:    usize,
    },
    /// A list display, such as `[1, 2, 3]`.
    List {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Byte offset in the source text.
        pos:      usize,
    },
    /// A tuple display, such as `(1, 2)`.
    Tuple {
        /// Elements of the tuple.
        elements: Vec<Self>,
        /// Byte offset in the source text.
        pos:      usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    /// ## Example
    /// ```
    /// use safecalc::ast::Expr;
    ///
    /// let expr = Expr::Name { name: "x".to_string(),
    ///                         pos:  5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { pos, .. }
            | Self::Name { pos, .. }
            | Self::UnaryOp { pos, .. }
            | Self::BinaryOp { pos, .. }
            | Self::BoolOp { pos, .. }
            | Self::Compare { pos, .. }
            | Self::Call { pos, .. }
            | Self::Attribute { pos, .. }
            | Self::Subscript { pos, .. }
            | Self::List { pos, .. }
            | Self::Tuple { pos, .. } => *pos,
        }
    }
}

/// Represents a binary operator.
///
/// The arithmetic operators are the only ones the evaluator computes; the
/// bitwise and shift operators exist so that input using them parses into a
/// well-formed tree and is then rejected by the operator whitelist.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Left shift (`<<`)
    Shl,
    /// Right shift (`>>`)
    Shr,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Unary plus (e.g. `+x`).
    Plus,
    /// Logical not (e.g. `not x`). Parsed, never evaluated.
    Not,
    /// Bitwise inversion (e.g. `~x`). Parsed, never evaluated.
    Invert,
}

/// Represents a comparison operator. Parsed, never evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompareOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a short-circuit boolean operator. Parsed, never evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoolOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, BitAnd, BitOr, BitXor, Div, FloorDiv, Mod, Mul, Pow, Shl, Shr, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            Shl => "<<",
            Shr => ">>",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Plus => "+",
            Self::Not => "not",
            Self::Invert => "~",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for BoolOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}
