use logos::Logos;

use crate::{
    ast::{Expr, LiteralValue},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        lexer::Token,
        parser::core::{Depth, parse_expression},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default bound on expression nesting, shared by the parser and the
/// evaluator.
///
/// The limit is deliberately independent of the host call-stack size: inputs
/// that exceed it fail with a typed error in either phase rather than
/// exhausting the stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Evaluates arithmetic expressions under a fixed operator whitelist.
///
/// The evaluator holds no mutable state. It carries only the configured
/// nesting limit, so a single instance can be shared freely between threads
/// and reused across calls; identical inputs always produce identical
/// results.
///
/// Expressions are parsed into a tree and walked recursively. Only three
/// node kinds are ever executed: numeric literals, whitelisted binary
/// operations, and whitelisted unary operations. Every other construct the
/// grammar accepts (names, calls, attribute access, subscripts, strings,
/// booleans, comparisons, boolean and bitwise operators, collection
/// displays) is rejected before any of its children are visited, so hostile
/// input cannot reach any host facility through this type.
pub struct Evaluator {
    /// Maximum nesting depth accepted while parsing and evaluating.
    max_depth: usize,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates an evaluator with the default nesting limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Creates an evaluator with a custom nesting limit.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Evaluates a single arithmetic expression from source text.
    ///
    /// This is the main entry point. The text is tokenized, parsed as
    /// exactly one expression, and evaluated; any leftover input after the
    /// expression is an error. Empty or blank input fails with
    /// `ParseError::EmptyInput`.
    ///
    /// # Parameters
    /// - `source`: The expression text. Untrusted input is fine; that is the
    ///   point.
    ///
    /// # Returns
    /// The numeric result, or the first failure encountered.
    ///
    /// # Errors
    /// Returns an error if the input does not lex or parse, or if evaluation
    /// rejects a construct or hits an arithmetic failure.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let evaluator = Evaluator::new();
    ///
    /// assert_eq!(evaluator.evaluate("3 + 4 * 2").unwrap(), Value::Integer(11));
    /// assert_eq!(evaluator.evaluate("(3 + 4) * 2").unwrap(), Value::Integer(14));
    ///
    /// // Anything outside plain arithmetic is refused.
    /// assert!(evaluator.evaluate("__import__('os')").is_err());
    /// ```
    pub fn evaluate(&self, source: &str) -> Result<Value, Error> {
        let mut tokens = Vec::new();
        let mut lexer = Token::lexer(source);

        while let Some(token) = lexer.next() {
            if let Ok(tok) = token {
                tokens.push((tok, lexer.span().start));
            } else {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         pos:   lexer.span().start, }.into());
            }
        }

        if tokens.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let mut iter = tokens.iter().peekable();
        let expr = parse_expression(&mut iter, Depth::new(self.max_depth))?;

        if let Some((token, pos)) = iter.next() {
            return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                              pos:   *pos, }.into());
        }

        Ok(self.eval(&expr, 0)?)
    }

    /// Evaluates a parsed expression node.
    ///
    /// The dispatch is an exhaustive match over every node kind the grammar
    /// can produce. Whitelisted kinds recurse with an incremented depth
    /// counter; all others return an error without their children ever being
    /// visited. Keeping the rejection ahead of the recursion is what makes
    /// the whitelist airtight: no operand of a forbidden construct is
    /// evaluated, not even partially.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `depth`: Current recursion depth, compared against the configured
    ///   limit.
    ///
    /// # Returns
    /// The computed value, or the first failure encountered.
    pub fn eval(&self, expr: &Expr, depth: usize) -> EvalResult<Value> {
        if depth >= self.max_depth {
            return Err(RuntimeError::TooDeep { limit: self.max_depth,
                                               pos:   expr.position(), });
        }

        match expr {
            Expr::Literal { value, pos } => Self::eval_literal(value, *pos),
            Expr::UnaryOp { op, expr, pos } => {
                let operand = self.eval(expr, depth + 1)?;
                Self::eval_unary(*op, &operand, *pos)
            },
            Expr::BinaryOp { left, op, right, pos } => {
                let left = self.eval(left, depth + 1)?;
                let right = self.eval(right, depth + 1)?;
                Self::eval_binary(*op, &left, &right, *pos)
            },

            // Every remaining node kind is rejected before its children are
            // visited.
            Expr::BoolOp { op, pos, .. } => {
                Err(RuntimeError::UnsupportedOperator { op: op.to_string(),
                                                        pos: *pos, })
            },
            Expr::Compare { op, pos, .. } => {
                Err(RuntimeError::UnsupportedOperator { op: op.to_string(),
                                                        pos: *pos, })
            },
            Expr::Name { name, pos } => {
                Err(RuntimeError::InvalidExpression { details: format!("name '{name}' is not defined"),
                                                      pos:     *pos, })
            },
            Expr::Call { pos, .. } => {
                Err(RuntimeError::InvalidExpression { details: "function calls are not allowed".to_string(),
                                                      pos:     *pos, })
            },
            Expr::Attribute { pos, .. } => {
                Err(RuntimeError::InvalidExpression { details: "attribute access is not allowed".to_string(),
                                                      pos:     *pos, })
            },
            Expr::Subscript { pos, .. } => {
                Err(RuntimeError::InvalidExpression { details: "subscripts are not allowed".to_string(),
                                                      pos:     *pos, })
            },
            Expr::List { pos, .. } => {
                Err(RuntimeError::InvalidExpression { details: "list literals are not allowed".to_string(),
                                                      pos:     *pos, })
            },
            Expr::Tuple { pos, .. } => {
                Err(RuntimeError::InvalidExpression { details: "tuple literals are not allowed".to_string(),
                                                      pos:     *pos, })
            },
        }
    }

    /// Evaluates a literal node.
    ///
    /// Only the numeric variants produce a value; strings and booleans yield
    /// `UnsupportedConstant`.
    fn eval_literal(value: &LiteralValue, pos: usize) -> EvalResult<Value> {
        match value {
            LiteralValue::Integer(n) => Ok(Value::Integer(*n)),
            LiteralValue::Real(r) => Ok(Value::Real(*r)),
            LiteralValue::Bool(_) | LiteralValue::Str(_) => {
                Err(RuntimeError::UnsupportedConstant { pos })
            },
        }
    }
}
