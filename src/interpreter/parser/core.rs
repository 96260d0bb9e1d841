use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Tracks how deeply the parser has recursed into nested constructs.
///
/// Every descent through a prefix operator or a delimited sub-expression
/// passes through [`Depth::deeper`], so pathologically nested input fails
/// with a typed error long before the call stack is at risk. The counter is
/// carried by value; sibling sub-expressions therefore do not accumulate
/// depth against each other.
#[derive(Debug, Clone, Copy)]
pub struct Depth {
    current: usize,
    limit:   usize,
}

impl Depth {
    /// Creates a fresh counter with the given limit.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { current: 0, limit }
    }

    /// Returns a counter one level deeper, or fails once the limit is hit.
    ///
    /// # Errors
    /// Returns `ParseError::TooDeep` when the configured limit is exceeded.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::parser::core::Depth;
    ///
    /// let depth = Depth::new(1);
    /// let deeper = depth.deeper(0).unwrap();
    /// assert!(deeper.deeper(0).is_err());
    /// ```
    pub const fn deeper(self, pos: usize) -> ParseResult<Self> {
        if self.current >= self.limit {
            return Err(ParseError::TooDeep { limit: self.limit,
                                             pos });
        }
        Ok(Self { current: self.current + 1,
                  limit:   self.limit, })
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, pos)` pairs.
/// - `depth`: Recursion depth carried into nested sub-expressions.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens, depth)
}
