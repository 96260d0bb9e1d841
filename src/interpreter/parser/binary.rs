use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, BoolOperator, CompareOperator, Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Depth, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `or`. This is the loosest-binding
/// level of the grammar.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Recursion depth carried into operands.
///
/// # Returns
/// An expression tree using `BoolOp` nodes for each `or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical_and(tokens, depth)?;

    loop {
        if let Some((Token::Or, pos)) = tokens.peek() {
            let pos = *pos;
            tokens.next();

            let right = parse_logical_and(tokens, depth)?;

            left = Expr::BoolOp { op:    BoolOperator::Or,
                                  left:  Box::new(left),
                                  right: Box::new(right),
                                  pos };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `and`. Precedence is between `or` and
/// `not`.
///
/// Grammar: `logical_and := logical_not ("and" logical_not)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Recursion depth carried into operands.
///
/// # Returns
/// An expression tree using `BoolOp` nodes for each `and`.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical_not(tokens, depth)?;

    loop {
        if let Some((Token::And, pos)) = tokens.peek() {
            let pos = *pos;
            tokens.next();

            let right = parse_logical_not(tokens, depth)?;

            left = Expr::BoolOp { op:    BoolOperator::And,
                                  left:  Box::new(left),
                                  right: Box::new(right),
                                  pos };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses a logical NOT expression.
///
/// `not` is right-associative and binds between `and` and the comparison
/// operators. The produced node is never evaluated; it exists so that input
/// like `not 1` is rejected with an operator error instead of a syntax
/// error.
///
/// Grammar: `logical_not := "not" logical_not | comparison`
pub fn parse_logical_not<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Not, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();
        let depth = depth.deeper(pos)?;
        let expr = parse_logical_not(tokens, depth)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                                  expr: Box::new(expr),
                                  pos });
    }

    parse_comparison(tokens, depth)
}

/// Parses relational and equality operators.
///
/// This parser handles all comparison operators:
/// `<`, `>`, `<=`, `>=`, `==`, `!=`. Chained comparisons fold
/// left-associatively into nested `Compare` nodes.
///
/// # Parameters
/// - `tokens`: Token stream (token + byte offset) wrapped in a `Peekable`.
/// - `depth`: Recursion depth carried into operands.
///
/// # Returns
/// A possibly nested `Expr::Compare` tree.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_bitor(tokens, depth)?;

    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_compare_operator(token)
        {
            let pos = *pos;
            tokens.next();

            let right = parse_bitor(tokens, depth)?;

            left = Expr::Compare { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   pos };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses bitwise OR expressions.
///
/// Grammar: `bitor := bitxor ("|" bitxor)*`
pub fn parse_bitor<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_bitxor(tokens, depth)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::BitOr)
        {
            let pos = *pos;
            tokens.next();
            let right = parse_bitxor(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses bitwise XOR expressions.
///
/// Grammar: `bitxor := bitand ("^" bitand)*`
pub fn parse_bitxor<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_bitand(tokens, depth)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::BitXor)
        {
            let pos = *pos;
            tokens.next();
            let right = parse_bitand(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses bitwise AND expressions.
///
/// Grammar: `bitand := shift ("&" shift)*`
pub fn parse_bitand<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_shift(tokens, depth)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::BitAnd)
        {
            let pos = *pos;
            tokens.next();
            let right = parse_shift(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses shift expressions.
///
/// Grammar: `shift := additive (("<<" | ">>") additive)*`
pub fn parse_shift<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens, depth)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Shl | BinaryOperator::Shr)
        {
            let pos = *pos;
            tokens.next();
            let right = parse_additive(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Recursion depth carried into operands.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let pos = *pos;
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `//`, and `%`.
///
/// The rule is:
/// `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Recursion depth carried into operands.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::FloorDiv
                       | BinaryOperator::Mod)
        {
            let pos = *pos;
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator (`+`, `-`, `*`, `/`, `//`, `%`, `**`, and the bitwise and shift
/// operators). Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::ShiftLeft => Some(BinaryOperator::Shl),
        Token::ShiftRight => Some(BinaryOperator::Shr),
        _ => None,
    }
}

/// Maps a token to its corresponding comparison operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(CompareOperator)` if the token is a comparison operator, otherwise
/// `None`.
#[must_use]
pub const fn token_to_compare_operator(token: &Token) -> Option<CompareOperator> {
    match token {
        Token::Less => Some(CompareOperator::Less),
        Token::Greater => Some(CompareOperator::Greater),
        Token::LessEqual => Some(CompareOperator::LessEqual),
        Token::GreaterEqual => Some(CompareOperator::GreaterEqual),
        Token::EqualEqual => Some(CompareOperator::Equal),
        Token::BangEqual => Some(CompareOperator::NotEqual),
        _ => None,
    }
}
