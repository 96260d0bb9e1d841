use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{Depth, ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (unary plus)
/// - `~`  (bitwise inversion; parsed, rejected at evaluation)
///
/// Unary operators are right-associative, so an input like `-+x` is parsed
/// as `-( +x )`. If no prefix operator is present, the function delegates to
/// [`parse_power`].
///
/// Every call descends one depth level. All recursion cycles of the grammar
/// (grouping, prefix chains, exponent towers) pass through here, so this
/// single guard bounds the parser's stack usage.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "~") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Recursion depth for the current sub-expression.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let next_pos = tokens.peek().map_or(0, |t| t.1);
    let depth = depth.deeper(next_pos)?;

    if let Some((Token::Minus, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();
        let expr = parse_unary(tokens, depth)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(expr),
                           pos })
    } else if let Some((Token::Plus, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();
        let expr = parse_unary(tokens, depth)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Plus,
                           expr: Box::new(expr),
                           pos })
    } else if let Some((Token::Tilde, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();
        let expr = parse_unary(tokens, depth)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Invert,
                           expr: Box::new(expr),
                           pos })
    } else {
        parse_power(tokens, depth)
    }
}

/// Parses an exponentiation expression.
///
/// `**` is right-associative and binds tighter than the prefix operators on
/// its left, matching the conventional reading where `-2 ** 2` is `-(2 **
/// 2)` while `2 ** -1` negates only the exponent.
///
/// Grammar: `power := postfix ["**" unary]`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Recursion depth for the current sub-expression.
///
/// # Returns
/// An exponentiation node, or the base expression when no `**` follows.
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let primary = parse_primary(tokens, depth)?;
    let left = parse_postfix(tokens, primary, depth)?;

    if let Some((Token::DoubleStar, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();
        let right = parse_unary(tokens, depth)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(right),
                                   pos });
    }

    Ok(left)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric, string, and boolean literals
/// - names
/// - parenthesized expressions and tuple displays
/// - list displays
///
/// This function does not handle prefix or postfix operators. It dispatches
/// to specialized parsing functions depending on the leading token.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | name
///              | "(" expression ")"
///              | "(" elements ")"
///              | "[" elements "]"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `depth`: Recursion depth for the current sub-expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { pos: 0 })?;

    match peeked {
        (Token::Real(..) | Token::Integer(..) | Token::Bool(..) | Token::Str(..), _) => {
            parse_literal(tokens)
        },
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (Token::LBracket, _) => parse_list_literal(tokens, depth),
        (Token::Identifier(_), _) => parse_name(tokens),
        (tok, pos) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                        pos:   *pos, }),
    }
}

/// Parses postfix operators applied to an expression.
///
/// This function is called after parsing a primary expression and handles
/// three kinds of postfix constructs:
///
/// 1. **Calls** `expr(arg1, arg2, ...)`
/// 2. **Attribute access** `expr.name`
/// 3. **Subscripts** `expr[index]`
///
/// All three parse into nodes the evaluator rejects; chaining is allowed so
/// that input like `().__class__.__bases__[0]` fails with an operator
/// rejection rather than a confusing syntax error.
///
/// Parsing continues until no further postfix operator is found.
///
/// Grammar:
/// ```text
///     postfix := primary
///              | postfix "(" elements ")"
///              | postfix "." NAME
///              | postfix "[" expression "]"
/// ```
/// # Parameters
/// - `tokens`: Token iterator after a primary expression.
/// - `node`: The expression to which postfix operators will be applied.
/// - `depth`: Recursion depth for nested argument/index expressions.
///
/// # Returns
/// An updated [`Expr`] with all postfix operators folded in.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a `(` or `[` is not properly closed,
/// - an attribute name is missing after `.`,
/// - an argument or index expression fails to parse.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>,
                        mut node: Expr,
                        depth: Depth)
                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        // Call arguments.
        if let Some((Token::LParen, pos)) = tokens.peek() {
            let pos = *pos;
            tokens.next();
            let arguments =
                parse_comma_separated(tokens, |t| parse_expression(t, depth), &Token::RParen)?;
            node = Expr::Call { callee: Box::new(node),
                                arguments,
                                pos };
            continue;
        }
        // Attribute access.
        if let Some((Token::Dot, pos)) = tokens.peek() {
            let pos = *pos;
            tokens.next();
            match tokens.next() {
                Some((Token::Identifier(name), _)) => {
                    node = Expr::Attribute { object: Box::new(node),
                                             name: name.clone(),
                                             pos };
                },
                Some((tok, p)) => {
                    return Err(ParseError::UnexpectedToken { token: format!("Expected attribute name, found {tok:?}"),
                                                             pos:   *p, });
                },
                None => return Err(ParseError::UnexpectedEndOfInput { pos }),
            }
            continue;
        }
        // Subscripting.
        if let Some((Token::LBracket, pos)) = tokens.peek() {
            let pos = *pos;
            tokens.next();
            let index = parse_expression(tokens, depth)?;
            match tokens.next() {
                Some((Token::RBracket, _)) => {
                    node = Expr::Subscript { object: Box::new(node),
                                             index: Box::new(index),
                                             pos };
                },
                _ => return Err(ParseError::ExpectedClosingBracket { pos }),
            }
            continue;
        }
        break;
    }
    Ok(node)
}

/// Parses a numeric, string, or boolean literal.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), pos)) => Ok(Expr::Literal { value: (*n).into(),
                                                             pos:   *pos, }),
        Some((Token::Real(n), pos)) => Ok(Expr::Literal { value: (*n).into(),
                                                          pos:   *pos, }),
        Some((Token::Bool(b), pos)) => Ok(Expr::Literal { value: (*b).into(),
                                                          pos:   *pos, }),
        Some((Token::Str(s), pos)) => Ok(Expr::Literal { value: s.as_str().into(),
                                                         pos:   *pos, }),
        _ => unreachable!(),
    }
}

/// Parses a bare name.
///
/// Names always parse and are always rejected at evaluation; the calculator
/// defines no variables.
fn parse_name<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), pos)) => Ok(Expr::Name { name: name.clone(),
                                                                pos:  *pos, }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression or a tuple display.
///
/// Expected forms: `( expression )`, `( expr "," ... )`, or `()`.
///
/// A single parenthesized expression is returned as-is (no wrapper node); a
/// comma anywhere inside produces an `Expr::Tuple`, which the evaluator
/// rejects. Failure to find the closing parenthesis yields
/// `ParseError::ExpectedClosingParen`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `depth`: Recursion depth for the inner expressions.
///
/// # Returns
/// The inner expression, or a tuple node.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, pos) = *tokens.next().unwrap();

    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::Tuple { elements: Vec::new(),
                                pos });
    }

    let expr = parse_expression(tokens, depth)?;

    if let Some((Token::Comma, _)) = tokens.peek() {
        let mut elements = vec![expr];
        while let Some((Token::Comma, _)) = tokens.peek() {
            tokens.next();
            if let Some((Token::RParen, _)) = tokens.peek() {
                break;
            }
            elements.push(parse_expression(tokens, depth)?);
        }
        return match tokens.next() {
            Some((Token::RParen, _)) => Ok(Expr::Tuple { elements, pos }),
            _ => Err(ParseError::ExpectedClosingParen { pos }),
        };
    }

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { pos }),
    }
}

/// Parses a list display of the form `[expr1, expr2, ..., exprN]`.
///
/// Elements are parsed using `parse_expression`, separated by commas. The
/// resulting node is rejected at evaluation; it exists so that collection
/// input fails with a typed rejection.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[`.
/// - `depth`: Recursion depth for the element expressions.
///
/// # Returns
/// An [`Expr::List`] node containing the parsed elements.
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, pos) = *tokens.next().unwrap();
    let elements = parse_comma_separated(tokens, |t| parse_expression(t, depth), &Token::RBracket)?;
    Ok(Expr::List { elements, pos })
}
