//! # safecalc
//!
//! safecalc is a calculator core that evaluates untrusted arithmetic
//! expressions under a fixed operator whitelist. Input is parsed into a
//! syntax tree and walked recursively; only numeric literals and the seven
//! whitelisted arithmetic operators (plus negation and unary plus) are ever
//! computed. Everything else the grammar accepts — names, calls, attribute
//! access, subscripts, strings, comparisons, boolean and bitwise operators,
//! collection displays — is rejected with a typed error before any of its
//! operands are visited, so arbitrary input can never trigger anything
//! beyond plain arithmetic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Evaluator, value::core::Value},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for every construct the grammar accepts,
///   including the ones that exist only to be rejected.
/// - Attaches source byte offsets to AST nodes for error reporting.
/// - Defines the operator enums whose exhaustive handling forms the
///   whitelist.
pub mod ast;
/// Calculator settings and their JSON file loader.
///
/// # Responsibilities
/// - Defines the `Config` struct with history and nesting-depth settings.
/// - Loads settings tolerantly from disk, logging and defaulting on failure.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// source offsets for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// A bounded log of past calculations.
///
/// # Responsibilities
/// - Records `"<expression> = <result>"` lines for successful evaluations.
/// - Evicts the oldest entry once the configured capacity is reached.
pub mod history;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and error handling to provide the complete pipeline from
/// source text to numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the `Evaluator` entry point for evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between integer and floating-point types without silent
///   data loss.
pub mod util;

/// Evaluates a single arithmetic expression with the default settings.
///
/// This is the convenience entry point for callers that do not need a
/// custom nesting limit; it parses and evaluates `source` with a fresh
/// [`Evaluator`]. The call is pure: no I/O, no retained state, and the same
/// input always produces the same result.
///
/// # Errors
/// Returns an error if the input does not parse as a single arithmetic
/// expression, or if evaluation rejects a construct or hits an arithmetic
/// failure such as division by zero.
///
/// # Examples
/// ```
/// use safecalc::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("3 + 4 * 2").unwrap(), Value::Integer(11));
/// assert_eq!(evaluate("(3 + 4) * 2").unwrap(), Value::Integer(14));
/// assert_eq!(evaluate("10 / 4").unwrap(), Value::Real(2.5));
///
/// // Division by zero is reported, not panicked.
/// assert!(evaluate("10 / 0").is_err());
///
/// // Anything outside plain arithmetic is refused.
/// assert!(evaluate("__import__('os')").is_err());
/// assert!(evaluate("[1, 2, 3]").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    Evaluator::new().evaluate(source)
}
