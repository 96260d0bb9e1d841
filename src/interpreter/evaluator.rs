/// Core evaluation logic and the evaluator type.
///
/// Contains the `Evaluator`, the full text-to-value pipeline, and the
/// exhaustive node dispatch that enforces the whitelist.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation and unary plus, and rejects the parsed-but-forbidden
/// unary operators.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for the whitelisted arithmetic operators and the
/// rejection of everything else the grammar can produce.
pub mod binary;
