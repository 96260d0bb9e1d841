/// Core parsing entry points and depth accounting.
///
/// Contains the expression entry point shared by all delimited contexts and
/// the `Depth` guard that bounds parser recursion.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence ladder for all binary operators, including the
/// boolean, comparison, bitwise, and shift levels that exist only to be
/// rejected later.
pub mod binary;

/// Unary, power, postfix, and primary parsing.
///
/// Handles prefix operators, right-associative exponentiation, call and
/// attribute and subscript postfixes, and the atomic expressions.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers shared between delimited list contexts.
pub mod utils;
