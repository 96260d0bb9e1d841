/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates whitelisted arithmetic
/// operations, and rejects every other construct before descending into it.
/// It is the security boundary of the crate.
///
/// # Responsibilities
/// - Evaluates numeric literals and whitelisted unary/binary operations.
/// - Rejects names, calls, attribute access, comparisons, boolean and bitwise
///   operators, and collection displays with typed errors.
/// - Reports arithmetic errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful elements such as numbers,
/// identifiers, operators, and delimiters. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles numeric, string, and boolean literals, identifiers, and
///   operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST representing the syntactic structure of a single expression. The
/// grammar accepts a superset of what the evaluator computes, so hostile
/// input fails with a typed rejection rather than a syntax surprise.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and syntax, reporting errors with source offsets.
/// - Bounds recursion depth while parsing nested constructs.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum with its integer and real variants.
/// - Implements safe promotion between numeric types.
pub mod value;
