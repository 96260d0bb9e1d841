/// Binary operator dispatch.
///
/// Routes each operator to its handler, or to a rejection.
pub mod core;

/// Scalar arithmetic.
///
/// Addition, subtraction, multiplication, and the three division-family
/// operators, with integer/real promotion.
pub mod scalar;

/// Exponentiation.
pub mod power;
