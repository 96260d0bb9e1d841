use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation for integers and reals, checked against
    ///   integer overflow.
    /// - `Plus`: returns the operand unchanged.
    ///
    /// `Not` and `Invert` parse but sit outside the whitelist; both are
    /// rejected here. The match is exhaustive over `UnaryOperator`, so a new
    /// prefix operator cannot reach evaluation without an explicit decision
    /// in this table.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `pos`: Source byte offset for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use safecalc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// // Negation
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// // Unary plus
    /// let v = Evaluator::eval_unary(UnaryOperator::Plus, &Value::Real(2.5), 1).unwrap();
    /// assert_eq!(v, Value::Real(2.5));
    ///
    /// // Logical not is parsed but never computed.
    /// let err = Evaluator::eval_unary(UnaryOperator::Not, &Value::Integer(1), 1);
    /// assert!(err.is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, pos: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { pos }),
                Value::Real(r) => Ok(Value::Real(-r)),
            },
            UnaryOperator::Plus => Ok(*value),
            UnaryOperator::Not | UnaryOperator::Invert => {
                Err(RuntimeError::UnsupportedOperator { op: op.to_string(),
                                                        pos })
            },
        }
    }
}
