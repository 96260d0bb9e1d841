use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// This match *is* the operator whitelist. The arithmetic operators
    /// route to their handlers; the bitwise and shift operators, which the
    /// grammar accepts so that they can be named in the error, are rejected
    /// here. The match is exhaustive over `BinaryOperator`, so an operator
    /// added to the grammar without a decision in this table fails to
    /// compile.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `pos`: Source byte offset for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use safecalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::BitAnd, &left, &right, 1);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       pos: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, BitAnd, BitOr, BitXor, Div, FloorDiv, Mod, Mul, Pow, Shl, Shr, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right, pos),

            FloorDiv => Self::eval_floor_div(left, right, pos),

            Mod => Self::eval_mod(left, right, pos),

            Pow => Self::eval_pow(left, right, pos),

            BitAnd | BitOr | BitXor | Shl | Shr => {
                Err(RuntimeError::UnsupportedOperator { op: op.to_string(),
                                                        pos })
            },
        }
    }
}
