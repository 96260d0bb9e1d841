use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// The function handles integer and real operands. Mixed types are
    /// promoted as needed. Integer addition, subtraction, and multiplication
    /// use checked arithmetic. True division always produces a real result
    /// and checks the divisor explicitly for all numeric categories. The
    /// operator must be one of `Add`, `Sub`, `Mul` or `Div`; other operators
    /// are not processed here.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `pos`: Source byte offset for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use safecalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let x = Value::Integer(10);
    /// let y = Value::Integer(4);
    ///
    /// let result = Evaluator::eval_scalar_op(BinaryOperator::Div, &x, &y, 1).unwrap();
    /// assert_eq!(result, Value::Real(2.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          pos: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => match op {
                Add => a.checked_add(*b)
                        .map(Integer)
                        .ok_or(RuntimeError::Overflow { pos }),
                Sub => a.checked_sub(*b)
                        .map(Integer)
                        .ok_or(RuntimeError::Overflow { pos }),
                Mul => a.checked_mul(*b)
                        .map(Integer)
                        .ok_or(RuntimeError::Overflow { pos }),
                Div => {
                    if *b == 0 {
                        return Err(RuntimeError::DivisionByZero { pos });
                    }
                    Ok(Real(left.as_real(pos)? / right.as_real(pos)?))
                },
                _ => unreachable!(),
            },
            _ => {
                let (left, right) = left.promote_to_real(*right, pos)?;
                let left = left.as_real(pos)?;
                let right = right.as_real(pos)?;

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => {
                                if right == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { pos });
                                }
                                left / right
                            },
                            _ => unreachable!(),
                        }))
            },
        }
    }

    /// Evaluates a floor division.
    ///
    /// Integer operands stay integral and round toward negative infinity, so
    /// `-7 // 2` is `-4`. Any real operand produces the floor of the real
    /// quotient. A zero divisor is an error for both categories.
    ///
    /// # Parameters
    /// - `left`: Dividend.
    /// - `right`: Divisor.
    /// - `pos`: Source byte offset for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the floored quotient.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let q = Evaluator::eval_floor_div(&Value::Integer(-7), &Value::Integer(2), 1).unwrap();
    /// assert_eq!(q, Value::Integer(-4));
    /// ```
    pub fn eval_floor_div(left: &Value, right: &Value, pos: usize) -> EvalResult<Value> {
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }
                let quotient = a.checked_div(*b).ok_or(RuntimeError::Overflow { pos })?;
                let remainder = a % b;
                if remainder != 0 && (remainder < 0) != (*b < 0) {
                    Ok(Integer(quotient - 1))
                } else {
                    Ok(Integer(quotient))
                }
            },
            _ => {
                let (left, right) = left.promote_to_real(*right, pos)?;
                let left = left.as_real(pos)?;
                let right = right.as_real(pos)?;

                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }
                Ok(Real((left / right).floor()))
            },
        }
    }

    /// Evaluates a modulo operation.
    ///
    /// The result is floored: it carries the divisor's sign, matching the
    /// floor-division rule so that `a == (a // b) * b + a % b` holds.
    /// A zero divisor is an error for both integer and real operands.
    ///
    /// # Parameters
    /// - `left`: Dividend.
    /// - `right`: Divisor.
    /// - `pos`: Source byte offset for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the remainder.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let m = Evaluator::eval_mod(&Value::Integer(-7), &Value::Integer(3), 1).unwrap();
    /// assert_eq!(m, Value::Integer(2));
    /// ```
    pub fn eval_mod(left: &Value, right: &Value, pos: usize) -> EvalResult<Value> {
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }
                let remainder = a.checked_rem(*b).ok_or(RuntimeError::Overflow { pos })?;
                if remainder != 0 && (remainder < 0) != (*b < 0) {
                    Ok(Integer(remainder + b))
                } else {
                    Ok(Integer(remainder))
                }
            },
            _ => {
                let (left, right) = left.promote_to_real(*right, pos)?;
                let left = left.as_real(pos)?;
                let right = right.as_real(pos)?;

                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }
                let remainder = left % right;
                if remainder != 0.0 && (remainder < 0.0) != (right < 0.0) {
                    Ok(Real(remainder + right))
                } else {
                    Ok(Real(remainder))
                }
            },
        }
    }
}
