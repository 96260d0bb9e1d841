use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    util::num::i64_to_u32_checked,
};

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer base with a non-negative integer exponent uses checked
    /// arithmetic and stays integral. Negative integer exponents are
    /// computed in floating-point form. In all other cases, operands are
    /// promoted to real numbers and evaluated with `powf`, with two explicit
    /// guards:
    ///
    /// - a zero base with a negative exponent is division by zero;
    /// - a negative base with a fractional exponent has no real result and
    ///   is rejected rather than producing a NaN.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `pos`: Source byte offset for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ** exponent`.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let b = Value::Integer(2);
    /// let e = Value::Integer(10);
    ///
    /// let result = Evaluator::eval_pow(&b, &e, 1).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, pos: usize) -> EvalResult<Value> {
        use Value::{Integer, Real};

        match (base, exponent) {
            (Integer(b), Integer(e)) if *e >= 0 => {
                b.checked_pow(i64_to_u32_checked(*e, pos)?)
                 .map(Integer)
                 .ok_or(RuntimeError::Overflow { pos })
            },
            _ => {
                let b = base.as_real(pos)?;
                let e = exponent.as_real(pos)?;

                if b == 0.0 && e < 0.0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }
                if b < 0.0 && e.fract() != 0.0 {
                    return Err(RuntimeError::DomainError { pos });
                }
                Ok(Real(b.powf(e)))
            },
        }
    }
}
