use crate::{
    ast::UnaryOperation,
    error::EvalError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::Value},
};

impl Environment {
    /// Evaluates a unary operation on a value.
    ///
    /// `Negate` flips the sign and keeps the operand's kind. Negating the
    /// smallest 32-bit integer has no representable result and fails with
    /// `Overflow`.
    ///
    /// # Example
    /// ```
    /// use iodine::{
    ///     ast::UnaryOperation,
    ///     interpreter::{environment::Environment, value::Value},
    /// };
    ///
    /// let v = Environment::eval_unary(UnaryOperation::Negate, Value::Int32(5)).unwrap();
    /// assert_eq!(v, Value::Int32(-5));
    ///
    /// let v = Environment::eval_unary(UnaryOperation::Negate, Value::F32(0.5)).unwrap();
    /// assert_eq!(v, Value::F32(-0.5));
    /// ```
    pub fn eval_unary(op: UnaryOperation, value: Value) -> EvalResult<Value> {
        match op {
            UnaryOperation::Negate => match value {
                Value::F32(v) => Ok(Value::F32(-v)),
                Value::F64(v) => Ok(Value::F64(-v)),
                Value::Int32(n) => n.checked_neg()
                                    .map(Value::Int32)
                                    .ok_or(EvalError::Overflow { operation: op.name() }),
            },
        }
    }
}
