use crate::{
    ast::ArithOperation,
    error::EvalError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::Value},
};

impl Environment {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// Both operands must have the same kind; the result has that kind too.
    /// Mixed kinds are rejected rather than promoted.
    ///
    /// Integer arithmetic is checked: a zero divisor fails with
    /// `DivisionByZero` and a result outside the 32-bit range fails with
    /// `Overflow`. Float arithmetic follows IEEE-754, so dividing by zero
    /// yields an infinity or NaN instead of an error.
    ///
    /// # Errors
    /// - `TypeMismatch` if the operand kinds differ.
    /// - `DivisionByZero` for integer division by zero.
    /// - `Overflow` for out-of-range integer results.
    ///
    /// # Example
    /// ```
    /// use iodine::{
    ///     ast::ArithOperation,
    ///     error::EvalError,
    ///     interpreter::{environment::Environment, value::Value},
    /// };
    ///
    /// let sum = Environment::eval_arithmetic(ArithOperation::Add, Value::Int32(3), Value::Int32(4));
    /// assert_eq!(sum.unwrap(), Value::Int32(7));
    ///
    /// let mixed = Environment::eval_arithmetic(ArithOperation::Add, Value::Int32(1), Value::F64(1.0));
    /// assert!(matches!(mixed, Err(EvalError::TypeMismatch { .. })));
    /// ```
    pub fn eval_arithmetic(op: ArithOperation, left: Value, right: Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Int32(a), Value::Int32(b)) => Self::eval_integer_op(op, a, b).map(Value::Int32),
            (Value::F64(a), Value::F64(b)) => Ok(Value::F64(match op {
                                                    ArithOperation::Add => a + b,
                                                    ArithOperation::Sub => a - b,
                                                    ArithOperation::Mul => a * b,
                                                    ArithOperation::Div => a / b,
                                                })),
            (Value::F32(a), Value::F32(b)) => Ok(Value::F32(match op {
                                                    ArithOperation::Add => a + b,
                                                    ArithOperation::Sub => a - b,
                                                    ArithOperation::Mul => a * b,
                                                    ArithOperation::Div => a / b,
                                                })),
            _ => {
                tracing::debug!(operation = op.name(), left = %left.kind(), right = %right.kind(),
                                "operand kinds differ");
                Err(EvalError::TypeMismatch { operation: op,
                                              left:      left.kind(),
                                              right:     right.kind(), })
            },
        }
    }

    fn eval_integer_op(op: ArithOperation, a: i32, b: i32) -> EvalResult<i32> {
        let result = match op {
            ArithOperation::Add => a.checked_add(b),
            ArithOperation::Sub => a.checked_sub(b),
            ArithOperation::Mul => a.checked_mul(b),
            ArithOperation::Div => {
                if b == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                a.checked_div(b)
            },
        };
        result.ok_or(EvalError::Overflow { operation: op.name() })
    }
}
