use crate::{ast::ArithOperation, interpreter::value::ValueKind};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Tried to read a variable that was never assigned.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The operands of a binary operation have different kinds.
    #[error("Type mismatch: cannot apply '{}' to {left} and {right}.", operation.symbol())]
    TypeMismatch {
        /// The operation that was applied.
        operation: ArithOperation,
        /// Kind of the left operand.
        left:      ValueKind,
        /// Kind of the right operand.
        right:     ValueKind,
    },
    /// Integer division with a zero divisor.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An integer operation produced a result outside the 32-bit range.
    #[error("Integer overflow in {operation}.")]
    Overflow {
        /// Name of the operation.
        operation: &'static str,
    },
}
