use crate::{
    ast::Node,
    error::EvalError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates `node` against `env`.
///
/// Convenience wrapper around [`Environment::eval`].
///
/// # Errors
/// Propagates the first [`EvalError`] raised while walking the tree.
///
/// # Example
/// ```
/// use iodine::{
///     interpreter::{
///         environment::Environment, evaluator::core::evaluate, lexer::lex, parser::core::parse,
///         value::Value,
///     },
/// };
///
/// let mut env = Environment::new();
/// let root = parse(&lex("x = 2 * 3").unwrap()).unwrap().unwrap();
///
/// assert_eq!(evaluate(&root, &mut env).unwrap(), Value::Int32(6));
/// assert_eq!(env.get("x"), Some(&Value::Int32(6)));
/// ```
pub fn evaluate(node: &Node, env: &mut Environment) -> EvalResult<Value> {
    env.eval(node)
}

impl Environment {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the node variant:
    /// - `ConstVal` returns its stored value unchanged.
    /// - `Arithmetic` evaluates `a`, then `b`, then applies the operation.
    /// - `UnaryOp` evaluates its operand and applies the operation.
    /// - `VariableReference` reads the current binding.
    /// - `VarAssignment` evaluates its value, binds it and returns it.
    ///
    /// Evaluation stops at the first error. Assignments that completed
    /// before that point stay in effect.
    ///
    /// # Parameters
    /// - `node`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    pub fn eval(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::ConstVal { val } => Ok(*val),
            Node::Arithmetic { a, b, operation } => {
                let left = self.eval(a)?;
                let right = self.eval(b)?;
                Self::eval_arithmetic(*operation, left, right)
            },
            Node::UnaryOp { operand, operation } => {
                let value = self.eval(operand)?;
                Self::eval_unary(*operation, value)
            },
            Node::VariableReference { name } => self.eval_variable(name),
            Node::VarAssignment { name, value } => self.eval_assignment(name, value),
        }
    }

    /// Looks up a variable and returns its current value.
    ///
    /// # Errors
    /// `UndefinedVariable` if nothing was ever assigned to `name`.
    fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.get(name)
            .copied()
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }

    /// Evaluates `value`, binds the result to `name` and returns it.
    ///
    /// The value expression may itself contain assignments; those run first,
    /// left to right as written.
    fn eval_assignment(&mut self, name: &str, value: &Node) -> EvalResult<Value> {
        let value = self.eval(value)?;
        let previous = self.assign(name, value);
        tracing::debug!(name, %value, previous = ?previous, "assigned variable");
        Ok(value)
    }
}
