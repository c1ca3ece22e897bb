use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The variable binding table of one session.
///
/// Maps each variable name to the value it was most recently assigned.
/// Entries are only created or overwritten by evaluating an assignment and
/// live as long as the environment itself. The environment is owned by the
/// caller and passed by mutable reference into evaluation, so independent
/// sessions never share bindings.
///
/// # Example
/// ```
/// use iodine::interpreter::{environment::Environment, value::Value};
///
/// let mut env = Environment::new();
/// assert!(env.get("x").is_none());
///
/// env.assign("x", Value::Int32(5));
/// assert_eq!(env.get("x"), Some(&Value::Int32(5)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding and its kind.
    ///
    /// Returns the value that was bound before, if any.
    pub fn assign(&mut self, name: &str, value: Value) -> Option<Value> {
        self.variables.insert(name.to_owned(), value)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns all bindings ordered by variable name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        let mut bindings: Vec<_> = self.variables
                                       .iter()
                                       .map(|(name, value)| (name.as_str(), value))
                                       .collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings.into_iter()
    }

    /// Drops every binding.
    pub fn clear(&mut self) {
        self.variables.clear();
    }
}
