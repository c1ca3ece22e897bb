use crate::interpreter::value::Value;

/// A binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOperation {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl ArithOperation {
    /// Returns the stable diagnostic name of the operation.
    ///
    /// # Example
    /// ```
    /// use iodine::ast::ArithOperation;
    ///
    /// assert_eq!(ArithOperation::Div.name(), "Div");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
        }
    }

    /// Returns the source symbol of the operation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for ArithOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A prefix operation on a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperation {
    /// Numeric negation, `-x`.
    Negate,
}

impl UnaryOperation {
    /// Returns the stable diagnostic name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Negate => "Negate",
        }
    }
}

impl std::fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An abstract syntax tree (AST) node representing one expression.
///
/// The variant set is closed: evaluation and diagnostic printing both match
/// exhaustively on it. Every non-leaf node exclusively owns its children, so
/// a parsed line is always a finite tree that is dropped as a whole once the
/// line has been evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal value.
    ConstVal {
        /// The constant value, already mapped to its kind.
        val: Value,
    },
    /// A binary arithmetic operation.
    Arithmetic {
        /// Left operand, evaluated first.
        a:         Box<Self>,
        /// Right operand.
        b:         Box<Self>,
        /// The operator.
        operation: ArithOperation,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The operand expression.
        operand:   Box<Self>,
        /// The unary operator to apply.
        operation: UnaryOperation,
    },
    /// Reference to a variable by name, resolved at evaluation time.
    VariableReference {
        /// Name of the variable.
        name: String,
    },
    /// Assignment of an expression's value to a variable.
    VarAssignment {
        /// Name of the assigned variable.
        name:  String,
        /// The expression producing the assigned value.
        value: Box<Self>,
    },
}

impl Node {
    /// Returns the stable diagnostic name of the node variant.
    ///
    /// # Example
    /// ```
    /// use iodine::{ast::Node, interpreter::value::Value};
    ///
    /// let node = Node::ConstVal { val: Value::Int32(1) };
    /// assert_eq!(node.name(), "ConstVal");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ConstVal { .. } => "ConstVal",
            Self::Arithmetic { .. } => "Arithmetic",
            Self::UnaryOp { .. } => "UnaryOp",
            Self::VariableReference { .. } => "VariableReference",
            Self::VarAssignment { .. } => "VarAssignment",
        }
    }

    #[must_use]
    pub fn constant(val: impl Into<Value>) -> Self {
        Self::ConstVal { val: val.into() }
    }

    #[must_use]
    pub fn arithmetic(a: Self, operation: ArithOperation, b: Self) -> Self {
        Self::Arithmetic { a: Box::new(a),
                           b: Box::new(b),
                           operation }
    }

    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::UnaryOp { operand:   Box::new(operand),
                        operation: UnaryOperation::Negate, }
    }

    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::VariableReference { name: name.into() }
    }

    #[must_use]
    pub fn assignment(name: impl Into<String>, value: Self) -> Self {
        Self::VarAssignment { name:  name.into(),
                              value: Box::new(value), }
    }
}
