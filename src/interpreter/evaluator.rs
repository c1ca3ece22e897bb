/// Core evaluation logic for expressions.
///
/// Contains the tree-walk dispatch, variable resolution and assignment.
pub mod core;

/// Unary operator evaluation.
///
/// Handles operations that take a single operand, i.e. negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operations over operands of one kind.
pub mod binary;
