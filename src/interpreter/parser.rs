/// Parser entry points and the assignment level of the grammar.
///
/// Holds [`core::parse`], [`core::parse_with`], the parser options and the
/// checks that the whole token sequence, and nothing beyond it, was consumed.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, literals, identifiers and parenthesized
/// sub-expressions.
pub mod unary;
