use std::borrow::Cow;

use crate::interpreter::{lexer::Token, parser::core::MAX_NESTING_DEPTH, value::ValueKind};

/// Represents all errors that can occur during parsing.
///
/// Variants that are triggered by a concrete token carry that token so the
/// caller can point at the offending input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token that cannot start or continue the expression.
    #[error("Unexpected token {found}, expected {expected}.")]
    UnexpectedToken {
        /// The token encountered.
        found:    Token,
        /// Description of what the parser was looking for.
        expected: String,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' but found {found}.")]
    ExpectedClosingParen {
        /// The token found in place of `)`.
        found: Token,
    },
    /// The left side of `=` is not a bare identifier.
    #[error("Invalid assignment target before {found}; only a variable name can be assigned.")]
    InvalidAssignmentTarget {
        /// The `=` token following the invalid target.
        found: Token,
    },
    /// Found extra tokens after a complete expression.
    #[error("Extra tokens after expression, starting at {found}.")]
    UnexpectedTrailingTokens {
        /// The first token that was not consumed.
        found: Token,
    },
    /// The token sequence ended without an end-of-input marker.
    #[error("Unexpected end of token stream, expected {expected}.")]
    UnexpectedEndOfInput {
        /// Description of what the parser was looking for.
        expected: String,
    },
    /// A numeric literal cannot be represented in its value kind.
    #[error("Literal '{text}' cannot be represented as {kind}.")]
    InvalidLiteral {
        /// Source text of the literal.
        text: String,
        /// The kind the literal maps to.
        kind: ValueKind,
    },
    /// Parentheses, prefix operators, assignments or operator chains nest
    /// deeper than [`MAX_NESTING_DEPTH`].
    #[error("Expression nests deeper than {} levels at {found}.", MAX_NESTING_DEPTH)]
    NestingTooDeep {
        /// The token that opened the level beyond the limit.
        found: Token,
    },
}

impl ParseError {
    /// Returns the token the error points at.
    ///
    /// `None` when no token is involved: the sequence ran out, or the
    /// literal itself was rejected.
    #[must_use]
    pub const fn found(&self) -> Option<&Token> {
        match self {
            Self::UnexpectedToken { found, .. }
            | Self::ExpectedClosingParen { found }
            | Self::InvalidAssignmentTarget { found }
            | Self::UnexpectedTrailingTokens { found }
            | Self::NestingTooDeep { found } => Some(found),
            Self::UnexpectedEndOfInput { .. } | Self::InvalidLiteral { .. } => None,
        }
    }

    /// Describes what the parser would have accepted instead.
    ///
    /// # Example
    /// ```
    /// use iodine::interpreter::{lexer::lex, parser::core::parse};
    ///
    /// let err = parse(&lex("(1 + 2").unwrap()).unwrap_err();
    /// assert_eq!(err.expected(), "')'");
    /// assert!(err.found().unwrap().is_eof());
    /// ```
    #[must_use]
    pub fn expected(&self) -> Cow<'_, str> {
        match self {
            Self::UnexpectedToken { expected, .. } | Self::UnexpectedEndOfInput { expected } => {
                Cow::Borrowed(expected)
            },
            Self::ExpectedClosingParen { .. } => Cow::Borrowed("')'"),
            Self::InvalidAssignmentTarget { .. } => Cow::Borrowed("a variable name before '='"),
            Self::UnexpectedTrailingTokens { .. } => Cow::Borrowed("end of input"),
            Self::InvalidLiteral { kind, .. } => Cow::Owned(format!("a literal within the {kind} range")),
            Self::NestingTooDeep { .. } => {
                Cow::Owned(format!("at most {MAX_NESTING_DEPTH} nested levels"))
            },
        }
    }
}
