/// Lexing errors.
///
/// Raised when the lexer meets a character that starts no valid token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the abstract syntax
/// tree from a token sequence: unexpected tokens, unbalanced parentheses,
/// invalid assignment targets, trailing input and unrepresentable literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined variables, operand kind mismatches, integer division by zero and
/// integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::EvalError;

/// Any failure that can end the processing of one input line.
///
/// Every stage error converts into this type with `?`, so a caller driving
/// the whole pipeline only handles a single error type. None of these errors
/// is fatal to a session; the next line starts from a clean slate apart from
/// environment mutations that completed before the failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression failed while being evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
