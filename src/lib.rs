//! # iodine
//!
//! iodine is an interactive evaluator for a small arithmetic expression
//! language. Each input line is tokenized, parsed into an abstract syntax
//! tree and evaluated against a variable environment that persists for the
//! whole session.
//!
//! Values are strictly typed: 32-bit integers, 32-bit floats and 64-bit
//! floats never mix implicitly.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        lexer::{Token, lex},
        parser::core::{ParseOptions, parse_with},
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the operation enums that
/// represent one expression as a tree. The tree is built by the parser and
/// walked by the evaluator.
pub mod ast;
/// Text renderings of tokens and trees for diagnostics.
///
/// Read-only views used by the REPL to show what the lexer and parser
/// produced for a line.
pub mod diagnostics;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error type per pipeline stage.
/// - Provides the umbrella [`error::Error`] used at the line boundary.
pub mod error;
/// Orchestrates the stages of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the variable environment.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for each stage.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
///
/// Reads lines from any buffered reader, runs them through a [`Session`] and
/// writes diagnostics and results to any writer.
pub mod repl;

pub use error::Error;

/// What the pipeline produced for one line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// The token sequence, including the end-of-input marker.
    pub tokens: Vec<Token>,
    /// The parsed tree, `None` for a blank line.
    pub ast:    Option<Node>,
    /// The evaluated value, `None` for a blank line.
    pub value:  Option<Value>,
}

/// One evaluation session.
///
/// A session owns its [`Environment`], so variables assigned on one line are
/// visible on every later line of the same session and never leak into
/// another session. Sessions are not meant to be shared between threads;
/// give each caller its own.
///
/// # Example
/// ```
/// use iodine::{Session, interpreter::value::Value};
///
/// let mut session = Session::new();
/// session.run_line("x = 5").unwrap();
///
/// let outcome = session.run_line("x + 1").unwrap();
/// assert_eq!(outcome.value, Some(Value::Int32(6)));
///
/// // Errors end the line, not the session.
/// assert!(session.run_line("y").is_err());
/// assert_eq!(session.run_line("x").unwrap().value, Some(Value::Int32(5)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    environment: Environment,
    options:     ParseOptions,
}

impl Session {
    /// Creates a session with an empty environment and default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with an empty environment and the given options.
    #[must_use]
    pub fn with_options(options: ParseOptions) -> Self {
        Self { environment: Environment::new(),
               options }
    }

    #[must_use]
    pub const fn options(&self) -> ParseOptions {
        self.options
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Drops every variable binding.
    pub fn reset(&mut self) {
        self.environment.clear();
    }

    /// Tokenizes and parses one line without evaluating it.
    ///
    /// # Errors
    /// Returns the lexing or parsing error of the line.
    pub fn parse_line(&self, line: &str) -> Result<(Vec<Token>, Option<Node>), Error> {
        let tokens = lex(line)?;
        let ast = parse_with(&tokens, self.options)?;
        Ok((tokens, ast))
    }

    /// Evaluates a parsed tree against the session's environment.
    pub fn evaluate(&mut self, root: &Node) -> EvalResult<Value> {
        self.environment.eval(root)
    }

    /// Runs one line through the whole pipeline.
    ///
    /// # Errors
    /// Returns the first error of any stage. Assignments that finished
    /// before an evaluation error remain in the environment.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run_line(&mut self, line: &str) -> Result<LineOutcome, Error> {
        let (tokens, ast) = self.parse_line(line)?;
        let value = ast.as_ref().map(|root| self.evaluate(root)).transpose()?;

        Ok(LineOutcome { tokens,
                         ast,
                         value })
    }
}
