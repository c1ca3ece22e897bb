/// The environment module holds variable bindings between lines.
///
/// The environment is owned by whoever drives evaluation and passed by
/// mutable reference into every evaluation call; there is no global state.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree depth first, left operand before right,
/// performs arithmetic on matching value kinds and records assignments in
/// the environment.
///
/// # Responsibilities
/// - Evaluates every AST node variant.
/// - Reads and writes variables through the [`environment::Environment`].
/// - Reports runtime errors such as undefined variables, kind mismatches and
///   integer division by zero.
pub mod evaluator;
/// The lexer module tokenizes one line of source for further parsing.
///
/// The lexer reads the raw text and produces a lazy stream of tokens
/// (numbers, identifiers, operators and parentheses) terminated by an
/// end-of-input marker.
///
/// # Responsibilities
/// - Converts the input characters into tokens with kind, text and span.
/// - Skips whitespace.
/// - Reports the first unrecognized character and its column.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level, from
/// assignment (lowest) through additive, multiplicative and unary down to
/// primary expressions.
///
/// # Responsibilities
/// - Converts tokens into a single root [`crate::ast::Node`].
/// - Maps numeric literals onto value kinds.
/// - Rejects malformed input, including leftover tokens.
pub mod parser;
/// The value module defines the runtime numeric values.
///
/// A value is exactly one of a 32-bit float, a 64-bit float or a 32-bit
/// integer, tagged by its [`value::ValueKind`].
pub mod value;
