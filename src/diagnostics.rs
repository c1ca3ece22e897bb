use std::fmt;

use crate::{
    ast::Node,
    interpreter::{environment::Environment, lexer::Token},
};

/// Renders a token sequence, one token per line.
///
/// Created by [`dump_tokens`].
pub struct TokenDump<'a> {
    tokens: &'a [Token],
}

/// Renders an AST as an indented tree, two spaces per level.
///
/// Created by [`dump_ast`]. Variable references also show the kind of the
/// value currently bound to them, or `unbound`.
pub struct AstDump<'a> {
    root: &'a Node,
    env:  &'a Environment,
}

/// Returns a displayable listing of `tokens`.
///
/// # Example
/// ```
/// use iodine::{diagnostics::dump_tokens, interpreter::lexer::lex};
///
/// let tokens = lex("x + 1").unwrap();
/// assert_eq!(dump_tokens(&tokens).to_string(),
///            "Token: Identifier (x)\nToken: Plus (+)\nToken: Integer (1)\nToken: Eof ()\n");
/// ```
#[must_use]
pub const fn dump_tokens(tokens: &[Token]) -> TokenDump<'_> {
    TokenDump { tokens }
}

/// Returns a displayable tree view of `root`.
///
/// # Example
/// ```
/// use iodine::{
///     ast::Node,
///     diagnostics::dump_ast,
///     interpreter::environment::Environment,
/// };
///
/// let env = Environment::new();
/// let root = Node::negate(Node::constant(2));
/// assert_eq!(dump_ast(&root, &env).to_string(),
///            "Node type: UnaryOp\noperation: Negate\nchild:\n  Node type: ConstVal\n  val: 2\n");
/// ```
#[must_use]
pub const fn dump_ast<'a>(root: &'a Node, env: &'a Environment) -> AstDump<'a> {
    AstDump { root, env }
}

impl fmt::Display for TokenDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.tokens {
            writeln!(f, "Token: {} ({})", token.kind, token.text)?;
        }
        Ok(())
    }
}

impl fmt::Display for AstDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.root, self.env, 0)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>,
              node: &Node,
              env: &Environment,
              depth: usize)
              -> fmt::Result {
    let indent = "  ".repeat(depth);
    writeln!(f, "{indent}Node type: {}", node.name())?;

    match node {
        Node::ConstVal { val } => writeln!(f, "{indent}val: {val}"),
        Node::Arithmetic { a, b, operation } => {
            writeln!(f, "{indent}a:")?;
            write_node(f, a, env, depth + 1)?;
            writeln!(f, "{indent}b:")?;
            write_node(f, b, env, depth + 1)?;
            writeln!(f, "{indent}operation: {operation}")
        },
        Node::UnaryOp { operand, operation } => {
            writeln!(f, "{indent}operation: {operation}")?;
            writeln!(f, "{indent}child:")?;
            write_node(f, operand, env, depth + 1)
        },
        Node::VarAssignment { name, value } => {
            writeln!(f, "{indent}variable name: {name}")?;
            writeln!(f, "{indent}value:")?;
            write_node(f, value, env, depth + 1)
        },
        Node::VariableReference { name } => {
            writeln!(f, "{indent}varname: {name}")?;
            match env.get(name) {
                Some(value) => writeln!(f, "{indent}varinfo: {}", value.kind()),
                None => writeln!(f, "{indent}varinfo: unbound"),
            }
        },
    }
}
