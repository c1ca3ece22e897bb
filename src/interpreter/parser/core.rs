use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::binary::parse_additive,
        value::ValueKind,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The value kind produced by real literals without an explicit suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FloatKind {
    /// 32-bit floating point.
    F32,
    /// 64-bit floating point.
    #[default]
    F64,
}

impl From<FloatKind> for ValueKind {
    fn from(kind: FloatKind) -> Self {
        match kind {
            FloatKind::F32 => Self::F32,
            FloatKind::F64 => Self::F64,
        }
    }
}

/// Settings that influence how tokens are mapped onto the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Kind of unsuffixed real literals such as `1.5` or `2e3`.
    pub float_kind: FloatKind,
}

/// Parses one line of tokens with the default options.
///
/// See [`parse_with`].
///
/// # Errors
/// Returns a [`ParseError`] if the tokens do not form exactly one expression.
///
/// # Example
/// ```
/// use iodine::{
///     ast::{ArithOperation, Node},
///     interpreter::{lexer::lex, parser::core::parse},
/// };
///
/// let tokens = lex("1 + 2").unwrap();
/// let root = parse(&tokens).unwrap();
/// assert_eq!(root,
///            Some(Node::arithmetic(Node::constant(1), ArithOperation::Add, Node::constant(2))));
///
/// // A blank line is not an error, it just has no tree.
/// assert_eq!(parse(&lex("   ").unwrap()).unwrap(), None);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Option<Node>> {
    parse_with(tokens, ParseOptions::default())
}

/// Parses one line of tokens into a single root node.
///
/// The sequence is expected to end with a [`TokenKind::Eof`] token, as
/// produced by the lexer. A sequence holding only that marker is a blank
/// line and yields `Ok(None)`.
///
/// Grammar:
/// ```text
///     line       := EOF | expression EOF
///     expression := IDENT "=" expression | additive
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if the sequence runs out before an end marker.
/// - `UnexpectedTrailingTokens` if tokens remain after a complete
///   expression.
/// - `NestingTooDeep` if the expression nests deeper than
///   [`MAX_NESTING_DEPTH`].
/// - Any error raised while parsing the expression itself.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn parse_with(tokens: &[Token], options: ParseOptions) -> ParseResult<Option<Node>> {
    let mut iter = tokens.iter().peekable();

    let blank = match iter.peek() {
        Some(token) => token.is_eof(),
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: "end of input".to_string() });
        },
    };

    if blank {
        iter.next();
        expect_exhausted(&mut iter)?;
        tracing::trace!("blank line");
        return Ok(None);
    }

    let root = parse_expression(&mut iter, options, 0)?.node;
    expect_end(&mut iter)?;

    tracing::debug!(root = root.name(), "parsed line");
    Ok(Some(root))
}

/// Deepest nesting a line may reach.
///
/// Counts both the parser's own recursion (parentheses, prefix operators,
/// chained assignments) and the height of the resulting tree, so every tree
/// that parses can also be evaluated, printed and dropped without exhausting
/// the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A parsed subtree together with its height.
///
/// The height is the number of nodes on the longest path from `node` down to
/// a leaf.
pub(crate) struct Parsed {
    pub(crate) node:   Node,
    pub(crate) height: usize,
}

impl Parsed {
    pub(crate) const fn leaf(node: Node) -> Self {
        Self { node, height: 1 }
    }

    /// Wraps `node`, whose tallest child has `child_height`.
    ///
    /// # Errors
    /// `NestingTooDeep` at `token` if the new height exceeds
    /// [`MAX_NESTING_DEPTH`].
    pub(crate) fn branch(node: Node, child_height: usize, token: &Token) -> ParseResult<Self> {
        let height = child_height + 1;
        if height > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { found: token.clone() });
        }
        Ok(Self { node, height })
    }
}

/// Steps one recursion level deeper, triggered by `token`.
///
/// # Errors
/// `NestingTooDeep` at `token` once [`MAX_NESTING_DEPTH`] is passed.
pub(crate) fn descend(depth: usize, token: &Token) -> ParseResult<usize> {
    let depth = depth + 1;
    if depth > MAX_NESTING_DEPTH {
        tracing::debug!(depth, "nesting limit reached");
        return Err(ParseError::NestingTooDeep { found: token.clone() });
    }
    Ok(depth)
}

/// Parses a full expression, including assignments.
///
/// Assignment has the lowest precedence and is right-associative: the value
/// of `a = b = 1` is parsed as `a = (b = 1)`, so the assigned expression
/// always spans the rest of the enclosing expression. Only a bare identifier
/// may stand to the left of `=`.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `options`: Literal mapping settings.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// A [`Node::VarAssignment`] or the additive expression.
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                                      options: ParseOptions,
                                      depth: usize)
                                      -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut ahead = tokens.clone();
    if let (Some(target), Some(eq)) = (ahead.next(), ahead.next())
       && target.kind == TokenKind::Identifier
       && eq.kind == TokenKind::Equals
    {
        tokens.next();
        tokens.next();
        let value = parse_expression(tokens, options, descend(depth, eq)?)?;
        return Parsed::branch(Node::assignment(target.text.clone(), value.node),
                              value.height,
                              eq);
    }

    let expr = parse_additive(tokens, options, depth)?;

    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::Equals
    {
        return Err(ParseError::InvalidAssignmentTarget { found: (*token).clone() });
    }

    Ok(expr)
}

/// Consumes the end marker and checks that nothing follows it.
fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.is_eof() => expect_exhausted(tokens),
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { found: token.clone() }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "end of input".to_string() }),
    }
}

fn expect_exhausted<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        None => Ok(()),
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { found: token.clone() }),
    }
}
