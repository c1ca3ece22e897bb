use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{FloatKind, ParseOptions, ParseResult, Parsed, descend, parse_expression},
        value::{Value, ValueKind},
    },
};

const PRIMARY_EXPECTED: &str = "a number, a variable name or '('";

/// Parses a unary expression.
///
/// Supports prefix `-` (numeric negation). Unary operators are
/// right-associative, so `--x` is parsed as `-(-x)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                                 options: ParseOptions,
                                 depth: usize)
                                 -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(&token) = tokens.peek()
       && token.kind == TokenKind::Minus
    {
        tokens.next();
        let operand = parse_unary(tokens, options, descend(depth, token)?)?;
        return Parsed::branch(Node::negate(operand.node), operand.height, token);
    }
    parse_primary(tokens, options, depth)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := INTEGER | FLOAT
///              | IDENT
///              | "(" expression ")"
/// ```
///
/// # Errors
/// `UnexpectedToken` for any other token, including the end marker,
/// `UnexpectedEndOfInput` if the sequence is exhausted and `NestingTooDeep`
/// once parentheses nest too deeply.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   options: ParseOptions,
                                   depth: usize)
                                   -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.next()
                      .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected:
                                                                            PRIMARY_EXPECTED.to_string() })?;

    match token.kind {
        TokenKind::Integer | TokenKind::Float => {
            Ok(Parsed::leaf(Node::ConstVal { val: parse_literal(token, options)? }))
        },
        TokenKind::Identifier => Ok(Parsed::leaf(Node::variable(token.text.clone()))),
        TokenKind::LParen => parse_grouping(tokens, options, descend(depth, token)?),
        _ => Err(ParseError::UnexpectedToken { found:    token.clone(),
                                               expected: PRIMARY_EXPECTED.to_string(), }),
    }
}

/// Parses the remainder of a parenthesized expression.
///
/// Expected form `( expression )`, with the opening parenthesis already
/// consumed. Returns the inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         options: ParseOptions,
                         depth: usize)
                         -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens, options, depth)?;
    match tokens.next() {
        Some(token) if token.kind == TokenKind::RParen => Ok(expr),
        Some(token) => Err(ParseError::ExpectedClosingParen { found: token.clone() }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "')'".to_string() }),
    }
}

/// Maps a numeric literal token to its value.
///
/// - Integer literals become [`Value::Int32`].
/// - Real literals ending in `f` or `F` become [`Value::F32`].
/// - Any other real literal becomes the kind selected by
///   [`ParseOptions::float_kind`].
///
/// # Errors
/// `InvalidLiteral` if the literal does not fit its kind, e.g. an integer
/// beyond the 32-bit range or a real that overflows to infinity.
pub fn parse_literal(token: &Token, options: ParseOptions) -> ParseResult<Value> {
    let text = token.text.as_str();
    let invalid = |kind: ValueKind| ParseError::InvalidLiteral { text: text.to_string(),
                                                                 kind };

    if token.kind == TokenKind::Integer {
        return text.parse::<i32>()
                   .map(Value::Int32)
                   .map_err(|_| invalid(ValueKind::Int32));
    }

    let (digits, kind) = match text.strip_suffix(['f', 'F']) {
        Some(digits) => (digits, FloatKind::F32),
        None => (text, options.float_kind),
    };

    match kind {
        FloatKind::F32 => match digits.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(Value::F32(v)),
            _ => Err(invalid(ValueKind::F32)),
        },
        FloatKind::F64 => match digits.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Value::F64(v)),
            _ => Err(invalid(ValueKind::F64)),
        },
    }
}
