use std::iter::Peekable;

use crate::{
    ast::{ArithOperation, Node},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseOptions, ParseResult, Parsed},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `1 - 2 - 3`
/// becomes `(1 - 2) - 3`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `options`: Literal mapping settings.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// A [`Node::Arithmetic`] tree representing the parsed expression.
pub(crate) fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                                    options: ParseOptions,
                                    depth: usize)
                                    -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens, options, depth)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_arith_operation(token.kind)
           && matches!(op, ArithOperation::Add | ArithOperation::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, options, depth)?;
            left = Parsed::branch(Node::arithmetic(left.node, op, right.node),
                                  left.height.max(right.height),
                                  token)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `options`: Literal mapping settings.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub(crate) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                          options: ParseOptions,
                                          depth: usize)
                                          -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens, options, depth)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_arith_operation(token.kind)
           && matches!(op, ArithOperation::Mul | ArithOperation::Div)
        {
            tokens.next();
            let right = parse_unary(tokens, options, depth)?;
            left = Parsed::branch(Node::arithmetic(left.node, op, right.node),
                                  left.height.max(right.height),
                                  token)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token kind to its corresponding arithmetic operation.
///
/// Returns `None` for every token that is not a binary operator.
///
/// # Example
/// ```
/// use iodine::{
///     ast::ArithOperation,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_arith_operation},
/// };
///
/// assert_eq!(token_to_arith_operation(TokenKind::Star),
///            Some(ArithOperation::Mul));
/// assert_eq!(token_to_arith_operation(TokenKind::Equals), None);
/// ```
#[must_use]
pub const fn token_to_arith_operation(kind: TokenKind) -> Option<ArithOperation> {
    match kind {
        TokenKind::Plus => Some(ArithOperation::Add),
        TokenKind::Minus => Some(ArithOperation::Sub),
        TokenKind::Star => Some(ArithOperation::Mul),
        TokenKind::Slash => Some(ArithOperation::Div),
        _ => None,
    }
}
