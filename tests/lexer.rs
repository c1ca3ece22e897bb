use iodine::{
    error::LexError,
    interpreter::lexer::{Lexer, Token, TokenKind, lex},
};
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).unwrap().into_iter().map(|t| t.kind).collect()
}

fn texts(src: &str) -> Vec<String> {
    lex(src).unwrap().into_iter().map(|t| t.text).collect()
}

#[test]
fn every_operator_and_delimiter() {
    use TokenKind::{Eof, Equals, Identifier, Integer, LParen, Minus, Plus, RParen, Slash, Star};

    assert_eq!(kinds("a = (1 + 2) - 3 * 4 / 5"),
               [Identifier, Equals, LParen, Integer, Plus, Integer, RParen, Minus, Integer,
                Star, Integer, Slash, Integer, Eof]);
}

#[test]
fn whitespace_is_skipped_and_spans_point_into_the_line() {
    let tokens = lex("  x\t+ 10 ").unwrap();
    assert_eq!(tokens,
               [Token::new(TokenKind::Identifier, "x", 2..3),
                Token::new(TokenKind::Plus, "+", 4..5),
                Token::new(TokenKind::Integer, "10", 6..8),
                Token::eof(9)]);
}

#[test]
fn blank_line_is_only_the_end_marker() {
    assert_eq!(lex("").unwrap(), [Token::eof(0)]);
    assert_eq!(lex("   ").unwrap(), [Token::eof(3)]);
}

#[test]
fn number_literals() {
    assert_eq!(kinds("12 1.5 .5 7. 2e10 3E-2 4.5e+1 1.25f"),
               [TokenKind::Integer,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Eof]);
    assert_eq!(texts("4.5e+1 1.25f"), ["4.5e+1", "1.25f", ""]);
}

#[test]
fn identifiers_may_contain_digits_and_underscores() {
    assert_eq!(texts("x1 _tmp total_sum"), ["x1", "_tmp", "total_sum", ""]);
    assert_eq!(kinds("x1"), [TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn a_number_directly_followed_by_a_name_is_two_tokens() {
    assert_eq!(kinds("2x"), [TokenKind::Integer, TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn unrecognized_character_reports_column() {
    assert_eq!(lex("1 + ?").unwrap_err(),
               LexError { character: '?',
                          position:  4, });
    // Columns count characters, not bytes.
    assert_eq!(lex("é").unwrap_err(),
               LexError { character: 'é',
                          position:  0, });
    assert_eq!(lex("ab ° 1").unwrap_err().position, 3);
}

#[test]
fn lexer_is_lazy_and_stops_after_the_end_marker() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Integer);
    assert!(lexer.next().unwrap().unwrap().is_eof());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn lexer_stops_after_an_error() {
    let results: Vec<_> = Lexer::new("1 @ 2").collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}

#[test]
fn token_kind_names_are_stable() {
    assert_eq!(TokenKind::Integer.name(), "Integer");
    assert_eq!(TokenKind::Float.to_string(), "Float");
    assert_eq!(TokenKind::Identifier.name(), "Identifier");
    assert_eq!(TokenKind::Equals.name(), "Equals");
}
