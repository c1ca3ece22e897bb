use std::ops::Range;

use logos::Logos;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw token produced by logos before it is paired with its source text.
///
/// Whitespace never reaches the parser; it is skipped here.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Real literals such as `3.14`, `2.`, `.5`, `2.1e-10` or `1.5f`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?[fF]?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[fF]?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[fF]?")]
    Float,
    #[regex(r"[0-9]+")]
    Integer,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Equals,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Whole-number literal, such as `42`.
    Integer,
    /// Literal with a decimal point or exponent, such as `4.0` or `1e3`.
    Float,
    /// Variable names such as `x` or `total_2`.
    Identifier,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Equals,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Marks the end of the line. Always the last token of a sequence.
    Eof,
}

impl TokenKind {
    /// Returns the stable diagnostic name of the token kind.
    ///
    /// # Example
    /// ```
    /// use iodine::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::LParen.name(), "LParen");
    /// assert_eq!(TokenKind::Eof.name(), "Eof");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Identifier => "Identifier",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Star => "Star",
            Self::Slash => "Slash",
            Self::Equals => "Equals",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
            Self::Eof => "Eof",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl RawToken {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Float => TokenKind::Float,
            Self::Integer => TokenKind::Integer,
            Self::Identifier => TokenKind::Identifier,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::Equals => TokenKind::Equals,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
        }
    }
}

/// Represents a lexical token in the source line.
///
/// A token is a minimal but meaningful unit of text: its category, the exact
/// text it was matched from, and the byte range of that text in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category.
    pub kind: TokenKind,
    /// The matched source text. Empty for [`TokenKind::Eof`].
    pub text: String,
    /// Byte range of `text` within the line.
    pub span: Range<usize>,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self { kind,
               text: text.into(),
               span }
    }

    /// Builds the end-of-input marker for a line of `len` bytes.
    #[must_use]
    pub fn eof(len: usize) -> Self {
        Self::new(TokenKind::Eof, "", len..len)
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_eof() {
            write!(f, "end of input")
        } else {
            write!(f, "'{}'", self.text)
        }
    }
}

/// Lazily tokenizes one line of source text.
///
/// Yields every token in order, followed by exactly one [`TokenKind::Eof`]
/// token, and then stops. If an unrecognized character is met the lexer
/// yields a single [`LexError`] and stops as well. Each lexer is independent;
/// nothing is retained between lines.
///
/// # Example
/// ```
/// use iodine::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("x = 1").map(|t| t.unwrap().kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier, TokenKind::Equals, TokenKind::Integer, TokenKind::Eof]);
/// ```
pub struct Lexer<'src> {
    source:   &'src str,
    inner:    logos::Lexer<'src, RawToken>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: RawToken::lexer(source),
               finished: false }
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(raw)) => Some(Ok(Token::new(raw.kind(), self.inner.slice(), self.inner.span()))),
            Some(Err(())) => {
                self.finished = true;
                let start = self.inner.span().start;
                let character = self.source[start..].chars().next().unwrap_or_default();
                let position = self.source[..start].chars().count();
                tracing::debug!(%character, position, "unrecognized character");
                Some(Err(LexError { character, position }))
            },
            None => {
                self.finished = true;
                Some(Ok(Token::eof(self.source.len())))
            },
        }
    }
}

/// Tokenizes a whole line.
///
/// The returned sequence always ends with a [`TokenKind::Eof`] token, so a
/// blank line produces a sequence holding only that marker.
///
/// # Errors
/// Returns a [`LexError`] carrying the first unrecognized character and its
/// column.
///
/// # Example
/// ```
/// use iodine::interpreter::lexer::{TokenKind, lex};
///
/// let tokens = lex("(2 + 3.5)").unwrap();
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[3].kind, TokenKind::Float);
/// assert_eq!(tokens[3].text, "3.5");
///
/// let err = lex("2 $ 3").unwrap_err();
/// assert_eq!((err.character, err.position), ('$', 2));
/// ```
pub fn lex(line: &str) -> LexResult<Vec<Token>> {
    let tokens = Lexer::new(line).collect::<LexResult<Vec<_>>>()?;
    tracing::trace!(count = tokens.len(), "lexed line");
    Ok(tokens)
}
