/// A character that does not begin any token.
///
/// `position` is the zero-based character column of `character` within the
/// input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized character '{character}' at position {position}.")]
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// Column of the offending character.
    pub position:  usize,
}
