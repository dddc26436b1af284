use std::fmt;

use serde::Serialize;

use crate::syntax::byte_span::ByteSpan;
use crate::syntax::token_kind::TokenKind;

/// One lexed token: a kind plus the byte range of its lexeme.
///
/// Tokens own no text. `lexeme` re-slices the buffer the lexer was built
/// over; interpreting the bytes (numeric value, unescaping) is the
/// consumer's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: ByteSpan,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: ByteSpan::new(start, end),
        }
    }

    /// The raw bytes of this token in `source`.
    pub fn lexeme<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        source.get(self.span.start..self.span.end).unwrap_or(&[])
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {}..{})",
            self.kind, self.span.start, self.span.end
        )
    }
}
