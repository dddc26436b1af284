//! String and regexp literal modes, including the interpolation handoff.
//!
//! Content is emitted lazily: when `#{` interrupts a content run, the run
//! is emitted first and the `#{` is left in place, so the next call opens
//! the embedded expression. Reaching the end of the buffer inside either
//! mode goes through the matching recovery hook instead of emitting a
//! partial content token.

use crate::syntax::token_kind::TokenKind;

use super::Lexer;
use super::state::LexMode;

/// Option letters accepted after a closing regexp delimiter.
fn is_regexp_option(byte: u8) -> bool {
    matches!(byte, b'e' | b'i' | b'm' | b'n' | b's' | b'u' | b'x')
}

impl<'a> Lexer<'a> {
    fn at_interpolation_start(&self) -> bool {
        self.reader.peek() == Some(b'#') && self.reader.peek_at(1) == Some(b'{')
    }

    /// Consume `#{` and hand the stream to the default dispatcher until
    /// the matching `}` pops back out.
    fn open_embedded_expression(&mut self) -> TokenKind {
        self.reader.advance(); // '#'
        self.reader.advance(); // '{'
        self.modes.push(LexMode::EmbExpr);
        TokenKind::EmbexprBegin
    }

    pub(super) fn lex_string(&mut self, terminator: u8, interpolation: bool) -> TokenKind {
        if self.reader.match_byte(terminator) {
            self.modes.pop();
            return TokenKind::StringEnd;
        }

        if interpolation && self.at_interpolation_start() {
            return self.open_embedded_expression();
        }

        // Content run. A `#` not followed by `{` (including `#@` and
        // `#$`) stays plain content.
        loop {
            match self.reader.peek() {
                None => {
                    let hook = self.hooks.string;
                    return hook(self);
                }
                Some(byte) if byte == terminator => break,
                Some(b'#') if interpolation && self.reader.peek_at(1) == Some(b'{') => break,
                Some(_) => {
                    self.reader.advance();
                }
            }
        }

        TokenKind::StringContent
    }

    pub(super) fn lex_regexp(&mut self, terminator: u8) -> TokenKind {
        if self.reader.match_byte(terminator) {
            // trailing option letters belong to the closing token
            self.reader.consume_while(is_regexp_option);
            self.modes.pop();
            return TokenKind::RegexpEnd;
        }

        if self.at_interpolation_start() {
            return self.open_embedded_expression();
        }

        loop {
            match self.reader.peek() {
                None => {
                    let hook = self.hooks.regexp;
                    return hook(self);
                }
                Some(byte) if byte == terminator => break,
                Some(b'#') if self.reader.peek_at(1) == Some(b'{') => break,
                Some(_) => {
                    self.reader.advance();
                }
            }
        }

        TokenKind::StringContent
    }
}
