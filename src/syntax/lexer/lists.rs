//! Percent word and symbol list mode (`%w[...]`, `%i(...)` and their
//! interpolating uppercase forms).

use crate::syntax::token_kind::TokenKind;

use super::Lexer;
use super::helpers::is_whitespace;

impl<'a> Lexer<'a> {
    /// List bodies alternate separator runs and bare words. The mode's
    /// interpolation flag is recorded but list bodies never recognize
    /// `#{`; uppercase lists only differ downstream.
    pub(super) fn lex_list(&mut self, terminator: u8) -> TokenKind {
        // separators between words, newlines included
        if self.reader.peek().is_some_and(is_whitespace) {
            self.reader.consume_while(is_whitespace);
            return TokenKind::WordsSep;
        }

        if self.reader.match_byte(terminator) {
            self.modes.pop();
            return TokenKind::StringEnd;
        }

        loop {
            match self.reader.peek() {
                None => {
                    let hook = self.hooks.list;
                    return hook(self);
                }
                Some(byte) if byte == terminator || is_whitespace(byte) => break,
                Some(_) => {
                    self.reader.advance();
                }
            }
        }

        TokenKind::StringContent
    }
}
