//! Line comments and embedded documentation blocks

use crate::syntax::token_kind::TokenKind;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Entry: `#` has been consumed in code context. The comment runs to
    /// the end of the line and takes the newline with it when there is
    /// one.
    pub(super) fn lex_comment(&mut self) -> TokenKind {
        while let Some(byte) = self.reader.peek() {
            if byte == b'\n' || byte == b'\0' {
                break;
            }
            self.reader.advance();
        }
        self.reader.match_byte(b'\n');
        TokenKind::Comment
    }

    /// Embedded documentation body. Line oriented: `=end` at column zero
    /// closes the block, anything else is one documentation line.
    pub(super) fn lex_embdoc(&mut self) -> TokenKind {
        if self.reader.at_end() {
            let hook = self.hooks.embdoc;
            return hook(self);
        }

        if self.reader.remaining_starts_with(b"=end\n") {
            // consume "=end\n"
            for _ in 0..5 {
                self.reader.advance();
            }
            self.modes.pop();
            return TokenKind::EmbdocEnd;
        }

        loop {
            match self.reader.advance() {
                None => {
                    let hook = self.hooks.embdoc;
                    return hook(self);
                }
                Some(b'\n') => break,
                Some(_) => {}
            }
        }

        TokenKind::EmbdocLine
    }
}
