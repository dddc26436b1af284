//! Identifier, keyword, and symbol scanning

use crate::syntax::token_kind::{TokenKind, lookup_keyword};

use super::Lexer;
use super::helpers::is_identifier_start;

impl<'a> Lexer<'a> {
    /// Entry: one identifier-start byte has been consumed.
    pub(super) fn lex_identifier(&mut self) -> TokenKind {
        self.reader.consume_identifier_run();

        // `foo!` / `bar?` predicate suffix, unless the next byte would
        // turn it into `!=` or a `?=`-shaped sequence
        if matches!(self.reader.peek(), Some(b'!' | b'?'))
            && self.reader.peek_at(1) != Some(b'=')
        {
            self.reader.advance();
            if self.lexeme() == b"defined?" && self.previous.kind != TokenKind::Dot {
                return TokenKind::KeywordDefined;
            }
            return TokenKind::Identifier;
        }

        // after a dot, `foo.class` is a method call, never a keyword
        let lexeme = self.lexeme();
        if self.previous.kind != TokenKind::Dot
            && let Some(keyword) = lookup_keyword(lexeme)
        {
            return keyword;
        }

        if lexeme[0].is_ascii_uppercase() {
            TokenKind::Constant
        } else {
            TokenKind::Identifier
        }
    }

    /// Symbol mode body. The mode is popped immediately: a symbol is one
    /// identifier-shaped token and the stream is back in code context
    /// right after it.
    pub(super) fn lex_symbol(&mut self) -> TokenKind {
        self.modes.pop();

        let Some(byte) = self.reader.advance() else {
            return TokenKind::Eof;
        };
        debug_assert!(
            is_identifier_start(byte),
            "symbol mode entered off an identifier start"
        );

        let kind = self.lex_identifier();

        // `:name=` is the setter form and collapses to a plain identifier
        if self.reader.match_byte(b'=') {
            return TokenKind::Identifier;
        }
        kind
    }
}
