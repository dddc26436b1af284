//! Global, back-reference, instance, and class variable scanning

use crate::syntax::token_kind::TokenKind;

use super::Lexer;
use super::helpers::{is_decimal_digit, is_identifier_char, is_identifier_start};

impl<'a> Lexer<'a> {
    /// Entry: `$` has been consumed.
    pub(super) fn lex_global(&mut self) -> TokenKind {
        match self.reader.peek() {
            // punctuation globals like `$~` and `$:`
            Some(
                b'~' | b'*' | b'$' | b'?' | b'!' | b'@' | b'/' | b'\\' | b';' | b',' | b'.'
                | b'=' | b':' | b'<' | b'>' | b'"',
            ) => {
                self.reader.advance();
                TokenKind::GlobalVariable
            }

            // `$&` `` $` `` `$'` `$+` refer to the last match
            Some(b'&' | b'`' | b'\'' | b'+') => {
                self.reader.advance();
                TokenKind::BackReference
            }

            // `$1` .. `$nnn`; must come before the identifier arm, digits
            // are identifier characters too
            Some(b) if is_decimal_digit(b) => {
                self.reader.consume_while(is_decimal_digit);
                TokenKind::NthReference
            }

            Some(b) if is_identifier_char(b) => {
                self.reader.consume_identifier_run();
                TokenKind::GlobalVariable
            }

            _ => TokenKind::Invalid,
        }
    }

    /// Entry: `@` has been consumed. A second `@` makes it a class
    /// variable; either way an identifier start must follow.
    pub(super) fn lex_at_variable(&mut self) -> TokenKind {
        let kind = if self.reader.match_byte(b'@') {
            TokenKind::ClassVariable
        } else {
            TokenKind::InstanceVariable
        };

        if self.reader.peek().is_some_and(is_identifier_start) {
            self.reader.consume_identifier_run();
            kind
        } else {
            TokenKind::Invalid
        }
    }
}
