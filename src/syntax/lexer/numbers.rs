//! Numeric literal scanning

use crate::syntax::token_kind::TokenKind;

use super::Lexer;
use super::helpers::{is_binary_digit, is_decimal_digit, is_hex_digit, is_octal_digit};

impl<'a> Lexer<'a> {
    /// Entry: one decimal digit has been consumed. A leading `0`
    /// dispatches on the base sigil; everything else is decimal.
    pub(super) fn lex_numeric(&mut self, first: u8) -> TokenKind {
        let kind = if first == b'0' {
            match self.reader.peek() {
                Some(b'b' | b'B') => {
                    self.reader.advance();
                    self.based_run(is_binary_digit)
                }
                Some(b'o' | b'O') => {
                    self.reader.advance();
                    self.based_run(is_octal_digit)
                }
                Some(b'd' | b'D') => {
                    self.reader.advance();
                    self.based_run(is_decimal_digit)
                }
                Some(b'x' | b'X') => {
                    self.reader.advance();
                    self.based_run(is_hex_digit)
                }
                // a bare leading zero followed by an octal digit is octal
                Some(b) if is_octal_digit(b) => self.based_run(is_octal_digit),
                _ => self.decimal_tail(),
            }
        } else {
            self.decimal_tail()
        };

        if kind == TokenKind::Invalid {
            return kind;
        }
        self.numeric_suffixes(kind)
    }

    /// A digit run in one base: at least one digit, underscores allowed
    /// between digits, never at the end.
    fn based_run(&mut self, is_digit: fn(u8) -> bool) -> TokenKind {
        let run = self.reader.consume_digit_run(is_digit);
        if run.digits == 0 || run.trailing_underscore {
            TokenKind::Invalid
        } else {
            TokenKind::Integer
        }
    }

    /// Decimal continuation plus optional fraction and exponent. Only the
    /// decimal path produces floats: based literals end at their run.
    fn decimal_tail(&mut self) -> TokenKind {
        let run = self.reader.consume_digit_run(is_decimal_digit);
        if run.trailing_underscore {
            return TokenKind::Invalid;
        }

        let mut kind = TokenKind::Integer;

        // `1.5` is a fraction; `1.upto` leaves the dot for the method call
        if self.reader.peek() == Some(b'.') && self.reader.peek_at(1).is_some_and(is_decimal_digit)
        {
            self.reader.advance();
            let fraction = self.reader.consume_digit_run(is_decimal_digit);
            if fraction.trailing_underscore {
                return TokenKind::Invalid;
            }
            kind = TokenKind::Float;
        }

        if matches!(self.reader.peek(), Some(b'e' | b'E')) {
            self.reader.advance();
            if matches!(self.reader.peek(), Some(b'+' | b'-')) {
                self.reader.advance();
            }
            let exponent = self.reader.consume_digit_run(is_decimal_digit);
            if exponent.digits == 0 || exponent.trailing_underscore {
                return TokenKind::Invalid;
            }
            kind = TokenKind::Float;
        }

        kind
    }

    /// `r` makes a rational, `i` an imaginary; they compose in either
    /// order, at most one of each, and the last one consumed decides the
    /// kind.
    fn numeric_suffixes(&mut self, kind: TokenKind) -> TokenKind {
        if self.reader.match_byte(b'r') {
            if self.reader.match_byte(b'i') {
                TokenKind::ImaginaryNumber
            } else {
                TokenKind::RationalNumber
            }
        } else if self.reader.match_byte(b'i') {
            if self.reader.match_byte(b'r') {
                TokenKind::RationalNumber
            } else {
                TokenKind::ImaginaryNumber
            }
        } else {
            kind
        }
    }
}
