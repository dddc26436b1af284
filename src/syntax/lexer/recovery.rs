//! Recovery hooks for literals left open at end of input.
//!
//! A literal mode that reaches the end of the buffer without finding its
//! terminator hands control to the matching hook. The hook may mutate the
//! lexer (for example [`Lexer::pop_mode`]) and returns the kind to use
//! for the error token. The default for every slot halts the stream with
//! `Eof`.
//!
//! Hooks must not re-enter [`Lexer::lex`].

use crate::syntax::token_kind::TokenKind;

use super::Lexer;

pub type RecoveryHook = fn(&mut Lexer<'_>) -> TokenKind;

fn halt(_lexer: &mut Lexer<'_>) -> TokenKind {
    TokenKind::Eof
}

/// One slot per unterminated-literal class.
#[derive(Debug, Clone, Copy)]
pub struct RecoveryHooks {
    pub embdoc: RecoveryHook,
    pub list: RecoveryHook,
    pub regexp: RecoveryHook,
    pub string: RecoveryHook,
}

impl Default for RecoveryHooks {
    fn default() -> Self {
        Self {
            embdoc: halt,
            list: halt,
            regexp: halt,
            string: halt,
        }
    }
}
