//! Lexical modes and the mode stack.

use smallvec::{SmallVec, smallvec};

/// One lexical context. The top of the mode stack decides how the next
/// byte is interpreted: `}` closes an embedded expression only in
/// `EmbExpr`, `#` starts an interpolation only inside an interpolating
/// literal, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LexMode {
    Default,
    EmbDoc,
    EmbExpr,
    List { interpolation: bool, terminator: u8 },
    Regexp { terminator: u8 },
    String { interpolation: bool, terminator: u8 },
    Symbol,
}

/// Stack of lexical modes. Never empty: the base entry is `Default` and
/// survives every pop. Nesting past the inline capacity spills to the
/// heap and is freed again as the literals close.
#[derive(Debug, Clone)]
pub(super) struct ModeStack {
    modes: SmallVec<[LexMode; 4]>,
}

impl ModeStack {
    pub(super) fn new() -> Self {
        Self {
            modes: smallvec![LexMode::Default],
        }
    }

    pub(super) fn current(&self) -> LexMode {
        self.modes.last().copied().unwrap_or(LexMode::Default)
    }

    pub(super) fn push(&mut self, mode: LexMode) {
        self.modes.push(mode);
    }

    /// Popping the base entry resets it to `Default` instead of removing
    /// it. Unreachable on well-formed input.
    pub(super) fn pop(&mut self) {
        if self.modes.len() > 1 {
            self.modes.pop();
        } else {
            self.modes[0] = LexMode::Default;
        }
    }

    pub(super) fn depth(&self) -> usize {
        self.modes.len()
    }
}
