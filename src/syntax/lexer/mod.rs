//! The Garnet lexer - turns a borrowed byte buffer into a flat token stream.
//!
//! Token meaning is context dependent: `}` closes either a brace
//! expression or an interpolation, `#` starts a comment in code but an
//! interpolation inside an interpolating string, and operators like `!@`
//! exist only after `def` or `.`. The lexer therefore keeps a stack of
//! lexical modes; the top of the stack decides how the next byte is read.
//! Literal openers push a mode and the matching terminator pops it, so
//! arbitrary nesting (`"a#{"b#{c}"}"`) falls out of the stack discipline.

mod comments;
mod globals;
mod helpers;
mod identifiers;
mod lists;
mod numbers;
mod reader;
pub mod recovery;
mod state;
mod strings;

use crate::syntax::token::Token;
use crate::syntax::token_kind::TokenKind;

use helpers::{closing_delimiter, is_identifier_char, is_identifier_start};
use reader::ByteReader;
use state::{LexMode, ModeStack};

pub use recovery::{RecoveryHook, RecoveryHooks};

/// The Garnet lexer.
///
/// Borrows the source buffer immutably for its lifetime. A lexer is not
/// safe for concurrent mutation, but distinct lexers over the same buffer
/// are fully independent.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    reader: ByteReader<'a>,
    /// First byte of the token being scanned.
    token_start: usize,
    previous: Token,
    current: Token,
    modes: ModeStack,
    hooks: RecoveryHooks,
    /// Latched once `Eof` has been produced; `lex` then short-circuits.
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self::with_hooks(source, RecoveryHooks::default())
    }

    pub fn with_hooks(source: &'a [u8], hooks: RecoveryHooks) -> Self {
        Self {
            reader: ByteReader::new(source),
            token_start: 0,
            previous: Token::new(TokenKind::Eof, 0, 0),
            current: Token::new(TokenKind::Eof, 0, 0),
            modes: ModeStack::new(),
            hooks,
            finished: false,
        }
    }

    pub fn source(&self) -> &'a [u8] {
        self.reader.source()
    }

    /// The token produced by the most recent `lex` call.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// The token produced by the call before that. Several dispatch
    /// decisions (`!@` after `def`, keyword vs. method name after `.`)
    /// read this single-slot history.
    pub fn previous(&self) -> &Token {
        &self.previous
    }

    /// 1-based line of the cursor. Counts every newline consumed so far,
    /// in any mode.
    pub fn line(&self) -> usize {
        self.reader.line()
    }

    /// Pop the current lexical mode. Intended for recovery hooks that
    /// abandon an unterminated literal and resume in code context.
    pub fn pop_mode(&mut self) {
        self.modes.pop();
    }

    /// Advance to the next token.
    ///
    /// Rotates `previous <- current`, scans one token under the current
    /// lexical mode, and returns the new current token. Once `Eof` has
    /// been produced, every further call returns `Eof` again.
    pub fn lex(&mut self) -> &Token {
        if self.finished {
            return &self.current;
        }

        self.previous = self.current.clone();
        self.token_start = self.reader.index();

        let kind = match self.modes.current() {
            LexMode::Default | LexMode::EmbExpr => self.lex_default(),
            LexMode::EmbDoc => self.lex_embdoc(),
            LexMode::List { terminator, .. } => self.lex_list(terminator),
            LexMode::Regexp { terminator } => self.lex_regexp(terminator),
            LexMode::String {
                interpolation,
                terminator,
            } => self.lex_string(terminator, interpolation),
            LexMode::Symbol => self.lex_symbol(),
        };

        if kind == TokenKind::Eof {
            self.finished = true;
        }

        self.current = Token::new(kind, self.token_start, self.reader.index());
        &self.current
    }

    /// `lex`, returning an owned copy of the token.
    pub fn next_token(&mut self) -> Token {
        self.lex().clone()
    }

    /// Drain the stream through `Eof` (inclusive).
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    /// Code context: used for both `Default` and `EmbExpr` (the only
    /// difference is that `}` pops the latter).
    fn lex_default(&mut self) -> TokenKind {
        self.reader.skip_non_newline_whitespace();
        self.token_start = self.reader.index();

        let Some(byte) = self.reader.advance() else {
            return TokenKind::Eof;
        };

        match byte {
            // NUL, ^D, and ^Z all end the script
            b'\0' | 0x04 | 0x1a => TokenKind::Eof,

            b'#' => self.lex_comment(),

            b'\n' => TokenKind::Newline,

            b',' => TokenKind::Comma,
            b'(' => TokenKind::ParenthesisLeft,
            b')' => TokenKind::ParenthesisRight,
            b';' => TokenKind::Semicolon,
            b']' => TokenKind::BracketRight,

            b'[' => {
                if self.previous.kind == TokenKind::Dot && self.reader.match_byte(b']') {
                    TokenKind::BracketLeftRight
                } else {
                    TokenKind::BracketLeft
                }
            }

            b'{' => {
                if self.previous.kind == TokenKind::MinusGreater {
                    TokenKind::LambdaBegin
                } else {
                    TokenKind::BraceLeft
                }
            }

            b'}' => {
                if self.modes.current() == LexMode::EmbExpr {
                    self.modes.pop();
                    TokenKind::EmbexprEnd
                } else {
                    TokenKind::BraceRight
                }
            }

            b'*' => {
                if self.reader.match_byte(b'*') {
                    if self.reader.match_byte(b'=') {
                        TokenKind::StarStarEqual
                    } else {
                        TokenKind::StarStar
                    }
                } else if self.reader.match_byte(b'=') {
                    TokenKind::StarEqual
                } else {
                    TokenKind::Star
                }
            }

            b'!' => {
                if self.reader.match_byte(b'=') {
                    TokenKind::BangEqual
                } else if self.reader.match_byte(b'~') {
                    TokenKind::BangTilde
                } else if self.after_unary_receiver() && self.reader.match_byte(b'@') {
                    TokenKind::BangAt
                } else {
                    TokenKind::Bang
                }
            }

            b'=' => {
                if self.at_embdoc_opener() {
                    self.open_embdoc()
                } else if self.reader.match_byte(b'=') {
                    if self.reader.match_byte(b'=') {
                        TokenKind::EqualEqualEqual
                    } else {
                        TokenKind::EqualEqual
                    }
                } else if self.reader.match_byte(b'~') {
                    TokenKind::EqualTilde
                } else if self.reader.match_byte(b'>') {
                    TokenKind::EqualGreater
                } else {
                    TokenKind::Equal
                }
            }

            b'<' => {
                if self.reader.match_byte(b'<') {
                    if self.reader.match_byte(b'=') {
                        TokenKind::LessLessEqual
                    } else if matches!(self.reader.peek(), Some(b'-' | b'~')) {
                        // heredoc opener: deliberately unsupported, ends the stream
                        self.reader.advance();
                        TokenKind::Eof
                    } else {
                        TokenKind::LessLess
                    }
                } else if self.reader.match_byte(b'=') {
                    if self.reader.match_byte(b'>') {
                        TokenKind::LessEqualGreater
                    } else {
                        TokenKind::LessEqual
                    }
                } else {
                    TokenKind::Less
                }
            }

            b'>' => {
                if self.reader.match_byte(b'>') {
                    if self.reader.match_byte(b'=') {
                        TokenKind::GreaterGreaterEqual
                    } else {
                        TokenKind::GreaterGreater
                    }
                } else if self.reader.match_byte(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }

            b'&' => {
                if self.reader.match_byte(b'&') {
                    if self.reader.match_byte(b'=') {
                        TokenKind::AmpersandAmpersandEqual
                    } else {
                        TokenKind::AmpersandAmpersand
                    }
                } else if self.reader.match_byte(b'=') {
                    TokenKind::AmpersandEqual
                } else {
                    TokenKind::Ampersand
                }
            }

            b'|' => {
                if self.reader.match_byte(b'|') {
                    if self.reader.match_byte(b'=') {
                        TokenKind::PipePipeEqual
                    } else {
                        TokenKind::PipePipe
                    }
                } else if self.reader.match_byte(b'=') {
                    TokenKind::PipeEqual
                } else {
                    TokenKind::Pipe
                }
            }

            b'+' => {
                if self.reader.match_byte(b'=') {
                    TokenKind::PlusEqual
                } else if self.after_unary_receiver() && self.reader.match_byte(b'@') {
                    TokenKind::PlusAt
                } else {
                    TokenKind::Plus
                }
            }

            b'-' => {
                if self.reader.match_byte(b'=') {
                    TokenKind::MinusEqual
                } else if self.reader.match_byte(b'>') {
                    TokenKind::MinusGreater
                } else if self.after_unary_receiver() && self.reader.match_byte(b'@') {
                    TokenKind::MinusAt
                } else {
                    TokenKind::Minus
                }
            }

            b'.' => {
                if self.reader.match_byte(b'.') {
                    if self.reader.match_byte(b'.') {
                        TokenKind::DotDotDot
                    } else {
                        TokenKind::DotDot
                    }
                } else {
                    TokenKind::Dot
                }
            }

            b'^' => {
                if self.reader.match_byte(b'=') {
                    TokenKind::CaretEqual
                } else {
                    TokenKind::Caret
                }
            }

            b'~' => {
                if self.after_unary_receiver() && self.reader.match_byte(b'@') {
                    TokenKind::TildeAt
                } else {
                    TokenKind::Tilde
                }
            }

            b'%' => self.lex_percent(),

            b'/' => {
                if self.reader.match_byte(b'=') {
                    TokenKind::SlashEqual
                } else if self.reader.peek() == Some(b' ') {
                    // division, not a regexp opener
                    TokenKind::Slash
                } else {
                    self.modes.push(LexMode::Regexp { terminator: b'/' });
                    TokenKind::RegexpBegin
                }
            }

            b'0'..=b'9' => self.lex_numeric(byte),

            b':' => {
                if self.reader.match_byte(b':') {
                    TokenKind::ColonColon
                } else if self.reader.peek().is_some_and(is_identifier_start) {
                    self.modes.push(LexMode::Symbol);
                    TokenKind::SymbolBegin
                } else {
                    TokenKind::Colon
                }
            }

            b'?' => {
                if self.reader.peek().is_some_and(is_identifier_char) {
                    self.reader.advance();
                    TokenKind::CharacterLiteral
                } else {
                    TokenKind::QuestionMark
                }
            }

            b'"' => {
                self.modes.push(LexMode::String {
                    interpolation: true,
                    terminator: b'"',
                });
                TokenKind::StringBegin
            }

            b'`' => {
                self.modes.push(LexMode::String {
                    interpolation: true,
                    terminator: b'`',
                });
                TokenKind::Backtick
            }

            b'\'' => {
                self.modes.push(LexMode::String {
                    interpolation: false,
                    terminator: b'\'',
                });
                TokenKind::StringBegin
            }

            b'$' => self.lex_global(),
            b'@' => self.lex_at_variable(),

            // line continuations are not handled yet
            b'\\' => TokenKind::Invalid,

            b if is_identifier_start(b) => {
                let kind = self.lex_identifier();
                // `a:` is a label unless the colon is really `::`
                if self.reader.peek() == Some(b':') && self.reader.peek_at(1) != Some(b':') {
                    self.reader.advance();
                    TokenKind::Label
                } else {
                    kind
                }
            }

            _ => TokenKind::Invalid,
        }
    }

    /// Percent literals and the `%`/`%=` operators. The byte after the
    /// type letter is taken verbatim as the opening delimiter.
    fn lex_percent(&mut self) -> TokenKind {
        match self.reader.peek() {
            Some(b'=') => {
                self.reader.advance();
                TokenKind::PercentEqual
            }
            Some(letter @ (b'i' | b'I' | b'q' | b'Q' | b'w' | b'W' | b'x' | b'r')) => {
                self.reader.advance();
                let Some(opening) = self.reader.advance() else {
                    return TokenKind::Invalid;
                };
                let terminator = closing_delimiter(opening);
                match letter {
                    b'i' => {
                        self.modes.push(LexMode::List {
                            interpolation: false,
                            terminator,
                        });
                        TokenKind::PercentLowerI
                    }
                    b'I' => {
                        self.modes.push(LexMode::List {
                            interpolation: true,
                            terminator,
                        });
                        TokenKind::PercentUpperI
                    }
                    b'w' => {
                        self.modes.push(LexMode::List {
                            interpolation: false,
                            terminator,
                        });
                        TokenKind::PercentLowerW
                    }
                    b'W' => {
                        self.modes.push(LexMode::List {
                            interpolation: true,
                            terminator,
                        });
                        TokenKind::PercentUpperW
                    }
                    b'q' => {
                        self.modes.push(LexMode::String {
                            interpolation: false,
                            terminator,
                        });
                        TokenKind::StringBegin
                    }
                    b'Q' => {
                        self.modes.push(LexMode::String {
                            interpolation: true,
                            terminator,
                        });
                        TokenKind::StringBegin
                    }
                    b'x' => {
                        self.modes.push(LexMode::String {
                            interpolation: true,
                            terminator,
                        });
                        TokenKind::PercentLowerX
                    }
                    _ => {
                        self.modes.push(LexMode::Regexp { terminator });
                        TokenKind::RegexpBegin
                    }
                }
            }
            _ => TokenKind::Percent,
        }
    }

    /// `!@`, `+@`, `-@`, and `~@` name unary operator methods; they only
    /// exist right after `def` or a method-call dot.
    fn after_unary_receiver(&self) -> bool {
        matches!(
            self.previous.kind,
            TokenKind::KeywordDef | TokenKind::Dot
        )
    }

    /// `=begin` opens an embdoc only at the start of a line (or of the
    /// buffer). Entry: the `=` has been consumed.
    fn at_embdoc_opener(&self) -> bool {
        let at_line_start = self.token_start == 0
            || self.reader.byte_at(self.token_start - 1) == Some(b'\n');
        at_line_start && self.reader.remaining_starts_with(b"begin\n")
    }

    fn open_embdoc(&mut self) -> TokenKind {
        // consume "begin\n"; the newline bumps the line counter
        for _ in 0..6 {
            self.reader.advance();
        }
        self.modes.push(LexMode::EmbDoc);
        TokenKind::EmbdocBegin
    }

    /// Lexeme of the token currently being scanned.
    fn lexeme(&self) -> &'a [u8] {
        self.reader.slice(self.token_start, self.reader.index())
    }
}
