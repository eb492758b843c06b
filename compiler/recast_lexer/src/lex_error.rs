//! Lexer errors.
//!
//! Errors are accumulated rather than returned early: the scanner skips the
//! offending bytes and keeps going so one typo reports once instead of
//! cascading.

use std::fmt;

use recast_ir::Span;

/// A lexer error located in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing quote.
    UnterminatedString,
    /// Missing closing backtick.
    UnterminatedTemplate,
    /// `/* ...` without `*/`.
    UnterminatedComment,
    /// Regular expression without closing `/` on the same line.
    UnterminatedRegex,
    /// A numeric literal that does not form a number (`0x`, `1e`).
    InvalidNumber,
    /// A character that cannot start any token.
    UnexpectedChar(char),
    /// The file does not fit in 32-bit offsets.
    SourceTooLarge(usize),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::UnterminatedTemplate => write!(f, "unterminated template literal"),
            LexErrorKind::UnterminatedComment => write!(f, "unterminated block comment"),
            LexErrorKind::UnterminatedRegex => {
                write!(f, "unterminated regular expression literal")
            }
            LexErrorKind::InvalidNumber => write!(f, "invalid numeric literal"),
            LexErrorKind::UnexpectedChar(c) => write!(f, "unexpected character `{c}`"),
            LexErrorKind::SourceTooLarge(len) => {
                write!(f, "source file is {len} bytes; at most {} are supported", u32::MAX)
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl std::error::Error for LexError {}
