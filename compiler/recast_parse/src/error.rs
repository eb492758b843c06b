//! Parse errors and their conversion to diagnostics.

use recast_diagnostic::{Diagnostic, ErrorCode};
use recast_ir::{Span, TokenKind};
use recast_lexer::{LexError, LexErrorKind};

/// A syntax error located in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Related location, e.g. where an unclosed delimiter was opened.
    pub context: Option<(Span, &'static str)>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, span: Span, message: &'static str) -> Self {
        self.context = Some((span, message));
        self
    }

    #[cold]
    pub fn unexpected(expected: &str, found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", found.describe()),
            span,
        )
    }

    #[cold]
    pub fn expected_expression(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!("expected expression, found {}", found.describe()),
            span,
        )
    }

    #[cold]
    pub fn expected_identifier(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1005,
            format!("expected identifier, found {}", found.describe()),
            span,
        )
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.code {
            ErrorCode::E1002 => "expected an expression here",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "cannot assign to this",
            ErrorCode::E1005 => "expected an identifier here",
            _ => "unexpected token",
        };
        let diag = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label);
        match self.context {
            Some((span, message)) => diag.with_secondary_label(span, message),
            None => diag,
        }
    }
}

/// Convert a lexer error into a diagnostic.
pub fn lex_error_to_diagnostic(error: &LexError) -> Diagnostic {
    let (code, label) = match error.kind {
        LexErrorKind::UnterminatedString => (ErrorCode::E0001, "string starts here"),
        LexErrorKind::UnexpectedChar(_) => (ErrorCode::E0002, "unexpected character"),
        LexErrorKind::InvalidNumber => (ErrorCode::E0003, "invalid number"),
        LexErrorKind::UnterminatedTemplate => (ErrorCode::E0004, "template starts here"),
        LexErrorKind::UnterminatedComment => (ErrorCode::E0005, "comment starts here"),
        LexErrorKind::UnterminatedRegex => (ErrorCode::E0006, "regular expression starts here"),
        LexErrorKind::SourceTooLarge(_) => (ErrorCode::E0007, "file is too large"),
    };
    Diagnostic::error(code)
        .with_message(error.kind.to_string())
        .with_label(error.span, label)
}
