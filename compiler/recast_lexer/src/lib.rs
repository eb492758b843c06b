//! Lexer for the TypeScript subset analyzed by recast.
//!
//! Produces a [`TokenList`] plus any [`LexError`]s. Lexing never stops at
//! the first error: malformed input is skipped and reported.

mod cursor;
mod escape;
mod lex_error;
mod number;
mod scanner;

pub use cursor::Cursor;
pub use escape::unescape;
pub use lex_error::{LexError, LexErrorKind};
pub use number::parse_number;

use recast_ir::{Span, StringInterner, Token, TokenKind, TokenList};

/// Result of lexing one source file.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex `source`, interning identifiers and string contents.
///
/// Sources that do not fit in a `u32` offset produce a single error and an
/// `Eof` token.
pub fn lex(source: &str, interner: &mut StringInterner) -> LexOutput {
    if u32::try_from(source.len()).is_err() {
        let mut tokens = TokenList::new();
        tokens.push(Token::new(TokenKind::Eof, Span::DUMMY, false));
        return LexOutput {
            tokens,
            errors: vec![LexError::new(
                Span::DUMMY,
                LexErrorKind::SourceTooLarge(source.len()),
            )],
        };
    }

    let (tokens, errors) = scanner::Scanner::new(source, interner).run();
    tracing::trace!(tokens = tokens.len(), errors = errors.len(), "lexed source");
    LexOutput { tokens, errors }
}
