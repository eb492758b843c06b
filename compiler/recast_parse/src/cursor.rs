//! Token cursor for navigating the token stream.
//!
//! The token list always ends with `Eof`, and the cursor never moves past
//! it, so `current()` is always valid.

use recast_ir::{Name, Span, Token, TokenKind, TokenList};

use crate::ParseError;

/// Cursor over a [`TokenList`].
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

/// Shared `Eof` for an empty token list.
static EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
    newline_before: false,
};

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Current position, for speculative parsing and progress checks.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Rewind to a position saved with [`Cursor::position`].
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len(), "cursor position out of bounds");
        self.pos = pos;
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token `n` positions ahead (`Eof` past the end).
    #[inline]
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Whether the token `n` positions ahead starts a new line.
    #[inline]
    pub fn peek_newline_before(&self, n: usize) -> bool {
        self.tokens.get(self.pos + n).is_some_and(|t| t.newline_before)
    }

    #[inline]
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    /// Whether a line break precedes the current token.
    #[inline]
    pub fn newline_before(&self) -> bool {
        self.current().newline_before
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    /// Check for a specific identifier (contextual keywords like `as`).
    #[inline]
    pub fn check_name(&self, name: Name) -> bool {
        self.current_kind() == TokenKind::Ident(name)
    }

    /// Advance and return the consumed token. Stays on `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a string literal if one is current.
    pub fn eat_str(&mut self) -> bool {
        if matches!(self.current_kind(), TokenKind::Str(_)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail with an "expected" error.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(ParseError::unexpected(
                kind.describe(),
                self.current_kind(),
                self.current_span(),
            ))
        }
    }

    /// Consume an identifier.
    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => Ok((name, self.advance().span)),
            other => Err(ParseError::expected_identifier(other, self.current_span())),
        }
    }
}

#[cfg(test)]
mod tests;
