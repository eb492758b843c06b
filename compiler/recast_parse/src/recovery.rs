//! Error recovery.
//!
//! After a statement fails to parse, the parser skips ahead to a point
//! where a new statement can plausibly begin, so one syntax error does not
//! hide the rest of the file from analysis.

use recast_ir::TokenKind;

use crate::Parser;

/// Tokens that begin a statement and are safe to resume at.
fn starts_statement(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Var
            | TokenKind::Let
            | TokenKind::Const
            | TokenKind::Function
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Do
            | TokenKind::For
            | TokenKind::Switch
            | TokenKind::Case
            | TokenKind::Default
            | TokenKind::Try
            | TokenKind::Throw
            | TokenKind::Return
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::Import
            | TokenKind::Export
    )
}

impl Parser<'_> {
    /// Skip past a broken statement that began at token `start_pos`.
    ///
    /// Stops after a `;` at bracket depth zero, before a `}` closing an
    /// enclosing block, or before a statement keyword at the start of a
    /// line. Always consumes at least one token if the failed statement
    /// consumed none, so callers looping on statements make progress.
    pub(crate) fn synchronize(&mut self, start_pos: usize) {
        if self.cursor.position() == start_pos {
            self.cursor.advance();
        }

        let mut depth = 0u32;
        loop {
            let kind = self.cursor.current_kind();
            match kind {
                TokenKind::Eof => return,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RBrace if depth == 0 => return,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    depth = depth.saturating_sub(1);
                }
                TokenKind::Semicolon if depth == 0 => {
                    self.cursor.advance();
                    return;
                }
                _ if depth == 0 && self.cursor.newline_before() && starts_statement(kind) => {
                    return;
                }
                _ => {}
            }
            self.cursor.advance();
        }
    }
}
