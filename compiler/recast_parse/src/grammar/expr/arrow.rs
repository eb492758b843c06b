//! Arrow functions.
//!
//! An arrow head looks like a parenthesized expression until the `=>`
//! shows up, so detection scans ahead speculatively and restores the
//! cursor. Only once the `=>` is confirmed is anything allocated.

use recast_ir::{
    BindingKind, BindingPattern, ExprId, ExprKind, Function, FunctionBody, Name, Param, ScopeKind,
    TokenKind,
};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an arrow function starting at the current token, if one does.
    pub(super) fn try_parse_arrow(&mut self, start: u32) -> Result<Option<ExprId>, ParseError> {
        let is_async = self.cursor.check_name(self.names.async_kw)
            && !self.cursor.peek_newline_before(1)
            && self.arrow_follows(1);
        if is_async {
            self.cursor.advance();
        } else if !self.arrow_follows(0) {
            return Ok(None);
        }
        self.parse_arrow(start).map(Some)
    }

    /// Whether an arrow head begins `offset` tokens ahead.
    fn arrow_follows(&mut self, offset: usize) -> bool {
        match self.cursor.peek_kind(offset) {
            TokenKind::Ident(_) => {
                self.cursor.peek_kind(offset + 1) == TokenKind::Arrow
                    && !self.cursor.peek_newline_before(offset + 1)
            }
            TokenKind::LParen | TokenKind::Lt => {
                let snapshot = self.snapshot();
                for _ in 0..offset {
                    self.cursor.advance();
                }
                let found = self.scan_arrow_head();
                self.restore(snapshot);
                found
            }
            _ => false,
        }
    }

    /// Skip `<T>(params): R` and report whether `=>` follows on the same
    /// line. Leaves the cursor wherever scanning stopped.
    fn scan_arrow_head(&mut self) -> bool {
        if self.skip_type_parameters().is_err()
            || self
                .skip_balanced(TokenKind::LParen, TokenKind::RParen)
                .is_err()
        {
            return false;
        }
        if self.cursor.eat(TokenKind::Colon) && self.skip_return_type().is_err() {
            return false;
        }
        self.cursor.check(TokenKind::Arrow) && !self.cursor.newline_before()
    }

    fn parse_arrow(&mut self, start: u32) -> Result<ExprId, ParseError> {
        let (scope, parts) = self.with_scope(ScopeKind::Function, start, |p| {
            let params = match p.cursor.current_kind() {
                TokenKind::Ident(name) => {
                    let span = p.cursor.advance().span;
                    p.declare(name, BindingKind::Param, span);
                    p.arena.alloc_params([Param {
                        pattern: BindingPattern::Ident(name),
                        default: ExprId::INVALID,
                        span,
                    }])
                }
                _ => {
                    p.skip_type_parameters()?;
                    let params = p.parse_params()?;
                    if p.cursor.eat(TokenKind::Colon) {
                        p.skip_return_type()?;
                    }
                    params
                }
            };
            p.cursor.expect(TokenKind::Arrow)?;
            let body = if p.cursor.check(TokenKind::LBrace) {
                let open = p.cursor.advance().span;
                FunctionBody::Block(p.parse_block_body(open)?)
            } else {
                FunctionBody::Expr(p.parse_assignment()?)
            };
            Ok::<_, ParseError>((params, body))
        });
        let (params, body) = parts?;
        let span = self.span_from(start);
        let function = self.arena.alloc_function(Function {
            name: Name::EMPTY,
            params,
            body,
            scope,
            is_arrow: true,
            span,
        });
        Ok(self.alloc(ExprKind::Function(function), span))
    }
}
