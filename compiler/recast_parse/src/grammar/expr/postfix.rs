//! Postfix operators: member access, calls, indexing, `new`, non-null
//! assertions and postfix update.

use recast_diagnostic::ErrorCode;
use recast_ir::{ExprId, ExprKind, ExprRange, TokenKind};
use recast_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(super) fn parse_postfix_expr(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span().start;
        let base = if self.cursor.check(TokenKind::New) {
            self.parse_new()?
        } else {
            self.parse_primary()?
        };
        self.parse_postfix_ops(start, base, true)
    }

    /// The superclass expression after `extends`.
    pub(crate) fn parse_heritage(&mut self) -> Result<ExprId, ParseError> {
        self.parse_postfix_expr()
    }

    /// Apply postfix operators to `expr`, which began at `start`.
    ///
    /// Without `allow_calls` (the callee of `new`), stops before the
    /// argument list and accepts only member and index access.
    fn parse_postfix_ops(
        &mut self,
        start: u32,
        mut expr: ExprId,
        allow_calls: bool,
    ) -> Result<ExprId, ParseError> {
        loop {
            expr = match self.cursor.current_kind() {
                TokenKind::Dot => {
                    self.cursor.advance();
                    self.parse_member_name(start, expr, false)?
                }
                TokenKind::QuestionDot if allow_calls => {
                    self.cursor.advance();
                    match self.cursor.current_kind() {
                        TokenKind::LParen => self.finish_call(start, expr, true)?,
                        TokenKind::LBracket => self.finish_index(start, expr, true)?,
                        _ => self.parse_member_name(start, expr, true)?,
                    }
                }
                TokenKind::LBracket => self.finish_index(start, expr, false)?,
                TokenKind::LParen if allow_calls => self.finish_call(start, expr, false)?,
                TokenKind::Lt if allow_calls => {
                    if !self.try_skip_type_args(true) {
                        return Ok(expr);
                    }
                    self.finish_call(start, expr, false)?
                }
                // Tagged template; the template itself is opaque.
                TokenKind::Template(_) if allow_calls => {
                    self.cursor.advance();
                    expr
                }
                TokenKind::Bang if !self.cursor.newline_before() => {
                    self.cursor.advance();
                    self.alloc(ExprKind::NonNull(expr), self.span_from(start))
                }
                TokenKind::PlusPlus | TokenKind::MinusMinus
                    if allow_calls && !self.cursor.newline_before() =>
                {
                    return self.finish_postfix_update(start, expr);
                }
                _ => return Ok(expr),
            };
        }
    }

    fn parse_member_name(
        &mut self,
        start: u32,
        object: ExprId,
        optional: bool,
    ) -> Result<ExprId, ParseError> {
        let Some((property, property_span)) = self.property_name() else {
            return Err(ParseError::expected_identifier(
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        };
        Ok(self.alloc(
            ExprKind::Member {
                object,
                property,
                property_span,
                optional,
            },
            self.span_from(start),
        ))
    }

    fn finish_index(
        &mut self,
        start: u32,
        object: ExprId,
        optional: bool,
    ) -> Result<ExprId, ParseError> {
        let open = self.cursor.expect(TokenKind::LBracket)?;
        let index = self.parse_expression()?;
        self.expect_closing(TokenKind::RBracket, open)?;
        Ok(self.alloc(
            ExprKind::Index {
                object,
                index,
                optional,
            },
            self.span_from(start),
        ))
    }

    fn finish_call(
        &mut self,
        start: u32,
        callee: ExprId,
        optional: bool,
    ) -> Result<ExprId, ParseError> {
        let args = self.parse_args()?;
        Ok(self.alloc(
            ExprKind::Call {
                callee,
                args,
                optional,
            },
            self.span_from(start),
        ))
    }

    fn finish_postfix_update(&mut self, start: u32, operand: ExprId) -> Result<ExprId, ParseError> {
        let Some(op) = self.match_update_op() else {
            return Ok(operand);
        };
        if !self.is_assignment_target(operand) {
            return Err(ParseError::new(
                ErrorCode::E1004,
                "invalid increment/decrement operand",
                self.arena.span(operand),
            ));
        }
        self.cursor.advance();
        Ok(self.alloc(
            ExprKind::Update {
                op,
                prefix: false,
                operand,
            },
            self.span_from(start),
        ))
    }

    /// Speculatively skip `<T, U>` before a call. With `require_call`, the
    /// type arguments only count when `(` follows; otherwise the cursor is
    /// restored and `<` is left for the comparison operator.
    fn try_skip_type_args(&mut self, require_call: bool) -> bool {
        let snapshot = self.snapshot();
        if self.skip_type_arguments().is_ok()
            && (!require_call || self.cursor.check(TokenKind::LParen))
        {
            return true;
        }
        self.restore(snapshot);
        false
    }

    /// `(a, ...b)`
    pub(super) fn parse_args(&mut self) -> Result<ExprRange, ParseError> {
        let open = self.cursor.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        while !self.cursor.check(TokenKind::RParen) && !self.cursor.is_at_end() {
            args.push(self.parse_element()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(self.arena.alloc_expr_list(args))
    }

    /// An argument or array element, possibly spread.
    pub(super) fn parse_element(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span().start;
        if self.cursor.eat(TokenKind::DotDotDot) {
            let inner = self.parse_assignment()?;
            return Ok(self.alloc(ExprKind::Spread(inner), self.span_from(start)));
        }
        self.parse_assignment()
    }

    /// `new Callee<T>(args)`, `new Callee`, `new.target`.
    fn parse_new(&mut self) -> Result<ExprId, ParseError> {
        let new_span = self.cursor.expect(TokenKind::New)?;
        let start = new_span.start;

        if self.cursor.eat(TokenKind::Dot) {
            let name = self.interner.intern("new");
            let object = self.alloc(ExprKind::Ident(name), new_span);
            return self.parse_member_name(start, object, false);
        }

        let callee_start = self.cursor.current_span().start;
        let callee = if self.cursor.check(TokenKind::New) {
            ensure_sufficient_stack(|| self.parse_new())?
        } else {
            self.parse_primary()?
        };
        let callee = self.parse_postfix_ops(callee_start, callee, false)?;
        if self.cursor.check(TokenKind::Lt) {
            self.try_skip_type_args(false);
        }

        let has_args = self.cursor.check(TokenKind::LParen);
        let args = if has_args {
            self.parse_args()?
        } else {
            ExprRange::EMPTY
        };
        Ok(self.alloc(
            ExprKind::New {
                callee,
                args,
                has_args,
            },
            self.span_from(start),
        ))
    }
}
