//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry points, assignment, conditional, the binary operator
//!   precedence climb and prefix operators
//! - `operators.rs`: token to operator mapping
//! - `postfix.rs`: member access, calls, `new`, non-null and postfix update
//! - `primary.rs`: literals, identifiers, array and object literals,
//!   function expressions
//! - `arrow.rs`: arrow function detection and parsing

mod arrow;
mod operators;
mod postfix;
mod primary;

pub(crate) use primary::PropertyKey;

use recast_diagnostic::ErrorCode;
use recast_ir::{AssertionKind, BinaryOp, ExprId, ExprKind, TokenKind, UnaryOp};
use recast_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// `as` and `satisfies` bind like relational operators.
const ASSERTION_PRECEDENCE: u8 = BinaryOp::Lt.precedence();

impl Parser<'_> {
    /// Parse a full expression, including the comma operator.
    pub(crate) fn parse_expression(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span().start;
        let first = self.parse_assignment()?;
        if !self.cursor.check(TokenKind::Comma) {
            return Ok(first);
        }
        let mut items = vec![first];
        while self.cursor.eat(TokenKind::Comma) {
            items.push(self.parse_assignment()?);
        }
        let list = self.arena.alloc_expr_list(items);
        Ok(self.alloc(ExprKind::Sequence(list), self.span_from(start)))
    }

    /// Parse an assignment expression: anything but the comma operator.
    ///
    /// Uses `ensure_sufficient_stack` since every nested expression
    /// passes through here.
    pub(crate) fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment_inner())
    }

    fn parse_assignment_inner(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span().start;
        if let Some(arrow) = self.try_parse_arrow(start)? {
            return Ok(arrow);
        }

        let target = self.parse_conditional()?;
        let Some(op) = self.match_assign_op() else {
            return Ok(target);
        };
        if !self.is_assignment_target(target) {
            return Err(ParseError::new(
                ErrorCode::E1004,
                "invalid assignment target",
                self.arena.span(target),
            ));
        }
        self.cursor.advance();
        let value = self.parse_assignment()?;
        Ok(self.alloc(
            ExprKind::Assign { op, target, value },
            self.span_from(start),
        ))
    }

    /// Identifiers, member accesses and destructuring literals, seen
    /// through parentheses and type assertions.
    fn is_assignment_target(&self, id: ExprId) -> bool {
        matches!(
            self.arena.kind(self.arena.skip_wrappers(id)),
            ExprKind::Ident(_)
                | ExprKind::Member { .. }
                | ExprKind::Index { .. }
                | ExprKind::Array(_)
                | ExprKind::Object(_)
        )
    }

    fn parse_conditional(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span().start;
        let cond = self.parse_binary(1)?;
        if !self.cursor.eat(TokenKind::Question) {
            return Ok(cond);
        }
        let then_expr = self.parse_assignment()?;
        self.cursor.expect(TokenKind::Colon)?;
        let else_expr = self.parse_assignment()?;
        Ok(self.alloc(
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            },
            self.span_from(start),
        ))
    }

    /// Precedence climbing over binary operators binding at least as
    /// tightly as `min_prec`.
    fn parse_binary(&mut self, min_prec: u8) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span().start;
        let mut left = self.parse_unary()?;
        loop {
            if min_prec <= ASSERTION_PRECEDENCE && !self.cursor.newline_before() {
                if let Some(kind) = self.match_assertion_keyword() {
                    self.cursor.advance();
                    let ty = if kind == AssertionKind::As && self.cursor.check(TokenKind::Const) {
                        self.cursor.advance().span
                    } else {
                        self.skip_type_annotation()?
                    };
                    left = self.alloc(
                        ExprKind::TypeAssertion {
                            expr: left,
                            kind,
                            ty,
                        },
                        self.span_from(start),
                    );
                    continue;
                }
            }

            let Some(op) = self.match_binary_op() else {
                break;
            };
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.cursor.advance();
            let next_min = if op.is_right_assoc() { prec } else { prec + 1 };
            let right = self.parse_binary(next_min)?;
            left = self.alloc(ExprKind::Binary { op, left, right }, self.span_from(start));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_unary_inner())
    }

    fn parse_unary_inner(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span().start;

        if let Some(op) = self.match_unary_op() {
            self.cursor.advance();
            let operand = self.parse_unary()?;
            return Ok(self.alloc(ExprKind::Unary { op, operand }, self.span_from(start)));
        }

        if let Some(op) = self.match_update_op() {
            self.cursor.advance();
            let operand = self.parse_unary()?;
            if !self.is_assignment_target(operand) {
                return Err(ParseError::new(
                    ErrorCode::E1004,
                    "invalid increment/decrement operand",
                    self.arena.span(operand),
                ));
            }
            return Ok(self.alloc(
                ExprKind::Update {
                    op,
                    prefix: true,
                    operand,
                },
                self.span_from(start),
            ));
        }

        // `<T>expr`
        if self.cursor.check(TokenKind::Lt) {
            let ty = self.skip_angle_assertion_type()?;
            let expr = self.parse_unary()?;
            return Ok(self.alloc(
                ExprKind::TypeAssertion {
                    expr,
                    kind: AssertionKind::Angle,
                    ty,
                },
                self.span_from(start),
            ));
        }

        self.parse_postfix_expr()
    }

    /// `await` is contextual: an operator only when an operand follows.
    fn is_await_operator(&self) -> bool {
        self.cursor.check_name(self.names.await_kw)
            && operators::starts_operand(self.cursor.peek_kind(1))
    }

    fn match_unary_op(&self) -> Option<UnaryOp> {
        operators::unary_op(self.cursor.current_kind())
            .or_else(|| self.is_await_operator().then_some(UnaryOp::Await))
    }
}
