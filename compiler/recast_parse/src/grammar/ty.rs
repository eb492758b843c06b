//! Type annotations.
//!
//! Types carry no runtime behavior, so they are recognized and skipped
//! rather than built. Only their extent matters, e.g. the span kept on
//! `x as T`. Nothing here allocates AST nodes or declares names, which
//! makes these routines safe to run speculatively.
//!
//! `>>` and `>>>` can close several type argument lists at once
//! (`Map<K, Array<V>>`); the list that consumes the token records the
//! extra closers in `pending_gt` for the enclosing lists.

use recast_ir::{Span, TokenKind};
use recast_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Skip a complete type in expression or declaration context, returning
    /// its span.
    pub(crate) fn skip_type_annotation(&mut self) -> Result<Span, ParseError> {
        let start = self.cursor.current_span().start;
        self.skip_type()?;
        self.reject_pending_gt()?;
        Ok(self.span_from(start))
    }

    /// Skip `<T, U>` type arguments in expression context.
    pub(crate) fn skip_type_arguments(&mut self) -> Result<(), ParseError> {
        self.skip_type_args()?;
        self.reject_pending_gt()
    }

    /// Skip `<T extends U = D>` type parameters, if present.
    pub(crate) fn skip_type_parameters(&mut self) -> Result<(), ParseError> {
        if !self.cursor.check(TokenKind::Lt) {
            return Ok(());
        }
        self.cursor.advance();
        loop {
            if self.pending_gt > 0 || self.cursor.check(TokenKind::Gt) {
                break;
            }
            // Variance and const modifiers: `in`, `out`, `const`.
            if matches!(
                self.cursor.current_kind(),
                TokenKind::In | TokenKind::Const
            ) {
                self.cursor.advance();
            }
            // `out T`: a modifier directly followed by the parameter name.
            if let TokenKind::Ident(next) = self.cursor.peek_kind(1) {
                if next != self.names.extends && self.cursor.check_ident() {
                    self.cursor.advance();
                }
            }
            self.cursor.expect_ident()?;
            if self.eat_name(self.names.extends) {
                self.skip_type()?;
            }
            if self.cursor.eat(TokenKind::Eq) {
                self.skip_type()?;
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.close_angle()?;
        self.reject_pending_gt()
    }

    /// `<T>` of an angle-bracket assertion `<T>expr`, returning the span
    /// of `T`.
    pub(crate) fn skip_angle_assertion_type(&mut self) -> Result<Span, ParseError> {
        self.cursor.expect(TokenKind::Lt)?;
        let start = self.cursor.current_span().start;
        self.skip_type()?;
        // A `>>` closing the inner list also closes this one.
        let end = self.cursor.previous_span().end - u32::from(self.pending_gt);
        let span = Span::new(start, end.max(start));
        self.close_angle()?;
        self.reject_pending_gt()?;
        Ok(span)
    }

    /// Function return type, including predicates: `x is T`,
    /// `asserts x is T`, `asserts x`.
    pub(crate) fn skip_return_type(&mut self) -> Result<(), ParseError> {
        self.skip_predicate_type()?;
        self.reject_pending_gt()
    }

    fn skip_predicate_type(&mut self) -> Result<(), ParseError> {
        if self.cursor.check_name(self.names.asserts)
            && matches!(
                self.cursor.peek_kind(1),
                TokenKind::Ident(_) | TokenKind::This
            )
        {
            self.cursor.advance();
        }
        self.skip_type()?;
        if self.pending_gt == 0 && self.eat_name(self.names.is) {
            self.skip_type()?;
        }
        Ok(())
    }

    /// Skip a delimited group starting at `open`, nested groups included.
    pub(crate) fn skip_balanced(
        &mut self,
        open: TokenKind,
        close: TokenKind,
    ) -> Result<(), ParseError> {
        let open_span = self.cursor.expect(open)?;
        let mut depth = 1u32;
        loop {
            let kind = self.cursor.current_kind();
            if kind == TokenKind::Eof {
                return self.expect_closing(close, open_span).map(|_| ());
            }
            self.cursor.advance();
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
        }
    }

    fn reject_pending_gt(&mut self) -> Result<(), ParseError> {
        if self.pending_gt == 0 {
            return Ok(());
        }
        self.pending_gt = 0;
        Err(ParseError::unexpected(
            "end of type",
            TokenKind::Gt,
            self.cursor.previous_span(),
        ))
    }

    /// Union, intersection and conditional types.
    fn skip_type(&mut self) -> Result<(), ParseError> {
        ensure_sufficient_stack(|| {
            // Leading separator: `| A | B`
            if !self.cursor.eat(TokenKind::Pipe) {
                self.cursor.eat(TokenKind::Amp);
            }
            self.skip_type_operand()?;
            while self.pending_gt == 0
                && (self.cursor.check(TokenKind::Pipe) || self.cursor.check(TokenKind::Amp))
            {
                self.cursor.advance();
                self.skip_type_operand()?;
            }

            // `A extends B ? C : D`
            if self.pending_gt == 0
                && self.cursor.check_name(self.names.extends)
                && !self.cursor.newline_before()
            {
                self.cursor.advance();
                self.skip_type_operand()?;
                self.cursor.expect(TokenKind::Question)?;
                self.skip_type()?;
                self.cursor.expect(TokenKind::Colon)?;
                self.skip_type()?;
            }
            Ok(())
        })
    }

    /// Type operators, a primary type, then array and indexed access
    /// suffixes.
    fn skip_type_operand(&mut self) -> Result<(), ParseError> {
        let prefix = [
            self.names.keyof,
            self.names.unique,
            self.names.readonly,
            self.names.infer,
        ];
        while let TokenKind::Ident(name) = self.cursor.current_kind() {
            let applies = matches!(
                self.cursor.peek_kind(1),
                TokenKind::Ident(_)
                    | TokenKind::LParen
                    | TokenKind::LBracket
                    | TokenKind::LBrace
                    | TokenKind::TypeOf
            );
            if prefix.contains(&name) && applies {
                self.cursor.advance();
            } else {
                break;
            }
        }

        self.skip_primary_type()?;

        while self.pending_gt == 0
            && self.cursor.check(TokenKind::LBracket)
            && !self.cursor.newline_before()
        {
            self.skip_balanced(TokenKind::LBracket, TokenKind::RBracket)?;
        }
        Ok(())
    }

    fn skip_primary_type(&mut self) -> Result<(), ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Ident(_) => {
                self.cursor.advance();
                self.skip_qualified_rest()?;
                if self.cursor.check(TokenKind::Lt) {
                    self.skip_type_args()?;
                }
                Ok(())
            }
            // `typeof x.y`
            TokenKind::TypeOf => {
                self.cursor.advance();
                if self.property_name().is_none() {
                    return Err(ParseError::expected_identifier(
                        self.cursor.current_kind(),
                        self.cursor.current_span(),
                    ));
                }
                self.skip_qualified_rest()?;
                if self.cursor.check(TokenKind::Lt) {
                    self.skip_type_args()?;
                }
                Ok(())
            }
            // `import("m").T`
            TokenKind::Import => {
                self.cursor.advance();
                self.skip_balanced(TokenKind::LParen, TokenKind::RParen)?;
                self.skip_qualified_rest()?;
                if self.cursor.check(TokenKind::Lt) {
                    self.skip_type_args()?;
                }
                Ok(())
            }
            TokenKind::Void
            | TokenKind::Null
            | TokenKind::This
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Number(_)
            | TokenKind::Str(_)
            | TokenKind::Template(_) => {
                self.cursor.advance();
                Ok(())
            }
            TokenKind::Minus => {
                self.cursor.advance();
                match self.cursor.current_kind() {
                    TokenKind::Number(_) => {
                        self.cursor.advance();
                        Ok(())
                    }
                    other => Err(ParseError::unexpected(
                        "number",
                        other,
                        self.cursor.current_span(),
                    )),
                }
            }
            // Parenthesized type or function type `(a: A) => R`.
            TokenKind::LParen => {
                self.skip_balanced(TokenKind::LParen, TokenKind::RParen)?;
                if self.cursor.eat(TokenKind::Arrow) {
                    self.skip_predicate_type()?;
                }
                Ok(())
            }
            // Generic function type `<T>(x: T) => T`.
            TokenKind::Lt => {
                self.skip_type_parameters()?;
                self.skip_balanced(TokenKind::LParen, TokenKind::RParen)?;
                self.cursor.expect(TokenKind::Arrow)?;
                self.skip_predicate_type()
            }
            // Constructor type `new (...) => T`.
            TokenKind::New => {
                self.cursor.advance();
                self.skip_type_parameters()?;
                self.skip_balanced(TokenKind::LParen, TokenKind::RParen)?;
                self.cursor.expect(TokenKind::Arrow)?;
                self.skip_predicate_type()
            }
            TokenKind::LBracket => self.skip_balanced(TokenKind::LBracket, TokenKind::RBracket),
            TokenKind::LBrace => self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace),
            other => Err(ParseError::unexpected(
                "type",
                other,
                self.cursor.current_span(),
            )),
        }
    }

    /// `.B.C` after a type name.
    fn skip_qualified_rest(&mut self) -> Result<(), ParseError> {
        while self.cursor.eat(TokenKind::Dot) {
            if self.property_name().is_none() {
                return Err(ParseError::expected_identifier(
                    self.cursor.current_kind(),
                    self.cursor.current_span(),
                ));
            }
        }
        Ok(())
    }

    fn skip_type_args(&mut self) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Lt)?;
        loop {
            if self.pending_gt > 0 || self.cursor.check(TokenKind::Gt) {
                break;
            }
            self.skip_type()?;
            if self.pending_gt > 0 || !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.close_angle()
    }

    /// Close one angle-bracket list, splitting `>>` and `>>>`.
    fn close_angle(&mut self) -> Result<(), ParseError> {
        if self.pending_gt > 0 {
            self.pending_gt -= 1;
            return Ok(());
        }
        match self.cursor.current_kind() {
            TokenKind::Gt => {}
            TokenKind::Shr => self.pending_gt = 1,
            TokenKind::UShr => self.pending_gt = 2,
            other => {
                return Err(ParseError::unexpected(
                    "`>`",
                    other,
                    self.cursor.current_span(),
                ))
            }
        }
        self.cursor.advance();
        Ok(())
    }
}

#[cfg(test)]
mod tests;
