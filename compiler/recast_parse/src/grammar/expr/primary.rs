//! Primary expressions: literals, identifiers, parenthesized expressions,
//! array and object literals and function expressions.

use recast_ir::{Binding, BindingKind, ExprId, ExprKind, Name, Property, Span, TokenKind};

use crate::{ParseError, Parser};

/// Key of an object literal property, class member or destructuring
/// property.
pub(crate) enum PropertyKey {
    /// Identifier, string, number or reserved word. Only identifiers may
    /// stand alone as shorthand (`{ a }`).
    Named {
        name: Name,
        span: Span,
        shorthand: bool,
    },
    /// `[expr]`
    Computed(ExprId),
}

impl PropertyKey {
    fn into_property(self, value: ExprId) -> Property {
        match self {
            PropertyKey::Named { name, .. } => Property::Init { key: name, value },
            PropertyKey::Computed(key) => Property::Computed { key, value },
        }
    }
}

/// Expression kind of a single-token literal.
fn literal_kind(kind: TokenKind) -> Option<ExprKind> {
    let literal = match kind {
        TokenKind::Number(bits) => ExprKind::Number(bits),
        TokenKind::Str(name) => ExprKind::Str(name),
        TokenKind::Template(name) => ExprKind::Template(name),
        TokenKind::Regex(name) => ExprKind::Regex(name),
        TokenKind::True => ExprKind::Bool(true),
        TokenKind::False => ExprKind::Bool(false),
        TokenKind::Null => ExprKind::Null,
        TokenKind::This => ExprKind::This,
        TokenKind::Super => ExprKind::Super,
        _ => return None,
    };
    Some(literal)
}

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span().start;
        let current = self.cursor.current_kind();

        if let Some(literal) = literal_kind(current) {
            let span = self.cursor.advance().span;
            return Ok(self.alloc(literal, span));
        }

        match current {
            TokenKind::Ident(name)
                if name == self.names.async_kw
                    && self.cursor.peek_kind(1) == TokenKind::Function
                    && !self.cursor.peek_newline_before(1) =>
            {
                self.cursor.advance();
                self.parse_function_expr(start)
            }
            TokenKind::Ident(name) => {
                let span = self.cursor.advance().span;
                Ok(self.alloc(ExprKind::Ident(name), span))
            }
            // `import(...)` and `import.meta`
            TokenKind::Import => {
                let span = self.cursor.advance().span;
                let name = self.interner.intern("import");
                Ok(self.alloc(ExprKind::Ident(name), span))
            }
            TokenKind::Function => self.parse_function_expr(start),
            TokenKind::LParen => {
                let open = self.cursor.advance().span;
                let inner = self.parse_expression()?;
                self.expect_closing(TokenKind::RParen, open)?;
                Ok(self.alloc(ExprKind::Paren(inner), self.span_from(start)))
            }
            TokenKind::LBracket => self.parse_array(start),
            TokenKind::LBrace => self.parse_object(start),
            other => Err(ParseError::expected_expression(
                other,
                self.cursor.current_span(),
            )),
        }
    }

    fn parse_function_expr(&mut self, start: u32) -> Result<ExprId, ParseError> {
        self.cursor.expect(TokenKind::Function)?;
        self.cursor.eat(TokenKind::Star);
        let own_name = match self.cursor.current_kind() {
            TokenKind::Ident(name) => Some((name, self.cursor.advance().span)),
            _ => None,
        };
        let name = own_name.map_or(Name::EMPTY, |(name, _)| name);
        let function = self.parse_function_rest(start, name)?;

        // The name is visible only inside the function, and parameters or
        // body declarations of the same name shadow it.
        if let Some((name, span)) = own_name {
            let scope = self.arena.function(function).scope;
            self.scopes.declare(
                scope,
                Binding {
                    name,
                    kind: BindingKind::Function,
                    span,
                },
            );
        }
        Ok(self.alloc(ExprKind::Function(function), self.span_from(start)))
    }

    /// `[a, , ...b]`; holes are dropped.
    fn parse_array(&mut self, start: u32) -> Result<ExprId, ParseError> {
        let open = self.cursor.expect(TokenKind::LBracket)?;
        let mut elements = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::RBracket | TokenKind::Eof => break,
                TokenKind::Comma => {
                    self.cursor.advance();
                    continue;
                }
                _ => {}
            }
            elements.push(self.parse_element()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_closing(TokenKind::RBracket, open)?;
        let list = self.arena.alloc_expr_list(elements);
        Ok(self.alloc(ExprKind::Array(list), self.span_from(start)))
    }

    fn parse_object(&mut self, start: u32) -> Result<ExprId, ParseError> {
        let open = self.cursor.expect(TokenKind::LBrace)?;
        let mut properties = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            properties.push(self.parse_object_property()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_closing(TokenKind::RBrace, open)?;
        let list = self.arena.alloc_properties(properties);
        Ok(self.alloc(ExprKind::Object(list), self.span_from(start)))
    }

    fn parse_object_property(&mut self) -> Result<Property, ParseError> {
        let start = self.cursor.current_span().start;
        if self.cursor.eat(TokenKind::DotDotDot) {
            return Ok(Property::Spread(self.parse_assignment()?));
        }

        // `get x() {}`, `set x(v) {}`, `async x() {}`, `*x() {}`
        let mut is_method = false;
        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            let names = &self.names;
            let is_modifier = name == names.get || name == names.set || name == names.async_kw;
            if is_modifier && self.starts_member_key(1) {
                self.cursor.advance();
                is_method = true;
            }
        }
        if self.cursor.eat(TokenKind::Star) {
            is_method = true;
        }

        let key = self.parse_property_key()?;
        if is_method || self.cursor.check(TokenKind::LParen) || self.cursor.check(TokenKind::Lt) {
            let name = match key {
                PropertyKey::Named { name, .. } => name,
                PropertyKey::Computed(_) => Name::EMPTY,
            };
            let function = self.parse_function_rest(start, name)?;
            let value = self.alloc(ExprKind::Function(function), self.span_from(start));
            return Ok(key.into_property(value));
        }
        if self.cursor.eat(TokenKind::Colon) {
            let value = self.parse_assignment()?;
            return Ok(key.into_property(value));
        }

        match key {
            PropertyKey::Named {
                name,
                span,
                shorthand: true,
            } => {
                let value = self.alloc(ExprKind::Ident(name), span);
                // `{ a = 1 }` is only valid as a destructuring target.
                if self.cursor.eat(TokenKind::Eq) {
                    self.parse_assignment()?;
                }
                Ok(Property::Init { key: name, value })
            }
            _ => Err(ParseError::unexpected(
                "`:`",
                self.cursor.current_kind(),
                self.cursor.current_span(),
            )),
        }
    }

    pub(crate) fn parse_property_key(&mut self) -> Result<PropertyKey, ParseError> {
        let span = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(PropertyKey::Named {
                    name,
                    span,
                    shorthand: true,
                })
            }
            TokenKind::Str(name) => {
                self.cursor.advance();
                Ok(PropertyKey::Named {
                    name,
                    span,
                    shorthand: false,
                })
            }
            TokenKind::Number(bits) => {
                self.cursor.advance();
                let name = self.interner.intern(&f64::from_bits(bits).to_string());
                Ok(PropertyKey::Named {
                    name,
                    span,
                    shorthand: false,
                })
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                let key = self.parse_assignment()?;
                self.expect_closing(TokenKind::RBracket, span)?;
                Ok(PropertyKey::Computed(key))
            }
            other => match self.property_name() {
                Some((name, span)) => Ok(PropertyKey::Named {
                    name,
                    span,
                    shorthand: false,
                }),
                None => Err(ParseError::expected_identifier(other, span)),
            },
        }
    }

    /// Whether the token `n` ahead can begin a member key, which tells a
    /// modifier (`get x`) from a member named like one (`get()`).
    pub(crate) fn starts_member_key(&self, n: usize) -> bool {
        let kind = self.cursor.peek_kind(n);
        kind.is_keyword()
            || matches!(
                kind,
                TokenKind::Ident(_)
                    | TokenKind::Str(_)
                    | TokenKind::Number(_)
                    | TokenKind::LBracket
                    | TokenKind::Star
            )
    }
}
