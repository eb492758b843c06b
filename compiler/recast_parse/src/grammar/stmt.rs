//! Statements and declarations.
//!
//! Declarations bind their names while they are parsed: `let`, `const`,
//! classes and imports in the current scope, `var` and function
//! declarations in the nearest function or module scope.

use recast_ir::{
    BinaryOp, BindingKind, BindingPattern, DeclKind, Declarator, ExprId, ExprKind, Function,
    FunctionBody, FunctionId, Name, NameRange, Param, ParamRange, ScopeKind, Span, Stmt, StmtId,
    StmtKind, StmtRange, TokenKind,
};
use recast_stack::ensure_sufficient_stack;

use super::expr::PropertyKey;
use crate::{ParseError, Parser};

/// The part of a `for` header between the parentheses.
enum ForHeader {
    Classic {
        init: StmtId,
        cond: ExprId,
        update: ExprId,
    },
    Each {
        init: StmtId,
        iterable: ExprId,
    },
}

impl Parser<'_> {
    /// Parse statements until end of input, or until the `}` closing the
    /// current block when `in_block` is set. Failed statements are recorded
    /// and skipped.
    pub(crate) fn parse_statements(&mut self, in_block: bool) -> Vec<StmtId> {
        let mut stmts = Vec::new();
        while !self.cursor.is_at_end() && !(in_block && self.cursor.check(TokenKind::RBrace)) {
            if let Some(stmt) = self.parse_statement_recovering() {
                stmts.push(stmt);
            }
        }
        stmts
    }

    fn parse_statement_recovering(&mut self) -> Option<StmtId> {
        let before = self.cursor.position();
        match self.parse_statement() {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                self.errors.push(error);
                self.synchronize(before);
                None
            }
        }
    }

    pub(crate) fn parse_statement(&mut self) -> Result<StmtId, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.current_span().start;
        let kind = match self.cursor.current_kind() {
            TokenKind::LBrace => return self.parse_block_stmt(),
            TokenKind::Semicolon => {
                self.cursor.advance();
                StmtKind::Empty
            }
            TokenKind::Var => self.parse_var_stmt(DeclKind::Var)?,
            TokenKind::Let => self.parse_var_stmt(DeclKind::Let)?,
            TokenKind::Const
                if self.cursor.peek_kind(1) == TokenKind::Ident(self.names.enum_kw) =>
            {
                self.cursor.advance();
                self.parse_enum()?
            }
            TokenKind::Const => self.parse_var_stmt(DeclKind::Const)?,
            TokenKind::Function => StmtKind::Function(self.parse_function_decl(start, true)?),
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Do => self.parse_do_while()?,
            TokenKind::For => self.parse_for(start)?,
            TokenKind::Switch => self.parse_switch(start)?,
            TokenKind::Try => self.parse_try()?,
            TokenKind::Throw => {
                self.cursor.advance();
                let expr = self.parse_expression()?;
                self.consume_semicolon()?;
                StmtKind::Throw(expr)
            }
            TokenKind::Return => self.parse_return()?,
            TokenKind::Break | TokenKind::Continue => self.parse_jump()?,
            // `import(...)` and `import.meta` are expressions.
            TokenKind::Import
                if !matches!(
                    self.cursor.peek_kind(1),
                    TokenKind::LParen | TokenKind::Dot
                ) =>
            {
                self.parse_import()?
            }
            TokenKind::Export => return self.parse_export(start),
            TokenKind::Ident(name) => match self.parse_contextual_statement(name)? {
                Some(kind) => kind,
                None => self.parse_expr_stmt()?,
            },
            _ => self.parse_expr_stmt()?,
        };
        Ok(self.alloc_stmt(kind, start))
    }

    fn alloc_stmt(&mut self, kind: StmtKind, start: u32) -> StmtId {
        let span = self.span_from(start);
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }

    /// Statements introduced by a contextual keyword. `None` when the
    /// identifier begins an ordinary expression statement.
    fn parse_contextual_statement(&mut self, name: Name) -> Result<Option<StmtKind>, ParseError> {
        let next = self.cursor.peek_kind(1);
        let same_line = !self.cursor.peek_newline_before(1);
        let next_is_ident = matches!(next, TokenKind::Ident(_));
        let names = &self.names;

        let kind = if next == TokenKind::Colon {
            // Labeled statement; the label itself is not a binding.
            self.cursor.advance();
            self.cursor.advance();
            let body = self.parse_statement()?;
            self.arena.stmt(body).kind
        } else if name == names.async_kw && next == TokenKind::Function && same_line {
            let start = self.cursor.advance().span.start;
            StmtKind::Function(self.parse_function_decl(start, true)?)
        } else if name == names.type_kw && next_is_ident && same_line {
            self.skip_type_alias()?
        } else if name == names.interface && next_is_ident && same_line {
            self.skip_interface()?
        } else if name == names.enum_kw && next_is_ident && same_line {
            self.parse_enum()?
        } else if name == names.class && next_is_ident {
            self.parse_class(true)?
        } else if name == names.abstract_kw && next == TokenKind::Ident(names.class) && same_line {
            self.cursor.advance();
            self.parse_class(true)?
        } else if (name == names.namespace || name == names.module_kw)
            && (next_is_ident || matches!(next, TokenKind::Str(_)))
            && same_line
        {
            self.parse_namespace()?
        } else if name == names.global && next == TokenKind::LBrace {
            self.cursor.advance();
            let block = self.parse_block_stmt()?;
            self.arena.stmt(block).kind
        } else if name == names.declare
            && same_line
            && (next_is_ident
                || matches!(
                    next,
                    TokenKind::Var | TokenKind::Let | TokenKind::Const | TokenKind::Function
                ))
        {
            // Ambient declarations bind names but carry no runtime code.
            self.cursor.advance();
            self.parse_statement()?;
            StmtKind::Empty
        } else {
            return Ok(None);
        };
        Ok(Some(kind))
    }

    fn parse_expr_stmt(&mut self) -> Result<StmtKind, ParseError> {
        let expr = self.parse_expression()?;
        self.consume_semicolon()?;
        Ok(StmtKind::Expr(expr))
    }

    // Blocks

    pub(crate) fn parse_block_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.current_span().start;
        let open = self.cursor.expect(TokenKind::LBrace)?;
        let (scope, body) = self.with_scope(ScopeKind::Block, start, |p| p.parse_block_body(open));
        let body = body?;
        Ok(self.alloc_stmt(StmtKind::Block { body, scope }, start))
    }

    /// Statements of a block whose `{` was consumed at `open`, through the
    /// closing `}`.
    pub(crate) fn parse_block_body(&mut self, open: Span) -> Result<StmtRange, ParseError> {
        let stmts = self.parse_statements(true);
        self.expect_closing(TokenKind::RBrace, open)?;
        Ok(self.arena.alloc_stmt_list(stmts))
    }

    // Variables and binding patterns

    fn parse_var_stmt(&mut self, kind: DeclKind) -> Result<StmtKind, ParseError> {
        let decl = self.parse_var_decl(kind)?;
        self.consume_semicolon()?;
        Ok(decl)
    }

    /// `let a = 1, b: T` without the statement terminator.
    fn parse_var_decl(&mut self, kind: DeclKind) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let binding_kind = match kind {
            DeclKind::Let => BindingKind::Let,
            DeclKind::Const => BindingKind::Const,
            DeclKind::Var => BindingKind::Var,
        };

        let mut declarators = Vec::new();
        loop {
            let start = self.cursor.current_span().start;
            let pattern = self.parse_binding_pattern(binding_kind)?;
            // Definite assignment: `let x!: number`
            self.cursor.eat(TokenKind::Bang);
            if self.cursor.eat(TokenKind::Colon) {
                self.skip_type_annotation()?;
            }
            let init = if self.cursor.eat(TokenKind::Eq) {
                self.parse_assignment()?
            } else {
                ExprId::INVALID
            };
            declarators.push(Declarator {
                pattern,
                init,
                span: self.span_from(start),
            });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }

        Ok(StmtKind::VarDecl {
            kind,
            declarators: self.arena.alloc_declarators(declarators),
        })
    }

    /// Binding target of a declarator, parameter or catch clause. Every
    /// bound name is declared with `kind`.
    pub(crate) fn parse_binding_pattern(
        &mut self,
        kind: BindingKind,
    ) -> Result<BindingPattern, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.cursor.advance().span;
                self.declare(name, kind, span);
                Ok(BindingPattern::Ident(name))
            }
            TokenKind::LBrace => {
                let mut names = Vec::new();
                self.collect_object_pattern(kind, &mut names)?;
                Ok(BindingPattern::Object(self.arena.alloc_names(names)))
            }
            TokenKind::LBracket => {
                let mut names = Vec::new();
                self.collect_array_pattern(kind, &mut names)?;
                Ok(BindingPattern::Array(self.arena.alloc_names(names)))
            }
            other => Err(ParseError::expected_identifier(
                other,
                self.cursor.current_span(),
            )),
        }
    }

    fn collect_pattern_names(
        &mut self,
        kind: BindingKind,
        names: &mut Vec<Name>,
    ) -> Result<(), ParseError> {
        ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.cursor.advance().span;
                self.declare(name, kind, span);
                names.push(name);
                Ok(())
            }
            TokenKind::LBrace => self.collect_object_pattern(kind, names),
            TokenKind::LBracket => self.collect_array_pattern(kind, names),
            other => Err(ParseError::expected_identifier(
                other,
                self.cursor.current_span(),
            )),
        })
    }

    fn collect_object_pattern(
        &mut self,
        kind: BindingKind,
        names: &mut Vec<Name>,
    ) -> Result<(), ParseError> {
        let open = self.cursor.expect(TokenKind::LBrace)?;
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            if self.cursor.eat(TokenKind::DotDotDot) {
                self.collect_pattern_names(kind, names)?;
            } else {
                let key = self.parse_property_key()?;
                if self.cursor.eat(TokenKind::Colon) {
                    self.collect_pattern_names(kind, names)?;
                } else if let PropertyKey::Named {
                    name,
                    span,
                    shorthand: true,
                } = key
                {
                    self.declare(name, kind, span);
                    names.push(name);
                } else {
                    return Err(ParseError::unexpected(
                        "`:`",
                        self.cursor.current_kind(),
                        self.cursor.current_span(),
                    ));
                }
            }
            self.skip_pattern_default()?;
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_closing(TokenKind::RBrace, open)?;
        Ok(())
    }

    fn collect_array_pattern(
        &mut self,
        kind: BindingKind,
        names: &mut Vec<Name>,
    ) -> Result<(), ParseError> {
        let open = self.cursor.expect(TokenKind::LBracket)?;
        loop {
            match self.cursor.current_kind() {
                TokenKind::RBracket | TokenKind::Eof => break,
                // Elision: `[, b]`
                TokenKind::Comma => {
                    self.cursor.advance();
                    continue;
                }
                _ => {}
            }
            self.cursor.eat(TokenKind::DotDotDot);
            self.collect_pattern_names(kind, names)?;
            self.skip_pattern_default()?;
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_closing(TokenKind::RBracket, open)?;
        Ok(())
    }

    /// Default values inside destructuring patterns are parsed for syntax
    /// only; the pattern records the bound names.
    fn skip_pattern_default(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat(TokenKind::Eq) {
            self.parse_assignment()?;
        }
        Ok(())
    }

    // Functions

    /// `function name(...) { ... }` with the cursor on `function`.
    fn parse_function_decl(
        &mut self,
        start: u32,
        name_required: bool,
    ) -> Result<FunctionId, ParseError> {
        self.cursor.expect(TokenKind::Function)?;
        self.cursor.eat(TokenKind::Star);
        let name = match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.cursor.advance().span;
                self.declare(name, BindingKind::Function, span);
                name
            }
            _ if !name_required => Name::EMPTY,
            other => {
                return Err(ParseError::expected_identifier(
                    other,
                    self.cursor.current_span(),
                ))
            }
        };
        self.parse_function_rest(start, name)
    }

    /// Type parameters, parameter list, return type and block body of a
    /// function, declaration or method. A missing body (overload
    /// signature, abstract method) is accepted.
    pub(crate) fn parse_function_rest(
        &mut self,
        start: u32,
        name: Name,
    ) -> Result<FunctionId, ParseError> {
        self.skip_type_parameters()?;
        let (scope, parts) = self.with_scope(
            ScopeKind::Function,
            start,
            |p| -> Result<(ParamRange, StmtRange), ParseError> {
                let params = p.parse_params()?;
                if p.cursor.eat(TokenKind::Colon) {
                    p.skip_return_type()?;
                }
                let body = if p.cursor.check(TokenKind::LBrace) {
                    let open = p.cursor.advance().span;
                    p.parse_block_body(open)?
                } else {
                    p.consume_semicolon()?;
                    StmtRange::EMPTY
                };
                Ok((params, body))
            },
        );
        let (params, body) = parts?;
        let span = self.span_from(start);
        Ok(self.arena.alloc_function(Function {
            name,
            params,
            body: FunctionBody::Block(body),
            scope,
            is_arrow: false,
            span,
        }))
    }

    /// `(a, b: T = 1, ...rest)`, declaring each name in the current scope.
    pub(crate) fn parse_params(&mut self) -> Result<ParamRange, ParseError> {
        let open = self.cursor.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        while !self.cursor.check(TokenKind::RParen) && !self.cursor.is_at_end() {
            if let Some(param) = self.parse_param()? {
                params.push(param);
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(self.arena.alloc_params(params))
    }

    /// One parameter. A `this: T` parameter declares nothing and yields
    /// `None`.
    fn parse_param(&mut self) -> Result<Option<Param>, ParseError> {
        let start = self.cursor.current_span().start;
        if self.cursor.eat(TokenKind::This) {
            if self.cursor.eat(TokenKind::Colon) {
                self.skip_type_annotation()?;
            }
            return Ok(None);
        }

        // Parameter properties: `constructor(private readonly x: T)`
        while let TokenKind::Ident(name) = self.cursor.current_kind() {
            let modifies_next = matches!(
                self.cursor.peek_kind(1),
                TokenKind::Ident(_) | TokenKind::LBrace | TokenKind::LBracket
            );
            if self.names.is_param_modifier(name) && modifies_next {
                self.cursor.advance();
            } else {
                break;
            }
        }

        self.cursor.eat(TokenKind::DotDotDot);
        let pattern = self.parse_binding_pattern(BindingKind::Param)?;
        self.cursor.eat(TokenKind::Question);
        if self.cursor.eat(TokenKind::Colon) {
            self.skip_type_annotation()?;
        }
        let default = if self.cursor.eat(TokenKind::Eq) {
            self.parse_assignment()?
        } else {
            ExprId::INVALID
        };
        Ok(Some(Param {
            pattern,
            default,
            span: self.span_from(start),
        }))
    }

    // Control flow

    fn parse_paren_expr(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.expect(TokenKind::LParen)?;
        let expr = self.parse_expression()?;
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(expr)
    }

    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let cond = self.parse_paren_expr()?;
        let then_branch = self.parse_statement()?;
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            self.parse_statement()?
        } else {
            StmtId::INVALID
        };
        Ok(StmtKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let cond = self.parse_paren_expr()?;
        let body = self.parse_statement()?;
        Ok(StmtKind::While { cond, body })
    }

    fn parse_do_while(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let body = self.parse_statement()?;
        self.cursor.expect(TokenKind::While)?;
        let cond = self.parse_paren_expr()?;
        self.cursor.eat(TokenKind::Semicolon);
        Ok(StmtKind::DoWhile { body, cond })
    }

    fn parse_for(&mut self, start: u32) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.eat_name(self.names.await_kw);
        let open = self.cursor.expect(TokenKind::LParen)?;
        let (scope, parts) = self.with_scope(
            ScopeKind::For,
            start,
            |p| -> Result<(ForHeader, StmtId), ParseError> {
                let header = p.parse_for_header(open)?;
                let body = p.parse_statement()?;
                Ok((header, body))
            },
        );
        let (header, body) = parts?;
        Ok(match header {
            ForHeader::Classic { init, cond, update } => StmtKind::For {
                init,
                cond,
                update,
                body,
                scope,
            },
            ForHeader::Each { init, iterable } => StmtKind::ForEach {
                init,
                iterable,
                body,
                scope,
            },
        })
    }

    fn parse_for_header(&mut self, open: Span) -> Result<ForHeader, ParseError> {
        let init_start = self.cursor.current_span().start;
        let decl_kind = match self.cursor.current_kind() {
            TokenKind::Var => Some(DeclKind::Var),
            TokenKind::Let => Some(DeclKind::Let),
            TokenKind::Const => Some(DeclKind::Const),
            _ => None,
        };

        let init = if let Some(kind) = decl_kind {
            let decl = self.parse_var_decl(kind)?;
            self.alloc_stmt(decl, init_start)
        } else if self.cursor.check(TokenKind::Semicolon) {
            StmtId::INVALID
        } else {
            let expr = self.parse_expression()?;
            // `for (key in object)` arrives as an `in` expression.
            if let ExprKind::Binary {
                op: BinaryOp::In,
                left,
                right,
            } = *self.arena.kind(expr)
            {
                if self.cursor.check(TokenKind::RParen) {
                    self.cursor.advance();
                    let span = self.arena.span(left);
                    let init = self.arena.alloc_stmt(Stmt::new(StmtKind::Expr(left), span));
                    return Ok(ForHeader::Each {
                        init,
                        iterable: right,
                    });
                }
            }
            let span = self.arena.span(expr);
            self.arena.alloc_stmt(Stmt::new(StmtKind::Expr(expr), span))
        };

        if init.is_valid()
            && (self.cursor.check(TokenKind::In) || self.cursor.check_name(self.names.of))
        {
            self.cursor.advance();
            let iterable = self.parse_expression()?;
            self.expect_closing(TokenKind::RParen, open)?;
            return Ok(ForHeader::Each { init, iterable });
        }

        self.cursor.expect(TokenKind::Semicolon)?;
        let cond = if self.cursor.check(TokenKind::Semicolon) {
            ExprId::INVALID
        } else {
            self.parse_expression()?
        };
        self.cursor.expect(TokenKind::Semicolon)?;
        let update = if self.cursor.check(TokenKind::RParen) {
            ExprId::INVALID
        } else {
            self.parse_expression()?
        };
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(ForHeader::Classic { init, cond, update })
    }

    fn parse_switch(&mut self, start: u32) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let discriminant = self.parse_paren_expr()?;
        let open = self.cursor.expect(TokenKind::LBrace)?;
        let (scope, body) =
            self.with_scope(ScopeKind::Block, start, |p| -> Result<StmtRange, ParseError> {
                let mut stmts = Vec::new();
                while !p.cursor.check(TokenKind::RBrace) && !p.cursor.is_at_end() {
                    let case_start = p.cursor.current_span().start;
                    let test = match p.cursor.current_kind() {
                        TokenKind::Case => {
                            p.cursor.advance();
                            Some(p.parse_expression()?)
                        }
                        TokenKind::Default => {
                            p.cursor.advance();
                            Some(ExprId::INVALID)
                        }
                        _ => None,
                    };
                    if let Some(test) = test {
                        p.cursor.expect(TokenKind::Colon)?;
                        stmts.push(p.alloc_stmt(StmtKind::Case(test), case_start));
                    } else if let Some(stmt) = p.parse_statement_recovering() {
                        stmts.push(stmt);
                    }
                }
                p.expect_closing(TokenKind::RBrace, open)?;
                Ok(p.arena.alloc_stmt_list(stmts))
            });
        Ok(StmtKind::Switch {
            discriminant,
            body: body?,
            scope,
        })
    }

    fn parse_try(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let block = self.parse_block_stmt()?;

        let handler = if self.cursor.check(TokenKind::Catch) {
            let start = self.cursor.advance().span.start;
            let (scope, body) =
                self.with_scope(ScopeKind::Block, start, |p| -> Result<StmtRange, ParseError> {
                    if p.cursor.check(TokenKind::LParen) {
                        let open = p.cursor.advance().span;
                        p.parse_binding_pattern(BindingKind::CatchParam)?;
                        if p.cursor.eat(TokenKind::Colon) {
                            p.skip_type_annotation()?;
                        }
                        p.expect_closing(TokenKind::RParen, open)?;
                    }
                    let open = p.cursor.expect(TokenKind::LBrace)?;
                    p.parse_block_body(open)
                });
            let body = body?;
            self.alloc_stmt(StmtKind::Block { body, scope }, start)
        } else {
            StmtId::INVALID
        };

        let finalizer = if self.cursor.eat(TokenKind::Finally) {
            self.parse_block_stmt()?
        } else {
            StmtId::INVALID
        };

        if !handler.is_valid() && !finalizer.is_valid() {
            return Err(ParseError::unexpected(
                "`catch` or `finally`",
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        }
        Ok(StmtKind::Try {
            block,
            handler,
            finalizer,
        })
    }

    fn at_statement_end(&self) -> bool {
        self.cursor.check(TokenKind::Semicolon)
            || self.cursor.check(TokenKind::RBrace)
            || self.cursor.is_at_end()
            || self.cursor.newline_before()
    }

    fn parse_return(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let value = if self.at_statement_end() {
            ExprId::INVALID
        } else {
            self.parse_expression()?
        };
        self.consume_semicolon()?;
        Ok(StmtKind::Return(value))
    }

    /// `break` / `continue` with an optional label.
    fn parse_jump(&mut self) -> Result<StmtKind, ParseError> {
        let kind = if self.cursor.advance().kind == TokenKind::Break {
            StmtKind::Break
        } else {
            StmtKind::Continue
        };
        if self.cursor.check_ident() && !self.cursor.newline_before() {
            self.cursor.advance();
        }
        self.consume_semicolon()?;
        Ok(kind)
    }

    // Modules

    fn parse_import(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let mut bindings = Vec::new();

        // Side-effect import: `import "module";`
        if matches!(self.cursor.current_kind(), TokenKind::Str(_)) {
            self.cursor.advance();
            self.skip_import_attributes()?;
            self.consume_semicolon()?;
            return Ok(StmtKind::Import {
                bindings: NameRange::EMPTY,
            });
        }

        // `import type ...` binds the same names, for type positions only.
        if self.cursor.check_name(self.names.type_kw)
            && matches!(
                self.cursor.peek_kind(1),
                TokenKind::Ident(_) | TokenKind::LBrace | TokenKind::Star
            )
            && self.cursor.peek_kind(1) != TokenKind::Ident(self.names.from)
        {
            self.cursor.advance();
        }

        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            let span = self.cursor.advance().span;
            self.declare(name, BindingKind::Import, span);
            bindings.push(name);
            if self.cursor.eat(TokenKind::Eq) {
                // `import fs = require("fs")`
                self.parse_assignment()?;
                self.consume_semicolon()?;
                return Ok(StmtKind::Import {
                    bindings: self.arena.alloc_names(bindings),
                });
            }
            if !self.cursor.eat(TokenKind::Comma) {
                return self.finish_import(bindings);
            }
        }

        if self.cursor.eat(TokenKind::Star) {
            self.expect_name(self.names.as_kw, "`as`")?;
            let (name, span) = self.cursor.expect_ident()?;
            self.declare(name, BindingKind::Import, span);
            bindings.push(name);
        } else {
            let open = self.cursor.expect(TokenKind::LBrace)?;
            while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
                self.parse_import_specifier(&mut bindings)?;
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.expect_closing(TokenKind::RBrace, open)?;
        }
        self.finish_import(bindings)
    }

    /// `a`, `a as b`, `default as b`, `"string name" as b`, `type a`.
    fn parse_import_specifier(&mut self, bindings: &mut Vec<Name>) -> Result<(), ParseError> {
        if self.cursor.check_name(self.names.type_kw)
            && !matches!(
                self.cursor.peek_kind(1),
                TokenKind::Comma | TokenKind::RBrace
            )
            && self.cursor.peek_kind(1) != TokenKind::Ident(self.names.as_kw)
        {
            self.cursor.advance();
        }

        let imported = match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.cursor.advance().span;
                Some((name, span))
            }
            TokenKind::Str(_) => {
                self.cursor.advance();
                None
            }
            other => {
                if self.property_name().is_none() {
                    return Err(ParseError::expected_identifier(
                        other,
                        self.cursor.current_span(),
                    ));
                }
                None
            }
        };

        let (local, span) = if self.eat_name(self.names.as_kw) {
            self.cursor.expect_ident()?
        } else if let Some(imported) = imported {
            imported
        } else {
            return Err(ParseError::unexpected(
                "`as`",
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        };
        self.declare(local, BindingKind::Import, span);
        bindings.push(local);
        Ok(())
    }

    fn finish_import(&mut self, bindings: Vec<Name>) -> Result<StmtKind, ParseError> {
        self.expect_name(self.names.from, "`from`")?;
        self.expect_module_specifier()?;
        self.skip_import_attributes()?;
        self.consume_semicolon()?;
        Ok(StmtKind::Import {
            bindings: self.arena.alloc_names(bindings),
        })
    }

    fn expect_module_specifier(&mut self) -> Result<(), ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Str(_) => {
                self.cursor.advance();
                Ok(())
            }
            other => Err(ParseError::unexpected(
                "module specifier",
                other,
                self.cursor.current_span(),
            )),
        }
    }

    /// `with { type: "json" }` or `assert { ... }` after a specifier.
    fn skip_import_attributes(&mut self) -> Result<(), ParseError> {
        if self.cursor.check_ident()
            && self.cursor.peek_kind(1) == TokenKind::LBrace
            && !self.cursor.newline_before()
        {
            self.cursor.advance();
            self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace)?;
        }
        Ok(())
    }

    fn parse_export(&mut self, start: u32) -> Result<StmtId, ParseError> {
        self.cursor.advance();
        let kind = match self.cursor.current_kind() {
            TokenKind::Default => {
                self.cursor.advance();
                self.parse_export_default()?
            }
            TokenKind::LBrace => {
                self.skip_export_list()?;
                StmtKind::Empty
            }
            TokenKind::Ident(name)
                if name == self.names.type_kw && self.cursor.peek_kind(1) == TokenKind::LBrace =>
            {
                self.cursor.advance();
                self.skip_export_list()?;
                StmtKind::Empty
            }
            TokenKind::Star => {
                self.cursor.advance();
                if self.eat_name(self.names.as_kw)
                    && !matches!(self.cursor.current_kind(), TokenKind::Str(_))
                {
                    self.cursor.expect_ident()?;
                } else {
                    self.cursor.eat_str();
                }
                self.expect_name(self.names.from, "`from`")?;
                self.expect_module_specifier()?;
                self.consume_semicolon()?;
                StmtKind::Empty
            }
            // `export = value`
            TokenKind::Eq => {
                self.cursor.advance();
                let expr = self.parse_assignment()?;
                self.consume_semicolon()?;
                StmtKind::Expr(expr)
            }
            _ => return self.parse_statement(),
        };
        Ok(self.alloc_stmt(kind, start))
    }

    fn parse_export_default(&mut self) -> Result<StmtKind, ParseError> {
        let start = self.cursor.current_span().start;
        let next = self.cursor.peek_kind(1);
        match self.cursor.current_kind() {
            TokenKind::Function => Ok(StmtKind::Function(self.parse_function_decl(start, false)?)),
            TokenKind::Ident(name) if name == self.names.async_kw && next == TokenKind::Function => {
                self.cursor.advance();
                Ok(StmtKind::Function(self.parse_function_decl(start, false)?))
            }
            TokenKind::Ident(name) if name == self.names.class => self.parse_class(false),
            TokenKind::Ident(name)
                if name == self.names.abstract_kw && next == TokenKind::Ident(self.names.class) =>
            {
                self.cursor.advance();
                self.parse_class(false)
            }
            TokenKind::Ident(name)
                if name == self.names.interface && matches!(next, TokenKind::Ident(_)) =>
            {
                self.skip_interface()
            }
            _ => {
                let expr = self.parse_assignment()?;
                self.consume_semicolon()?;
                Ok(StmtKind::Expr(expr))
            }
        }
    }

    /// `{ a, b as c } [from "m"]`; re-exports bind nothing locally.
    fn skip_export_list(&mut self) -> Result<(), ParseError> {
        self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace)?;
        if self.eat_name(self.names.from) {
            self.expect_module_specifier()?;
        }
        self.consume_semicolon()
    }

    // Type-level and class declarations

    fn skip_type_alias(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.cursor.expect_ident()?;
        self.skip_type_parameters()?;
        self.cursor.expect(TokenKind::Eq)?;
        self.skip_type_annotation()?;
        self.consume_semicolon()?;
        Ok(StmtKind::Empty)
    }

    fn skip_interface(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.cursor.expect_ident()?;
        self.skip_type_parameters()?;
        if self.eat_name(self.names.extends) {
            loop {
                self.skip_type_annotation()?;
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace)?;
        Ok(StmtKind::Empty)
    }

    /// `enum E { ... }` with the cursor on `enum`. The members are
    /// constants; only the enum's own name is bound.
    fn parse_enum(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let (name, span) = self.cursor.expect_ident()?;
        self.declare(name, BindingKind::Class, span);
        self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace)?;
        Ok(StmtKind::Empty)
    }

    /// `namespace A.B { ... }` / `module "m" { ... }`. The body is an
    /// ordinary block.
    fn parse_namespace(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        if !self.cursor.eat_str() {
            let (name, span) = self.cursor.expect_ident()?;
            self.declare(name, BindingKind::Class, span);
            while self.cursor.eat(TokenKind::Dot) {
                self.cursor.expect_ident()?;
            }
        }
        if !self.cursor.check(TokenKind::LBrace) {
            self.consume_semicolon()?;
            return Ok(StmtKind::Empty);
        }
        let block = self.parse_block_stmt()?;
        Ok(self.arena.stmt(block).kind)
    }

    /// `class Name<T> extends Base implements I { ... }` with the cursor on
    /// `class`.
    fn parse_class(&mut self, name_required: bool) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let name = match self.cursor.current_kind() {
            TokenKind::Ident(name)
                if name != self.names.extends && name != self.names.implements =>
            {
                let span = self.cursor.advance().span;
                self.declare(name, BindingKind::Class, span);
                name
            }
            _ if !name_required => Name::EMPTY,
            other => {
                return Err(ParseError::expected_identifier(
                    other,
                    self.cursor.current_span(),
                ))
            }
        };
        self.skip_type_parameters()?;

        let heritage = if self.eat_name(self.names.extends) {
            let heritage = self.parse_heritage()?;
            if self.cursor.check(TokenKind::Lt) {
                self.skip_type_arguments()?;
            }
            heritage
        } else {
            ExprId::INVALID
        };
        if self.eat_name(self.names.implements) {
            loop {
                self.skip_type_annotation()?;
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        let open = self.cursor.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            let before = self.cursor.position();
            match self.parse_class_member() {
                Ok(Some(member)) => members.push(member),
                Ok(None) => {}
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize(before);
                }
            }
        }
        self.expect_closing(TokenKind::RBrace, open)?;

        Ok(StmtKind::Class {
            name,
            heritage,
            members: self.arena.alloc_stmt_list(members),
        })
    }

    /// One class member. Methods become `Function` statements, property
    /// initializers `Expr` statements; bare property declarations and
    /// index signatures yield `None`.
    fn parse_class_member(&mut self) -> Result<Option<StmtId>, ParseError> {
        let start = self.cursor.current_span().start;
        if self.cursor.eat(TokenKind::Semicolon) {
            return Ok(None);
        }
        // Static initialization block.
        if self.cursor.check_name(self.names.static_kw)
            && self.cursor.peek_kind(1) == TokenKind::LBrace
        {
            self.cursor.advance();
            return self.parse_block_stmt().map(Some);
        }

        while let TokenKind::Ident(name) = self.cursor.current_kind() {
            if self.names.is_member_modifier(name) && self.starts_member_key(1) {
                self.cursor.advance();
            } else {
                break;
            }
        }
        self.cursor.eat(TokenKind::Star);
        match self.cursor.current_kind() {
            TokenKind::Ident(name)
                if (name == self.names.get || name == self.names.set)
                    && self.starts_member_key(1) =>
            {
                self.cursor.advance();
            }
            _ => {}
        }

        // Index signature: `[key: string]: T;`
        if self.cursor.check(TokenKind::LBracket)
            && matches!(self.cursor.peek_kind(1), TokenKind::Ident(_))
            && self.cursor.peek_kind(2) == TokenKind::Colon
        {
            self.skip_balanced(TokenKind::LBracket, TokenKind::RBracket)?;
            if self.cursor.eat(TokenKind::Colon) {
                self.skip_type_annotation()?;
            }
            self.consume_semicolon()?;
            return Ok(None);
        }

        let name = match self.parse_property_key()? {
            PropertyKey::Named { name, .. } => name,
            PropertyKey::Computed(_) => Name::EMPTY,
        };
        self.cursor.eat(TokenKind::Question);
        self.cursor.eat(TokenKind::Bang);

        if self.cursor.check(TokenKind::LParen) || self.cursor.check(TokenKind::Lt) {
            let function = self.parse_function_rest(start, name)?;
            return Ok(Some(self.alloc_stmt(StmtKind::Function(function), start)));
        }

        if self.cursor.eat(TokenKind::Colon) {
            self.skip_type_annotation()?;
        }
        let init = if self.cursor.eat(TokenKind::Eq) {
            Some(self.parse_assignment()?)
        } else {
            None
        };
        self.consume_semicolon()?;
        Ok(init.map(|init| self.alloc_stmt(StmtKind::Expr(init), start)))
    }
}
