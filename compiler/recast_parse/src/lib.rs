//! Recursive descent parser for the TypeScript subset analyzed by recast.
//!
//! Produces the flat AST in an [`ExprArena`] and, in the same pass, the
//! lexical [`ScopeTree`]: every expression records the innermost scope it
//! was parsed in, and every declaration is bound in the scope it belongs
//! to (`var` and function declarations hoisted to the nearest function or
//! module scope).
//!
//! Type annotations are recognized and skipped; only their spans survive
//! (in type assertions).

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::{lex_error_to_diagnostic, ParseError};

use recast_diagnostic::{Diagnostic, ErrorCode};
use recast_ir::{
    Binding, BindingKind, Expr, ExprArena, ExprId, ExprKind, Module, Name, ScopeId, ScopeKind,
    ScopeTree, Span, StringInterner, TokenKind, TokenList,
};

/// Contextual keywords, interned once per parse.
struct Contextual {
    as_kw: Name,
    satisfies: Name,
    from: Name,
    of: Name,
    async_kw: Name,
    await_kw: Name,
    type_kw: Name,
    interface: Name,
    declare: Name,
    namespace: Name,
    module_kw: Name,
    global: Name,
    abstract_kw: Name,
    enum_kw: Name,
    class: Name,
    extends: Name,
    implements: Name,
    keyof: Name,
    readonly: Name,
    unique: Name,
    infer: Name,
    is: Name,
    asserts: Name,
    get: Name,
    set: Name,
    static_kw: Name,
    public: Name,
    private: Name,
    protected: Name,
    override_kw: Name,
}

impl Contextual {
    fn new(interner: &mut StringInterner) -> Self {
        Contextual {
            as_kw: interner.intern("as"),
            satisfies: interner.intern("satisfies"),
            from: interner.intern("from"),
            of: interner.intern("of"),
            async_kw: interner.intern("async"),
            await_kw: interner.intern("await"),
            type_kw: interner.intern("type"),
            interface: interner.intern("interface"),
            declare: interner.intern("declare"),
            namespace: interner.intern("namespace"),
            module_kw: interner.intern("module"),
            global: interner.intern("global"),
            abstract_kw: interner.intern("abstract"),
            enum_kw: interner.intern("enum"),
            class: interner.intern("class"),
            extends: interner.intern("extends"),
            implements: interner.intern("implements"),
            keyof: interner.intern("keyof"),
            readonly: interner.intern("readonly"),
            unique: interner.intern("unique"),
            infer: interner.intern("infer"),
            is: interner.intern("is"),
            asserts: interner.intern("asserts"),
            get: interner.intern("get"),
            set: interner.intern("set"),
            static_kw: interner.intern("static"),
            public: interner.intern("public"),
            private: interner.intern("private"),
            protected: interner.intern("protected"),
            override_kw: interner.intern("override"),
        }
    }

    /// Class member modifiers.
    fn is_member_modifier(&self, name: Name) -> bool {
        [
            self.public,
            self.private,
            self.protected,
            self.static_kw,
            self.readonly,
            self.abstract_kw,
            self.override_kw,
            self.declare,
            self.async_kw,
        ]
        .contains(&name)
    }

    /// Modifiers allowed on constructor parameters.
    fn is_param_modifier(&self, name: Name) -> bool {
        [
            self.public,
            self.private,
            self.protected,
            self.readonly,
            self.override_kw,
        ]
        .contains(&name)
    }
}

/// Everything produced by parsing one module.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub module: Module,
    pub arena: ExprArena,
    pub scopes: ScopeTree,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    interner: &'a mut StringInterner,
    names: Contextual,
    arena: ExprArena,
    scopes: ScopeTree,
    /// Innermost open scope.
    scope: ScopeId,
    /// `>` tokens still owed to enclosing type argument lists after a
    /// `>>` or `>>>` closed an inner one.
    pending_gt: u8,
    errors: Vec<ParseError>,
}

/// Saved parser position for speculative parsing.
#[derive(Copy, Clone)]
struct Snapshot {
    pos: usize,
    pending_gt: u8,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a mut StringInterner) -> Self {
        let names = Contextual::new(interner);
        Parser {
            cursor: Cursor::new(tokens),
            interner,
            names,
            arena: ExprArena::new(),
            scopes: ScopeTree::new(),
            scope: ScopeId::INVALID,
            pending_gt: 0,
            errors: Vec::new(),
        }
    }

    /// Parse a whole module.
    pub fn parse_module(mut self) -> ParseOutput {
        self.scope = self.scopes.push(ScopeKind::Module, None, Span::DUMMY);
        let stmts = self.parse_statements(false);
        let body = self.arena.alloc_stmt_list(stmts);
        // The cursor rests on `Eof`, whose span ends the file.
        let span = Span::new(0, self.cursor.current_span().end);
        self.scopes.set_span(self.scope, span);

        tracing::debug!(
            exprs = self.arena.expr_count(),
            scopes = self.scopes.len(),
            errors = self.errors.len(),
            "parsed module"
        );
        ParseOutput {
            module: Module {
                body,
                scope: self.scope,
                span,
            },
            arena: self.arena,
            scopes: self.scopes,
            errors: self.errors,
        }
    }

    // Shared helpers used across the grammar modules.

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            pos: self.cursor.position(),
            pending_gt: self.pending_gt,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.cursor.set_position(snapshot.pos);
        self.pending_gt = snapshot.pending_gt;
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: u32) -> Span {
        let end = self.cursor.previous_span().end.max(start);
        Span::new(start, end)
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span), self.scope)
    }

    /// Bind `name`; `var` and function declarations go to the hoist target.
    fn declare(&mut self, name: Name, kind: BindingKind, span: Span) {
        let scope = match kind {
            BindingKind::Var | BindingKind::Function => self.scopes.hoist_target(self.scope),
            _ => self.scope,
        };
        self.scopes.declare(scope, Binding { name, kind, span });
    }

    /// Run `f` inside a fresh child scope opened at `start`.
    ///
    /// The enclosing scope is restored even when `f` fails, so error
    /// recovery resumes with a consistent scope stack.
    fn with_scope<T>(
        &mut self,
        kind: ScopeKind,
        start: u32,
        f: impl FnOnce(&mut Self) -> T,
    ) -> (ScopeId, T) {
        let outer = self.scope;
        let inner = self
            .scopes
            .push(kind, Some(outer), Span::new(start, start));
        self.scope = inner;
        let result = f(self);
        let span = self.span_from(start);
        self.scopes.set_span(inner, span);
        self.scope = outer;
        (inner, result)
    }

    /// Consume the delimiter closing `open`, or report it unclosed.
    fn expect_closing(&mut self, closing: TokenKind, open: Span) -> Result<Span, ParseError> {
        if self.cursor.check(closing) {
            return Ok(self.cursor.advance().span);
        }
        Err(ParseError::new(
            ErrorCode::E1003,
            format!(
                "expected {} to close this delimiter, found {}",
                closing.describe(),
                self.cursor.current_kind().describe()
            ),
            self.cursor.current_span(),
        )
        .with_context(open, "opened here"))
    }

    fn eat_name(&mut self, name: Name) -> bool {
        if self.cursor.check_name(name) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    fn expect_name(&mut self, name: Name, expected: &str) -> Result<Span, ParseError> {
        if self.cursor.check_name(name) {
            Ok(self.cursor.advance().span)
        } else {
            Err(ParseError::unexpected(
                expected,
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ))
        }
    }

    /// Consume an identifier or a reserved word used as a name
    /// (`obj.delete`, `{ new: 1 }`, `import { default as x }`).
    fn property_name(&mut self) -> Option<(Name, Span)> {
        let kind = self.cursor.current_kind();
        let name = match kind {
            TokenKind::Ident(name) => name,
            _ => self.interner.intern(kind.keyword_str()?),
        };
        Some((name, self.cursor.advance().span))
    }

    /// End a statement: an explicit `;`, or an inserted one before `}`,
    /// end of input or a line break.
    fn consume_semicolon(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat(TokenKind::Semicolon)
            || self.cursor.check(TokenKind::RBrace)
            || self.cursor.is_at_end()
            || self.cursor.newline_before()
        {
            return Ok(());
        }
        Err(ParseError::unexpected(
            "`;`",
            self.cursor.current_kind(),
            self.cursor.current_span(),
        ))
    }
}

/// Parse a token list into a module.
pub fn parse(tokens: &TokenList, interner: &mut StringInterner) -> ParseOutput {
    Parser::new(tokens, interner).parse_module()
}

/// A parsed source file together with its lexical and syntax diagnostics.
#[derive(Clone, Debug)]
pub struct ParsedSource {
    pub output: ParseOutput,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedSource {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Lex and parse `source`.
pub fn parse_source(source: &str, interner: &mut StringInterner) -> ParsedSource {
    let lexed = recast_lexer::lex(source, interner);
    let output = parse(&lexed.tokens, interner);
    let diagnostics = lexed
        .errors
        .iter()
        .map(lex_error_to_diagnostic)
        .chain(output.errors.iter().map(ParseError::to_diagnostic))
        .collect();
    ParsedSource {
        output,
        diagnostics,
    }
}

#[cfg(test)]
mod tests;
