//! Arena storage for the flat AST.
//!
//! Every node lives in a contiguous vector and is referenced by index.
//! Expressions additionally record the innermost lexical scope they were
//! parsed in, which is how the hygiene checker answers "what is bound
//! around this call site" without re-walking the tree.

use crate::ast::{Declarator, Expr, ExprKind, Function, Param, Property, Stmt};
use crate::{
    DeclaratorRange, ExprId, ExprRange, FunctionId, Name, NameRange, ParamRange, PropertyRange,
    ScopeId, Span, StmtId, StmtRange,
};

/// Convert a vector length to a `u32` index.
///
/// # Panics
/// Panics past `u32::MAX` nodes; a source file that large is rejected by
/// the lexer long before.
#[inline]
fn to_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("AST arena exceeded u32::MAX entries"))
}

/// Flat storage for all nodes of one module.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_scopes: Vec<ScopeId>,
    expr_lists: Vec<ExprId>,
    stmts: Vec<Stmt>,
    stmt_lists: Vec<StmtId>,
    functions: Vec<Function>,
    params: Vec<Param>,
    declarators: Vec<Declarator>,
    properties: Vec<Property>,
    names: Vec<Name>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    // Expressions

    /// Allocate an expression parsed inside `scope`.
    pub fn alloc_expr(&mut self, expr: Expr, scope: ScopeId) -> ExprId {
        let id = ExprId::new(to_index(self.exprs.len()));
        self.exprs.push(expr);
        self.expr_scopes.push(scope);
        id
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this arena.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()].kind
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.exprs[id.index()].span
    }

    /// The innermost scope enclosing an expression.
    #[inline]
    pub fn scope_of(&self, id: ExprId) -> ScopeId {
        self.expr_scopes[id.index()]
    }

    /// Replace the span of an already allocated expression.
    ///
    /// Used when a wrapper's extent is only known after its operand.
    pub fn set_span(&mut self, id: ExprId, span: Span) {
        self.exprs[id.index()].span = span;
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Strip parentheses, type assertions and non-null assertions.
    ///
    /// `((x as number)!)` and `x` denote the same runtime value.
    pub fn skip_wrappers(&self, mut id: ExprId) -> ExprId {
        loop {
            match *self.kind(id) {
                ExprKind::Paren(inner)
                | ExprKind::NonNull(inner)
                | ExprKind::TypeAssertion { expr: inner, .. } => id = inner,
                _ => return id,
            }
        }
    }

    pub fn alloc_expr_list(&mut self, items: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_index(self.expr_lists.len());
        self.expr_lists.extend(items);
        ExprRange::new(start, to_index(self.expr_lists.len()) - start)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.as_range()]
    }

    // Statements

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_index(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn alloc_stmt_list(&mut self, items: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = to_index(self.stmt_lists.len());
        self.stmt_lists.extend(items);
        StmtRange::new(start, to_index(self.stmt_lists.len()) - start)
    }

    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.as_range()]
    }

    // Functions

    pub fn alloc_function(&mut self, function: Function) -> FunctionId {
        let id = FunctionId::new(to_index(self.functions.len()));
        self.functions.push(function);
        id
    }

    #[inline]
    pub fn function(&self, id: FunctionId) -> &Function {
        &self.functions[id.index()]
    }

    pub fn alloc_params(&mut self, items: impl IntoIterator<Item = Param>) -> ParamRange {
        let start = to_index(self.params.len());
        self.params.extend(items);
        ParamRange::new(start, to_index(self.params.len()) - start)
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Param] {
        &self.params[range.as_range()]
    }

    // Declarations, properties, names

    pub fn alloc_declarators(
        &mut self,
        items: impl IntoIterator<Item = Declarator>,
    ) -> DeclaratorRange {
        let start = to_index(self.declarators.len());
        self.declarators.extend(items);
        DeclaratorRange::new(start, to_index(self.declarators.len()) - start)
    }

    #[inline]
    pub fn get_declarators(&self, range: DeclaratorRange) -> &[Declarator] {
        &self.declarators[range.as_range()]
    }

    pub fn alloc_properties(&mut self, items: impl IntoIterator<Item = Property>) -> PropertyRange {
        let start = to_index(self.properties.len());
        self.properties.extend(items);
        PropertyRange::new(start, to_index(self.properties.len()) - start)
    }

    #[inline]
    pub fn get_properties(&self, range: PropertyRange) -> &[Property] {
        &self.properties[range.as_range()]
    }

    pub fn alloc_names(&mut self, items: impl IntoIterator<Item = Name>) -> NameRange {
        let start = to_index(self.names.len());
        self.names.extend(items);
        NameRange::new(start, to_index(self.names.len()) - start)
    }

    #[inline]
    pub fn get_names(&self, range: NameRange) -> &[Name] {
        &self.names[range.as_range()]
    }
}
