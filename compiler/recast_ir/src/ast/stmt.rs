//! Statements, declarations and functions.

use crate::{
    DeclaratorRange, ExprId, FunctionId, Name, NameRange, ParamRange, ScopeId, Span, StmtId,
    StmtRange,
};

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// `let` / `const` / `var`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    Let,
    Const,
    Var,
}

/// Statement variants. Optional children use the `INVALID` sentinels.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    Expr(ExprId),
    VarDecl {
        kind: DeclKind,
        declarators: DeclaratorRange,
    },
    /// `function name(...) { ... }`
    Function(FunctionId),
    /// `class Name extends heritage { ... }`. Methods are `Function`
    /// members, property initializers `Expr` members.
    Class {
        name: Name,
        heritage: ExprId,
        members: StmtRange,
    },
    Block {
        body: StmtRange,
        scope: ScopeId,
    },
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: StmtId,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    DoWhile {
        body: StmtId,
        cond: ExprId,
    },
    /// `for (init; cond; update) body`; the header owns `scope`.
    For {
        init: StmtId,
        cond: ExprId,
        update: ExprId,
        body: StmtId,
        scope: ScopeId,
    },
    /// `for (decl in obj) body` / `for (decl of iterable) body`.
    ForEach {
        init: StmtId,
        iterable: ExprId,
        body: StmtId,
        scope: ScopeId,
    },
    Return(ExprId),
    Throw(ExprId),
    /// `try block catch (param) handler finally finalizer`; `handler` is a
    /// block whose scope holds the catch parameter.
    Try {
        block: StmtId,
        handler: StmtId,
        finalizer: StmtId,
    },
    /// `switch (discriminant) { ... }`; cases are flattened into `body`
    /// as `Case` markers followed by their statements.
    Switch {
        discriminant: ExprId,
        body: StmtRange,
        scope: ScopeId,
    },
    /// `case test:`, or `default:` when `test` is `INVALID`.
    Case(ExprId),
    Break,
    Continue,
    /// Import declaration; `bindings` are the local names it introduces.
    Import {
        bindings: NameRange,
    },
    Empty,
}

/// Binding target of a declarator or parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BindingPattern {
    Ident(Name),
    /// `{ a, b: c }`; holds the bound local names.
    Object(NameRange),
    /// `[a, , b]`; holds the bound local names.
    Array(NameRange),
}

/// One `name = init` in a variable declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Declarator {
    pub pattern: BindingPattern,
    pub init: ExprId,
    pub span: Span,
}

/// Function parameter with optional default value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub pattern: BindingPattern,
    pub default: ExprId,
    pub span: Span,
}

/// Function body: a block or, for arrows, a single expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FunctionBody {
    Block(StmtRange),
    Expr(ExprId),
}

/// Function declaration, function expression or arrow function.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Function {
    /// `Name::EMPTY` for anonymous functions and arrows.
    pub name: Name,
    pub params: ParamRange,
    pub body: FunctionBody,
    /// Scope holding the parameters and the body's declarations.
    pub scope: ScopeId,
    pub is_arrow: bool,
    pub span: Span,
}

/// A parsed source file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Module {
    pub body: StmtRange,
    pub scope: ScopeId,
    pub span: Span,
}
