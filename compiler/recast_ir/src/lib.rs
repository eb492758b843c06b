//! Recast IR - syntax tree types shared by the lexer, parser and rule engine.
//!
//! - Spans for source locations
//! - Interned identifiers (`Name`)
//! - Tokens and `TokenList` for lexer output
//! - The flat, arena-allocated AST (`ExprArena`)
//! - The lexical `ScopeTree` built alongside it
//! - A pre-order `Visitor`
//!
//! # Design
//!
//! - **Flatten everything**: no `Box<Expr>`, children are `ExprId(u32)`
//!   indices and lists are `(start, len)` ranges into side vectors.
//! - **Intern identifiers**: strings become `Name(u32)` so scope lookups
//!   are integer hashing.
//! - Numbers are stored as `f64` bits so node kinds stay `Eq + Hash`.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod scope;
mod span;
mod token;
pub mod visitor;

pub use arena::ExprArena;
pub use ast::{
    AssertionKind, AssignOp, BinaryOp, BindingPattern, DeclKind, Declarator, Expr, ExprKind,
    Function, FunctionBody, Module, Param, Property, Stmt, StmtKind, UnaryOp, UpdateOp,
};
pub use expr_id::{
    DeclaratorRange, ExprId, ExprRange, FunctionId, NameRange, ParamRange, PropertyRange, ScopeId,
    StmtId, StmtRange,
};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use scope::{Ancestors, Binding, BindingKind, Scope, ScopeKind, ScopeTree};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use visitor::Visitor;
