//! AST node definitions.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, Property};
pub use operators::{AssertionKind, AssignOp, BinaryOp, UnaryOp, UpdateOp};
pub use stmt::{
    BindingPattern, DeclKind, Declarator, Function, FunctionBody, Module, Param, Stmt, StmtKind,
};
