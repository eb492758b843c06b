//! AST visitor.
//!
//! Pre-order traversal in source order: a node is visited before its
//! children, and children left to right. For `f(g(x))` the outer call is
//! visited before the inner one, which is the order the rewrite rule
//! reports in.
//!
//! Override `visit_*` to observe nodes and call the matching `walk_*` to
//! continue into children. Recursion goes through
//! [`ensure_sufficient_stack`] so generated, deeply nested files are safe.

use recast_stack::ensure_sufficient_stack;

use crate::ast::{ExprKind, FunctionBody, Module, Property, StmtKind};
use crate::{ExprArena, ExprId, FunctionId, StmtId};

/// AST visitor trait.
pub trait Visitor {
    fn visit_module(&mut self, module: &Module, arena: &ExprArena) {
        walk_module(self, module, arena);
    }

    fn visit_stmt(&mut self, id: StmtId, arena: &ExprArena) {
        walk_stmt(self, id, arena);
    }

    fn visit_expr(&mut self, id: ExprId, arena: &ExprArena) {
        walk_expr(self, id, arena);
    }

    fn visit_function(&mut self, id: FunctionId, arena: &ExprArena) {
        walk_function(self, id, arena);
    }
}

pub fn walk_module<V: Visitor + ?Sized>(visitor: &mut V, module: &Module, arena: &ExprArena) {
    for &stmt in arena.get_stmt_list(module.body) {
        visitor.visit_stmt(stmt, arena);
    }
}

fn visit_opt_expr<V: Visitor + ?Sized>(visitor: &mut V, id: ExprId, arena: &ExprArena) {
    if id.is_valid() {
        visitor.visit_expr(id, arena);
    }
}

fn visit_opt_stmt<V: Visitor + ?Sized>(visitor: &mut V, id: StmtId, arena: &ExprArena) {
    if id.is_valid() {
        visitor.visit_stmt(id, arena);
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, id: StmtId, arena: &ExprArena) {
    ensure_sufficient_stack(|| match arena.stmt(id).kind {
        StmtKind::Expr(expr)
        | StmtKind::Return(expr)
        | StmtKind::Throw(expr)
        | StmtKind::Case(expr) => {
            visit_opt_expr(visitor, expr, arena);
        }
        StmtKind::VarDecl { declarators, .. } => {
            for declarator in arena.get_declarators(declarators) {
                visit_opt_expr(visitor, declarator.init, arena);
            }
        }
        StmtKind::Function(function) => visitor.visit_function(function, arena),
        StmtKind::Class {
            heritage, members, ..
        } => {
            visit_opt_expr(visitor, heritage, arena);
            for &stmt in arena.get_stmt_list(members) {
                visitor.visit_stmt(stmt, arena);
            }
        }
        StmtKind::Block { body, .. } => {
            for &stmt in arena.get_stmt_list(body) {
                visitor.visit_stmt(stmt, arena);
            }
        }
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr(cond, arena);
            visit_opt_stmt(visitor, then_branch, arena);
            visit_opt_stmt(visitor, else_branch, arena);
        }
        StmtKind::While { cond, body } => {
            visitor.visit_expr(cond, arena);
            visit_opt_stmt(visitor, body, arena);
        }
        StmtKind::DoWhile { body, cond } => {
            visit_opt_stmt(visitor, body, arena);
            visitor.visit_expr(cond, arena);
        }
        StmtKind::For {
            init,
            cond,
            update,
            body,
            ..
        } => {
            visit_opt_stmt(visitor, init, arena);
            visit_opt_expr(visitor, cond, arena);
            visit_opt_expr(visitor, update, arena);
            visit_opt_stmt(visitor, body, arena);
        }
        StmtKind::ForEach {
            init,
            iterable,
            body,
            ..
        } => {
            visit_opt_stmt(visitor, init, arena);
            visitor.visit_expr(iterable, arena);
            visit_opt_stmt(visitor, body, arena);
        }
        StmtKind::Try {
            block,
            handler,
            finalizer,
        } => {
            visit_opt_stmt(visitor, block, arena);
            visit_opt_stmt(visitor, handler, arena);
            visit_opt_stmt(visitor, finalizer, arena);
        }
        StmtKind::Switch {
            discriminant, body, ..
        } => {
            visitor.visit_expr(discriminant, arena);
            for &stmt in arena.get_stmt_list(body) {
                visitor.visit_stmt(stmt, arena);
            }
        }
        StmtKind::Break | StmtKind::Continue | StmtKind::Import { .. } | StmtKind::Empty => {}
    });
}

pub fn walk_function<V: Visitor + ?Sized>(visitor: &mut V, id: FunctionId, arena: &ExprArena) {
    let function = arena.function(id);
    for param in arena.get_params(function.params) {
        visit_opt_expr(visitor, param.default, arena);
    }
    match function.body {
        FunctionBody::Block(body) => {
            for &stmt in arena.get_stmt_list(body) {
                visitor.visit_stmt(stmt, arena);
            }
        }
        FunctionBody::Expr(expr) => visitor.visit_expr(expr, arena),
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, id: ExprId, arena: &ExprArena) {
    ensure_sufficient_stack(|| match *arena.kind(id) {
        ExprKind::Number(_)
        | ExprKind::Str(_)
        | ExprKind::Template(_)
        | ExprKind::Regex(_)
        | ExprKind::Bool(_)
        | ExprKind::Null
        | ExprKind::Ident(_)
        | ExprKind::This
        | ExprKind::Super => {}

        ExprKind::Array(elements) | ExprKind::Sequence(elements) => {
            for &element in arena.get_expr_list(elements) {
                visitor.visit_expr(element, arena);
            }
        }
        ExprKind::Object(properties) => {
            for property in arena.get_properties(properties) {
                match *property {
                    Property::Init { value, .. } => visitor.visit_expr(value, arena),
                    Property::Computed { key, value } => {
                        visitor.visit_expr(key, arena);
                        visitor.visit_expr(value, arena);
                    }
                    Property::Spread(expr) => visitor.visit_expr(expr, arena),
                }
            }
        }
        ExprKind::Function(function) => visitor.visit_function(function, arena),

        ExprKind::Member { object, .. } => visitor.visit_expr(object, arena),
        ExprKind::Index { object, index, .. } => {
            visitor.visit_expr(object, arena);
            visitor.visit_expr(index, arena);
        }
        ExprKind::Call { callee, args, .. } | ExprKind::New { callee, args, .. } => {
            visitor.visit_expr(callee, arena);
            for &arg in arena.get_expr_list(args) {
                visitor.visit_expr(arg, arena);
            }
        }

        ExprKind::Spread(inner)
        | ExprKind::Paren(inner)
        | ExprKind::NonNull(inner)
        | ExprKind::TypeAssertion { expr: inner, .. }
        | ExprKind::Unary { operand: inner, .. }
        | ExprKind::Update { operand: inner, .. } => visitor.visit_expr(inner, arena),

        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr(left, arena);
            visitor.visit_expr(right, arena);
        }
        ExprKind::Conditional {
            cond,
            then_expr,
            else_expr,
        } => {
            visitor.visit_expr(cond, arena);
            visitor.visit_expr(then_expr, arena);
            visitor.visit_expr(else_expr, arena);
        }
        ExprKind::Assign { target, value, .. } => {
            visitor.visit_expr(target, arena);
            visitor.visit_expr(value, arena);
        }
    });
}

#[cfg(test)]
mod tests;
