use pretty_assertions::assert_eq;

use super::*;
use crate::ast::{Expr, Stmt};
use crate::{ScopeId, Span, StringInterner};

/// Records the span start of every call-like node in visit order.
struct CallOrder {
    starts: Vec<u32>,
}

impl Visitor for CallOrder {
    fn visit_expr(&mut self, id: ExprId, arena: &ExprArena) {
        if arena.kind(id).is_call_like() {
            self.starts.push(arena.span(id).start);
        }
        walk_expr(self, id, arena);
    }
}

#[test]
fn test_outer_call_visited_before_arguments() {
    // f(g(x))
    let mut interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let scope = ScopeId::new(0);
    let alloc = |arena: &mut ExprArena, kind, start, end| {
        arena.alloc_expr(Expr::new(kind, Span::new(start, end)), scope)
    };

    let f = alloc(&mut arena, ExprKind::Ident(interner.intern("f")), 0, 1);
    let g = alloc(&mut arena, ExprKind::Ident(interner.intern("g")), 2, 3);
    let x = alloc(&mut arena, ExprKind::Ident(interner.intern("x")), 4, 5);
    let inner_args = arena.alloc_expr_list([x]);
    let inner = alloc(
        &mut arena,
        ExprKind::Call {
            callee: g,
            args: inner_args,
            optional: false,
        },
        2,
        6,
    );
    let outer_args = arena.alloc_expr_list([inner]);
    let outer = alloc(
        &mut arena,
        ExprKind::Call {
            callee: f,
            args: outer_args,
            optional: false,
        },
        0,
        7,
    );
    let stmt = arena.alloc_stmt(Stmt::new(StmtKind::Expr(outer), Span::new(0, 8)));
    let body = arena.alloc_stmt_list([stmt]);
    let module = Module {
        body,
        scope,
        span: Span::new(0, 8),
    };

    let mut order = CallOrder { starts: Vec::new() };
    order.visit_module(&module, &arena);
    assert_eq!(order.starts, vec![0, 2]);
}
