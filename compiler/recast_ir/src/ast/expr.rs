//! Expression nodes.

use std::fmt;

use super::operators::{AssertionKind, AssignOp, BinaryOp, UnaryOp, UpdateOp};
use crate::{ExprId, ExprRange, FunctionId, Name, PropertyRange, Span};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
///
/// All children are arena indices. `undefined` is an ordinary identifier,
/// as in the source language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Numeric literal, stored as `f64` bits.
    Number(u64),
    /// String literal (cooked contents).
    Str(Name),
    /// Template literal (raw contents).
    Template(Name),
    /// Regular expression literal (raw source).
    Regex(Name),
    Bool(bool),
    Null,
    Ident(Name),
    This,
    Super,

    /// `[a, b, ...c]`
    Array(ExprRange),
    /// `{ a: 1, b, ...c }`
    Object(PropertyRange),
    /// Function expression or arrow function.
    Function(FunctionId),

    /// `object.property` / `object?.property`
    Member {
        object: ExprId,
        property: Name,
        property_span: Span,
        optional: bool,
    },
    /// `object[index]` / `object?.[index]`
    Index {
        object: ExprId,
        index: ExprId,
        optional: bool,
    },
    /// `callee(args)` / `callee?.(args)`
    Call {
        callee: ExprId,
        args: ExprRange,
        optional: bool,
    },
    /// `new callee(args)`; `has_args` is false for `new Foo`.
    New {
        callee: ExprId,
        args: ExprRange,
        has_args: bool,
    },
    /// `...expr` in an argument or element list.
    Spread(ExprId),

    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Update {
        op: UpdateOp,
        prefix: bool,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Conditional {
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },
    Assign {
        op: AssignOp,
        target: ExprId,
        value: ExprId,
    },

    /// `a, b, c`
    Sequence(ExprRange),
    /// `(expr)`
    Paren(ExprId),
    /// `expr as T`, `expr satisfies T`, `<T>expr`; the type is kept as a span.
    TypeAssertion {
        expr: ExprId,
        kind: AssertionKind,
        ty: Span,
    },
    /// `expr!`
    NonNull(ExprId),
}

impl ExprKind {
    /// Create a number literal kind.
    #[inline]
    pub fn number(value: f64) -> Self {
        ExprKind::Number(value.to_bits())
    }

    /// Check whether this is a call or constructor expression.
    #[inline]
    pub fn is_call_like(&self) -> bool {
        matches!(self, ExprKind::Call { .. } | ExprKind::New { .. })
    }
}

/// Object literal property.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Property {
    /// `key: value` or shorthand `key` (value is then the identifier).
    Init { key: Name, value: ExprId },
    /// `[key]: value`
    Computed { key: ExprId, value: ExprId },
    /// `...expr`
    Spread(ExprId),
}
