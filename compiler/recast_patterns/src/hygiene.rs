//! Replacement hygiene.
//!
//! Two checks stand between a match and a fix:
//!
//! - **Substitution safety.** A capture substituted more than once must be
//!   side-effect free, or the rewrite would evaluate it twice.
//! - **Name collisions.** A replacement that is a single bare identifier
//!   must not resolve to a local binding at the call site. The match is
//!   still reported, without a fix.

use recast_ir::{
    BindingKind, ExprArena, ExprId, ExprKind, ScopeTree, Span, StringInterner, UnaryOp,
};
use recast_stack::ensure_sufficient_stack;

use crate::matcher::Captures;
use crate::pattern::Template;

/// Whether evaluating `id` twice is indistinguishable from evaluating it
/// once.
///
/// Literals, names, `this`, property chains and operators over those are
/// pure. Calls, `new`, assignments, updates, `delete`, `await`, and
/// literals that allocate (arrays, objects, functions, regular
/// expressions) are not.
pub fn is_pure(arena: &ExprArena, id: ExprId) -> bool {
    ensure_sufficient_stack(|| match *arena.kind(id) {
        ExprKind::Number(_)
        | ExprKind::Str(_)
        | ExprKind::Template(_)
        | ExprKind::Bool(_)
        | ExprKind::Null
        | ExprKind::Ident(_)
        | ExprKind::This
        | ExprKind::Super => true,

        ExprKind::Member { object, .. } => is_pure(arena, object),
        ExprKind::Index { object, index, .. } => is_pure(arena, object) && is_pure(arena, index),
        ExprKind::Unary { op, operand } => {
            !matches!(op, UnaryOp::Delete | UnaryOp::Await) && is_pure(arena, operand)
        }
        ExprKind::Binary { left, right, .. } => is_pure(arena, left) && is_pure(arena, right),
        ExprKind::Conditional {
            cond,
            then_expr,
            else_expr,
        } => is_pure(arena, cond) && is_pure(arena, then_expr) && is_pure(arena, else_expr),
        ExprKind::Paren(inner)
        | ExprKind::NonNull(inner)
        | ExprKind::TypeAssertion { expr: inner, .. } => is_pure(arena, inner),

        ExprKind::Regex(_)
        | ExprKind::Array(_)
        | ExprKind::Object(_)
        | ExprKind::Function(_)
        | ExprKind::Call { .. }
        | ExprKind::New { .. }
        | ExprKind::Spread(_)
        | ExprKind::Update { .. }
        | ExprKind::Assign { .. }
        | ExprKind::Sequence(_) => false,
    })
}

/// Whether substituting `captures` into `template` keeps every side
/// effect exactly once.
pub(crate) fn substitution_is_safe(
    template: &Template,
    captures: &Captures<'_>,
    arena: &ExprArena,
) -> bool {
    captures
        .iter()
        .all(|capture| template.uses(capture.name) <= 1 || is_pure(arena, capture.expr))
}

/// An existing binding a bare-identifier replacement would resolve to.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Conflict {
    pub name: String,
    pub kind: BindingKind,
    /// Where the conflicting name is declared.
    pub span: Span,
}

/// Look for a binding of the template's bare identifier in scope at
/// `call`.
///
/// Templates that are not a single identifier (`Vector2.zero`,
/// `fromX($x)`) never conflict.
pub fn find_conflict(
    template: &Template,
    call: ExprId,
    arena: &ExprArena,
    scopes: &ScopeTree,
    interner: &StringInterner,
) -> Option<Conflict> {
    let text = template.bare_identifier()?;
    // A name the file never mentions cannot be bound in it.
    let name = interner.get(text)?;
    let (_, binding) = scopes.resolve(arena.scope_of(call), name)?;
    Some(Conflict {
        name: text.to_owned(),
        kind: binding.kind,
        span: binding.span,
    })
}
