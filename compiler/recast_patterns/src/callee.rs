//! Call-site classification.

use recast_ir::{ExprArena, ExprId, ExprKind, Name};

/// The shape of a call site's callee.
///
/// Optional-chaining markers are ignored: `Vector2?.create(0)` and
/// `Vector2.create?.(0)` resolve like `Vector2.create(0)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CalleeResolution {
    /// `new Type(...)`
    Constructor { type_name: Name },
    /// `Receiver.method(...)` with a plain identifier receiver.
    StaticMethod { type_name: Name, method: Name },
    /// `func(...)`
    Function { name: Name },
    /// Anything else: computed members, `super(...)`, call results, ...
    Unknown,
}

/// Classify the callee of a call or `new` expression.
///
/// Never fails: any other node resolves to [`CalleeResolution::Unknown`].
pub fn resolve_callee(arena: &ExprArena, expr: ExprId) -> CalleeResolution {
    match *arena.kind(expr) {
        ExprKind::New { callee, .. } => match *arena.kind(callee) {
            ExprKind::Ident(type_name) => CalleeResolution::Constructor { type_name },
            _ => CalleeResolution::Unknown,
        },
        ExprKind::Call { callee, .. } => match *arena.kind(callee) {
            ExprKind::Ident(name) => CalleeResolution::Function { name },
            ExprKind::Member {
                object, property, ..
            } => match *arena.kind(object) {
                ExprKind::Ident(type_name) => CalleeResolution::StaticMethod {
                    type_name,
                    method: property,
                },
                _ => CalleeResolution::Unknown,
            },
            _ => CalleeResolution::Unknown,
        },
        _ => CalleeResolution::Unknown,
    }
}

#[cfg(test)]
mod tests;
