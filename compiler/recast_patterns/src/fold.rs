//! Static evaluation of argument expressions.
//!
//! Folds the small constant language that pattern literals and guards are
//! compared against: primitive literals, `undefined`, `void <constant>`,
//! unary `+`/`-` and the binary operators `+ - * / %` over numbers.
//! Parentheses, type assertions and non-null assertions are transparent.
//!
//! Folding never guesses. Anything else, including arithmetic whose result
//! is not finite (`1 / 0`), is left unevaluated.

use recast_ir::{BinaryOp, ExprArena, ExprId, ExprKind, StringInterner, UnaryOp};
use recast_stack::ensure_sufficient_stack;

/// A statically known primitive value.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Constant<'a> {
    Number(f64),
    Str(&'a str),
    Bool(bool),
    Null,
    Undefined,
}

impl Constant<'_> {
    #[inline]
    pub fn as_number(self) -> Option<f64> {
        match self {
            Constant::Number(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn is_undefined(self) -> bool {
        matches!(self, Constant::Undefined)
    }
}

/// Evaluate `id` to a constant, if it is one.
///
/// Numbers use IEEE semantics, so `-0` and `0` compare equal.
pub fn fold<'a>(
    arena: &ExprArena,
    interner: &'a StringInterner,
    id: ExprId,
) -> Option<Constant<'a>> {
    ensure_sufficient_stack(|| fold_inner(arena, interner, id))
}

fn fold_inner<'a>(
    arena: &ExprArena,
    interner: &'a StringInterner,
    id: ExprId,
) -> Option<Constant<'a>> {
    match *arena.kind(arena.skip_wrappers(id)) {
        ExprKind::Number(bits) => Some(Constant::Number(f64::from_bits(bits))),
        ExprKind::Str(name) => Some(Constant::Str(interner.lookup(name))),
        ExprKind::Bool(value) => Some(Constant::Bool(value)),
        ExprKind::Null => Some(Constant::Null),
        ExprKind::Ident(name) if interner.lookup(name) == "undefined" => Some(Constant::Undefined),
        ExprKind::Unary { op, operand } => fold_unary(op, fold(arena, interner, operand)?),
        ExprKind::Binary { op, left, right } => {
            let left = fold(arena, interner, left)?.as_number()?;
            let right = fold(arena, interner, right)?.as_number()?;
            fold_binary(op, left, right).map(Constant::Number)
        }
        _ => None,
    }
}

fn fold_unary(op: UnaryOp, value: Constant<'_>) -> Option<Constant<'_>> {
    match (op, value) {
        (UnaryOp::Plus, Constant::Number(n)) => Some(Constant::Number(n)),
        (UnaryOp::Neg, Constant::Number(n)) => Some(Constant::Number(-n)),
        (UnaryOp::Void, _) => Some(Constant::Undefined),
        _ => None,
    }
}

/// Numeric binary operation; `None` for other operators and for results
/// that are not finite.
fn fold_binary(op: BinaryOp, left: f64, right: f64) -> Option<f64> {
    let result = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right,
        BinaryOp::Mod => left % right,
        _ => return None,
    };
    result.is_finite().then_some(result)
}

#[cfg(test)]
mod tests;
