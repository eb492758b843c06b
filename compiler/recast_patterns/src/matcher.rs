//! Structural argument matching.
//!
//! Specs and actual arguments are walked in lockstep. A successful match
//! yields the [`Captures`] of that one attempt; nothing is shared between
//! attempts, so a failed pattern cannot leak bindings into the next one.

use recast_ir::{ExprArena, ExprId, ExprKind, StringInterner};
use smallvec::SmallVec;

use crate::fold::{fold, Constant};
use crate::hygiene::is_pure;
use crate::pattern::ArgumentSpec;

/// What matching needs from the file being checked.
#[derive(Copy, Clone)]
pub struct MatchContext<'a> {
    pub arena: &'a ExprArena,
    pub interner: &'a StringInterner,
    pub source: &'a str,
}

impl<'a> MatchContext<'a> {
    /// Source text of an expression.
    pub fn text(&self, id: ExprId) -> &'a str {
        self.arena.span(id).slice(self.source)
    }
}

/// How tightly a captured expression holds together when its text is
/// pasted somewhere else.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Precedence {
    /// Comma expressions: parenthesized wherever they go.
    Comma,
    /// Operators, conditionals, assignments, functions: safe as a whole
    /// argument, parenthesized next to other tokens.
    Operator,
    /// Literals, names, member access, calls: safe anywhere.
    Postfix,
}

impl Precedence {
    pub fn of(kind: &ExprKind) -> Self {
        match kind {
            ExprKind::Sequence(_) => Precedence::Comma,
            ExprKind::Number(_)
            | ExprKind::Str(_)
            | ExprKind::Template(_)
            | ExprKind::Regex(_)
            | ExprKind::Bool(_)
            | ExprKind::Null
            | ExprKind::Ident(_)
            | ExprKind::This
            | ExprKind::Super
            | ExprKind::Array(_)
            | ExprKind::Object(_)
            | ExprKind::Member { .. }
            | ExprKind::Index { .. }
            | ExprKind::Call { .. }
            | ExprKind::New { has_args: true, .. }
            | ExprKind::Paren(_) => Precedence::Postfix,
            _ => Precedence::Operator,
        }
    }
}

/// One bound placeholder.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Capture<'a> {
    /// Capture name, without the `$`.
    pub name: &'a str,
    /// Source text of the argument, wrappers stripped.
    pub text: &'a str,
    /// Grouping the text needs once it leaves the argument list.
    pub precedence: Precedence,
    /// The argument's value, when it folds to a number.
    pub value: Option<f64>,
    /// The argument, wrappers stripped.
    pub expr: ExprId,
}

/// Bindings of one match attempt. Each name is bound at most once.
#[derive(Clone, Default, Debug)]
pub struct Captures<'a> {
    items: SmallVec<[Capture<'a>; 4]>,
}

impl<'a> Captures<'a> {
    pub fn get(&self, name: &str) -> Option<&Capture<'a>> {
        self.items.iter().find(|capture| capture.name == name)
    }

    /// Bind a capture. A name that is already bound keeps its first binding.
    pub fn bind(&mut self, capture: Capture<'a>) {
        if self.get(capture.name).is_none() {
            self.items.push(capture);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capture<'a>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Match `args` against `specs`.
///
/// Returns `None` when:
/// - any argument is a spread,
/// - the argument count is outside what the specs allow,
/// - a literal position does not fold to the expected value,
/// - a repeated capture meets a different or side-effecting argument.
///
/// Missing trailing optional positions are satisfied by omission, and an
/// optional literal also accepts an argument that folds to `undefined`.
pub fn match_arguments<'a>(
    ctx: &MatchContext<'a>,
    specs: &'a [ArgumentSpec],
    args: &[ExprId],
) -> Option<Captures<'a>> {
    if args
        .iter()
        .any(|&arg| matches!(ctx.arena.kind(arg), ExprKind::Spread(_)))
    {
        return None;
    }
    if args.len() < ArgumentSpec::min_required(specs) || args.len() > specs.len() {
        return None;
    }

    let mut captures = Captures::default();
    for (spec, &arg) in specs.iter().zip(args) {
        if !match_one(ctx, spec, arg, &mut captures) {
            return None;
        }
    }
    Some(captures)
}

fn match_one<'a>(
    ctx: &MatchContext<'a>,
    spec: &'a ArgumentSpec,
    arg: ExprId,
    captures: &mut Captures<'a>,
) -> bool {
    match spec {
        ArgumentSpec::Wildcard { .. } => true,
        ArgumentSpec::Literal { value, optional } => {
            fold(ctx.arena, ctx.interner, arg)
                .is_some_and(|constant| {
                    value.matches(constant) || (*optional && constant.is_undefined())
                })
        }
        ArgumentSpec::Capture { name, .. } => {
            let expr = ctx.arena.skip_wrappers(arg);
            let capture = Capture {
                name,
                text: ctx.text(expr),
                precedence: Precedence::of(ctx.arena.kind(expr)),
                value: fold(ctx.arena, ctx.interner, expr).and_then(Constant::as_number),
                expr,
            };
            match captures.get(name) {
                Some(previous) => same_value(ctx.arena, previous, &capture),
                None => {
                    captures.bind(capture);
                    true
                }
            }
        }
    }
}

/// Whether a repeated capture denotes the value it was first bound to.
///
/// Identical text or an equal folded number counts, but only for
/// side-effect-free arguments: collapsing `f(), f()` into one `f()`
/// would drop a call.
fn same_value(arena: &ExprArena, previous: &Capture<'_>, current: &Capture<'_>) -> bool {
    let equal = previous.text == current.text
        || previous
            .value
            .zip(current.value)
            .is_some_and(|(a, b)| a == b);
    equal && is_pure(arena, previous.expr) && is_pure(arena, current.expr)
}

#[cfg(test)]
mod tests;
