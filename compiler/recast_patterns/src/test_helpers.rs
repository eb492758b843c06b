//! Shared fixtures: parse a snippet and pick out its expressions.

#![allow(clippy::unwrap_used)]

use recast_ir::{ExprArena, ExprId, ExprKind, ExprRange, StmtKind, StringInterner};
use recast_parse::{parse_source, ParseOutput};

use crate::MatchContext;

/// A parsed snippet with everything a match attempt needs.
pub struct Parsed {
    pub source: String,
    pub interner: StringInterner,
    pub output: ParseOutput,
}

impl Parsed {
    pub fn arena(&self) -> &ExprArena {
        &self.output.arena
    }

    pub fn context(&self) -> MatchContext<'_> {
        MatchContext {
            arena: &self.output.arena,
            interner: &self.interner,
            source: &self.source,
        }
    }

    /// Expression of the last top-level expression statement.
    pub fn last_expr(&self) -> ExprId {
        let arena = self.arena();
        arena
            .get_stmt_list(self.output.module.body)
            .iter()
            .rev()
            .find_map(|&stmt| match arena.stmt(stmt).kind {
                StmtKind::Expr(expr) => Some(expr),
                _ => None,
            })
            .unwrap()
    }

    /// Argument list of the last top-level call or `new` expression,
    /// looking through wrappers.
    pub fn last_args(&self) -> Vec<ExprId> {
        let arena = self.arena();
        let call = arena.skip_wrappers(self.last_expr());
        let args: ExprRange = match *arena.kind(call) {
            ExprKind::Call { args, .. } | ExprKind::New { args, .. } => args,
            ref other => panic!("expected a call, got {other:?}"),
        };
        arena.get_expr_list(args).to_vec()
    }
}

impl Parsed {
    /// The call or `new` expression whose source text is exactly `text`.
    pub fn call(&self, text: &str) -> ExprId {
        let arena = self.arena();
        (0..arena.expr_count())
            .map(|index| ExprId::new(u32::try_from(index).unwrap()))
            .find(|&id| {
                arena.kind(id).is_call_like() && arena.span(id).slice(&self.source) == text
            })
            .unwrap_or_else(|| panic!("no call `{text}` in {:?}", self.source))
    }
}

/// Parse `source`, which must be free of syntax errors.
pub fn parse(source: &str) -> Parsed {
    let mut interner = StringInterner::new();
    let parsed = parse_source(source, &mut interner);
    assert!(
        !parsed.has_errors(),
        "fixture does not parse: {source:?}: {:?}",
        parsed.diagnostics
    );
    Parsed {
        source: source.to_owned(),
        interner,
        output: parsed.output,
    }
}
