//! The per-file driver.
//!
//! Every call and `new` expression is visited once, outer before inner, in
//! source order. For each, candidates are tried in declaration order and
//! the first that passes every stage decides the outcome:
//!
//! ```text
//! resolve callee -> candidates -> arguments -> guards -> substitution -> name check
//!      Unknown        none            \---------- any fails: next candidate ---/
//!        |              |                                                  |
//!     NoMatch        NoMatch                               Fix | ConflictSkipped
//! ```

use recast_diagnostic::fixes::TextEdit;
use recast_diagnostic::{Diagnostic, ErrorCode};
use recast_ir::visitor::{walk_expr, Visitor};
use recast_ir::{ExprArena, ExprId, ExprKind, ScopeTree, Span, StringInterner};
use recast_parse::{parse_source, ParseOutput};
use tracing::{debug, trace};

use crate::callee::{resolve_callee, CalleeResolution};
use crate::condition::all_satisfied;
use crate::hygiene::{find_conflict, substitution_is_safe, Conflict};
use crate::index::{BoundIndex, PatternId};
use crate::matcher::{match_arguments, MatchContext};
use crate::set::PatternSet;

/// The final state of one call site.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    NoMatch,
    /// Rewrite the call to `replacement`.
    Fix {
        pattern: PatternId,
        replacement: String,
    },
    /// The pattern applies, but its bare-identifier replacement is already
    /// bound in scope.
    ConflictSkipped {
        pattern: PatternId,
        replacement: String,
        conflict: Conflict,
    },
}

/// Diagnostics for one source file.
#[derive(Clone, Debug, Default)]
pub struct CheckedSource {
    /// Lex and parse errors if the file did not parse, rule findings
    /// otherwise.
    pub diagnostics: Vec<Diagnostic>,
    pub has_syntax_errors: bool,
}

impl CheckedSource {
    /// All machine-applicable edits, in finding order.
    pub fn edits(&self) -> Vec<TextEdit> {
        self.diagnostics
            .iter()
            .flat_map(Diagnostic::machine_applicable_edits)
            .collect()
    }
}

/// Suggests the configured replacement for known call shapes.
#[derive(Copy, Clone, Debug)]
pub struct PreferPatternRule<'p> {
    patterns: &'p PatternSet,
}

impl<'p> PreferPatternRule<'p> {
    pub fn new(patterns: &'p PatternSet) -> Self {
        PreferPatternRule { patterns }
    }

    /// Decide the outcome for one call or `new` expression.
    pub fn evaluate(
        &self,
        ctx: &MatchContext<'_>,
        scopes: &ScopeTree,
        candidates: &BoundIndex<'_>,
        call: ExprId,
    ) -> Outcome {
        let callee = resolve_callee(ctx.arena, call);
        if callee == CalleeResolution::Unknown {
            return Outcome::NoMatch;
        }
        let args = match *ctx.arena.kind(call) {
            ExprKind::Call { args, .. } | ExprKind::New { args, .. } => {
                ctx.arena.get_expr_list(args)
            }
            _ => return Outcome::NoMatch,
        };

        for &id in candidates.lookup(callee) {
            let pattern = self.patterns.get(id);
            let Some(captures) = match_arguments(ctx, &pattern.args, args) else {
                trace!(pattern = %pattern.source, "arguments do not match");
                continue;
            };
            if !all_satisfied(&pattern.guards, &captures) {
                trace!(pattern = %pattern.source, "guard not satisfied");
                continue;
            }
            if !substitution_is_safe(&pattern.template, &captures, ctx.arena) {
                trace!(pattern = %pattern.source, "would duplicate a side effect");
                continue;
            }
            let Some(replacement) = pattern.template.generate(&captures) else {
                trace!(pattern = %pattern.source, "replacement needs an absent capture");
                continue;
            };

            if let Some(conflict) =
                find_conflict(&pattern.template, call, ctx.arena, scopes, ctx.interner)
            {
                debug!(
                    pattern = %pattern.source,
                    name = %conflict.name,
                    "replacement conflicts with a binding"
                );
                return Outcome::ConflictSkipped {
                    pattern: id,
                    replacement,
                    conflict,
                };
            }
            debug!(pattern = %pattern.source, %replacement, "match");
            return Outcome::Fix {
                pattern: id,
                replacement,
            };
        }
        Outcome::NoMatch
    }

    /// Check a parsed module.
    #[tracing::instrument(level = "debug", skip_all, fields(patterns = self.patterns.len()))]
    pub fn check_module(
        &self,
        source: &str,
        output: &ParseOutput,
        interner: &StringInterner,
    ) -> Vec<Diagnostic> {
        let candidates = self.patterns.index().bind(interner);
        if candidates.is_empty() {
            return Vec::new();
        }
        let mut visitor = CallSiteVisitor {
            rule: *self,
            ctx: MatchContext {
                arena: &output.arena,
                interner,
                source,
            },
            scopes: &output.scopes,
            candidates,
            diagnostics: Vec::new(),
        };
        visitor.visit_module(&output.module, &output.arena);
        debug!(findings = visitor.diagnostics.len(), "checked module");
        visitor.diagnostics
    }

    /// Lex, parse and check `source`.
    ///
    /// A file with syntax errors gets those errors and no findings.
    pub fn check_source(&self, source: &str) -> CheckedSource {
        let mut interner = StringInterner::new();
        let parsed = parse_source(source, &mut interner);
        if parsed.has_errors() {
            debug!(errors = parsed.diagnostics.len(), "skipping file with syntax errors");
            return CheckedSource {
                diagnostics: parsed.diagnostics,
                has_syntax_errors: true,
            };
        }
        CheckedSource {
            diagnostics: self.check_module(source, &parsed.output, &interner),
            has_syntax_errors: false,
        }
    }
}

struct CallSiteVisitor<'p, 'a> {
    rule: PreferPatternRule<'p>,
    ctx: MatchContext<'a>,
    scopes: &'a ScopeTree,
    candidates: BoundIndex<'p>,
    diagnostics: Vec<Diagnostic>,
}

impl CallSiteVisitor<'_, '_> {
    fn check_call(&mut self, call: ExprId) {
        let span = self.ctx.arena.span(call);
        let original = self.ctx.text(call);
        match self
            .rule
            .evaluate(&self.ctx, self.scopes, &self.candidates, call)
        {
            Outcome::NoMatch => {}
            Outcome::Fix { replacement, .. } => {
                self.diagnostics
                    .push(prefer_replacement(span, original, replacement));
            }
            Outcome::ConflictSkipped {
                replacement,
                conflict,
                ..
            } => {
                self.diagnostics
                    .push(skipped_due_to_conflict(span, original, replacement, &conflict));
            }
        }
    }
}

impl Visitor for CallSiteVisitor<'_, '_> {
    fn visit_expr(&mut self, id: ExprId, arena: &ExprArena) {
        if arena.kind(id).is_call_like() {
            self.check_call(id);
        }
        walk_expr(self, id, arena);
    }
}

fn prefer_replacement(span: Span, original: &str, replacement: String) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W3001)
        .with_message(format!("prefer `{replacement}` over `{original}`"))
        .with_label(span, "has a preferred replacement")
        .with_data("original", original)
        .with_data("replacement", replacement.clone())
        .with_fix(format!("replace with `{replacement}`"), span, replacement)
}

fn skipped_due_to_conflict(
    span: Span,
    original: &str,
    replacement: String,
    conflict: &Conflict,
) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W3002)
        .with_message(format!(
            "`{original}` could be `{replacement}`, but `{}` is already bound here",
            conflict.name
        ))
        .with_label(span, "replacement skipped")
        .with_secondary_label(conflict.span, format!("`{}` declared here", conflict.name))
        .with_data("conflict", conflict.name.clone())
        .with_data("replacement", replacement)
        .with_note("rename the binding or rewrite this call by hand")
}
