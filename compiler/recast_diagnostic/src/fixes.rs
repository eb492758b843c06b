//! Text edits and fix application.
//!
//! Edits are sorted by position and applied front to back into a fresh
//! buffer. An edit that overlaps one already accepted is skipped rather than
//! merged; running the fixer again picks it up if it still applies.

use recast_ir::Span;

/// A text edit that replaces `span` with `new_text`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TextEdit {
    /// The span to replace (empty span for insert).
    pub span: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(span: Span, new_text: impl Into<String>) -> Self {
        TextEdit {
            span,
            new_text: new_text.into(),
        }
    }

    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        TextEdit {
            span: Span::new(at, at),
            new_text: text.into(),
        }
    }

    pub fn delete(span: Span) -> Self {
        TextEdit {
            span,
            new_text: String::new(),
        }
    }

    pub fn is_insert(&self) -> bool {
        self.span.is_empty() && !self.new_text.is_empty()
    }

    /// Two edits conflict if their spans share a byte. Insertions at the
    /// same point do not conflict with each other.
    pub fn conflicts_with(&self, other: &TextEdit) -> bool {
        if self.is_insert() && other.is_insert() {
            return false;
        }
        let (a, b) = (self.span, other.span);
        if a.start < b.end && b.start < a.end {
            return true;
        }
        // An insertion strictly inside the other span.
        let inside = |point: u32, span: Span| span.start < point && point < span.end;
        (a.is_empty() && inside(a.start, b)) || (b.is_empty() && inside(b.start, a))
    }
}

/// Result of [`apply_edits`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AppliedEdits {
    pub text: String,
    pub applied: usize,
    /// Edits dropped for overlapping an earlier one or falling outside the
    /// source.
    pub skipped: usize,
}

/// Apply `edits` to `source`.
///
/// Edits are taken in source order (at equal starts, insertions first, then
/// the wider span, then input order); any edit that conflicts with an accepted edit, or
/// whose span is out of range or not on a character boundary, is skipped.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> AppliedEdits {
    let mut order: Vec<&TextEdit> = edits.iter().collect();
    order.sort_by(|a, b| {
        a.span
            .start
            .cmp(&b.span.start)
            .then(b.span.is_empty().cmp(&a.span.is_empty()))
            .then(b.span.end.cmp(&a.span.end))
    });

    let mut accepted: Vec<&TextEdit> = Vec::with_capacity(order.len());
    let mut skipped = 0;
    for edit in order {
        let in_bounds = edit.span.end as usize <= source.len()
            && source.is_char_boundary(edit.span.start as usize)
            && source.is_char_boundary(edit.span.end as usize);
        if !in_bounds || accepted.iter().any(|prev| prev.conflicts_with(edit)) {
            skipped += 1;
            continue;
        }
        accepted.push(edit);
    }

    let mut text = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for edit in &accepted {
        let start = edit.span.start as usize;
        text.push_str(&source[cursor..start]);
        text.push_str(&edit.new_text);
        cursor = edit.span.end as usize;
    }
    text.push_str(&source[cursor..]);

    AppliedEdits {
        text,
        applied: accepted.len(),
        skipped,
    }
}

#[cfg(test)]
mod tests;
