//! Diagnostic emitters.
//!
//! - Terminal: human-readable, optionally colored
//! - JSON: machine-readable, for editors and CI
//!
//! Both implement [`DiagnosticEmitter`]. Callers announce each file with
//! [`DiagnosticEmitter::begin_file`] before emitting its diagnostics so
//! spans can be rendered as `path:line:col`.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::fmt::Write;

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

/// Returns a trailing comma for JSON list serialization.
pub(crate) fn trailing_comma(index: usize, total: usize) -> &'static str {
    if index + 1 < total {
        ","
    } else {
        ""
    }
}

/// The file whose diagnostics are being emitted.
#[derive(Clone, Debug)]
pub(crate) struct FileContext {
    pub path: String,
    pub source: String,
    pub lines: LineOffsetTable,
}

impl FileContext {
    pub(crate) fn new(path: &str, source: &str) -> Self {
        FileContext {
            path: path.to_string(),
            source: source.to_string(),
            lines: LineOffsetTable::build(source),
        }
    }

    pub(crate) fn line_col(&self, offset: u32) -> (u32, u32) {
        self.lines.offset_to_line_col(&self.source, offset)
    }
}

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Set the file that following diagnostics belong to.
    fn begin_file(&mut self, path: &str, source: &str);

    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Escape a string for JSON output.
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests;
