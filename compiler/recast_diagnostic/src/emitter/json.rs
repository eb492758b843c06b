//! JSON Emitter
//!
//! Machine-readable output: one JSON array of diagnostic objects. Each
//! object carries the stable `kind` name, the structured `data` fields and
//! every fix as `{start, end, newText}` byte ranges.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, trailing_comma, DiagnosticEmitter, FileContext};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    file: Option<FileContext>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            file: None,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "\n]");
    }

    fn write_location(&mut self, offset: u32) {
        if let Some(file) = &self.file {
            let (line, col) = file.line_col(offset);
            let _ = write!(self.writer, ", \"line\": {line}, \"column\": {col}");
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn begin_file(&mut self, path: &str, source: &str) {
        self.file = Some(FileContext::new(path, source));
    }

    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = write!(self.writer, ",");
        }
        self.first = false;

        let _ = writeln!(self.writer, "\n  {{");
        let _ = writeln!(self.writer, "    \"code\": \"{}\",", diagnostic.code.as_str());
        let _ = writeln!(self.writer, "    \"kind\": \"{}\",", diagnostic.code.kind_name());
        let _ = writeln!(self.writer, "    \"severity\": \"{}\",", diagnostic.severity);
        if let Some(file) = &self.file {
            let _ = writeln!(self.writer, "    \"file\": \"{}\",", escape_json(&file.path));
        }
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&diagnostic.message)
        );

        // Labels
        let _ = writeln!(self.writer, "    \"labels\": [");
        for (i, label) in diagnostic.labels.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.labels.len());
            let _ = write!(
                self.writer,
                "      {{\"start\": {}, \"end\": {}",
                label.span.start, label.span.end
            );
            self.write_location(label.span.start);
            let _ = writeln!(
                self.writer,
                ", \"message\": \"{}\", \"primary\": {}}}{comma}",
                escape_json(&label.message),
                label.is_primary
            );
        }
        let _ = writeln!(self.writer, "    ],");

        // Structured data
        let _ = write!(self.writer, "    \"data\": {{");
        for (i, (key, value)) in diagnostic.data.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.data.len());
            let _ = write!(self.writer, "\"{key}\": \"{}\"{comma}", escape_json(value));
            if !comma.is_empty() {
                let _ = write!(self.writer, " ");
            }
        }
        let _ = writeln!(self.writer, "}},");

        // Notes
        let _ = write!(self.writer, "    \"notes\": [");
        for (i, note) in diagnostic.notes.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.notes.len());
            let _ = write!(self.writer, "\"{}\"{comma}", escape_json(note));
        }
        let _ = writeln!(self.writer, "],");

        // Fixes
        let _ = writeln!(self.writer, "    \"fixes\": [");
        let fixes: Vec<_> = diagnostic
            .structured_suggestions
            .iter()
            .flat_map(|s| {
                s.substitutions
                    .iter()
                    .map(move |sub| (s.applicability.is_machine_applicable(), sub))
            })
            .collect();
        for (i, (machine_applicable, sub)) in fixes.iter().enumerate() {
            let comma = trailing_comma(i, fixes.len());
            let _ = writeln!(
                self.writer,
                "      {{\"start\": {}, \"end\": {}, \"newText\": \"{}\", \"machineApplicable\": {machine_applicable}}}{comma}",
                sub.span.start,
                sub.span.end,
                escape_json(&sub.snippet)
            );
        }
        let _ = writeln!(self.writer, "    ]");

        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // The array itself is the summary.
    }
}

#[cfg(test)]
mod tests;
