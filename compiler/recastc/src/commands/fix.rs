//! The `fix` command: rewrite matching call sites in place.
//!
//! Fixes are applied in passes. A pass applies every non-overlapping edit;
//! nested call sites whose edits overlap an outer one are picked up by the
//! next pass, which re-parses the rewritten text.

use std::io::Write;
use std::path::PathBuf;

use rayon::prelude::*;
use recast_diagnostic::fixes::apply_edits;
use recast_diagnostic::Diagnostic;
use recast_patterns::{CheckedSource, PatternError, PatternSet, PreferPatternRule};
use tracing::{debug, trace, warn};

use super::{
    collect_sources, load_patterns, read_file, render, report_load_failure, CommandOptions,
    FileReport, LoadError, OutputFormat,
};

/// Pass limit when none is given. Bounds patterns whose replacement
/// matches again.
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Result of [`fix_source`].
#[derive(Clone, Debug)]
pub struct FixOutcome {
    /// The rewritten text; the input unchanged when nothing applied.
    pub text: String,
    /// Edits applied across all passes.
    pub applied: usize,
    /// Passes that changed the text.
    pub passes: usize,
    /// Check results for `text`: what is left after fixing.
    pub remaining: CheckedSource,
}

impl FixOutcome {
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Apply machine-applicable rewrites to `source` until none apply or
/// `max_passes` is reached.
///
/// A pass whose output no longer parses is discarded and fixing stops.
pub fn fix_source(set: &PatternSet, source: &str, max_passes: usize) -> FixOutcome {
    let rule = PreferPatternRule::new(set);
    let mut text = source.to_owned();
    let mut checked = rule.check_source(&text);
    let mut applied = 0;
    let mut passes = 0;

    while passes < max_passes && !checked.has_syntax_errors {
        let edits = checked.edits();
        if edits.is_empty() {
            break;
        }
        let result = apply_edits(&text, &edits);
        if result.applied == 0 || result.text == text {
            break;
        }
        let next = rule.check_source(&result.text);
        if next.has_syntax_errors {
            warn!(pass = passes + 1, "rewrite produced unparsable code; keeping previous text");
            break;
        }
        passes += 1;
        applied += result.applied;
        trace!(
            pass = passes,
            applied = result.applied,
            deferred = result.skipped,
            "applied rewrite pass"
        );
        text = result.text;
        checked = next;
    }

    FixOutcome {
        text,
        applied,
        passes,
        remaining: checked,
    }
}

/// A file processed by [`fix_paths`].
#[derive(Clone, Debug)]
pub struct FixedFile {
    /// What is left to report, against the rewritten text.
    pub report: FileReport,
    pub applied: usize,
    pub passes: usize,
}

/// Fix every file in `paths` in parallel and write back the ones that
/// changed.
pub fn fix_paths(
    set: &PatternSet,
    paths: &[PathBuf],
    max_passes: usize,
) -> Vec<Result<FixedFile, LoadError>> {
    paths
        .par_iter()
        .map(|path| {
            let source = read_file(path)?;
            let outcome = fix_source(set, &source, max_passes);
            if outcome.changed() {
                std::fs::write(path, &outcome.text).map_err(|error| LoadError::Write {
                    path: path.clone(),
                    error,
                })?;
                debug!(
                    path = %path.display(),
                    applied = outcome.applied,
                    passes = outcome.passes,
                    "rewrote file"
                );
            }
            Ok(FixedFile {
                report: FileReport {
                    path: path.clone(),
                    source: outcome.text,
                    diagnostics: outcome.remaining.diagnostics,
                    has_syntax_errors: outcome.remaining.has_syntax_errors,
                },
                applied: outcome.applied,
                passes: outcome.passes,
            })
        })
        .collect()
}

/// Run `fix`, writing a line per rewritten file and the remaining
/// diagnostics to `out`. Returns the exit code.
pub fn run_fix<W: Write>(options: &CommandOptions, mut out: W) -> i32 {
    let set = match load_patterns(&options.config) {
        Ok(set) => set,
        Err(error) => return report_load_failure(options, out, &error),
    };
    let preamble: Vec<Diagnostic> = set.errors().iter().map(PatternError::to_diagnostic).collect();
    let files = collect_sources(&options.inputs);
    let fixed = fix_paths(&set, &files, options.max_passes);

    if options.format == OutputFormat::Human {
        for file in fixed.iter().flatten() {
            if file.applied > 0 {
                let plural = if file.applied == 1 { "" } else { "s" };
                let _ = writeln!(
                    out,
                    "fixed {}: {} rewrite{plural}",
                    file.report.path.display(),
                    file.applied
                );
            }
        }
    }

    let reports: Vec<Result<FileReport, LoadError>> = fixed
        .into_iter()
        .map(|file| file.map(|file| file.report))
        .collect();
    render(options, &mut out, &preamble, &reports).exit_code()
}
