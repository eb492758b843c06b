//! The `check` command: report call sites that have a preferred
//! replacement, without touching any file.

use std::io::Write;
use std::path::PathBuf;

use rayon::prelude::*;
use recast_diagnostic::Diagnostic;
use recast_patterns::{PatternError, PatternSet, PreferPatternRule};
use tracing::debug;

use super::{
    collect_sources, load_patterns, read_file, render, report_load_failure, CommandOptions,
    FileReport, LoadError,
};

/// Check every file in `paths` against `set`.
///
/// Files are processed in parallel; reports come back in input order.
pub fn check_paths(set: &PatternSet, paths: &[PathBuf]) -> Vec<Result<FileReport, LoadError>> {
    let rule = PreferPatternRule::new(set);
    paths
        .par_iter()
        .map(|path| {
            let source = read_file(path)?;
            let checked = rule.check_source(&source);
            debug!(
                path = %path.display(),
                diagnostics = checked.diagnostics.len(),
                "checked file"
            );
            Ok(FileReport {
                path: path.clone(),
                source,
                diagnostics: checked.diagnostics,
                has_syntax_errors: checked.has_syntax_errors,
            })
        })
        .collect()
}

/// Run `check`, writing diagnostics to `out`. Returns the exit code.
pub fn run_check<W: Write>(options: &CommandOptions, out: W) -> i32 {
    let set = match load_patterns(&options.config) {
        Ok(set) => set,
        Err(error) => return report_load_failure(options, out, &error),
    };
    let preamble: Vec<Diagnostic> = set.errors().iter().map(PatternError::to_diagnostic).collect();
    let files = collect_sources(&options.inputs);
    let reports = check_paths(&set, &files);
    render(options, out, &preamble, &reports).exit_code()
}
