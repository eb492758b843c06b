//! The `patterns` command: show how a configuration was compiled.

use std::fmt::Write as _;
use std::io::Write;

use recast_diagnostic::Diagnostic;
use recast_patterns::{PatternError, PatternSet};

use super::{
    load_patterns, render, report_load_failure, CommandOptions, OutputFormat, EXIT_FINDINGS,
    EXIT_SUCCESS,
};

/// One block per usable pattern: its index key, match string, guards and
/// replacement.
pub fn describe_patterns(set: &PatternSet) -> String {
    let mut out = String::new();
    for (index, pattern) in set.patterns().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "#{index} {}", pattern.callee);
        let _ = writeln!(out, "    match:       {}", pattern.source);
        for guard in &pattern.guards {
            match &guard.check {
                Ok(comparator) => {
                    let _ = writeln!(out, "    when:        ${} {comparator}", guard.capture);
                }
                Err(reason) => {
                    let _ = writeln!(
                        out,
                        "    when:        ${} (never holds: {reason})",
                        guard.capture
                    );
                }
            }
        }
        let _ = writeln!(out, "    replacement: {}", pattern.template);
    }
    out
}

/// Run `patterns`. The listing is only printed in human format; problems
/// with the configuration are rendered as diagnostics in either format.
pub fn run_patterns<W: Write>(options: &CommandOptions, mut out: W) -> i32 {
    let set = match load_patterns(&options.config) {
        Ok(set) => set,
        Err(error) => return report_load_failure(options, out, &error),
    };

    if options.format == OutputFormat::Human {
        let _ = write!(out, "{}", describe_patterns(&set));
        if !set.errors().is_empty() {
            let _ = writeln!(out);
        }
    }
    let problems: Vec<Diagnostic> = set.errors().iter().map(PatternError::to_diagnostic).collect();
    render(options, &mut out, &problems, &[]);

    if problems.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_FINDINGS
    }
}
