//! Command handlers for the recast CLI.
//!
//! Each submodule implements one command (check, fix, patterns). Shared
//! pieces live here in the module root: option parsing, source discovery,
//! pattern loading and diagnostic rendering.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use recast_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use recast_diagnostic::Diagnostic;
use recast_patterns::{ConfigError, PatternSet};
use tracing::{debug, warn};

mod check;
mod fix;
mod patterns;

pub use check::{check_paths, run_check};
pub use fix::{fix_paths, fix_source, run_fix, FixOutcome, FixedFile, DEFAULT_MAX_PASSES};
pub use patterns::{describe_patterns, run_patterns};

/// Nothing to report.
pub const EXIT_SUCCESS: i32 = 0;
/// Findings or syntax errors were reported.
pub const EXIT_FINDINGS: i32 = 1;
/// The command could not run: bad usage, unreadable or malformed config.
pub const EXIT_FAILURE: i32 = 2;

/// Extensions picked up when a directory is given as input.
const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"];

/// How diagnostics are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl OutputFormat {
    /// Parse a `--format=` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "human" => Some(OutputFormat::Human),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Options shared by every command.
#[derive(Clone, Debug)]
pub struct CommandOptions {
    /// Pattern configuration file.
    pub config: PathBuf,
    /// Files and directories to process.
    pub inputs: Vec<PathBuf>,
    pub format: OutputFormat,
    pub color: ColorMode,
    /// Whether the output is a terminal, for `--color=auto`.
    pub is_tty: bool,
    /// Upper bound on rewrite passes for `fix`.
    pub max_passes: usize,
}

impl CommandOptions {
    pub fn new(config: impl Into<PathBuf>) -> Self {
        CommandOptions {
            config: config.into(),
            inputs: Vec::new(),
            format: OutputFormat::Human,
            color: ColorMode::Auto,
            is_tty: false,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Parse the arguments following the command name.
    ///
    /// The first positional argument is the config file, the rest are
    /// inputs. Flags may appear anywhere.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut config = None;
        let mut inputs = Vec::new();
        let mut format = OutputFormat::Human;
        let mut color = ColorMode::Auto;
        let mut max_passes = DEFAULT_MAX_PASSES;

        for arg in args {
            if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::parse(value)
                    .ok_or_else(|| format!("unknown format '{value}' (expected human or json)"))?;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                color = ColorMode::parse(value).ok_or_else(|| {
                    format!("unknown color mode '{value}' (expected auto, always or never)")
                })?;
            } else if let Some(value) = arg.strip_prefix("--max-passes=") {
                max_passes = match value.parse::<usize>() {
                    Ok(n) if n > 0 => n,
                    _ => return Err(format!("invalid pass limit '{value}'")),
                };
            } else if arg.starts_with("--") {
                return Err(format!("unknown option '{arg}'"));
            } else if config.is_none() {
                config = Some(PathBuf::from(arg));
            } else {
                inputs.push(PathBuf::from(arg));
            }
        }

        let config = config.ok_or_else(|| "missing pattern config file".to_string())?;
        Ok(CommandOptions {
            config,
            inputs,
            format,
            color,
            is_tty: false,
            max_passes,
        })
    }
}

/// Failure to load a file the command needs.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{}", describe_io(.path, .error))]
    Io {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    #[error("cannot write '{}': {error}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LoadError {
    /// The error as a diagnostic, for config problems that have a code.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            LoadError::Io { .. } | LoadError::Write { .. } => None,
            LoadError::Config(error) => Some(error.to_diagnostic()),
        }
    }
}

fn describe_io(path: &Path, error: &io::Error) -> String {
    let path = path.display();
    match error.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}

/// Read a source or config file.
pub fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|error| LoadError::Io {
        path: path.to_path_buf(),
        error,
    })
}

/// Read and compile a pattern configuration.
///
/// Broken entries do not fail the load; they are kept in
/// [`PatternSet::errors`] for the caller to report.
pub fn load_patterns(path: &Path) -> Result<PatternSet, LoadError> {
    let text = read_file(path)?;
    let set = PatternSet::from_json(&text)?;
    debug!(
        path = %path.display(),
        patterns = set.len(),
        rejected = set.errors().len(),
        "loaded pattern config"
    );
    Ok(set)
}

/// Expand directories into the source files below them.
///
/// Explicit file arguments are kept whatever their extension. Hidden
/// entries and `node_modules` are skipped during the walk. Directory
/// contents are sorted so output order is stable.
pub fn collect_sources(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            visit_source_files(input, &mut files);
        } else {
            files.push(input.clone());
        }
    }
    files
}

fn visit_source_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot read directory");
            eprintln!("error reading directory '{}': {e}", dir.display());
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();
    for path in paths {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') || name == "node_modules" {
                continue;
            }
        }
        if path.is_dir() {
            visit_source_files(&path, files);
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
        {
            files.push(path);
        }
    }
}

/// Diagnostics produced for one file.
#[derive(Clone, Debug)]
pub struct FileReport {
    pub path: PathBuf,
    /// The text the diagnostic spans refer to.
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
    pub has_syntax_errors: bool,
}

/// Counts gathered while rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub errors: usize,
    pub warnings: usize,
    /// Inputs that could not be read.
    pub unreadable: usize,
}

impl Tally {
    /// Exit code for a check-style command.
    pub fn exit_code(self) -> i32 {
        if self.unreadable > 0 {
            EXIT_FAILURE
        } else if self.errors > 0 || self.warnings > 0 {
            EXIT_FINDINGS
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Render `preamble` (file-less diagnostics such as config problems)
/// followed by each file's diagnostics.
///
/// Unreadable inputs are reported on stderr and counted.
pub(crate) fn render<W: Write>(
    options: &CommandOptions,
    out: W,
    preamble: &[Diagnostic],
    reports: &[Result<FileReport, LoadError>],
) -> Tally {
    let mut tally = Tally::default();
    match options.format {
        OutputFormat::Human => {
            let mut emitter = TerminalEmitter::with_color_mode(out, options.color, options.is_tty);
            emit_reports(&mut emitter, preamble, reports, &mut tally);
            emitter.emit_summary(tally.errors, tally.warnings);
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(out);
            emitter.begin();
            emit_reports(&mut emitter, preamble, reports, &mut tally);
            emitter.end();
            emitter.flush();
        }
    }
    tally
}

/// Report a failed config load. Returns [`EXIT_FAILURE`].
pub(crate) fn report_load_failure<W: Write>(
    options: &CommandOptions,
    out: W,
    error: &LoadError,
) -> i32 {
    match error.to_diagnostic() {
        Some(diagnostic) => {
            render(options, out, &[diagnostic], &[]);
        }
        None => eprintln!("error: {error}"),
    }
    EXIT_FAILURE
}

fn emit_reports(
    emitter: &mut dyn DiagnosticEmitter,
    preamble: &[Diagnostic],
    reports: &[Result<FileReport, LoadError>],
    tally: &mut Tally,
) {
    for diagnostic in preamble {
        count(diagnostic, tally);
        emitter.emit(diagnostic);
    }
    for report in reports {
        match report {
            Ok(report) => {
                if report.diagnostics.is_empty() {
                    continue;
                }
                emitter.begin_file(&report.path.display().to_string(), &report.source);
                for diagnostic in &report.diagnostics {
                    count(diagnostic, tally);
                    emitter.emit(diagnostic);
                }
            }
            Err(error) => {
                eprintln!("error: {error}");
                tally.unreadable += 1;
            }
        }
    }
}

fn count(diagnostic: &Diagnostic, tally: &mut Tally) {
    if diagnostic.is_error() {
        tally.errors += 1;
    } else {
        tally.warnings += 1;
    }
}
