//! Recast driver: the `recast` command-line tool as a library.
//!
//! ```text
//! config.json ──► load_patterns ──► PatternSet (shared, read-only)
//!                                        │
//! inputs ──► collect_sources ──► files ──┼──► check_paths ──► diagnostics
//!                                        └──► fix_paths   ──► rewritten files
//! ```
//!
//! Files are processed in parallel with rayon. Every command returns its
//! exit code instead of exiting, so the whole CLI is testable in-process.

pub mod commands;
pub mod tracing_setup;
