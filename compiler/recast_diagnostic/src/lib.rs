//! Diagnostic system for recast.
//!
//! Every user-facing problem, from a stray character in a source file to a
//! call site that could use a preferred replacement, is a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message (what)
//! - a primary span (where)
//! - labels and notes (why)
//! - structured suggestions (how to fix), applied by [`fixes::apply_edits`]
//!
//! Emitters in [`emitter`] render diagnostics for terminals and tools.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod fixes;
pub mod span_utils;

pub use diagnostic::{Applicability, Diagnostic, Label, Severity, Substitution, Suggestion};
pub use error_code::ErrorCode;
