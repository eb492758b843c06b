//! Pattern configuration errors.
//!
//! None of these abort a run. A broken `match` or replacement drops its
//! pattern; a broken guard keeps the pattern but makes it never match.

use recast_diagnostic::{Diagnostic, ErrorCode};

/// What is wrong with one configuration entry.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum PatternErrorKind {
    #[error("invalid match: {reason}")]
    InvalidMatch { reason: String },

    #[error("replacement uses `${name}`, which the match never captures")]
    UnknownPlaceholder { name: String },

    #[error("guard `{guard}` on `${capture}` does not parse: {reason}")]
    InvalidGuard {
        capture: String,
        guard: String,
        reason: String,
    },

    #[error("guard names `${capture}`, which the match never captures")]
    UnknownGuardCapture { capture: String },

    /// `argument` is 1-based.
    #[error("argument {argument} is required but follows an optional argument")]
    MisplacedOptional { argument: usize },
}

impl PatternErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            PatternErrorKind::InvalidMatch { .. } => ErrorCode::E4002,
            PatternErrorKind::UnknownPlaceholder { .. } => ErrorCode::E4003,
            PatternErrorKind::InvalidGuard { .. } | PatternErrorKind::UnknownGuardCapture { .. } => {
                ErrorCode::E4004
            }
            PatternErrorKind::MisplacedOptional { .. } => ErrorCode::E4005,
        }
    }

    /// Whether the entry was dropped, as opposed to kept with guards that
    /// never hold.
    pub fn drops_pattern(&self) -> bool {
        !matches!(
            self,
            PatternErrorKind::InvalidGuard { .. } | PatternErrorKind::UnknownGuardCapture { .. }
        )
    }
}

/// A problem with the entry at `position` (1-based) of the configuration.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("pattern {position} `{pattern}`: {kind}")]
pub struct PatternError {
    pub position: usize,
    /// The entry's `match` string.
    pub pattern: String,
    pub kind: PatternErrorKind,
}

impl PatternError {
    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Configuration has no source spans, so the diagnostic carries notes
    /// instead of labels.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let consequence = if self.kind.drops_pattern() {
            "this pattern is ignored"
        } else {
            "this pattern will never match"
        };
        Diagnostic::warning(self.code())
            .with_message(self.kind.to_string())
            .with_note(format!("in pattern {}: `{}`", self.position, self.pattern))
            .with_note(consequence)
    }
}

#[cfg(test)]
mod tests;
