//! A compiled configuration.

use tracing::warn;

use crate::config::{ConfigError, PatternConfig, PatternEntry};
use crate::error::PatternError;
use crate::index::{PatternId, PatternIndex};
use crate::pattern::{parse_pattern, ParsedPattern};

/// Every usable pattern of a configuration, indexed by callee.
///
/// Immutable once built. Share one set across all files of a run.
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    patterns: Vec<ParsedPattern>,
    index: PatternIndex,
    errors: Vec<PatternError>,
}

impl PatternSet {
    /// Compile `entries` in order.
    ///
    /// Entries that fail to parse are left out; their problems, and those
    /// of kept entries with broken guards, are available from
    /// [`PatternSet::errors`].
    pub fn from_entries(entries: &[PatternEntry]) -> Self {
        let mut patterns = Vec::with_capacity(entries.len());
        let mut errors = Vec::new();

        for (position, entry) in (1..).zip(entries) {
            let error = |kind| PatternError {
                position,
                pattern: entry.match_pattern.clone(),
                kind,
            };
            match parse_pattern(entry) {
                Ok(mut pattern) => {
                    errors.extend(pattern.guard_errors.drain(..).map(error));
                    patterns.push(pattern);
                }
                Err(kind) => errors.push(error(kind)),
            }
        }

        for error in &errors {
            warn!(code = %error.code(), "{error}");
        }

        let index = PatternIndex::build(&patterns);
        PatternSet {
            patterns,
            index,
            errors,
        }
    }

    /// Compile a JSON configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config = PatternConfig::from_json(text)?;
        Ok(Self::from_entries(&config.patterns))
    }

    /// Usable patterns, in declaration order.
    pub fn patterns(&self) -> &[ParsedPattern] {
        &self.patterns
    }

    pub fn errors(&self) -> &[PatternError] {
        &self.errors
    }

    pub fn index(&self) -> &PatternIndex {
        &self.index
    }

    pub fn get(&self, id: PatternId) -> &ParsedPattern {
        &self.patterns[id.index()]
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests;
