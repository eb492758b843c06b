//! Rule options.
//!
//! ```json
//! {
//!   "patterns": [
//!     { "match": "new Vector2(0, 0)", "replacement": "Vector2.zero" },
//!     { "match": "UDim2.fromScale($x, $x)", "replacement": "UDim2.square($x)",
//!       "when": { "x": "> 0" } }
//!   ]
//! }
//! ```
//!
//! A bare array of entries is accepted as well. Array order is match
//! priority.

use std::collections::BTreeMap;

use recast_diagnostic::{Diagnostic, ErrorCode};
use serde::Deserialize;

/// One `{match, replacement, when?}` entry.
#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternEntry {
    #[serde(rename = "match")]
    pub match_pattern: String,
    pub replacement: String,
    /// Capture name (with or without `$`) to comparator, e.g. `"> 0"`.
    #[serde(default)]
    pub when: BTreeMap<String, String>,
}

impl PatternEntry {
    pub fn new(match_pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        PatternEntry {
            match_pattern: match_pattern.into(),
            replacement: replacement.into(),
            when: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_guard(mut self, capture: impl Into<String>, guard: impl Into<String>) -> Self {
        self.when.insert(capture.into(), guard.into());
        self
    }
}

/// The deserialized configuration.
#[derive(Clone, Eq, PartialEq, Debug, Default, Deserialize)]
pub struct PatternConfig {
    pub patterns: Vec<PatternEntry>,
}

impl PatternConfig {
    /// Parse JSON options: `{"patterns": [...]}` or a bare `[...]`.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if value.is_array() {
            Ok(PatternConfig {
                patterns: serde_json::from_value(value)?,
            })
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }
}

/// The configuration could not be read at all.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid pattern configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::E4001
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.to_string())
    }
}

#[cfg(test)]
mod tests;
