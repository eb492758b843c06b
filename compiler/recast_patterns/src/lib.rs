//! Recast Patterns - the call-site rewrite engine.
//!
//! A pattern describes a known call or constructor shape and the code that
//! should replace it:
//!
//! ```text
//! { "match": "new Vector2($x, 0?)", "replacement": "Vector2.fromX($x)" }
//! ```
//!
//! # Pipeline
//!
//! Configuration is compiled once into a [`PatternSet`]:
//!
//! 1. [`parse_pattern`] turns each entry into a [`ParsedPattern`]: a callee
//!    key, argument specs, guards and a replacement [`Template`]. Broken
//!    entries are dropped and reported as [`PatternError`]s.
//! 2. [`PatternIndex`] groups patterns by callee key, keeping declaration
//!    order.
//!
//! Then, per file, [`PreferPatternRule`] visits every call and `new`
//! expression and, for each candidate pattern in order:
//!
//! 1. [`resolve_callee`] classifies the callee and picks the candidates.
//! 2. [`match_arguments`] matches actual arguments against the specs,
//!    producing [`Captures`]. Literal positions compare values folded by
//!    [`fold`].
//! 3. [`Guard`]s check numeric conditions on the captures.
//! 4. The hygiene pass rejects duplicated side effects and withholds the
//!    fix when the replacement name is already bound in scope.
//! 5. The template is filled in and reported as a diagnostic with a fix.
//!
//! The first pattern that passes every stage wins.
//!
//! # Concurrency
//!
//! A `PatternSet` is immutable after construction and `Send + Sync`; files
//! can be checked in parallel against one shared set.

mod callee;
mod condition;
mod config;
mod error;
mod fold;
mod hygiene;
mod index;
mod matcher;
mod pattern;
mod rule;
mod set;

#[cfg(test)]
mod test_helpers;

pub use callee::{resolve_callee, CalleeResolution};
pub use condition::{CompareOp, Comparator, Guard};
pub use config::{ConfigError, PatternConfig, PatternEntry};
pub use error::{PatternError, PatternErrorKind};
pub use fold::{fold, Constant};
pub use hygiene::{find_conflict, is_pure, Conflict};
pub use index::{BoundIndex, PatternId, PatternIndex};
pub use matcher::{match_arguments, Capture, Captures, MatchContext, Precedence};
pub use pattern::{
    parse_pattern, ArgumentSpec, CalleeKey, LiteralValue, ParsedPattern, Template, TemplatePart,
};
pub use rule::{CheckedSource, Outcome, PreferPatternRule};
pub use set::PatternSet;
