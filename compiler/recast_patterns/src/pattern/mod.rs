//! Parsed patterns.
//!
//! A configuration entry's `match` string is compiled into a [`CalleeKey`]
//! and an ordered list of [`ArgumentSpec`]s; its `replacement` into a
//! [`Template`]; its `when` map into [`Guard`]s.
//!
//! ```text
//! new Vector2($x, 0?)        constructor:Vector2   [Capture(x), Literal(0)?]
//! UDim2.fromScale($s, $s)    staticMethod:UDim2.fromScale
//! clamp(_, 0, 1)             function:clamp
//! ```

mod parse;
mod template;

use std::fmt;

use crate::condition::Guard;
use crate::error::PatternErrorKind;
use crate::fold::Constant;
use crate::PatternEntry;

pub use template::{Template, TemplatePart};

/// The callee shape a pattern applies to, used as the index key.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CalleeKey {
    /// `new Type(...)`
    Constructor { type_name: String },
    /// `Type.method(...)`
    StaticMethod { type_name: String, method: String },
    /// `func(...)`
    Function { name: String },
}

impl fmt::Display for CalleeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalleeKey::Constructor { type_name } => write!(f, "constructor:{type_name}"),
            CalleeKey::StaticMethod { type_name, method } => {
                write!(f, "staticMethod:{type_name}.{method}")
            }
            CalleeKey::Function { name } => write!(f, "function:{name}"),
        }
    }
}

/// A primitive value written in a pattern.
#[derive(Clone, PartialEq, Debug)]
pub enum LiteralValue {
    Number(f64),
    Str(String),
    Bool(bool),
    Null,
    Undefined,
}

impl LiteralValue {
    /// Whether a folded argument denotes this value.
    ///
    /// Numbers compare numerically, so `-0` matches `0`.
    pub fn matches(&self, constant: Constant<'_>) -> bool {
        match (self, constant) {
            (LiteralValue::Number(expected), Constant::Number(actual)) => *expected == actual,
            (LiteralValue::Str(expected), Constant::Str(actual)) => expected == actual,
            (LiteralValue::Bool(expected), Constant::Bool(actual)) => *expected == actual,
            (LiteralValue::Null, Constant::Null) | (LiteralValue::Undefined, Constant::Undefined) => {
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(value) => write!(f, "{value}"),
            LiteralValue::Str(value) => write!(f, "{value:?}"),
            LiteralValue::Bool(value) => write!(f, "{value}"),
            LiteralValue::Null => f.write_str("null"),
            LiteralValue::Undefined => f.write_str("undefined"),
        }
    }
}

/// What one argument position of a pattern accepts.
///
/// Optional positions may be missing at the call site. They only appear
/// after every required position.
#[derive(Clone, PartialEq, Debug)]
pub enum ArgumentSpec {
    /// A primitive the argument must fold to.
    Literal { value: LiteralValue, optional: bool },
    /// `_`: any single argument.
    Wildcard { optional: bool },
    /// `$name`: any single argument, bound by name.
    Capture { name: String, optional: bool },
}

impl ArgumentSpec {
    #[inline]
    pub fn is_optional(&self) -> bool {
        match self {
            ArgumentSpec::Literal { optional, .. }
            | ArgumentSpec::Wildcard { optional }
            | ArgumentSpec::Capture { optional, .. } => *optional,
        }
    }

    /// Arguments a call must supply for `specs`: positions before the
    /// first optional one.
    pub fn min_required(specs: &[ArgumentSpec]) -> usize {
        specs.iter().take_while(|spec| !spec.is_optional()).count()
    }

    /// Capture name, without the `$`.
    pub fn capture_name(&self) -> Option<&str> {
        match self {
            ArgumentSpec::Capture { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ArgumentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentSpec::Literal { value, .. } => write!(f, "{value}")?,
            ArgumentSpec::Wildcard { .. } => f.write_str("_")?,
            ArgumentSpec::Capture { name, .. } => write!(f, "${name}")?,
        }
        if self.is_optional() {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// A compiled configuration entry.
#[derive(Clone, Debug)]
pub struct ParsedPattern {
    /// The `match` string as written.
    pub source: String,
    pub callee: CalleeKey,
    /// `?.` before the argument list. Recorded, not enforced.
    pub optional_call: bool,
    pub args: Vec<ArgumentSpec>,
    /// Conditions from `when`, in capture-name order.
    pub guards: Vec<Guard>,
    pub template: Template,
    /// Guard problems. The pattern is kept but those guards never hold.
    pub guard_errors: Vec<PatternErrorKind>,
}

impl ParsedPattern {
    /// Arguments a call must supply: positions before the first optional
    /// one.
    pub fn min_required(&self) -> usize {
        ArgumentSpec::min_required(&self.args)
    }

    /// Most arguments a call may supply.
    #[inline]
    pub fn max_positions(&self) -> usize {
        self.args.len()
    }

    /// Whether any position binds `name`.
    pub fn captures(&self, name: &str) -> bool {
        self.args
            .iter()
            .any(|spec| spec.capture_name() == Some(name))
    }
}

/// Compile one configuration entry.
///
/// Fails when the `match` string does not parse, an optional position is
/// followed by a required one, or the replacement names a placeholder the
/// `match` string never captures. Bad guards do not fail the entry; they
/// are recorded in [`ParsedPattern::guard_errors`] and never hold.
pub fn parse_pattern(entry: &PatternEntry) -> Result<ParsedPattern, PatternErrorKind> {
    let parse::MatchShape {
        callee,
        optional_call,
        args,
    } = parse::parse_match(&entry.match_pattern)?;

    let template = Template::parse(&entry.replacement);
    let mut pattern = ParsedPattern {
        source: entry.match_pattern.clone(),
        callee,
        optional_call,
        args,
        guards: Vec::with_capacity(entry.when.len()),
        template,
        guard_errors: Vec::new(),
    };

    if let Some(name) = pattern
        .template
        .placeholders()
        .find(|name| !pattern.captures(name))
    {
        return Err(PatternErrorKind::UnknownPlaceholder {
            name: name.to_owned(),
        });
    }

    for (key, text) in &entry.when {
        let capture = key.strip_prefix('$').unwrap_or(key);
        let guard = Guard::parse(capture, text);
        if let Err(reason) = &guard.check {
            pattern.guard_errors.push(PatternErrorKind::InvalidGuard {
                capture: capture.to_owned(),
                guard: text.clone(),
                reason: reason.clone(),
            });
        } else if !pattern.captures(capture) {
            pattern.guard_errors.push(PatternErrorKind::UnknownGuardCapture {
                capture: capture.to_owned(),
            });
        }
        pattern.guards.push(guard);
    }

    Ok(pattern)
}
