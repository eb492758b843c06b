//! `when` guards.
//!
//! A guard restricts a capture to values satisfying a numeric comparison:
//!
//! ```text
//! { "when": { "x": "> 0", "y": "!= 1" } }
//! ```
//!
//! Guards fail closed. A guard that does not parse, names no capture, or
//! meets a capture without a statically known number is never satisfied,
//! so a misconfigured guard can only make its pattern match less.

use std::fmt;

use recast_ir::{StringInterner, TokenKind};

use crate::matcher::Captures;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Gt,
    GtEq,
    Lt,
    LtEq,
    Eq,
    NotEq,
}

impl CompareOp {
    fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Gt => CompareOp::Gt,
            TokenKind::GtEq => CompareOp::GtEq,
            TokenKind::Lt => CompareOp::Lt,
            TokenKind::LtEq => CompareOp::LtEq,
            TokenKind::EqEq | TokenKind::EqEqEq => CompareOp::Eq,
            TokenKind::NotEq | TokenKind::NotEqEq => CompareOp::NotEq,
            _ => return None,
        })
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
        }
    }
}

/// A comparison against a fixed operand, e.g. `> 0`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Comparator {
    pub op: CompareOp,
    pub operand: f64,
}

impl Comparator {
    /// Parse `<op> <number>`. The number may carry a sign.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut interner = StringInterner::new();
        let lexed = recast_lexer::lex(text, &mut interner);
        if let Some(error) = lexed.errors.first() {
            return Err(error.kind.to_string());
        }
        let mut tokens = lexed.tokens.iter().map(|token| token.kind);

        let op = tokens
            .next()
            .and_then(CompareOp::from_token)
            .ok_or("expected one of `>`, `>=`, `<`, `<=`, `==`, `!=`")?;
        let (negate, number) = match tokens.next() {
            Some(TokenKind::Minus) => (true, tokens.next()),
            Some(TokenKind::Plus) => (false, tokens.next()),
            other => (false, other),
        };
        let Some(TokenKind::Number(bits)) = number else {
            return Err("expected a number after the comparison".to_owned());
        };
        if tokens.next() != Some(TokenKind::Eof) {
            return Err("unexpected text after the number".to_owned());
        }

        let operand = f64::from_bits(bits);
        Ok(Comparator {
            op,
            operand: if negate { -operand } else { operand },
        })
    }

    /// Ordinary numeric comparison; `NaN` satisfies only `!=`.
    pub fn holds(self, value: f64) -> bool {
        match self.op {
            CompareOp::Gt => value > self.operand,
            CompareOp::GtEq => value >= self.operand,
            CompareOp::Lt => value < self.operand,
            CompareOp::LtEq => value <= self.operand,
            CompareOp::Eq => value == self.operand,
            CompareOp::NotEq => value != self.operand,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op.as_symbol(), self.operand)
    }
}

/// One `when` entry.
#[derive(Clone, PartialEq, Debug)]
pub struct Guard {
    /// Capture name, without the `$`.
    pub capture: String,
    /// The comparison, or why it did not parse.
    pub check: Result<Comparator, String>,
}

impl Guard {
    pub fn parse(capture: &str, text: &str) -> Self {
        Guard {
            capture: capture.to_owned(),
            check: Comparator::parse(text),
        }
    }

    /// Whether the guard holds for these captures.
    pub fn is_satisfied(&self, captures: &Captures<'_>) -> bool {
        let Ok(comparator) = self.check else {
            return false;
        };
        captures
            .get(&self.capture)
            .and_then(|capture| capture.value)
            .is_some_and(|value| comparator.holds(value))
    }
}

/// Whether every guard holds.
pub(crate) fn all_satisfied(guards: &[Guard], captures: &Captures<'_>) -> bool {
    guards.iter().all(|guard| guard.is_satisfied(captures))
}
