//! Replacement templates.
//!
//! A template is text with `$name` placeholders. A placeholder is `$`
//! followed by the longest run of identifier characters, so `$xs` never
//! means `$x` followed by `s`. A `$` not followed by a letter or `_` is
//! plain text.

use std::fmt;

use crate::matcher::{Captures, Precedence};

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TemplatePart {
    Text(String),
    /// Capture name, without the `$`.
    Placeholder(String),
}

/// A parsed replacement string.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Template {
    parts: Vec<TemplatePart>,
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Template {
    pub fn parse(text: &str) -> Self {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut rest = text;
        while let Some(dollar) = rest.find('$') {
            literal.push_str(&rest[..dollar]);
            let after = &rest[dollar + 1..];
            let len = match after.chars().next() {
                Some(c) if is_name_start(c) => after
                    .find(|c: char| !is_name_continue(c))
                    .unwrap_or(after.len()),
                _ => 0,
            };
            if len == 0 {
                literal.push('$');
            } else {
                if !literal.is_empty() {
                    parts.push(TemplatePart::Text(std::mem::take(&mut literal)));
                }
                parts.push(TemplatePart::Placeholder(after[..len].to_owned()));
            }
            rest = &after[len..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            parts.push(TemplatePart::Text(literal));
        }
        Template { parts }
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Placeholder names in order of appearance, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Placeholder(name) => Some(name.as_str()),
            TemplatePart::Text(_) => None,
        })
    }

    /// How many times `name` is substituted.
    pub fn uses(&self, name: &str) -> usize {
        self.placeholders().filter(|&p| p == name).count()
    }

    /// The identifier this template consists of, if it is nothing but one
    /// bare name such as `oneScale`.
    pub fn bare_identifier(&self) -> Option<&str> {
        let [TemplatePart::Text(text)] = self.parts.as_slice() else {
            return None;
        };
        let name = text.trim();
        let mut chars = name.chars();
        let first = chars.next()?;
        let valid = (first.is_alphabetic() || first == '_' || first == '$')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
        valid.then_some(name)
    }

    /// Substitute captured source text for every placeholder.
    ///
    /// A capture keeps the grouping it had as an argument: comma
    /// expressions are always parenthesized, and operator expressions are
    /// parenthesized unless the placeholder fills a whole argument or
    /// element slot such as `f($x, 1)`.
    ///
    /// Returns `None` when a placeholder names an optional capture that was
    /// not supplied at the call site.
    pub fn generate(&self, captures: &Captures<'_>) -> Option<String> {
        let mut out = String::new();
        for (index, part) in self.parts.iter().enumerate() {
            match part {
                TemplatePart::Text(text) => out.push_str(text),
                TemplatePart::Placeholder(name) => {
                    let capture = captures.get(name)?;
                    let grouped = match capture.precedence {
                        Precedence::Comma => true,
                        Precedence::Operator => !self.fills_slot(index),
                        Precedence::Postfix => false,
                    };
                    if grouped {
                        out.push('(');
                        out.push_str(capture.text);
                        out.push(')');
                    } else {
                        out.push_str(capture.text);
                    }
                }
            }
        }
        Some(out)
    }

    /// Whether the placeholder at `index` sits alone between list
    /// delimiters, as in `f($x)` or `[a, $x]`.
    fn fills_slot(&self, index: usize) -> bool {
        let before = index
            .checked_sub(1)
            .and_then(|i| self.parts.get(i))
            .and_then(|part| match part {
                TemplatePart::Text(text) => text.trim_end().chars().next_back(),
                TemplatePart::Placeholder(_) => None,
            });
        let after = self.parts.get(index + 1).and_then(|part| match part {
            TemplatePart::Text(text) => text.trim_start().chars().next(),
            TemplatePart::Placeholder(_) => None,
        });
        matches!(before, Some('(' | '[' | ','))
            && matches!(after, Some(')' | ']' | ','))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                TemplatePart::Text(text) => f.write_str(text)?,
                TemplatePart::Placeholder(name) => write!(f, "${name}")?,
            }
        }
        Ok(())
    }
}
