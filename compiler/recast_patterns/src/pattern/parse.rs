//! The `match` string grammar.
//!
//! ```text
//! pattern  = "new" Ident "(" args ")"
//!          | Ident ( ("." | "?.") Name )? "?."? "(" args ")"
//! args     = ( arg ( "," arg )* ","? )?
//! arg      = ( "_" | "$" Name | literal ) "?"?
//! literal  = ( "+" | "-" )? Number | String | "true" | "false" | "null" | "undefined"
//! ```
//!
//! Patterns are tokenized with the source lexer, so literals are cooked
//! exactly like the code they are compared against.

use recast_ir::{StringInterner, TokenKind};
use recast_parse::Cursor;

use super::{ArgumentSpec, CalleeKey, LiteralValue};
use crate::error::PatternErrorKind;

pub(super) struct MatchShape {
    pub callee: CalleeKey,
    pub optional_call: bool,
    pub args: Vec<ArgumentSpec>,
}

pub(super) fn parse_match(text: &str) -> Result<MatchShape, PatternErrorKind> {
    let mut interner = StringInterner::new();
    let lexed = recast_lexer::lex(text, &mut interner);
    if let Some(error) = lexed.errors.first() {
        return Err(invalid(error.kind.to_string()));
    }
    MatchParser {
        cursor: Cursor::new(&lexed.tokens),
        interner: &interner,
    }
    .parse()
}

fn invalid(reason: impl Into<String>) -> PatternErrorKind {
    PatternErrorKind::InvalidMatch {
        reason: reason.into(),
    }
}

struct MatchParser<'a> {
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
}

impl MatchParser<'_> {
    fn parse(mut self) -> Result<MatchShape, PatternErrorKind> {
        let callee = if self.cursor.eat(TokenKind::New) {
            CalleeKey::Constructor {
                type_name: self.ident("a type name")?,
            }
        } else {
            let name = self.ident("a callee name")?;
            let member = self.cursor.check(TokenKind::Dot)
                || (self.cursor.check(TokenKind::QuestionDot)
                    && self.cursor.peek_kind(1) != TokenKind::LParen);
            if member {
                self.cursor.advance();
                CalleeKey::StaticMethod {
                    type_name: name,
                    method: self.property()?,
                }
            } else {
                CalleeKey::Function { name }
            }
        };

        let optional_call = !matches!(callee, CalleeKey::Constructor { .. })
            && self.cursor.eat(TokenKind::QuestionDot);
        self.expect(TokenKind::LParen)?;
        let args = self.arguments()?;
        self.expect(TokenKind::RParen)?;
        if !self.cursor.is_at_end() {
            return Err(self.unexpected("end of pattern"));
        }

        Ok(MatchShape {
            callee,
            optional_call,
            args,
        })
    }

    fn arguments(&mut self) -> Result<Vec<ArgumentSpec>, PatternErrorKind> {
        let mut args: Vec<ArgumentSpec> = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            let spec = self.argument()?;
            if !spec.is_optional() && args.last().is_some_and(ArgumentSpec::is_optional) {
                return Err(PatternErrorKind::MisplacedOptional {
                    argument: args.len() + 1,
                });
            }
            args.push(spec);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(args)
    }

    fn argument(&mut self) -> Result<ArgumentSpec, PatternErrorKind> {
        let mut spec = match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let text = self.interner.lookup(name);
                let spec = if text == "_" {
                    ArgumentSpec::Wildcard { optional: false }
                } else if let Some(capture) = text.strip_prefix('$') {
                    if capture.is_empty() || capture.contains('$') {
                        return Err(invalid(format!("`{text}` is not a capture name")));
                    }
                    ArgumentSpec::Capture {
                        name: capture.to_owned(),
                        optional: false,
                    }
                } else if text == "undefined" {
                    literal(LiteralValue::Undefined)
                } else {
                    return Err(invalid(format!(
                        "expected a literal, `_` or a `$name` capture, found `{text}`"
                    )));
                };
                self.cursor.advance();
                spec
            }
            TokenKind::Minus | TokenKind::Plus => {
                let negate = self.cursor.check(TokenKind::Minus);
                self.cursor.advance();
                let TokenKind::Number(bits) = self.cursor.current_kind() else {
                    return Err(self.unexpected("a number after the sign"));
                };
                self.cursor.advance();
                let value = f64::from_bits(bits);
                literal(LiteralValue::Number(if negate { -value } else { value }))
            }
            kind => {
                let value = match kind {
                    TokenKind::Number(bits) => LiteralValue::Number(f64::from_bits(bits)),
                    TokenKind::Str(name) => LiteralValue::Str(self.interner.lookup(name).to_owned()),
                    TokenKind::True => LiteralValue::Bool(true),
                    TokenKind::False => LiteralValue::Bool(false),
                    TokenKind::Null => LiteralValue::Null,
                    _ => return Err(self.unexpected("an argument")),
                };
                self.cursor.advance();
                literal(value)
            }
        };

        if self.cursor.eat(TokenKind::Question) {
            match &mut spec {
                ArgumentSpec::Literal { optional, .. }
                | ArgumentSpec::Wildcard { optional }
                | ArgumentSpec::Capture { optional, .. } => *optional = true,
            }
        }
        Ok(spec)
    }

    fn ident(&mut self, what: &str) -> Result<String, PatternErrorKind> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(self.interner.lookup(name).to_owned())
            }
            _ => Err(self.unexpected(what)),
        }
    }

    /// Method name; reserved words are valid after a dot.
    fn property(&mut self) -> Result<String, PatternErrorKind> {
        let kind = self.cursor.current_kind();
        let name = match kind {
            TokenKind::Ident(name) => self.interner.lookup(name),
            _ => kind
                .keyword_str()
                .ok_or_else(|| self.unexpected("a method name"))?,
        };
        self.cursor.advance();
        Ok(name.to_owned())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), PatternErrorKind> {
        if self.cursor.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    fn unexpected(&self, expected: &str) -> PatternErrorKind {
        let found = match self.cursor.current_kind() {
            TokenKind::Eof => "end of pattern",
            other => other.describe(),
        };
        invalid(format!("expected {expected}, found {found}"))
    }
}

fn literal(value: LiteralValue) -> ArgumentSpec {
    ArgumentSpec::Literal {
        value,
        optional: false,
    }
}
