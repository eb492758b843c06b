//! The scanner: source text to [`TokenList`].
//!
//! One pass, longest-match punctuation, keywords resolved on the fly.
//! Trivia (whitespace and comments) is skipped but remembered as a
//! `newline_before` flag on the following token.

use recast_ir::{Span, StringInterner, Token, TokenKind, TokenList};

use crate::cursor::Cursor;
use crate::escape::unescape;
use crate::lex_error::{LexError, LexErrorKind};
use crate::number::parse_number;

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

#[inline]
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

pub(crate) struct Scanner<'a, 'i> {
    cursor: Cursor<'a>,
    interner: &'i mut StringInterner,
    tokens: TokenList,
    errors: Vec<LexError>,
    newline_before: bool,
}

impl<'a, 'i> Scanner<'a, 'i> {
    pub(crate) fn new(source: &'a str, interner: &'i mut StringInterner) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            interner,
            tokens: TokenList::with_capacity(source.len() / 4 + 1),
            errors: Vec::new(),
            newline_before: false,
        }
    }

    pub(crate) fn run(mut self) -> (TokenList, Vec<LexError>) {
        self.skip_hashbang();
        loop {
            self.skip_trivia();
            let start = self.cursor.pos();
            if self.cursor.is_eof() {
                self.push(TokenKind::Eof, start);
                break;
            }
            if let Some(kind) = self.next_kind(start) {
                self.push(kind, start);
            }
        }
        (self.tokens, self.errors)
    }

    fn push(&mut self, kind: TokenKind, start: u32) {
        let span = Span::new(start, self.cursor.pos());
        self.tokens.push(Token::new(kind, span, self.newline_before));
        self.newline_before = false;
    }

    fn error(&mut self, start: u32, kind: LexErrorKind) {
        let span = Span::new(start, self.cursor.pos().max(start + 1));
        self.errors.push(LexError::new(span, kind));
    }

    fn skip_hashbang(&mut self) {
        if self.cursor.current() == b'#' && self.cursor.peek() == b'!' {
            self.cursor.skip_to_byte(b'\n');
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | 0x0b | 0x0c => self.cursor.advance(),
                b'\n' | b'\r' => {
                    self.newline_before = true;
                    self.cursor.advance();
                }
                b'/' if self.cursor.peek() == b'/' => {
                    self.cursor.skip_to_byte(b'\n');
                }
                b'/' if self.cursor.peek() == b'*' => {
                    let start = self.cursor.pos();
                    self.cursor.advance_n(2);
                    let body_start = self.cursor.pos();
                    if !self.cursor.skip_past(b"*/") {
                        self.error(start, LexErrorKind::UnterminatedComment);
                    }
                    if self.cursor.slice_from(body_start).contains(is_line_terminator) {
                        self.newline_before = true;
                    }
                }
                b if b >= 0x80 => match self.cursor.current_char() {
                    Some(c) if c.is_whitespace() || c == '\u{feff}' => {
                        if is_line_terminator(c) {
                            self.newline_before = true;
                        }
                        self.cursor.advance_char();
                    }
                    _ => return,
                },
                _ => return,
            }
        }
    }

    /// Scan one token starting at `start`. `None` means an error was
    /// recorded and the offending input skipped.
    fn next_kind(&mut self, start: u32) -> Option<TokenKind> {
        let b = self.cursor.current();
        let kind = match b {
            b if is_ident_start(b) || b >= 0x80 => return Some(self.identifier(start)),
            b'0'..=b'9' => return self.number(start),
            b'.' if self.cursor.peek().is_ascii_digit() => return self.number(start),
            b'"' | b'\'' => return self.string(start, b),
            b'`' => return self.template(start),
            b'/' if self.regex_allowed() => return self.regex(start),
            b'(' => self.one(TokenKind::LParen),
            b')' => self.one(TokenKind::RParen),
            b'{' => self.one(TokenKind::LBrace),
            b'}' => self.one(TokenKind::RBrace),
            b'[' => self.one(TokenKind::LBracket),
            b']' => self.one(TokenKind::RBracket),
            b';' => self.one(TokenKind::Semicolon),
            b',' => self.one(TokenKind::Comma),
            b':' => self.one(TokenKind::Colon),
            b'~' => self.one(TokenKind::Tilde),
            b'.' => {
                if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
                    self.many(3, TokenKind::DotDotDot)
                } else {
                    self.one(TokenKind::Dot)
                }
            }
            b'?' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'?', b'=') => self.many(3, TokenKind::QuestionQuestionEq),
                (b'?', _) => self.many(2, TokenKind::QuestionQuestion),
                // `a?.5:b` is a conditional, not optional chaining.
                (b'.', next) if !next.is_ascii_digit() => self.many(2, TokenKind::QuestionDot),
                _ => self.one(TokenKind::Question),
            },
            b'=' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'=', b'=') => self.many(3, TokenKind::EqEqEq),
                (b'=', _) => self.many(2, TokenKind::EqEq),
                (b'>', _) => self.many(2, TokenKind::Arrow),
                _ => self.one(TokenKind::Eq),
            },
            b'!' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'=', b'=') => self.many(3, TokenKind::NotEqEq),
                (b'=', _) => self.many(2, TokenKind::NotEq),
                _ => self.one(TokenKind::Bang),
            },
            b'+' => match self.cursor.peek() {
                b'+' => self.many(2, TokenKind::PlusPlus),
                b'=' => self.many(2, TokenKind::PlusEq),
                _ => self.one(TokenKind::Plus),
            },
            b'-' => match self.cursor.peek() {
                b'-' => self.many(2, TokenKind::MinusMinus),
                b'=' => self.many(2, TokenKind::MinusEq),
                _ => self.one(TokenKind::Minus),
            },
            b'*' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'*', b'=') => self.many(3, TokenKind::StarStarEq),
                (b'*', _) => self.many(2, TokenKind::StarStar),
                (b'=', _) => self.many(2, TokenKind::StarEq),
                _ => self.one(TokenKind::Star),
            },
            b'/' => match self.cursor.peek() {
                b'=' => self.many(2, TokenKind::SlashEq),
                _ => self.one(TokenKind::Slash),
            },
            b'%' => match self.cursor.peek() {
                b'=' => self.many(2, TokenKind::PercentEq),
                _ => self.one(TokenKind::Percent),
            },
            b'^' => match self.cursor.peek() {
                b'=' => self.many(2, TokenKind::CaretEq),
                _ => self.one(TokenKind::Caret),
            },
            b'&' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'&', b'=') => self.many(3, TokenKind::AmpAmpEq),
                (b'&', _) => self.many(2, TokenKind::AmpAmp),
                (b'=', _) => self.many(2, TokenKind::AmpEq),
                _ => self.one(TokenKind::Amp),
            },
            b'|' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'|', b'=') => self.many(3, TokenKind::PipePipeEq),
                (b'|', _) => self.many(2, TokenKind::PipePipe),
                (b'=', _) => self.many(2, TokenKind::PipeEq),
                _ => self.one(TokenKind::Pipe),
            },
            b'<' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'<', b'=') => self.many(3, TokenKind::ShlEq),
                (b'<', _) => self.many(2, TokenKind::Shl),
                (b'=', _) => self.many(2, TokenKind::LtEq),
                _ => self.one(TokenKind::Lt),
            },
            b'>' => self.greater(),
            _ => {
                let c = self.cursor.current_char().unwrap_or('\0');
                self.cursor.advance_char();
                self.error(start, LexErrorKind::UnexpectedChar(c));
                return None;
            }
        };
        Some(kind)
    }

    #[inline]
    fn one(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    #[inline]
    fn many(&mut self, n: usize, kind: TokenKind) -> TokenKind {
        self.cursor.advance_n(n);
        kind
    }

    /// Step over a backslash and the character it escapes.
    fn skip_escape(&mut self) {
        self.cursor.advance();
        self.cursor.advance_char();
    }

    fn greater(&mut self) -> TokenKind {
        let rest = self.cursor.rest().as_bytes();
        let (len, kind) = match rest {
            [b'>', b'>', b'>', b'=', ..] => (4, TokenKind::UShrEq),
            [b'>', b'>', b'>', ..] => (3, TokenKind::UShr),
            [b'>', b'>', b'=', ..] => (3, TokenKind::ShrEq),
            [b'>', b'>', ..] => (2, TokenKind::Shr),
            [b'>', b'=', ..] => (2, TokenKind::GtEq),
            _ => (1, TokenKind::Gt),
        };
        self.many(len, kind)
    }

    fn identifier(&mut self, start: u32) -> TokenKind {
        loop {
            let b = self.cursor.current();
            if is_ident_continue(b) {
                self.cursor.advance();
            } else if b >= 0x80 {
                match self.cursor.current_char() {
                    Some(c) if !c.is_whitespace() && c != '\u{feff}' => {
                        self.cursor.advance_char();
                    }
                    _ => break,
                }
            } else {
                break;
            }
        }
        let text = self.cursor.slice_from(start);
        TokenKind::keyword(text).unwrap_or_else(|| TokenKind::Ident(self.interner.intern(text)))
    }

    fn number(&mut self, start: u32) -> Option<TokenKind> {
        let radix_prefix = self.cursor.current() == b'0'
            && matches!(
                self.cursor.peek(),
                b'x' | b'X' | b'o' | b'O' | b'b' | b'B'
            );
        if radix_prefix {
            self.cursor.advance_n(2);
            self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
        } else {
            self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
            if self.cursor.current() == b'.' {
                self.cursor.advance();
                self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
            }
            if matches!(self.cursor.current(), b'e' | b'E') {
                self.cursor.advance();
                if matches!(self.cursor.current(), b'+' | b'-') {
                    self.cursor.advance();
                }
                self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
            }
        }
        if self.cursor.current() == b'n' {
            self.cursor.advance();
        }
        // `3in` or `1px` are not numbers followed by identifiers.
        let glued = is_ident_start(self.cursor.current());
        self.cursor.eat_while(is_ident_continue);

        match parse_number(self.cursor.slice_from(start)) {
            Some(value) if !glued => Some(TokenKind::number(value)),
            _ => {
                self.error(start, LexErrorKind::InvalidNumber);
                None
            }
        }
    }

    fn string(&mut self, start: u32, quote: u8) -> Option<TokenKind> {
        self.cursor.advance();
        let body_start = self.cursor.pos();
        loop {
            let rest = self.cursor.rest().as_bytes();
            match memchr::memchr3(quote, b'\\', b'\n', rest) {
                Some(offset) => {
                    self.cursor.advance_n(offset);
                    match self.cursor.current() {
                        b'\\' => self.skip_escape(),
                        b'\n' => break,
                        _ => {
                            let body = self.cursor.slice_from(body_start);
                            self.cursor.advance();
                            let name = match unescape(body) {
                                Some(cooked) => self.interner.intern(&cooked),
                                None => self.interner.intern(body),
                            };
                            return Some(TokenKind::Str(name));
                        }
                    }
                }
                None => {
                    self.cursor.advance_n(rest.len());
                    break;
                }
            }
        }
        self.error(start, LexErrorKind::UnterminatedString);
        None
    }

    /// Scan a template literal as one opaque token.
    ///
    /// Substitutions are skipped by brace depth; their contents are not
    /// tokenized.
    fn template(&mut self, start: u32) -> Option<TokenKind> {
        self.cursor.advance();
        let body_start = self.cursor.pos();
        let mut depth = 0u32;
        while !self.cursor.is_eof() {
            match self.cursor.current() {
                b'\\' => self.skip_escape(),
                b'$' if self.cursor.peek() == b'{' => {
                    depth += 1;
                    self.cursor.advance_n(2);
                }
                b'{' if depth > 0 => {
                    depth += 1;
                    self.cursor.advance();
                }
                b'}' if depth > 0 => {
                    depth -= 1;
                    self.cursor.advance();
                }
                b'`' if depth == 0 => {
                    let body = self.cursor.slice_from(body_start);
                    self.cursor.advance();
                    return Some(TokenKind::Template(self.interner.intern(body)));
                }
                _ => self.cursor.advance_char(),
            }
        }
        self.error(start, LexErrorKind::UnterminatedTemplate);
        None
    }

    /// A `/` starts a regular expression unless the previous token ends an
    /// operand.
    fn regex_allowed(&self) -> bool {
        let Some(prev) = self.tokens.as_slice().last() else {
            return true;
        };
        !matches!(
            prev.kind,
            TokenKind::Ident(_)
                | TokenKind::Number(_)
                | TokenKind::Str(_)
                | TokenKind::Template(_)
                | TokenKind::Regex(_)
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
                | TokenKind::This
                | TokenKind::Super
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::PlusPlus
                | TokenKind::MinusMinus
        )
    }

    fn regex(&mut self, start: u32) -> Option<TokenKind> {
        self.cursor.advance();
        let mut in_class = false;
        loop {
            match self.cursor.current() {
                0 if self.cursor.is_eof() => break,
                b'\n' | b'\r' => break,
                b'\\' => self.skip_escape(),
                b'[' => {
                    in_class = true;
                    self.cursor.advance();
                }
                b']' => {
                    in_class = false;
                    self.cursor.advance();
                }
                b'/' if !in_class => {
                    self.cursor.advance();
                    self.cursor.eat_while(|b| b.is_ascii_alphabetic());
                    let text = self.cursor.slice_from(start);
                    return Some(TokenKind::Regex(self.interner.intern(text)));
                }
                _ => self.cursor.advance_char(),
            }
        }
        self.error(start, LexErrorKind::UnterminatedRegex);
        None
    }
}
