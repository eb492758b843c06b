#![expect(clippy::unwrap_used, reason = "Tests use unwrap to panic on unexpected state")]

use pretty_assertions::assert_eq;
use recast_ir::StringInterner;

use super::*;

fn tokens(source: &str, interner: &mut StringInterner) -> TokenList {
    recast_lexer::lex(source, interner).tokens
}

#[test]
fn test_advance_stops_at_eof() {
    let mut interner = StringInterner::new();
    let list = tokens("a", &mut interner);
    let mut cursor = Cursor::new(&list);
    assert!(cursor.check_ident());
    cursor.advance();
    assert!(cursor.is_at_end());
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_eat_and_expect() {
    let mut interner = StringInterner::new();
    let list = tokens("( )", &mut interner);
    let mut cursor = Cursor::new(&list);
    assert!(!cursor.eat(TokenKind::RParen));
    assert!(cursor.eat(TokenKind::LParen));
    assert_eq!(cursor.expect(TokenKind::RParen), Ok(Span::new(2, 3)));
    let err = cursor.expect(TokenKind::Semicolon).unwrap_err();
    assert_eq!(err.message, "expected `;`, found end of file");
}

#[test]
fn test_peek_and_rewind() {
    let mut interner = StringInterner::new();
    let list = tokens("a\nb c", &mut interner);
    let mut cursor = Cursor::new(&list);
    assert!(matches!(cursor.peek_kind(1), TokenKind::Ident(_)));
    assert!(cursor.peek_newline_before(1));
    assert!(!cursor.peek_newline_before(2));
    assert_eq!(cursor.peek_kind(10), TokenKind::Eof);

    let saved = cursor.position();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.previous_span(), Span::new(2, 3));
    cursor.set_position(saved);
    assert_eq!(cursor.current_span(), Span::new(0, 1));
}

#[test]
fn test_expect_ident() {
    let mut interner = StringInterner::new();
    let list = tokens("foo 1", &mut interner);
    let foo = interner.intern("foo");
    let mut cursor = Cursor::new(&list);
    assert!(cursor.check_name(foo));
    assert_eq!(cursor.expect_ident(), Ok((foo, Span::new(0, 3))));
    assert!(cursor.expect_ident().is_err());
}
