use super::*;

#[test]
fn test_current_and_peek() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn test_advance_clamps_at_eof() {
    let mut cursor = Cursor::new("xy");
    cursor.advance_n(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), 0);
}

#[test]
fn test_advance_char_multibyte() {
    let mut cursor = Cursor::new("éa");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn test_skip_to_byte() {
    let mut cursor = Cursor::new("// comment\nnext");
    assert!(cursor.skip_to_byte(b'\n'));
    assert_eq!(cursor.current(), b'\n');

    let mut cursor = Cursor::new("// trailing");
    assert!(!cursor.skip_to_byte(b'\n'));
    assert!(cursor.is_eof());
}

#[test]
fn test_skip_past() {
    let mut cursor = Cursor::new("/* a */b");
    cursor.advance_n(2);
    assert!(cursor.skip_past(b"*/"));
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.slice_from(0), "/* a */");
}

#[test]
fn test_eat_while() {
    let mut cursor = Cursor::new("1234abc");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.slice_from(0), "1234");
}
