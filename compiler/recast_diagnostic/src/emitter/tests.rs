use super::*;

#[test]
fn test_escape_json() {
    assert_eq!(escape_json("hello"), "hello");
    assert_eq!(escape_json("\"quoted\""), "\\\"quoted\\\"");
    assert_eq!(escape_json("line1\nline2"), "line1\\nline2");
    assert_eq!(escape_json("path\\file"), "path\\\\file");
    assert_eq!(escape_json("bell\u{7}"), "bell\\u0007");
}

#[test]
fn test_trailing_comma() {
    assert_eq!(trailing_comma(0, 2), ",");
    assert_eq!(trailing_comma(1, 2), "");
}

#[test]
fn test_file_context_line_col() {
    let file = FileContext::new("a.ts", "x\nnew Vector2(0, 0)");
    assert_eq!(file.line_col(2), (2, 1));
    assert_eq!(file.line_col(6), (2, 5));
}
