use super::*;

#[test]
fn test_line_offset_table() {
    let source = "line1\nline2\nline3";
    let table = LineOffsetTable::build(source);

    assert_eq!(table.line_count(), 3);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 8), (2, 3));
    assert_eq!(table.offset_to_line_col(source, 12), (3, 1));
}

#[test]
fn test_column_counts_characters() {
    let source = "é = f(x)";
    let table = LineOffsetTable::build(source);
    // `=` is at byte 3 but column 3.
    assert_eq!(table.offset_to_line_col(source, 3), (1, 3));
}

#[test]
fn test_line_text() {
    let source = "first\r\nsecond\nthird";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("first"));
    assert_eq!(table.line_text(source, 2), Some("second"));
    assert_eq!(table.line_text(source, 3), Some("third"));
    assert_eq!(table.line_text(source, 4), None);
    assert_eq!(table.line_text(source, 0), None);
}

#[test]
fn test_span_start_line_col() {
    assert_eq!(span_start_line_col("a\n  b", Span::new(4, 5)), (2, 3));
}
