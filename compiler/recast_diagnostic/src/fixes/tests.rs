use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_text_edit_kinds() {
    assert!(TextEdit::insert(3, "x").is_insert());
    assert!(!TextEdit::delete(Span::new(0, 2)).is_insert());
    assert!(!TextEdit::replace(Span::new(0, 2), "y").is_insert());
}

#[test]
fn test_apply_single_replacement() {
    let source = "let v = new Vector2(0, 0);";
    let result = apply_edits(source, &[TextEdit::replace(Span::new(8, 25), "Vector2.zero")]);
    assert_eq!(result.text, "let v = Vector2.zero;");
    assert_eq!(result.applied, 1);
    assert_eq!(result.skipped, 0);
}

#[test]
fn test_apply_in_source_order_regardless_of_input_order() {
    let source = "a(1); b(2);";
    let edits = [
        TextEdit::replace(Span::new(6, 10), "B"),
        TextEdit::replace(Span::new(0, 4), "A"),
    ];
    let result = apply_edits(source, &edits);
    assert_eq!(result.text, "A; B;");
    assert_eq!(result.applied, 2);
}

#[test]
fn test_overlapping_edit_is_skipped_outer_wins() {
    let source = "f(g(1))";
    let edits = [
        TextEdit::replace(Span::new(2, 6), "G"),
        TextEdit::replace(Span::new(0, 7), "F"),
    ];
    let result = apply_edits(source, &edits);
    assert_eq!(result.text, "F");
    assert_eq!(result.applied, 1);
    assert_eq!(result.skipped, 1);
}

#[test]
fn test_adjacent_edits_do_not_conflict() {
    let source = "ab";
    let edits = [
        TextEdit::replace(Span::new(0, 1), "A"),
        TextEdit::replace(Span::new(1, 2), "B"),
    ];
    assert_eq!(apply_edits(source, &edits).text, "AB");
}

#[test]
fn test_insert_inside_replacement_conflicts() {
    let a = TextEdit::replace(Span::new(0, 4), "x");
    let b = TextEdit::insert(2, "y");
    assert!(a.conflicts_with(&b));
    assert!(b.conflicts_with(&a));
    assert!(!TextEdit::insert(2, "p").conflicts_with(&TextEdit::insert(2, "q")));
}

#[test]
fn test_out_of_range_edit_is_skipped() {
    let result = apply_edits("abc", &[TextEdit::replace(Span::new(2, 10), "z")]);
    assert_eq!(result.text, "abc");
    assert_eq!(result.skipped, 1);
}

#[test]
fn test_no_edits_returns_source() {
    let result = apply_edits("unchanged", &[]);
    assert_eq!(result.text, "unchanged");
    assert_eq!(result.applied, 0);
}

#[test]
fn test_insert_and_replace_at_same_start() {
    let source = "abcdef";
    let edits = [
        TextEdit::replace(Span::new(2, 4), "XY"),
        TextEdit::insert(2, "_"),
    ];
    let result = apply_edits(source, &edits);
    assert_eq!(result.text, "ab_XYef");
    assert_eq!(result.applied, 2);
}
