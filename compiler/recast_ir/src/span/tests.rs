use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains_span(Span::new(12, 20)));
    assert!(!span.contains_span(Span::new(12, 21)));
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_overlaps() {
    let a = Span::new(0, 10);
    assert!(a.overlaps(Span::new(9, 12)));
    assert!(a.overlaps(Span::new(2, 4)));
    assert!(!a.overlaps(Span::new(10, 12)));
    assert!(!Span::new(10, 12).overlaps(a));
}

#[test]
fn test_span_slice() {
    let source = "new Vector2(0, 0)";
    assert_eq!(Span::new(4, 11).slice(source), "Vector2");
    assert_eq!(Span::new(4, 400).slice(source), "");
}

#[test]
fn test_span_try_from_range() {
    assert_eq!(Span::try_from_range(50..100), Ok(Span::new(50, 100)));

    let large = u32::MAX as usize + 1;
    assert!(matches!(
        Span::try_from_range(large..large + 1),
        Err(SpanError::StartTooLarge(_))
    ));
    assert!(matches!(
        Span::try_from_range(0..large),
        Err(SpanError::EndTooLarge(_))
    ));
}

#[test]
fn test_span_error_display() {
    let msg = SpanError::EndTooLarge(0x2_0000_0000).to_string();
    assert!(msg.contains("end"));
    assert!(msg.contains("8589934592"));
}
