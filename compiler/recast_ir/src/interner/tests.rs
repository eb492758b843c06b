use super::*;

#[test]
fn test_intern_and_lookup() {
    let mut interner = StringInterner::new();

    let scale = interner.intern("scale");
    let vector = interner.intern("Vector2");
    let scale2 = interner.intern("scale");

    assert_eq!(scale, scale2);
    assert_ne!(scale, vector);
    assert_eq!(interner.lookup(scale), "scale");
    assert_eq!(interner.lookup(vector), "Vector2");
}

#[test]
fn test_empty_string() {
    let mut interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_get_does_not_insert() {
    let mut interner = StringInterner::new();
    assert_eq!(interner.get("oneScale"), None);
    assert_eq!(interner.len(), 1);

    let name = interner.intern("oneScale");
    assert_eq!(interner.get("oneScale"), Some(name));
}

#[test]
fn test_foreign_name_is_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(99)), "");
}
