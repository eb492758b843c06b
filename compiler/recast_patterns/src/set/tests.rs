#![expect(clippy::unwrap_used, reason = "Tests use unwrap to panic on unexpected state")]

use pretty_assertions::assert_eq;
use recast_diagnostic::ErrorCode;

use super::PatternSet;
use crate::{PatternEntry, PatternId};

#[test]
fn broken_entries_are_dropped_and_reported() {
    let set = PatternSet::from_entries(&[
        PatternEntry::new("new Vector2(0, 0)", "Vector2.zero"),
        PatternEntry::new("Vector2 zero", "Vector2.zero"),
        PatternEntry::new("f($x)", "g($y)"),
        PatternEntry::new("f(0?, $x)", "g($x)"),
        PatternEntry::new("new Vector2(1, 1)", "Vector2.one"),
    ]);

    let kept: Vec<&str> = set.patterns().iter().map(|p| p.source.as_str()).collect();
    assert_eq!(kept, vec!["new Vector2(0, 0)", "new Vector2(1, 1)"]);

    let reported: Vec<(usize, ErrorCode)> = set
        .errors()
        .iter()
        .map(|e| (e.position, e.code()))
        .collect();
    assert_eq!(
        reported,
        vec![(2, ErrorCode::E4002), (3, ErrorCode::E4003), (4, ErrorCode::E4005)]
    );
}

#[test]
fn bad_guards_are_reported_but_kept() {
    let set = PatternSet::from_entries(&[
        PatternEntry::new("f($x)", "g($x)").with_guard("x", "around 3"),
    ]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.errors().len(), 1);
    assert_eq!(set.errors()[0].code(), ErrorCode::E4004);
    assert!(set.patterns()[0].guard_errors.is_empty());
}

#[test]
fn ids_follow_kept_order() {
    let set = PatternSet::from_entries(&[
        PatternEntry::new("broken", "x"),
        PatternEntry::new("new A()", "a"),
        PatternEntry::new("new A(1)", "b"),
    ]);
    let key = &set.patterns()[0].callee;
    let ids = set.index().lookup(key);
    assert_eq!(ids, &[PatternId::new(0), PatternId::new(1)]);
    assert_eq!(set.get(ids[1]).template.to_string(), "b");
}

#[test]
fn from_json() {
    let set = PatternSet::from_json(
        r#"{ "patterns": [{ "match": "new Vector2(0, 0)", "replacement": "Vector2.zero" }] }"#,
    )
    .unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.errors().is_empty());
    assert!(PatternSet::from_json("{").is_err());
}

#[test]
fn empty_set() {
    let set = PatternSet::default();
    assert!(set.is_empty());
    assert!(set.index().is_empty());
}

#[test]
fn shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PatternSet>();
}
