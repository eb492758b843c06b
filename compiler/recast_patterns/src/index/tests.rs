#![expect(clippy::unwrap_used, reason = "Tests use unwrap to panic on unexpected state")]

use pretty_assertions::assert_eq;

use super::{PatternId, PatternIndex};
use crate::callee::{resolve_callee, CalleeResolution};
use crate::pattern::{parse_pattern, CalleeKey, ParsedPattern};
use crate::test_helpers::parse;
use crate::PatternEntry;

fn patterns(matches: &[&str]) -> Vec<ParsedPattern> {
    matches
        .iter()
        .map(|m| parse_pattern(&PatternEntry::new(*m, "r")).unwrap())
        .collect()
}

fn ids(indices: &[u32]) -> Vec<PatternId> {
    indices.iter().map(|&i| PatternId::new(i)).collect()
}

#[test]
fn groups_by_key_in_declaration_order() {
    let patterns = patterns(&[
        "new Vector2(0, 0)",
        "UDim2.fromScale($x, $x)",
        "new Vector2(1, 1)",
        "new Vector2($x, 0?)",
        "UDim2.fromOffset(0, 0)",
    ]);
    let index = PatternIndex::build(&patterns);
    assert_eq!(index.len(), 3);
    assert_eq!(index.lookup(&patterns[0].callee), ids(&[0, 2, 3]).as_slice());
    assert_eq!(index.lookup(&patterns[1].callee), ids(&[1]).as_slice());
    assert_eq!(index.lookup(&patterns[4].callee), ids(&[4]).as_slice());
}

#[test]
fn unknown_keys_have_no_candidates() {
    let index = PatternIndex::build(&patterns(&["new Vector2(0, 0)"]));
    let key = CalleeKey::Constructor {
        type_name: "Vector3".to_owned(),
    };
    assert!(index.lookup(&key).is_empty());
    assert!(PatternIndex::build(&[]).is_empty());
}

#[test]
fn constructor_and_function_keys_are_distinct() {
    let patterns = patterns(&["new Vector2(0)", "Vector2(0)"]);
    let index = PatternIndex::build(&patterns);
    assert_eq!(index.len(), 2);
    assert_eq!(index.lookup(&patterns[1].callee), ids(&[1]).as_slice());
}

#[test]
fn bound_lookup_by_resolved_callee() {
    let patterns = patterns(&[
        "new Vector2(0, 0)",
        "Vector2.create(0)",
        "new Vector2(1, 1)",
        "new Missing()",
    ]);
    let index = PatternIndex::build(&patterns);
    let parsed = parse("new Vector2(1, 1);\nVector2.create(0);");
    let bound = index.bind(&parsed.interner);

    let constructor = resolve_callee(parsed.arena(), parsed.call("new Vector2(1, 1)"));
    assert_eq!(bound.lookup(constructor), ids(&[0, 2]).as_slice());
    let method = resolve_callee(parsed.arena(), parsed.call("Vector2.create(0)"));
    assert_eq!(bound.lookup(method), ids(&[1]).as_slice());
    assert!(bound.lookup(CalleeResolution::Unknown).is_empty());
}

#[test]
fn binding_drops_names_the_file_never_mentions() {
    let index = PatternIndex::build(&patterns(&["new Vector2(0, 0)", "UDim2.fromScale(1, 1)"]));
    let parsed = parse("UDim2.other(1);");
    let bound = index.bind(&parsed.interner);
    // `UDim2` is interned but `fromScale` is not.
    assert!(bound.is_empty());
}

#[test]
fn display() {
    assert_eq!(PatternId::new(3).to_string(), "#3");
    assert_eq!(PatternId::new(3).index(), 3);
}
