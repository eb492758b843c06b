#![expect(clippy::unwrap_used, reason = "Tests use unwrap to panic on unexpected state")]

use pretty_assertions::assert_eq;

use super::{match_arguments, Precedence};
use crate::pattern::parse_pattern;
use crate::test_helpers::parse;
use crate::PatternEntry;

/// Match the last call of `source` against `pattern`, returning the bound
/// `(name, text, value)` triples, or `None` for no match.
fn bindings(pattern: &str, source: &str) -> Option<Vec<(String, String, Option<f64>)>> {
    let pattern = parse_pattern(&PatternEntry::new(pattern, "r")).unwrap();
    let parsed = parse(source);
    let args = parsed.last_args();
    let ctx = parsed.context();
    match_arguments(&ctx, &pattern.args, &args).map(|captures| {
        captures
            .iter()
            .map(|c| (c.name.to_owned(), c.text.to_owned(), c.value))
            .collect()
    })
}

fn matches(pattern: &str, source: &str) -> bool {
    bindings(pattern, source).is_some()
}

fn bound(name: &str, text: &str, value: Option<f64>) -> (String, String, Option<f64>) {
    (name.to_owned(), text.to_owned(), value)
}

#[test]
fn literal_positions_compare_folded_values() {
    let pattern = "new Vector2(0, 0)";
    assert!(matches(pattern, "new Vector2(0, 0);"));
    assert!(matches(pattern, "new Vector2(-0, -0);"));
    assert!(matches(pattern, "new Vector2(1 - 1, 2 - 2);"));
    assert!(matches(pattern, "new Vector2(0.0, 0x0);"));
    assert!(!matches(pattern, "new Vector2(0, 1);"));
    assert!(!matches(pattern, "new Vector2(0, x);"));
}

#[test]
fn primitive_literals() {
    assert!(matches("f('a', true, null)", "f(\"a\", true, null);"));
    assert!(!matches("f('a')", "f('b');"));
    assert!(!matches("f(1)", "f('1');"));
    assert!(!matches("f(null)", "f(undefined);"));
    assert!(matches("f(undefined)", "f(void 0);"));
}

#[test]
fn argument_count_must_fit() {
    assert!(!matches("new Vector2(0, 0)", "new Vector2();"));
    assert!(!matches("new Vector2(0, 0)", "new Vector2;"));
    assert!(!matches("new Vector2(0, 0)", "new Vector2(0);"));
    assert!(!matches("new Vector2(0, 0)", "new Vector2(0, 0, 0);"));
    assert!(matches("new Vector2()", "new Vector2;"));
}

#[test]
fn spread_arguments_never_match() {
    assert!(!matches("new Vector2(_, _)", "new Vector2(...xs);"));
    assert!(!matches("new Vector2(_, _)", "new Vector2(1, ...xs);"));
    assert!(!matches("f($a?, $b?)", "f(...xs);"));
}

#[test]
fn wildcards_accept_anything() {
    assert!(matches("new Vector2(5, _)", "new Vector2(5, compute(a, b) + 1);"));
    assert!(matches("new Vector2(5, _)", "new Vector2(5, x = 2);"));
    assert_eq!(bindings("new Vector2(5, _)", "new Vector2(5, y);"), Some(vec![]));
}

#[test]
fn captures_bind_text_and_value() {
    assert_eq!(
        bindings("f($a, $b)", "f(2 * 3, foo.bar);"),
        Some(vec![
            bound("a", "2 * 3", Some(6.0)),
            bound("b", "foo.bar", None),
        ])
    );
}

#[test]
fn captures_strip_wrappers() {
    assert_eq!(
        bindings("f($a)", "f(((x as number))!);"),
        Some(vec![bound("a", "x", None)])
    );
    assert_eq!(
        bindings("f($a)", "f(<number>(3));"),
        Some(vec![bound("a", "3", Some(3.0))])
    );
}

/// `(text, precedence)` of the single capture `$a` in `f($a)`.
fn grouping(source: &str) -> (String, Precedence) {
    let pattern = parse_pattern(&PatternEntry::new("f($a)", "r")).unwrap();
    let parsed = parse(source);
    let args = parsed.last_args();
    let ctx = parsed.context();
    let captures = match_arguments(&ctx, &pattern.args, &args).unwrap();
    let capture = captures.get("a").unwrap();
    (capture.text.to_owned(), capture.precedence)
}

#[test]
fn captures_record_how_tightly_they_bind() {
    let cases = [
        ("f((a, b));", "a, b", Precedence::Comma),
        ("f((a + b));", "a + b", Precedence::Operator),
        ("f(a + b);", "a + b", Precedence::Operator),
        ("f(c ? d : e);", "c ? d : e", Precedence::Operator),
        ("f(x => x);", "x => x", Precedence::Operator),
        ("f(new A);", "new A", Precedence::Operator),
        ("f(-1);", "-1", Precedence::Operator),
        ("f(((x)));", "x", Precedence::Postfix),
        ("f(a.b[c]());", "a.b[c]()", Precedence::Postfix),
        ("f(new A());", "new A()", Precedence::Postfix),
    ];
    for (source, text, precedence) in cases {
        assert_eq!(grouping(source), (text.to_owned(), precedence), "{source}");
    }
}

#[test]
fn repeated_captures_must_agree() {
    let pattern = "UDim2.fromScale($x, $x)";
    assert_eq!(
        bindings(pattern, "UDim2.fromScale(0.5, 0.5);"),
        Some(vec![bound("x", "0.5", Some(0.5))])
    );
    assert!(!matches(pattern, "UDim2.fromScale(0.5, 0.6);"));
    assert!(matches(pattern, "UDim2.fromScale(a.b, (a.b));"));
    assert!(!matches(pattern, "UDim2.fromScale(a, b);"));
    // Equal values with different spellings.
    assert!(matches(pattern, "UDim2.fromScale(0.5, 1 / 2);"));
}

#[test]
fn repeated_captures_reject_side_effects() {
    let pattern = "UDim2.fromScale($x, $x)";
    assert!(!matches(pattern, "UDim2.fromScale(f(), f());"));
    assert!(!matches(pattern, "UDim2.fromScale(i++, i++);"));
    assert!(!matches(pattern, "UDim2.fromScale(new A(), new A());"));
}

#[test]
fn optional_positions() {
    let pattern = "new Vector2($x, 0?)";
    assert_eq!(
        bindings(pattern, "new Vector2(0.5);"),
        Some(vec![bound("x", "0.5", Some(0.5))])
    );
    assert!(matches(pattern, "new Vector2(0.5, 0);"));
    assert!(matches(pattern, "new Vector2(0.5, undefined);"));
    assert!(matches(pattern, "new Vector2(0.5, void 0);"));
    assert!(!matches(pattern, "new Vector2(0.5, 1);"));
    assert!(!matches(pattern, "new Vector2();"));
}

#[test]
fn optional_captures() {
    assert_eq!(bindings("f($a, $b?)", "f(1);"), Some(vec![bound("a", "1", Some(1.0))]));
    assert_eq!(
        bindings("f($a, $b?)", "f(1, undefined);"),
        Some(vec![
            bound("a", "1", Some(1.0)),
            bound("b", "undefined", None),
        ])
    );
}

#[test]
fn optional_literal_undefined_only_counts_when_optional() {
    assert!(!matches("f(0)", "f(undefined);"));
    assert!(matches("f(0?)", "f(undefined);"));
    assert!(matches("f(0?)", "f();"));
}
