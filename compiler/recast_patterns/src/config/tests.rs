#![expect(clippy::unwrap_used, reason = "Tests use unwrap to panic on unexpected state")]

use pretty_assertions::assert_eq;
use recast_diagnostic::ErrorCode;

use super::{PatternConfig, PatternEntry};

#[test]
fn object_form() {
    let config = PatternConfig::from_json(
        r#"{
            "patterns": [
                { "match": "new Vector2(0, 0)", "replacement": "Vector2.zero" },
                { "match": "UDim2.fromScale($x, $x)", "replacement": "UDim2.square($x)",
                  "when": { "x": "> 0" } }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(
        config.patterns,
        vec![
            PatternEntry::new("new Vector2(0, 0)", "Vector2.zero"),
            PatternEntry::new("UDim2.fromScale($x, $x)", "UDim2.square($x)").with_guard("x", "> 0"),
        ]
    );
}

#[test]
fn bare_array_form() {
    let config =
        PatternConfig::from_json(r#"[{ "match": "f()", "replacement": "g()" }]"#).unwrap();
    assert_eq!(config.patterns, vec![PatternEntry::new("f()", "g()")]);
}

#[test]
fn other_top_level_options_are_ignored() {
    let config = PatternConfig::from_json(r#"{ "patterns": [], "severity": "warn" }"#).unwrap();
    assert!(config.patterns.is_empty());
}

#[test]
fn malformed_configurations() {
    for text in [
        "",
        "{",
        "{}",
        "42",
        r#"{ "patterns": {} }"#,
        r#"[{ "match": "f()" }]"#,
        r#"[{ "match": "f()", "replacement": 1 }]"#,
        r#"[{ "match": "f()", "replacement": "g()", "whn": {} }]"#,
        r#"[{ "match": "f()", "replacement": "g()", "when": { "x": 0 } }]"#,
    ] {
        let error = PatternConfig::from_json(text).unwrap_err();
        assert_eq!(error.code(), ErrorCode::E4001, "{text}");
    }
}

#[test]
fn error_diagnostic() {
    let error = PatternConfig::from_json("[").unwrap_err();
    let diagnostic = error.to_diagnostic();
    assert!(diagnostic.is_error());
    assert!(diagnostic
        .message
        .starts_with("invalid pattern configuration: "));
}
