#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use recast_ir::Span;

use super::*;
use crate::ErrorCode;

fn render(diagnostics: &[Diagnostic], file: Option<(&str, &str)>) -> String {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.begin();
    if let Some((path, source)) = file {
        emitter.begin_file(path, source);
    }
    emitter.emit_all(diagnostics);
    emitter.end();
    emitter.flush();
    drop(emitter);
    String::from_utf8(output).unwrap()
}

#[test]
fn test_json_emitter_prefer_replacement() {
    let source = "let v = new Vector2(0, 0);";
    let diag = Diagnostic::warning(ErrorCode::W3001)
        .with_message("prefer `Vector2.zero`")
        .with_label(Span::new(8, 25), "can be simplified")
        .with_data("original", "new Vector2(0, 0)")
        .with_data("replacement", "Vector2.zero")
        .with_fix("replace", Span::new(8, 25), "Vector2.zero");

    let text = render(&[diag], Some(("a.ts", source)));
    assert!(text.contains("\"code\": \"W3001\""));
    assert!(text.contains("\"kind\": \"preferReplacement\""));
    assert!(text.contains("\"severity\": \"warning\""));
    assert!(text.contains("\"file\": \"a.ts\""));
    assert!(text.contains("\"line\": 1, \"column\": 9"));
    assert!(text.contains(
        "\"data\": {\"original\": \"new Vector2(0, 0)\", \"replacement\": \"Vector2.zero\"}"
    ));
    assert!(text.contains(
        "{\"start\": 8, \"end\": 25, \"newText\": \"Vector2.zero\", \"machineApplicable\": true}"
    ));
}

#[test]
fn test_json_emitter_conflict_has_no_fixes() {
    let diag = Diagnostic::warning(ErrorCode::W3002)
        .with_message("skipped")
        .with_data("conflict", "scale");
    let text = render(&[diag], None);
    assert!(text.contains("\"kind\": \"skippedDueToConflict\""));
    assert!(text.contains("\"fixes\": [\n    ]"));
    assert!(!text.contains("\"file\""));
}

#[test]
fn test_json_emitter_multiple_is_valid_array_shape() {
    let text = render(
        &[
            Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
            Diagnostic::warning(ErrorCode::W3001).with_message("warning 1"),
        ],
        None,
    );
    assert!(text.starts_with('['));
    assert!(text.trim_end().ends_with(']'));
    assert_eq!(text.matches("\"code\"").count(), 2);
    assert!(text.contains("},\n  {"));
}

#[test]
fn test_json_emitter_empty() {
    assert_eq!(render(&[], None), "[\n]\n");
}
