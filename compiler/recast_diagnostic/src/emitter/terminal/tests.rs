#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use recast_ir::Span;

use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::warning(ErrorCode::W3001)
        .with_message("`new Vector2(0, 0)` can be replaced with `Vector2.zero`")
        .with_label(Span::new(10, 27), "prefer `Vector2.zero`")
        .with_note("configured pattern `new Vector2(0, 0)`")
        .with_fix("replace with `Vector2.zero`", Span::new(10, 27), "Vector2.zero")
}

fn render(emitter_setup: impl FnOnce(&mut TerminalEmitter<&mut Vec<u8>>)) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter_setup(&mut emitter);
    emitter.flush();
    drop(emitter);
    String::from_utf8(output).unwrap()
}

#[test]
fn test_terminal_emitter_no_file() {
    let text = render(|e| e.emit(&sample_diagnostic()));
    assert!(text.contains("warning[W3001]"));
    assert!(text.contains("can be replaced"));
    assert!(text.contains("prefer `Vector2.zero`"));
    assert!(text.contains("= note: configured pattern"));
    assert!(text.contains("= help: replace with"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_renders_source_line() {
    let source = "const v = new Vector2(0, 0);\n";
    let text = render(|e| {
        e.begin_file("src/a.ts", source);
        e.emit(&sample_diagnostic());
    });
    assert!(text.contains("--> src/a.ts:1:11"), "got:\n{text}");
    assert!(text.contains(" 1 | const v = new Vector2(0, 0);"), "got:\n{text}");
    assert!(text.contains(&format!("{}{}", " ".repeat(10), "^".repeat(17))), "got:\n{text}");
}

#[test]
fn test_terminal_emitter_with_color() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);
    emitter.emit(&sample_diagnostic());
    emitter.flush();
    drop(emitter);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("W3001"));
}

#[test]
fn test_emit_all() {
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
        Diagnostic::error(ErrorCode::E1002).with_message("error 2"),
    ];
    let text = render(|e| e.emit_all(&diagnostics));
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
}

#[test]
fn test_emit_summary() {
    assert!(render(|e| e.emit_summary(2, 1)).contains("2 errors; 1 warning emitted"));
    assert!(render(|e| e.emit_summary(1, 0)).contains("1 error emitted"));
    assert!(render(|e| e.emit_summary(0, 3)).contains("3 warnings emitted"));
    assert!(render(|e| e.emit_summary(0, 0)).is_empty());
}

#[test]
fn test_color_mode() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
}
