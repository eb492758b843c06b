use pretty_assertions::assert_eq;
use recast_diagnostic::{ErrorCode, Severity};

use super::{PatternError, PatternErrorKind};

fn error(kind: PatternErrorKind) -> PatternError {
    PatternError {
        position: 2,
        pattern: "f($x)".to_owned(),
        kind,
    }
}

#[test]
fn codes() {
    let cases = [
        (
            PatternErrorKind::InvalidMatch {
                reason: "r".to_owned(),
            },
            ErrorCode::E4002,
        ),
        (
            PatternErrorKind::UnknownPlaceholder {
                name: "y".to_owned(),
            },
            ErrorCode::E4003,
        ),
        (
            PatternErrorKind::InvalidGuard {
                capture: "x".to_owned(),
                guard: "~".to_owned(),
                reason: "r".to_owned(),
            },
            ErrorCode::E4004,
        ),
        (
            PatternErrorKind::UnknownGuardCapture {
                capture: "z".to_owned(),
            },
            ErrorCode::E4004,
        ),
        (
            PatternErrorKind::MisplacedOptional { argument: 2 },
            ErrorCode::E4005,
        ),
    ];
    for (kind, code) in cases {
        assert_eq!(error(kind).code(), code);
    }
}

#[test]
fn display() {
    let err = error(PatternErrorKind::UnknownPlaceholder {
        name: "y".to_owned(),
    });
    assert_eq!(
        err.to_string(),
        "pattern 2 `f($x)`: replacement uses `$y`, which the match never captures"
    );
}

#[test]
fn dropped_patterns_and_inert_guards_are_told_apart() {
    let dropped = error(PatternErrorKind::MisplacedOptional { argument: 1 }).to_diagnostic();
    assert_eq!(dropped.severity, Severity::Warning);
    assert_eq!(dropped.code, ErrorCode::E4005);
    assert_eq!(
        dropped.notes,
        vec!["in pattern 2: `f($x)`", "this pattern is ignored"]
    );

    let inert = error(PatternErrorKind::UnknownGuardCapture {
        capture: "z".to_owned(),
    })
    .to_diagnostic();
    assert_eq!(inert.notes[1], "this pattern will never match");
    assert!(inert.labels.is_empty());
}
