#![expect(clippy::unwrap_used, reason = "Tests use unwrap to panic on unexpected state")]

use pretty_assertions::assert_eq;
use recast_ir::StringInterner;

use super::*;

/// Run `f` on a parser positioned at the start of `source`, then report
/// the source text left unconsumed.
fn run<T>(source: &str, f: impl FnOnce(&mut Parser<'_>) -> T) -> (T, String) {
    let mut interner = StringInterner::new();
    let tokens = recast_lexer::lex(source, &mut interner).tokens;
    let mut parser = Parser::new(&tokens, &mut interner);
    let result = f(&mut parser);
    let rest_start = parser.cursor.current_span().start as usize;
    let rest = source.get(rest_start..).unwrap_or("").trim().to_owned();
    (result, rest)
}

fn skip(source: &str) -> (Result<Span, ParseError>, String) {
    run(source, |p| p.skip_type_annotation())
}

#[test]
fn test_simple_types() {
    for source in ["string", "number[]", "A.B.C", "'literal'", "-1", "void", "null"] {
        let (result, rest) = skip(source);
        assert_eq!(result.unwrap(), Span::new(0, u32::try_from(source.len()).unwrap()), "{source}");
        assert_eq!(rest, "");
    }
}

#[test]
fn test_nested_generics_split_shift_tokens() {
    let source = "Map<K, Array<Set<V>>> = x";
    let (result, rest) = skip(source);
    assert_eq!(result.unwrap().slice(source), "Map<K, Array<Set<V>>>");
    assert_eq!(rest, "= x");
}

#[test]
fn test_unbalanced_closer_is_rejected() {
    let (result, _) = skip("Array<T>> x");
    assert!(result.is_err());
}

#[test]
fn test_union_intersection_and_conditional() {
    for source in [
        "| A | B",
        "A & B | C",
        "T extends string ? 'yes' : 'no'",
        "keyof typeof config",
        "readonly string[]",
        "T[K]['field']",
    ] {
        let (result, rest) = skip(source);
        assert!(result.is_ok(), "{source}: {result:?}");
        assert_eq!(rest, "", "{source}");
    }
}

#[test]
fn test_object_tuple_and_function_types() {
    for source in [
        "{ a: string; b?: number }",
        "[string, number]",
        "(a: A, b: B) => R",
        "<T>(x: T) => T",
        "new (...args: any[]) => Foo",
        "import('./mod').Thing<X>",
    ] {
        let (result, rest) = skip(source);
        assert!(result.is_ok(), "{source}: {result:?}");
        assert_eq!(rest, "", "{source}");
    }
}

#[test]
fn test_type_stops_at_expression_punctuation() {
    let (result, rest) = skip("string) + 1");
    assert_eq!(result.unwrap(), Span::new(0, 6));
    assert_eq!(rest, ") + 1");
}

#[test]
fn test_type_parameters() {
    let (result, rest) = run("<T extends Base = Default, out U, const V>(x)", |p| {
        p.skip_type_parameters()
    });
    assert!(result.is_ok());
    assert_eq!(rest, "(x)");
}

#[test]
fn test_type_parameters_absent() {
    let (result, rest) = run("(x)", |p| p.skip_type_parameters());
    assert!(result.is_ok());
    assert_eq!(rest, "(x)");
}

#[test]
fn test_return_type_predicates() {
    for source in ["x is string", "asserts x is Foo", "asserts this", "Promise<void>"] {
        let (result, rest) = run(source, |p| p.skip_return_type());
        assert!(result.is_ok(), "{source}: {result:?}");
        assert_eq!(rest, "", "{source}");
    }
}

#[test]
fn test_angle_assertion_type_span() {
    let source = "<Array<T>>value";
    let (result, rest) = run(source, |p| p.skip_angle_assertion_type());
    assert_eq!(result.unwrap().slice(source), "Array<T>");
    assert_eq!(rest, "value");
}

#[test]
fn test_skip_balanced_nested() {
    let (result, rest) = run("(a, (b, c)) => x", |p| {
        p.skip_balanced(TokenKind::LParen, TokenKind::RParen)
    });
    assert!(result.is_ok());
    assert_eq!(rest, "=> x");
}

#[test]
fn test_skip_balanced_unclosed() {
    let (result, _) = run("(a, b", |p| {
        p.skip_balanced(TokenKind::LParen, TokenKind::RParen)
    });
    assert_eq!(result.unwrap_err().code, recast_diagnostic::ErrorCode::E1003);
}
