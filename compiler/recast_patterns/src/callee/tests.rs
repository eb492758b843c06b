use pretty_assertions::assert_eq;

use super::{resolve_callee, CalleeResolution};
use crate::test_helpers::parse;

/// Resolve the call `call` in `source` and render it with real names.
fn resolve(source: &str, call: &str) -> String {
    let parsed = parse(source);
    let name = |n| parsed.interner.lookup(n).to_owned();
    match resolve_callee(parsed.arena(), parsed.call(call)) {
        CalleeResolution::Constructor { type_name } => format!("constructor:{}", name(type_name)),
        CalleeResolution::StaticMethod { type_name, method } => {
            format!("staticMethod:{}.{}", name(type_name), name(method))
        }
        CalleeResolution::Function { name: f } => format!("function:{}", name(f)),
        CalleeResolution::Unknown => "unknown".to_owned(),
    }
}

fn resolve_last(source: &str) -> String {
    let call = source.trim_end_matches(';');
    resolve(source, call)
}

#[test]
fn constructors() {
    assert_eq!(resolve_last("new Vector2(0, 0);"), "constructor:Vector2");
    assert_eq!(resolve_last("new Vector2;"), "constructor:Vector2");
    assert_eq!(resolve_last("new ns.Vector2(0);"), "unknown");
    assert_eq!(resolve_last("new (getType())(0);"), "unknown");
}

#[test]
fn static_methods() {
    assert_eq!(resolve_last("UDim2.fromScale(1, 1);"), "staticMethod:UDim2.fromScale");
    assert_eq!(resolve_last("Color3.new(1, 1, 1);"), "staticMethod:Color3.new");
    assert_eq!(resolve_last("Vector2?.create(0);"), "staticMethod:Vector2.create");
    assert_eq!(resolve_last("Vector2.create?.(0);"), "staticMethod:Vector2.create");
    assert_eq!(resolve_last("Vector2?.create?.(0);"), "staticMethod:Vector2.create");
}

#[test]
fn functions() {
    assert_eq!(resolve_last("clamp(x, 0, 1);"), "function:clamp");
    assert_eq!(resolve_last("clamp?.(x);"), "function:clamp");
}

#[test]
fn everything_else_is_unknown() {
    assert_eq!(resolve_last("a.b.c(1);"), "unknown");
    assert_eq!(resolve_last("a[b](1);"), "unknown");
    assert_eq!(resolve_last("this.make(1);"), "unknown");
    assert_eq!(resolve_last("make()(1);"), "unknown");
    assert_eq!(resolve_last("(0, f)(1);"), "unknown");
    assert_eq!(
        resolve(
            "class A extends B { constructor() { super(1); } }",
            "super(1)"
        ),
        "unknown"
    );
    assert_eq!(
        resolve(
            "class A extends B { m() { return super.m(1); } }",
            "super.m(1)"
        ),
        "unknown"
    );
}

#[test]
fn non_call_nodes_are_unknown() {
    let parsed = parse("x + 1;");
    assert_eq!(
        resolve_callee(parsed.arena(), parsed.last_expr()),
        CalleeResolution::Unknown
    );
}
