#![expect(clippy::unwrap_used, reason = "Tests use unwrap to panic on unexpected state")]

use pretty_assertions::assert_eq;
use recast_ir::{FunctionBody, StmtId, StmtKind, StmtRange};

use super::*;

fn parse_str(source: &str) -> (ParsedSource, StringInterner) {
    let mut interner = StringInterner::new();
    let parsed = parse_source(source, &mut interner);
    (parsed, interner)
}

/// Parse `source`, asserting it is free of errors.
fn parse_ok(source: &str) -> (ParseOutput, StringInterner) {
    let (parsed, interner) = parse_str(source);
    assert!(
        !parsed.has_errors(),
        "unexpected errors in {source:?}: {:?}",
        parsed.diagnostics
    );
    (parsed.output, interner)
}

fn body(out: &ParseOutput) -> Vec<StmtKind> {
    out.arena
        .get_stmt_list(out.module.body)
        .iter()
        .map(|&id| out.arena.stmt(id).kind)
        .collect()
}

fn stmt_kinds(out: &ParseOutput, range: StmtRange) -> Vec<StmtKind> {
    out.arena
        .get_stmt_list(range)
        .iter()
        .map(|&id| out.arena.stmt(id).kind)
        .collect()
}

fn binding(
    out: &ParseOutput,
    interner: &StringInterner,
    scope: ScopeId,
    name: &str,
) -> Option<BindingKind> {
    let name = interner.get(name)?;
    out.scopes.get(scope).get(name).map(|b| b.kind)
}

fn function_of(out: &ParseOutput, stmt: StmtKind) -> &recast_ir::Function {
    match stmt {
        StmtKind::Function(id) => out.arena.function(id),
        other => panic!("expected a function declaration, got {other:?}"),
    }
}

fn block_of(out: &ParseOutput, id: StmtId) -> (StmtRange, ScopeId) {
    match out.arena.stmt(id).kind {
        StmtKind::Block { body, scope } => (body, scope),
        other => panic!("expected a block, got {other:?}"),
    }
}

// Modules and statements

#[test]
fn test_empty_module() {
    let (out, _) = parse_ok("");
    assert!(body(&out).is_empty());
    assert_eq!(out.scopes.get(out.module.scope).kind, ScopeKind::Module);
    assert_eq!(out.module.span, Span::new(0, 0));
}

#[test]
fn test_module_span_covers_source() {
    let source = "foo();\n";
    let (out, _) = parse_ok(source);
    assert_eq!(out.module.span.end as usize, source.len());
}

#[test]
fn test_automatic_semicolon_insertion() {
    let (out, _) = parse_ok("a = 1\nb = 2\nc()");
    assert_eq!(body(&out).len(), 3);
}

#[test]
fn test_return_ends_at_line_break() {
    let (out, _) = parse_ok("function f() {\n  return\n  x\n}");
    let function = function_of(&out, body(&out)[0]);
    let FunctionBody::Block(stmts) = function.body else {
        panic!("expected a block body");
    };
    let kinds = stmt_kinds(&out, stmts);
    assert_eq!(kinds.len(), 2);
    assert!(matches!(kinds[0], StmtKind::Return(value) if !value.is_valid()));
    assert!(matches!(kinds[1], StmtKind::Expr(_)));
}

#[test]
fn test_missing_semicolon_on_same_line() {
    let (parsed, _) = parse_str("a b");
    assert_eq!(parsed.output.errors.len(), 1);
    assert_eq!(parsed.output.errors[0].code, ErrorCode::E1001);
}

#[test]
fn test_control_flow_statements() {
    let (out, _) = parse_ok(
        "if (a) b(); else { c(); }\n\
         while (x) x--;\n\
         do { y++; } while (y < 10)\n\
         throw new Error('boom');\n",
    );
    let kinds = body(&out);
    assert!(matches!(kinds[0], StmtKind::If { else_branch, .. } if else_branch.is_valid()));
    assert!(matches!(kinds[1], StmtKind::While { .. }));
    assert!(matches!(kinds[2], StmtKind::DoWhile { .. }));
    assert!(matches!(kinds[3], StmtKind::Throw(_)));
}

#[test]
fn test_for_loops() {
    let (out, interner) = parse_ok(
        "for (let i = 0; i < n; i++) {}\n\
         for (const item of items) {}\n\
         for (const key in table) {}\n\
         for (k in table) {}\n\
         for (;;) { break; }\n",
    );
    let kinds = body(&out);
    let StmtKind::For { scope, .. } = kinds[0] else {
        panic!("expected a classic for loop");
    };
    assert_eq!(out.scopes.get(scope).kind, ScopeKind::For);
    assert_eq!(binding(&out, &interner, scope, "i"), Some(BindingKind::Let));
    assert_eq!(binding(&out, &interner, out.module.scope, "i"), None);

    let StmtKind::ForEach { scope, .. } = kinds[1] else {
        panic!("expected a for-of loop");
    };
    assert_eq!(binding(&out, &interner, scope, "item"), Some(BindingKind::Const));
    assert!(matches!(kinds[2], StmtKind::ForEach { .. }));
    assert!(matches!(kinds[3], StmtKind::ForEach { .. }));
    assert!(matches!(
        kinds[4],
        StmtKind::For { init, cond, update, .. }
            if !init.is_valid() && !cond.is_valid() && !update.is_valid()
    ));
}

#[test]
fn test_switch_flattens_cases() {
    let (out, _) = parse_ok("switch (x) { case 1: a(); break; default: b(); }");
    let StmtKind::Switch { body: cases, .. } = body(&out)[0] else {
        panic!("expected a switch");
    };
    let kinds = stmt_kinds(&out, cases);
    assert_eq!(kinds.len(), 5);
    assert!(matches!(kinds[0], StmtKind::Case(test) if test.is_valid()));
    assert!(matches!(kinds[2], StmtKind::Break));
    assert!(matches!(kinds[3], StmtKind::Case(test) if !test.is_valid()));
}

#[test]
fn test_try_catch_binds_parameter_in_handler() {
    let (out, interner) = parse_ok("try { risky(); } catch (err) { log(err); } finally { done(); }");
    let StmtKind::Try {
        handler, finalizer, ..
    } = body(&out)[0]
    else {
        panic!("expected a try statement");
    };
    assert!(finalizer.is_valid());
    let (_, scope) = block_of(&out, handler);
    assert_eq!(
        binding(&out, &interner, scope, "err"),
        Some(BindingKind::CatchParam)
    );
    assert_eq!(binding(&out, &interner, out.module.scope, "err"), None);
}

#[test]
fn test_try_without_handler_is_error() {
    let (parsed, _) = parse_str("try { a(); }");
    assert!(parsed.has_errors());
}

#[test]
fn test_labeled_statement() {
    let (out, _) = parse_ok("outer: for (;;) { continue outer; }");
    assert!(matches!(body(&out)[0], StmtKind::For { .. }));
}

// Scopes

#[test]
fn test_var_hoists_to_function_scope() {
    let (out, interner) = parse_ok("function f() { if (x) { var a = 1; let b = 2; } }");
    let function = function_of(&out, body(&out)[0]);
    assert_eq!(
        binding(&out, &interner, function.scope, "a"),
        Some(BindingKind::Var)
    );
    assert_eq!(binding(&out, &interner, function.scope, "b"), None);
    assert_eq!(
        binding(&out, &interner, out.module.scope, "f"),
        Some(BindingKind::Function)
    );
}

#[test]
fn test_function_in_block_hoists_to_module() {
    let (out, interner) = parse_ok("{ function g() {} }");
    assert_eq!(
        binding(&out, &interner, out.module.scope, "g"),
        Some(BindingKind::Function)
    );
}

#[test]
fn test_expressions_record_their_scope() {
    let source = "function f(p) { return p; }";
    let (out, interner) = parse_ok(source);
    let function = function_of(&out, body(&out)[0]);
    let FunctionBody::Block(stmts) = function.body else {
        panic!("expected a block body");
    };
    let StmtKind::Return(value) = out.arena.stmt(out.arena.get_stmt_list(stmts)[0]).kind else {
        panic!("expected a return");
    };
    let scope = out.arena.scope_of(value);
    assert_eq!(scope, function.scope);
    let p = interner.get("p").unwrap();
    let (found, resolved) = out.scopes.resolve(scope, p).unwrap();
    assert_eq!(found, function.scope);
    assert_eq!(resolved.kind, BindingKind::Param);
}

#[test]
fn test_destructuring_binds_every_name() {
    let (out, interner) = parse_ok("const { a, b: [c, , d], ...rest } = obj;");
    for name in ["a", "c", "d", "rest"] {
        assert_eq!(
            binding(&out, &interner, out.module.scope, name),
            Some(BindingKind::Const),
            "{name}"
        );
    }
    assert_eq!(binding(&out, &interner, out.module.scope, "b"), None);
}

#[test]
fn test_named_function_expression_binds_inside_only() {
    let (out, interner) = parse_ok("const f = function g() { return g; };");
    assert_eq!(binding(&out, &interner, out.module.scope, "g"), None);
    let g = interner.get("g").unwrap();
    let StmtKind::VarDecl { declarators, .. } = body(&out)[0] else {
        panic!("expected a declaration");
    };
    let init = out.arena.get_declarators(declarators)[0].init;
    let ExprKind::Function(id) = *out.arena.kind(init) else {
        panic!("expected a function expression");
    };
    let scope = out.arena.function(id).scope;
    assert_eq!(
        out.scopes.get(scope).get(g).map(|b| b.kind),
        Some(BindingKind::Function)
    );
}

#[test]
fn test_arrow_parameters_bind_in_arrow_scope() {
    let (out, interner) = parse_ok("const f = (a, { b }) => a + b;");
    assert_eq!(binding(&out, &interner, out.module.scope, "a"), None);
    let StmtKind::VarDecl { declarators, .. } = body(&out)[0] else {
        panic!("expected a declaration");
    };
    let init = out.arena.get_declarators(declarators)[0].init;
    let ExprKind::Function(id) = *out.arena.kind(init) else {
        panic!("expected an arrow");
    };
    let function = out.arena.function(id);
    assert!(function.is_arrow);
    assert_eq!(
        binding(&out, &interner, function.scope, "b"),
        Some(BindingKind::Param)
    );
    let FunctionBody::Expr(body_expr) = function.body else {
        panic!("expected an expression body");
    };
    assert_eq!(out.arena.scope_of(body_expr), function.scope);
}

#[test]
fn test_first_declaration_wins() {
    let (out, interner) = parse_ok("var x = 1; function x() {}");
    assert_eq!(
        binding(&out, &interner, out.module.scope, "x"),
        Some(BindingKind::Var)
    );
}

// Modules and TypeScript declarations

#[test]
fn test_imports_bind_local_names() {
    let (out, interner) = parse_ok(
        "import a, { b as c, type d, default as e } from \"m\";\n\
         import * as ns from 'n';\n\
         import 'side-effect';\n\
         import type { T } from './types';\n",
    );
    for name in ["a", "c", "d", "e", "ns", "T"] {
        assert_eq!(
            binding(&out, &interner, out.module.scope, name),
            Some(BindingKind::Import),
            "{name}"
        );
    }
    assert_eq!(binding(&out, &interner, out.module.scope, "b"), None);
    let kinds = body(&out);
    let StmtKind::Import { bindings } = kinds[0] else {
        panic!("expected an import");
    };
    assert_eq!(out.arena.get_names(bindings).len(), 4);
    assert!(matches!(kinds[2], StmtKind::Import { bindings } if bindings.is_empty()));
}

#[test]
fn test_exports_parse_inner_declarations() {
    let (out, interner) = parse_ok(
        "export const a = 1;\n\
         export function f() {}\n\
         export default class {}\n\
         export { a as b };\n\
         export * from './all';\n",
    );
    assert_eq!(
        binding(&out, &interner, out.module.scope, "a"),
        Some(BindingKind::Const)
    );
    assert_eq!(
        binding(&out, &interner, out.module.scope, "f"),
        Some(BindingKind::Function)
    );
    assert!(matches!(body(&out)[2], StmtKind::Class { name, .. } if name == Name::EMPTY));
}

#[test]
fn test_type_declarations_are_skipped() {
    let (out, interner) = parse_ok(
        "type Pair<T> = [T, T];\n\
         interface Shape extends Base<number> { area(): number; }\n\
         enum Color { Red, Green }\n\
         declare const VERSION: string;\n\
         namespace util { export const id = 1; }\n\
         let table: Map<string, Array<number>> = new Map();\n",
    );
    let kinds = body(&out);
    assert!(matches!(kinds[0], StmtKind::Empty));
    assert!(matches!(kinds[1], StmtKind::Empty));
    assert_eq!(
        binding(&out, &interner, out.module.scope, "Color"),
        Some(BindingKind::Class)
    );
    assert_eq!(
        binding(&out, &interner, out.module.scope, "VERSION"),
        Some(BindingKind::Const)
    );
    assert_eq!(binding(&out, &interner, out.module.scope, "Pair"), None);
}

#[test]
fn test_typed_functions() {
    parse_ok(
        "function id<T extends object>(value: T, fallback?: T): T { return value; }\n\
         function isString(x: unknown): x is string { return typeof x === 'string'; }\n\
         async function load(this: Window, ...urls: string[]): Promise<void> {}\n\
         function overload(a: string): void;\n",
    );
}

#[test]
fn test_class_members() {
    let (out, interner) = parse_ok(
        "abstract class Service<T> extends Base<T> implements Api {\n\
           private readonly cache = new Map();\n\
           count: number;\n\
           [key: string]: unknown;\n\
           constructor(private client: Client) { super(); }\n\
           static create() { return new Service(); }\n\
           get size() { return this.cache.size; }\n\
           abstract run(): void;\n\
         }",
    );
    let StmtKind::Class {
        name,
        heritage,
        members,
    } = body(&out)[0]
    else {
        panic!("expected a class");
    };
    assert_eq!(interner.lookup(name), "Service");
    assert!(heritage.is_valid());
    let kinds = stmt_kinds(&out, members);
    // cache initializer, constructor, create, size, run
    assert_eq!(kinds.len(), 5);
    assert!(matches!(kinds[0], StmtKind::Expr(_)));
    let constructor = function_of(&out, kinds[1]);
    assert_eq!(interner.lookup(constructor.name), "constructor");
    assert_eq!(
        binding(&out, &interner, constructor.scope, "client"),
        Some(BindingKind::Param)
    );
    assert_eq!(
        binding(&out, &interner, out.module.scope, "Service"),
        Some(BindingKind::Class)
    );
}

// Errors and recovery

#[test]
fn test_recovers_at_next_statement() {
    let (parsed, _) = parse_str("let = ;\nfoo(1);\n");
    assert_eq!(parsed.output.errors.len(), 1);
    assert_eq!(parsed.output.errors[0].code, ErrorCode::E1005);
    let kinds = body(&parsed.output);
    assert_eq!(kinds.len(), 1);
    assert!(matches!(kinds[0], StmtKind::Expr(_)));
}

#[test]
fn test_recovers_inside_blocks() {
    let (parsed, _) = parse_str("function f() {\n  let x = ;\n  g();\n}\nh();\n");
    assert_eq!(parsed.output.errors.len(), 1);
    let kinds = body(&parsed.output);
    assert_eq!(kinds.len(), 2);
    let function = function_of(&parsed.output, kinds[0]);
    let FunctionBody::Block(stmts) = function.body else {
        panic!("expected a block body");
    };
    assert_eq!(stmt_kinds(&parsed.output, stmts).len(), 1);
}

#[test]
fn test_unclosed_block() {
    let (parsed, _) = parse_str("function f() {\n  g();\n");
    let error = parsed.output.errors.last().unwrap();
    assert_eq!(error.code, ErrorCode::E1003);
    assert_eq!(error.context.map(|(span, _)| span), Some(Span::new(13, 14)));
}

#[test]
fn test_lex_errors_become_diagnostics() {
    let (parsed, _) = parse_str("let s = 'unterminated\n");
    assert!(parsed.has_errors());
    assert!(parsed
        .diagnostics
        .iter()
        .any(|d| d.code.as_str().starts_with("E0")));
}

#[test]
fn test_parse_error_diagnostic() {
    let (parsed, _) = parse_str("f(a, b");
    let diagnostic = parsed.diagnostics.first().unwrap();
    assert_eq!(diagnostic.code, ErrorCode::E1003);
    assert_eq!(diagnostic.labels.len(), 2);
}
