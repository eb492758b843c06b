use pretty_assertions::assert_eq;

use super::*;
use crate::StringInterner;

fn binding(name: Name, kind: BindingKind) -> Binding {
    Binding {
        name,
        kind,
        span: Span::DUMMY,
    }
}

#[test]
fn test_ancestors_innermost_first() {
    let mut tree = ScopeTree::new();
    let module = tree.push(ScopeKind::Module, None, Span::new(0, 100));
    let function = tree.push(ScopeKind::Function, Some(module), Span::new(10, 90));
    let block = tree.push(ScopeKind::Block, Some(function), Span::new(20, 80));

    let chain: Vec<_> = tree.ancestors(block).collect();
    assert_eq!(chain, vec![block, function, module]);
}

#[test]
fn test_resolve_finds_nearest_declaration() {
    let mut interner = StringInterner::new();
    let scale = interner.intern("scale");
    let other = interner.intern("other");

    let mut tree = ScopeTree::new();
    let module = tree.push(ScopeKind::Module, None, Span::DUMMY);
    let block = tree.push(ScopeKind::Block, Some(module), Span::DUMMY);
    tree.declare(module, binding(scale, BindingKind::Import));
    tree.declare(block, binding(scale, BindingKind::Const));

    let Some((found, found_binding)) = tree.resolve(block, scale) else {
        panic!("scale should resolve");
    };
    assert_eq!(found, block);
    assert_eq!(found_binding.kind, BindingKind::Const);
    assert_eq!(tree.resolve(module, scale).map(|(id, _)| id), Some(module));
    assert!(tree.resolve(block, other).is_none());
}

#[test]
fn test_first_declaration_wins() {
    let mut interner = StringInterner::new();
    let x = interner.intern("x");
    let mut tree = ScopeTree::new();
    let module = tree.push(ScopeKind::Module, None, Span::DUMMY);
    tree.declare(module, binding(x, BindingKind::Var));
    tree.declare(module, binding(x, BindingKind::Function));

    assert_eq!(tree.get(module).binding_count(), 1);
    assert_eq!(tree.get(module).get(x).map(|b| b.kind), Some(BindingKind::Var));
}

#[test]
fn test_hoist_target_skips_blocks() {
    let mut tree = ScopeTree::new();
    let module = tree.push(ScopeKind::Module, None, Span::DUMMY);
    let function = tree.push(ScopeKind::Function, Some(module), Span::DUMMY);
    let for_scope = tree.push(ScopeKind::For, Some(function), Span::DUMMY);
    let block = tree.push(ScopeKind::Block, Some(for_scope), Span::DUMMY);

    assert_eq!(tree.hoist_target(block), function);
    assert_eq!(tree.hoist_target(module), module);
}

#[test]
fn test_invalid_scope_has_no_ancestors() {
    let tree = ScopeTree::new();
    assert_eq!(tree.ancestors(ScopeId::INVALID).count(), 0);
    assert_eq!(tree.ancestors(ScopeId::new(3)).count(), 0);
}
