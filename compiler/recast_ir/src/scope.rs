//! Lexical scope tree.
//!
//! Built by the parser while it descends. Each scope knows its parent and
//! the names declared directly in it. `var` and function declarations are
//! hoisted by the parser to the nearest function-like scope; everything
//! else binds where it is written.

use rustc_hash::FxHashMap;

use crate::{Name, ScopeId, Span};

/// What introduced a scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScopeKind {
    Module,
    Function,
    Block,
    /// `for (...)` header.
    For,
}

impl ScopeKind {
    /// Scopes that `var` and function declarations hoist to.
    #[inline]
    pub fn is_hoist_target(self) -> bool {
        matches!(self, ScopeKind::Module | ScopeKind::Function)
    }
}

/// What kind of declaration produced a binding.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BindingKind {
    Let,
    Const,
    Var,
    Function,
    Param,
    Import,
    /// `class` and `enum` declarations.
    Class,
    /// `catch (e)` parameter.
    CatchParam,
}

/// A declared name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Binding {
    pub name: Name,
    pub kind: BindingKind,
    /// Span of the declaring identifier.
    pub span: Span,
}

/// One lexical scope.
#[derive(Clone, Debug)]
pub struct Scope {
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    pub span: Span,
    bindings: FxHashMap<Name, Binding>,
}

impl Scope {
    /// Look up a name declared directly in this scope.
    #[inline]
    pub fn get(&self, name: Name) -> Option<&Binding> {
        self.bindings.get(&name)
    }

    /// Number of names declared directly in this scope.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Bindings declared directly in this scope, in no particular order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }
}

/// All scopes of one module. Index 0 is the module scope.
#[derive(Clone, Debug, Default)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

impl ScopeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new scope under `parent`.
    pub fn push(&mut self, kind: ScopeKind, parent: Option<ScopeId>, span: Span) -> ScopeId {
        let index = u32::try_from(self.scopes.len())
            .unwrap_or_else(|_| panic!("scope tree exceeded u32::MAX scopes"));
        self.scopes.push(Scope {
            kind,
            parent,
            span,
            bindings: FxHashMap::default(),
        });
        ScopeId::new(index)
    }

    /// Record the final extent of a scope once its closing token is seen.
    pub fn set_span(&mut self, scope: ScopeId, span: Span) {
        self.scopes[scope.index()].span = span;
    }

    /// Declare `name` in `scope`. The first declaration of a name wins.
    pub fn declare(&mut self, scope: ScopeId, binding: Binding) {
        self.scopes[scope.index()]
            .bindings
            .entry(binding.name)
            .or_insert(binding);
    }

    #[inline]
    pub fn get(&self, scope: ScopeId) -> &Scope {
        &self.scopes[scope.index()]
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// The nearest scope at or above `scope` that `var` hoists to.
    pub fn hoist_target(&self, scope: ScopeId) -> ScopeId {
        self.ancestors(scope)
            .find(|&id| self.get(id).kind.is_hoist_target())
            .unwrap_or(scope)
    }

    /// `scope` followed by each enclosing scope, innermost first.
    pub fn ancestors(&self, scope: ScopeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: scope.to_option().filter(|s| s.index() < self.scopes.len()),
        }
    }

    /// Resolve `name` from `scope` outward.
    ///
    /// Returns the scope that declares it together with the binding.
    pub fn resolve(&self, scope: ScopeId, name: Name) -> Option<(ScopeId, &Binding)> {
        self.ancestors(scope)
            .find_map(|id| self.get(id).get(name).map(|binding| (id, binding)))
    }
}

/// Iterator over a scope chain, innermost first.
pub struct Ancestors<'a> {
    tree: &'a ScopeTree,
    next: Option<ScopeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ScopeId;

    fn next(&mut self) -> Option<ScopeId> {
        let current = self.next?;
        self.next = self.tree.get(current).parent;
        Some(current)
    }
}

#[cfg(test)]
mod tests;
