//! Candidate lookup by callee.
//!
//! [`PatternIndex`] groups patterns by [`CalleeKey`] once per
//! configuration. Per file it is bound to the file's interner as a
//! [`BoundIndex`] keyed by interned names, so looking up a call site
//! hashes two integers instead of building a string.

use std::fmt;

use recast_ir::StringInterner;
use rustc_hash::FxHashMap;

use crate::callee::CalleeResolution;
use crate::pattern::{CalleeKey, ParsedPattern};

/// Position of a pattern in its [`crate::PatternSet`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct PatternId(u32);

impl PatternId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        PatternId(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Patterns grouped by callee key, each group in declaration order.
#[derive(Clone, Default, Debug)]
pub struct PatternIndex {
    by_key: FxHashMap<CalleeKey, Vec<PatternId>>,
}

impl PatternIndex {
    pub fn build(patterns: &[ParsedPattern]) -> Self {
        let mut by_key: FxHashMap<CalleeKey, Vec<PatternId>> = FxHashMap::default();
        for (index, pattern) in (0u32..).zip(patterns) {
            by_key
                .entry(pattern.callee.clone())
                .or_default()
                .push(PatternId::new(index));
        }
        PatternIndex { by_key }
    }

    /// Candidates for `key`, in declaration order. Empty for unknown keys.
    pub fn lookup(&self, key: &CalleeKey) -> &[PatternId] {
        self.by_key.get(key).map_or(&[][..], Vec::as_slice)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Re-key the index by the names of one file.
    ///
    /// Keys naming something the file never mentions are dropped: no call
    /// site in it can resolve to them.
    pub fn bind(&self, interner: &StringInterner) -> BoundIndex<'_> {
        let by_callee = self
            .by_key
            .iter()
            .filter_map(|(key, ids)| {
                let resolution = match key {
                    CalleeKey::Constructor { type_name } => CalleeResolution::Constructor {
                        type_name: interner.get(type_name)?,
                    },
                    CalleeKey::StaticMethod { type_name, method } => {
                        CalleeResolution::StaticMethod {
                            type_name: interner.get(type_name)?,
                            method: interner.get(method)?,
                        }
                    }
                    CalleeKey::Function { name } => CalleeResolution::Function {
                        name: interner.get(name)?,
                    },
                };
                Some((resolution, ids.as_slice()))
            })
            .collect();
        BoundIndex { by_callee }
    }
}

/// A [`PatternIndex`] keyed by one file's interned names.
#[derive(Clone, Debug)]
pub struct BoundIndex<'i> {
    by_callee: FxHashMap<CalleeResolution, &'i [PatternId]>,
}

impl BoundIndex<'_> {
    /// Candidates for a resolved call site. Empty for
    /// [`CalleeResolution::Unknown`].
    pub fn lookup(&self, callee: CalleeResolution) -> &[PatternId] {
        self.by_callee.get(&callee).copied().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.by_callee.is_empty()
    }
}

#[cfg(test)]
mod tests;
