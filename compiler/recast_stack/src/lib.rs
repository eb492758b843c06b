//! Stack growth guard for deeply nested source.
//!
//! The parser, the constant folder and the tree walker all recurse on the
//! shape of the input. A generated file with thousands of nested
//! parentheses or chained calls must not abort the process, so every
//! recursive entry point goes through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown with `stacker` once less than
//! [`RED_ZONE`] bytes remain. On `wasm32` the closure runs directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if the current segment is nearly full.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
