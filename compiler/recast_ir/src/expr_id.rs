//! Arena indices and list ranges for the flat AST.
//!
//! Children are referenced by `u32` indices instead of boxes. Lists of
//! children (call arguments, block bodies, parameters) are stored
//! contiguously in side vectors of the arena and referenced by a
//! `(start, len)` range.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Invalid ID (sentinel for absent optional children).
            pub const INVALID: $name = $name(u32::MAX);

            /// Create a new ID.
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the index into the owning vector.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Check if this is a valid ID.
            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }

            /// `Some(self)` if valid.
            #[inline]
            pub const fn to_option(self) -> Option<Self> {
                if self.is_valid() {
                    Some(self)
                } else {
                    None
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", stringify!($name), self.0)
                } else {
                    write!(f, "{}::INVALID", stringify!($name))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            /// Empty range.
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            /// Create a new range.
            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            /// Check if the range is empty.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            /// Number of elements.
            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// As a `usize` range into the backing vector.
            #[inline]
            pub const fn as_range(&self) -> std::ops::Range<usize> {
                self.start as usize..(self.start as usize + self.len as usize)
            }
        }
    };
}

define_id!(
    /// Index into the expression arena.
    ExprId
);
define_id!(
    /// Index into the statement arena.
    StmtId
);
define_id!(
    /// Index into the function table (declarations, expressions, arrows).
    FunctionId
);
define_id!(
    /// Index into the [`ScopeTree`](crate::ScopeTree).
    ScopeId
);

define_range!(
    /// Range of expressions (arguments, array elements).
    ExprRange
);
define_range!(
    /// Range of statements (block and module bodies).
    StmtRange
);
define_range!(
    /// Range of function parameters.
    ParamRange
);
define_range!(
    /// Range of variable declarators in one declaration.
    DeclaratorRange
);
define_range!(
    /// Range of object literal properties.
    PropertyRange
);
define_range!(
    /// Range of names (destructuring targets, import bindings).
    NameRange
);
