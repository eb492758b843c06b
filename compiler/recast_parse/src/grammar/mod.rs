//! Grammar productions.
//!
//! Each module extends `Parser` with methods for one area of the grammar:
//!
//! - [`stmt`]: statements and declarations, including imports and classes
//! - [`expr`]: expressions, by precedence climbing
//! - [`ty`]: type annotations, which are recognized and skipped
//!
//! Productions return `Result<_, ParseError>`; statement lists catch the
//! error, record it and resynchronize (see `recovery`).

mod expr;
mod stmt;
mod ty;
