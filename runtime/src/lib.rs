//! Invocation bridge for JIT-compiled scalar functions.
//!
//! An external code generator produces native code for scalar functions of
//! one or two `f64` arguments and hands this crate a raw code address. The
//! bridge binds the address to a typed callable ([`UnaryFn`], [`BinaryFn`])
//! and drives it: a single direct call, or a sweep over the cell midpoints
//! of a rectangular 2D grid ([`evaluate`]).
//!
//! Built-in math kernels come from the `jitcall-kernels` catalogue and are
//! called through the same unary path as generated code.

pub mod error;
pub mod func;
pub mod grid;

#[cfg(test)]
pub mod test;

pub use error::*;
pub use func::{BinaryFn, UnaryFn};
pub use grid::{Grid2D, evaluate, evaluate_parallel};
