//! Pipeline composition utilities.
//!
//! This module provides the control-flow glue the wrapper types compose
//! with. The core types do not depend on any of it; these helpers exist
//! so callers can write chains as left-to-right data flow:
//!
//! - [`pipe!`](crate::pipe): Apply functions left to right in one
//!   expression
//! - [`Pipe`]: The chain-object form of the same idea (`of` / `chain` /
//!   `value`)
//! - [`compute`]: Invoke a niladic closure, scoping temporary bindings
//! - [`identity`], [`constant`], [`flip`]: Fundamental combinators
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use railway::control::{Maybe, maybe};
//! use railway::pipe;
//!
//! let result = pipe!(
//!     Maybe::Just(20),
//!     maybe::map(|n: i32| n * 2),
//!     maybe::map(|n: i32| n + 2),
//!     maybe::unwrap_or(0),
//! );
//! assert_eq!(result, 42);
//! ```
//!
//! ## Chain object
//!
//! ```
//! use railway::compose::Pipe;
//!
//! let result = Pipe::of(5).chain(|n| n * 2).chain(|n| n + 1).value();
//! assert_eq!(result, 11);
//! ```
//!
//! ## Scoped bindings
//!
//! ```
//! use railway::compose::compute;
//!
//! let result = compute(|| {
//!     let intermediate = 6 * 7;
//!     intermediate
//! });
//! assert_eq!(result, 42);
//! ```
//!
//! # Laws
//!
//! - **Pipe identity**: `pipe!(x, identity) == x`
//! - **Pipe composition**: `pipe!(x, f, g) == g(f(x))`
//! - **Double flip identity**: `flip(flip(f)) == f`

mod chain;
mod pipe_macro;
mod utils;

pub use chain::Pipe;
pub use utils::{compute, constant, flip, identity};

// Re-export the macro (it is already at crate root via #[macro_export])
pub use crate::pipe;
