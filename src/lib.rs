//! # railway
//!
//! A railway-oriented programming library for Rust providing composable
//! success and failure tracks.
//!
//! ## Overview
//!
//! Railway-oriented programming expresses a computation as a chain of
//! steps that automatically skip the remaining steps once a value is
//! missing or an operation has failed, without explicit branching at
//! each step. This library provides the wrapper types that carry a
//! value down the "success track" and the combinators that switch it
//! onto the "failure track":
//!
//! - **[`Maybe`](control::Maybe)**: presence or absence of a value,
//!   with no error payload
//! - **[`Outcome`](control::Outcome)**: success with a value or failure
//!   with an error payload
//! - **[`Task`](effect::Task)**: a deferred asynchronous computation
//! - **[`TaskOutcome`](effect::TaskOutcome)**: a deferred asynchronous
//!   computation that always resolves to an [`Outcome`](control::Outcome)
//!   and never escapes a panic
//! - **Composition helpers**: the [`pipe!`] macro, [`Pipe`](compose::Pipe)
//!   chains, and point-free twins of every transformation
//!
//! ## Feature Flags
//!
//! - `control`: The `Maybe` and `Outcome` wrapper types
//! - `compose`: Pipeline helpers (`pipe!`, `Pipe`, `compute`, combinators)
//! - `async`: The `Task` and `TaskOutcome` effect types (pulls in tokio)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::control::{Outcome, outcome};
//! use railway::pipe;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! let total = pipe!(
//!     parse("21"),
//!     outcome::map(|n: i32| n * 2),
//!     outcome::unwrap_or(0),
//! );
//! assert_eq!(total, 42);
//!
//! // A failure skips every remaining step
//! let fallback = pipe!(
//!     parse("not a number"),
//!     outcome::map(|n: i32| n * 2),
//!     outcome::unwrap_or(0),
//! );
//! assert_eq!(fallback, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "async")]
pub mod effect;
