//! Two-track control types for railway-oriented programming.
//!
//! This module provides the synchronous wrapper types that carry a value
//! down the success track of a computation chain:
//!
//! - [`Maybe`]: A value that is present or absent, with no error payload
//! - [`Outcome`]: A computation that succeeded with a value or failed
//!   with an error payload
//! - [`CaughtPanic`]: The failure payload produced when a panic is
//!   captured into an [`Outcome`]
//!
//! Each wrapper is immutable after construction: every transformation
//! returns a fresh instance, and a `Nothing`/`Failure` short-circuits the
//! rest of the chain without invoking its callbacks.
//!
//! # Examples
//!
//! ## Absence without a reason
//!
//! ```rust
//! use railway::control::Maybe;
//!
//! let found: Maybe<i32> = Maybe::Just(21);
//! let doubled = found.map(|n| n * 2);
//! assert_eq!(doubled, Maybe::Just(42));
//!
//! let missing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(missing.map(|n| n * 2).unwrap_or(0), 0);
//! ```
//!
//! ## Failure with a payload
//!
//! ```rust
//! use railway::control::Outcome;
//!
//! let success: Outcome<i32, String> = Outcome::Success(21);
//! let chained = success
//!     .map(|n| n * 2)
//!     .flat_map(|n| Outcome::Success(n + 1));
//! assert_eq!(chained, Outcome::Success(43));
//!
//! let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
//! // The closures are skipped entirely
//! let recovered = failure.map(|n| n * 2).recover(|error| error.len() as i32);
//! assert_eq!(recovered, Outcome::Success(4));
//! ```

pub mod maybe;
pub mod outcome;

pub use maybe::Maybe;
pub use outcome::{CaughtPanic, Outcome};
