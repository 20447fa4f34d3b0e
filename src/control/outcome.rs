//! Outcome type - a computation that succeeded or failed.
//!
//! This module provides the `Outcome<A, E>` type, which represents a
//! computation that either produced a `Success(value)` or a
//! `Failure(error)`. The error channel is an arbitrary payload chosen by
//! the caller; nothing constrains it to be a structured error type.
//!
//! A `Failure` short-circuits every remaining success-track
//! transformation in a chain, so a pipeline reads linearly even though
//! any step may fail. Recovery is explicit: [`Outcome::recover`] moves a
//! failure back onto the success track with a computed fallback.
//!
//! Panics can be captured into the failure channel at two boundaries:
//! [`Outcome::catch`] for synchronous closures and
//! [`Outcome::catch_async`] for futures. Both materialize the panic as a
//! [`CaughtPanic`] payload instead of unwinding.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! let result = parse("21")
//!     .map(|n| n * 2)
//!     .flat_map(|n| if n > 0 { Outcome::Success(n) } else { Outcome::Failure("not positive".to_string()) });
//! assert_eq!(result, Outcome::Success(42));
//!
//! // A failure rides the failure track to the end of the chain
//! let recovered = parse("oops")
//!     .map(|n| n * 2)
//!     .recover(|error| error.len() as i32);
//! assert!(recovered.is_success());
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use static_assertions::assert_impl_all;

#[cfg(feature = "async")]
use futures::FutureExt;
#[cfg(feature = "async")]
use std::future::Future;

use super::maybe::Maybe;

// =============================================================================
// CaughtPanic
// =============================================================================

/// The failure payload produced when a panic is captured.
///
/// [`Outcome::catch`], [`Outcome::catch_async`] and the `effect` types
/// convert an unwinding panic into this value instead of letting it
/// propagate. The message is extracted from the panic payload when it is
/// a string, which covers `panic!("...")` and `assert!` failures.
///
/// # Examples
///
/// ```rust
/// use railway::control::{CaughtPanic, Outcome};
///
/// let caught = Outcome::<i32, _>::catch(|| panic!("boom"));
/// assert_eq!(caught.unwrap_failure(), CaughtPanic { message: "boom".to_string() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtPanic {
    /// The message extracted from the panic payload.
    pub message: String,
}

impl CaughtPanic {
    /// Extracts a `CaughtPanic` from the payload returned by
    /// `catch_unwind`.
    ///
    /// String payloads (the common case for `panic!` with a message) are
    /// preserved verbatim; any other payload type yields a fixed marker
    /// message.
    #[must_use]
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "caught panic: {}", self.message)
    }
}

impl std::error::Error for CaughtPanic {}

// =============================================================================
// Outcome
// =============================================================================

/// A computation that succeeded with a value or failed with an error.
///
/// `Outcome<A, E>` represents a finished computation that is either
/// `Success(value)` or `Failure(error)`. Transformations act on the
/// success channel and pass failures through untouched, so a chain of
/// operations short-circuits at the first failure.
///
/// # Type Parameters
///
/// * `A` - The type of the success value
/// * `E` - The type of the failure payload; any value is acceptable
///
/// # Examples
///
/// ```rust
/// use railway::control::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// assert_eq!(success.map(|n| n + 1), Outcome::Success(43));
///
/// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
/// assert_eq!(failure.map(|n| n + 1), Outcome::Failure("boom".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<A, E> {
    /// The computation produced a value.
    Success(A),
    /// The computation failed with an error payload.
    Failure(E),
}

impl<A, E> Outcome<A, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert!(success.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert!(failure.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the `Outcome` into an [`Option`] of the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.success(), Some(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.success(), None);
    /// ```
    #[inline]
    pub fn success(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts the `Outcome` into an [`Option`] of the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.failure(), Some("boom".to_string()));
    /// ```
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts the `Outcome` into a [`Maybe`] of the success value,
    /// discarding the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Maybe, Outcome};
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.maybe_success(), Maybe::Just(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.maybe_success(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn maybe_success(self) -> Maybe<A> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(_) => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.success_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn success_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.failure_ref(), Some(&"boom".to_string()));
    /// ```
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value, consuming the outcome.
    ///
    /// The panic message preserves the failure payload so the mismatch
    /// can be diagnosed. Callers are expected to check
    /// [`is_success`](Self::is_success) first.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.unwrap_success(), 42);
    /// ```
    #[inline]
    pub fn unwrap_success(self) -> A
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::unwrap_success()` on a `Failure` value: {error:?}")
            }
        }
    }

    /// Returns the failure payload, consuming the outcome.
    ///
    /// The panic message preserves the success value so the mismatch can
    /// be diagnosed.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.unwrap_failure(), "boom".to_string());
    /// ```
    #[inline]
    pub fn unwrap_failure(self) -> E
    where
        A: fmt::Debug,
    {
        match self {
            Self::Success(value) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success` value: {value:?}")
            }
            Self::Failure(error) => error,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// If this is `Success(value)`, returns `Success(function(value))`.
    /// If this is `Failure(error)`, the error payload passes through
    /// unchanged and the function is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(success.map(|n| n + 1), Outcome::Success(6));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recovers from a failure with a computed fallback value.
    ///
    /// If this is `Failure(error)`, returns `Success(function(error))` -
    /// the chain moves back onto the success track. If this is
    /// `Success`, the value passes through unchanged and the function is
    /// not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// let recovered = failure.recover(|error| error.len() as i32);
    /// assert_eq!(recovered, Outcome::Success(4));
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.recover(|error| error.len() as i32), Outcome::Success(42));
    /// ```
    #[inline]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(function(error)),
        }
    }

    /// Chains a function that itself returns an `Outcome`, flattening
    /// the result.
    ///
    /// If this is `Success(value)`, returns `function(value)` directly,
    /// propagating whichever variant it produces. If this is `Failure`,
    /// short-circuits with the same error payload without invoking the
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// fn checked_half(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::Success(n / 2)
    ///     } else {
    ///         Outcome::Failure(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Success(42).flat_map(checked_half), Outcome::Success(21));
    /// assert_eq!(Outcome::Success(21).flat_map(checked_half), Outcome::Failure("21 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> Outcome<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let result: Outcome<i32, String> =
    ///     Outcome::Success(10).and_then(|n| Outcome::Success(n + 5));
    /// assert_eq!(result, Outcome::Success(15));
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> Outcome<B, E>,
    {
        self.flat_map(function)
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Invokes a side-effect hook on the success value.
    ///
    /// The hook receives a shared reference; the original `Outcome` is
    /// returned unchanged for further chaining. A panic inside the hook
    /// is not caught here - only the asynchronous
    /// [`TaskOutcome`](crate::effect::TaskOutcome) hooks swallow panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let result: Outcome<i32, String> =
    ///     Outcome::Success(42).inspect(|value| seen.push(*value));
    /// assert_eq!(result, Outcome::Success(42));
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Success(ref value) = self {
            function(value);
        }
        self
    }

    /// Invokes a side-effect hook on the failure payload.
    ///
    /// The hook receives a shared reference; the original `Outcome` is
    /// returned unchanged for further chaining. A panic inside the hook
    /// is not caught here - only the asynchronous
    /// [`TaskOutcome`](crate::effect::TaskOutcome) hooks swallow panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let result: Outcome<i32, String> = Outcome::Failure("boom".to_string())
    ///     .inspect_failure(|error| seen.push(error.clone()));
    /// assert!(result.is_failure());
    /// assert_eq!(seen, vec!["boom".to_string()]);
    /// ```
    #[inline]
    pub fn inspect_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(ref error) = self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Returns the success value if present, otherwise the fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.unwrap_or(0), 42);
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Returns the success value if present, otherwise invokes the
    /// function lazily for a fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.unwrap_or_else(|| 6 * 7), 42);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => function(),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Outcome` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// let rendered = success.fold(|error| error, |n| n.to_string());
    /// assert_eq!(rendered, "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}

// =============================================================================
// Panic-Catching Constructors
// =============================================================================

impl<A> Outcome<A, CaughtPanic> {
    /// Executes a closure, capturing a panic into the failure channel.
    ///
    /// Returns `Success` with the closure's value, or `Failure` with a
    /// [`CaughtPanic`] if the closure panics. This is the synchronous
    /// boundary where "a thrown error" becomes an ordinary failure
    /// payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let fine = Outcome::catch(|| 6 * 7);
    /// assert_eq!(fine.unwrap_success(), 42);
    ///
    /// let caught = Outcome::<i32, _>::catch(|| panic!("boom"));
    /// assert!(caught.is_failure());
    /// assert_eq!(caught.unwrap_failure().message, "boom");
    /// ```
    pub fn catch<F>(function: F) -> Self
    where
        F: FnOnce() -> A,
    {
        match catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(CaughtPanic::from_payload(payload)),
        }
    }

    /// Awaits a future, capturing a panic into the failure channel.
    ///
    /// Resolves to `Success` with the future's output, or `Failure` with
    /// a [`CaughtPanic`] if the future panics; the returned future
    /// itself never unwinds. This is the only asynchronous entry point
    /// on this type and the seam
    /// [`TaskOutcome`](crate::effect::TaskOutcome) builds on.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::control::Outcome;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let fine = Outcome::catch_async(async { 6 * 7 }).await;
    ///     assert_eq!(fine.unwrap_success(), 42);
    ///
    ///     let caught = Outcome::<i32, _>::catch_async(async { panic!("boom") }).await;
    ///     assert!(caught.is_failure());
    /// }
    /// ```
    #[cfg(feature = "async")]
    pub async fn catch_async<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A>,
    {
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(CaughtPanic::from_payload(payload)),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A, E> From<Result<A, E>> for Outcome<A, E> {
    /// Converts a [`Result`] to an `Outcome`.
    ///
    /// `Ok(value)` becomes `Success(value)`, and `Err(error)` becomes
    /// `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Ok(42).into();
    /// assert_eq!(outcome, Outcome::Success(42));
    /// ```
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<A, E> From<Outcome<A, E>> for Result<A, E> {
    /// Converts an `Outcome` to a [`Result`].
    ///
    /// `Success(value)` becomes `Ok(value)`, and `Failure(error)`
    /// becomes `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let result: Result<i32, String> = Outcome::Success(42).into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(outcome: Outcome<A, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Point-Free Forms
// =============================================================================

/// Wraps a value as `Success`.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Outcome, outcome};
///
/// let result: Outcome<i32, String> = outcome::success(42);
/// assert_eq!(result, Outcome::Success(42));
/// ```
#[inline]
pub fn success<A, E>(value: A) -> Outcome<A, E> {
    Outcome::Success(value)
}

/// Wraps an error payload as `Failure`.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Outcome, outcome};
///
/// let result: Outcome<i32, String> = outcome::failure("boom".to_string());
/// assert!(result.is_failure());
/// ```
#[inline]
pub fn failure<A, E>(error: E) -> Outcome<A, E> {
    Outcome::Failure(error)
}

/// Point-free twin of [`Outcome::is_success`].
#[inline]
pub fn is_success<A, E>(outcome: Outcome<A, E>) -> bool {
    outcome.is_success()
}

/// Point-free twin of [`Outcome::is_failure`].
#[inline]
pub fn is_failure<A, E>(outcome: Outcome<A, E>) -> bool {
    outcome.is_failure()
}

/// Point-free twin of [`Outcome::unwrap_success`].
///
/// # Panics
///
/// Panics if the outcome is a `Failure` value.
#[inline]
pub fn unwrap_success<A, E>(outcome: Outcome<A, E>) -> A
where
    E: fmt::Debug,
{
    outcome.unwrap_success()
}

/// Point-free twin of [`Outcome::unwrap_failure`].
///
/// # Panics
///
/// Panics if the outcome is a `Success` value.
#[inline]
pub fn unwrap_failure<A, E>(outcome: Outcome<A, E>) -> E
where
    A: fmt::Debug,
{
    outcome.unwrap_failure()
}

/// Point-free twin of [`Outcome::map`]: binds the function now, takes
/// the outcome later.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Outcome, outcome};
/// use railway::pipe;
///
/// let result = pipe!(
///     Outcome::<i32, String>::Success(21),
///     outcome::map(|n: i32| n * 2),
/// );
/// assert_eq!(result, Outcome::Success(42));
/// ```
#[inline]
pub fn map<A, B, E, F>(function: F) -> impl FnOnce(Outcome<A, E>) -> Outcome<B, E>
where
    F: FnOnce(A) -> B,
{
    move |outcome| outcome.map(function)
}

/// Point-free twin of [`Outcome::recover`].
///
/// # Examples
///
/// ```rust
/// use railway::control::{Outcome, outcome};
/// use railway::pipe;
///
/// let result = pipe!(
///     Outcome::<i32, String>::Failure("boom".to_string()),
///     outcome::recover(|error: String| error.len() as i32),
/// );
/// assert_eq!(result, Outcome::Success(4));
/// ```
#[inline]
pub fn recover<A, E, F>(function: F) -> impl FnOnce(Outcome<A, E>) -> Outcome<A, E>
where
    F: FnOnce(E) -> A,
{
    move |outcome| outcome.recover(function)
}

/// Point-free twin of [`Outcome::flat_map`].
#[inline]
pub fn flat_map<A, B, E, F>(function: F) -> impl FnOnce(Outcome<A, E>) -> Outcome<B, E>
where
    F: FnOnce(A) -> Outcome<B, E>,
{
    move |outcome| outcome.flat_map(function)
}

/// Point-free twin of [`Outcome::inspect`].
#[inline]
pub fn inspect<A, E, F>(function: F) -> impl FnOnce(Outcome<A, E>) -> Outcome<A, E>
where
    F: FnOnce(&A),
{
    move |outcome| outcome.inspect(function)
}

/// Point-free twin of [`Outcome::inspect_failure`].
#[inline]
pub fn inspect_failure<A, E, F>(function: F) -> impl FnOnce(Outcome<A, E>) -> Outcome<A, E>
where
    F: FnOnce(&E),
{
    move |outcome| outcome.inspect_failure(function)
}

/// Point-free twin of [`Outcome::unwrap_or`].
///
/// # Examples
///
/// ```rust
/// use railway::control::{Outcome, outcome};
/// use railway::pipe;
///
/// let result = pipe!(
///     Outcome::<i32, String>::Failure("boom".to_string()),
///     outcome::map(|n: i32| n * 2),
///     outcome::unwrap_or(0),
/// );
/// assert_eq!(result, 0);
/// ```
#[inline]
pub fn unwrap_or<A, E>(fallback: A) -> impl FnOnce(Outcome<A, E>) -> A {
    move |outcome| outcome.unwrap_or(fallback)
}

/// Point-free twin of [`Outcome::unwrap_or_else`].
#[inline]
pub fn unwrap_or_else<A, E, F>(function: F) -> impl FnOnce(Outcome<A, E>) -> A
where
    F: FnOnce() -> A,
{
    move |outcome| outcome.unwrap_or_else(function)
}

/// Point-free twin of [`Outcome::fold`].
#[inline]
pub fn fold<A, E, T, F, G>(on_failure: F, on_success: G) -> impl FnOnce(Outcome<A, E>) -> T
where
    F: FnOnce(E) -> T,
    G: FnOnce(A) -> T,
{
    move |outcome| outcome.fold(on_failure, on_success)
}

// Auto-trait surface: an Outcome is as cheap to share as its payloads.
assert_impl_all!(Outcome<i32, &'static str>: Clone, Copy, Send, Sync);
assert_impl_all!(Outcome<String, CaughtPanic>: Clone, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_success_construction() {
        let value: Outcome<i32, String> = Outcome::Success(42);
        assert!(value.is_success());
        assert!(!value.is_failure());
    }

    #[rstest]
    fn test_failure_construction() {
        let value: Outcome<i32, String> = Outcome::Failure("boom".to_string());
        assert!(value.is_failure());
        assert!(!value.is_success());
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let outcome: Outcome<i32, String> = ok.into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("boom".to_string());
        let outcome: Outcome<i32, String> = err.into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Err("boom".to_string()));
    }

    #[rstest]
    fn test_caught_panic_display() {
        let caught = CaughtPanic {
            message: "boom".to_string(),
        };
        assert_eq!(format!("{caught}"), "caught panic: boom");
    }

    #[rstest]
    fn test_caught_panic_from_static_str_payload() {
        let caught = Outcome::<i32, _>::catch(|| panic!("exact message"));
        assert_eq!(caught.unwrap_failure().message, "exact message");
    }

    #[rstest]
    fn test_debug_rendering() {
        let success: Outcome<i32, String> = Outcome::Success(42);
        assert_eq!(format!("{success:?}"), "Success(42)");

        let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
        assert_eq!(format!("{failure:?}"), "Failure(\"boom\")");
    }
}
