//! TaskOutcome - a deferred asynchronous computation that always
//! resolves to an [`Outcome`].
//!
//! `TaskOutcome` merges the two failure models of this library: the
//! explicit failure payload of [`Outcome`](crate::control::Outcome) and
//! the unwinding panic of an asynchronous computation. Whatever happens
//! inside the chain - a failing step, a panicking callback, a panicking
//! wrapped future - the task resolves to an `Outcome` and never escapes
//! a panic to the caller.
//!
//! It is deliberately independent of [`Task`](crate::effect::Task): it
//! manages its own pending computation so the never-unwinds invariant is
//! enforced locally, end to end, rather than inherited from another
//! type.
//!
//! Construction normalizes every input shape into the one canonical
//! internal state (a pending computation resolving to an `Outcome`);
//! the shape-dependent branching lives only at the constructor boundary:
//!
//! - a plain value: [`TaskOutcome::pure`]
//! - an error payload: [`TaskOutcome::fail`]
//! - an already-computed [`Outcome`]: [`TaskOutcome::from_outcome`]
//! - a [`Result`]: [`TaskOutcome::from_result`]
//! - a future of a plain value: [`TaskOutcome::from_future`]
//! - a future of an [`Outcome`]: [`TaskOutcome::from_outcome_future`]
//!
//! # Panic capture
//!
//! Combinator callbacks run under `catch_unwind`, and user-supplied
//! continuation chains are awaited under `catch_unwind`; a captured
//! panic is converted into the failure channel through
//! `E: From<CaughtPanic>`. The observation hooks
//! ([`inspect`](TaskOutcome::inspect) /
//! [`inspect_failure`](TaskOutcome::inspect_failure)) go one step
//! further and swallow hook panics outright, so observing a chain can
//! never change what it resolves to. This asymmetry with the
//! synchronous [`Outcome`] hooks (which do not catch) is deliberate:
//! an asynchronous chain must never take down the caller with an
//! unobserved unwind, while synchronous hooks are invoked directly by
//! the caller who can handle them.
//!
//! # Examples
//!
//! ```rust,ignore
//! use railway::control::{CaughtPanic, Outcome};
//! use railway::effect::TaskOutcome;
//!
//! #[tokio::main]
//! async fn main() {
//!     let outcome: Outcome<i32, CaughtPanic> = TaskOutcome::pure(10)
//!         .fmap(|n| n * 2)
//!         .flat_map(|n| TaskOutcome::pure(n + 1))
//!         .run_async()
//!         .await;
//!     assert_eq!(outcome, Outcome::Success(21));
//!
//!     // A panicking step switches onto the failure track
//!     let caught: Outcome<i32, CaughtPanic> = TaskOutcome::pure(10)
//!         .fmap(|_| panic!("boom"))
//!         .run_async()
//!         .await;
//!     assert!(caught.is_failure());
//! }
//! ```

use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::pin::Pin;

use futures::FutureExt;
use static_assertions::assert_impl_all;

use crate::control::{CaughtPanic, Outcome};

/// A deferred asynchronous computation that always resolves to an
/// [`Outcome`] and never escapes a panic.
///
/// # Type Parameters
///
/// - `A`: The type of the success value.
/// - `E`: The type of the failure payload. Combinators that capture
///   panics require `E: From<CaughtPanic>` so the captured panic can be
///   absorbed into the failure channel; [`CaughtPanic`] itself satisfies
///   this trivially.
///
/// # Examples
///
/// ```rust,ignore
/// use railway::control::Outcome;
/// use railway::effect::TaskOutcome;
///
/// #[tokio::main]
/// async fn main() {
///     let outcome = TaskOutcome::<i32, CaughtPanic>::pure(20)
///         .fmap(|n| n * 2)
///         .flat_map(|n| TaskOutcome::pure(n + 2))
///         .run_async()
///         .await;
///     assert_eq!(outcome, Outcome::Success(42));
/// }
/// ```
pub struct TaskOutcome<A, E> {
    /// The wrapped computation resolving to an `Outcome<A, E>`.
    run_task_outcome: Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = Outcome<A, E>> + Send>> + Send>,
}

// =============================================================================
// Canonical Shape and Execution
// =============================================================================

impl<A: 'static, E: 'static> TaskOutcome<A, E> {
    /// The one internal constructor: every public entry point funnels
    /// through here, so after construction the state is always the
    /// canonical pending-Outcome shape.
    fn from_resolver<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<A, E>> + Send + 'static,
    {
        Self {
            run_task_outcome: Box::new(move || Box::pin(action())),
        }
    }

    /// Executes the computation and returns the resolved [`Outcome`].
    ///
    /// The returned future settles exactly once and never unwinds from
    /// the wrapped computation: failures of any kind arrive as
    /// `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::control::Outcome;
    /// use railway::effect::TaskOutcome;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let outcome: Outcome<i32, String> = TaskOutcome::pure(42).run_async().await;
    ///     assert_eq!(outcome, Outcome::Success(42));
    /// }
    /// ```
    pub async fn run_async(self) -> Outcome<A, E> {
        (self.run_task_outcome)().await
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: Send + 'static, E: 'static> TaskOutcome<A, E> {
    /// Wraps a plain value as an already-resolved `Success`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::<i32, String>::pure(42);
    /// // run_async().await resolves to Outcome::Success(42)
    /// ```
    pub fn pure(value: A) -> Self {
        Self::from_resolver(move || async move { Outcome::Success(value) })
    }
}

impl<A: 'static, E: Send + 'static> TaskOutcome<A, E> {
    /// Wraps an error payload as an already-resolved `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::<i32, String>::fail("boom".to_string());
    /// // run_async().await resolves to Outcome::Failure("boom")
    /// ```
    pub fn fail(error: E) -> Self {
        Self::from_resolver(move || async move { Outcome::Failure(error) })
    }
}

impl<A: Send + 'static, E: Send + 'static> TaskOutcome<A, E> {
    /// Wraps an already-computed [`Outcome`], resolving immediately to
    /// it.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::control::Outcome;
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::from_outcome(Outcome::<i32, String>::Success(42));
    /// ```
    pub fn from_outcome(outcome: Outcome<A, E>) -> Self {
        Self::from_resolver(move || async move { outcome })
    }

    /// Wraps a [`Result`], resolving immediately to the equivalent
    /// [`Outcome`].
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::from_result(Ok::<i32, String>(42));
    /// ```
    pub fn from_result(result: Result<A, E>) -> Self {
        Self::from_outcome(result.into())
    }
}

impl<A, E> TaskOutcome<A, E>
where
    A: Send + 'static,
    E: From<CaughtPanic> + Send + 'static,
{
    /// Wraps a future of a plain value.
    ///
    /// Fulfillment is wrapped as `Success`; a panicking future resolves
    /// to `Failure` with the captured panic instead of unwinding.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::control::CaughtPanic;
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::<i32, CaughtPanic>::from_future(async { 6 * 7 });
    /// ```
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self::from_resolver(move || async move {
            match AssertUnwindSafe(future).catch_unwind().await {
                Ok(value) => Outcome::Success(value),
                Err(payload) => Outcome::Failure(E::from(CaughtPanic::from_payload(payload))),
            }
        })
    }

    /// Wraps a future that itself resolves to an [`Outcome`].
    ///
    /// The resolved `Outcome` passes through as-is; a panicking future
    /// resolves to `Failure` with the captured panic instead of
    /// unwinding.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::control::{CaughtPanic, Outcome};
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::<i32, CaughtPanic>::from_outcome_future(async {
    ///     Outcome::Success(42)
    /// });
    /// ```
    pub fn from_outcome_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<A, E>> + Send + 'static,
    {
        Self::from_resolver(move || async move {
            match AssertUnwindSafe(future).catch_unwind().await {
                Ok(outcome) => outcome,
                Err(payload) => Outcome::Failure(E::from(CaughtPanic::from_payload(payload))),
            }
        })
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the success value once the computation resolves.
    ///
    /// On `Success`, applies the function; a panic inside the function
    /// resolves the chain to `Failure` with the captured panic rather
    /// than unwinding. On `Failure`, the error payload passes through
    /// unchanged and the function is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::<i32, CaughtPanic>::pure(21).fmap(|n| n * 2);
    /// // resolves to Outcome::Success(42)
    /// ```
    pub fn fmap<B, F>(self, function: F) -> TaskOutcome<B, E>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: 'static,
    {
        TaskOutcome::from_resolver(move || async move {
            match self.run_async().await {
                Outcome::Success(value) => {
                    match catch_unwind(AssertUnwindSafe(move || function(value))) {
                        Ok(mapped) => Outcome::Success(mapped),
                        Err(payload) => {
                            Outcome::Failure(E::from(CaughtPanic::from_payload(payload)))
                        }
                    }
                }
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Recovers from a failure with a computed fallback value.
    ///
    /// On `Failure`, applies the function and resolves to `Success`
    /// with its result; a panic inside the function resolves to a new
    /// `Failure` with the captured panic. On `Success`, the value
    /// passes through unchanged and the function is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::<i32, CaughtPanic>::from_future(async { panic!("boom") })
    ///     .recover(|caught| caught.message.len() as i32);
    /// // resolves to Outcome::Success(4)
    /// ```
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> A + Send + 'static,
    {
        Self::from_resolver(move || async move {
            match self.run_async().await {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(error) => {
                    match catch_unwind(AssertUnwindSafe(move || function(error))) {
                        Ok(recovered) => Outcome::Success(recovered),
                        Err(payload) => {
                            Outcome::Failure(E::from(CaughtPanic::from_payload(payload)))
                        }
                    }
                }
            }
        })
    }

    // =========================================================================
    // Monad Operations
    // =========================================================================

    /// Chains a function that produces the next `TaskOutcome`,
    /// flattening to its eventual [`Outcome`].
    ///
    /// On `Success`, invokes the function and resolves to whatever its
    /// chain resolves to. On `Failure`, short-circuits with the
    /// original error payload without invoking the function. A panic
    /// inside the function, or anywhere in the chain it returns,
    /// resolves to `Failure` rather than unwinding.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::<i32, CaughtPanic>::pure(10)
    ///     .flat_map(|n| TaskOutcome::pure(n * 2));
    /// // resolves to Outcome::Success(20)
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> TaskOutcome<B, E>
    where
        F: FnOnce(A) -> TaskOutcome<B, E> + Send + 'static,
        B: 'static,
    {
        TaskOutcome::from_resolver(move || async move {
            match self.run_async().await {
                Outcome::Success(value) => {
                    let next = match catch_unwind(AssertUnwindSafe(move || function(value))) {
                        Ok(next) => next,
                        Err(payload) => {
                            return Outcome::Failure(E::from(CaughtPanic::from_payload(payload)));
                        }
                    };
                    match AssertUnwindSafe(next.run_async()).catch_unwind().await {
                        Ok(outcome) => outcome,
                        Err(payload) => {
                            Outcome::Failure(E::from(CaughtPanic::from_payload(payload)))
                        }
                    }
                }
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    pub fn and_then<B, F>(self, function: F) -> TaskOutcome<B, E>
    where
        F: FnOnce(A) -> TaskOutcome<B, E> + Send + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Mirror of [`flat_map`](Self::flat_map) on the failure channel.
    ///
    /// On `Failure`, invokes the function and resolves to whatever its
    /// chain resolves to - the asynchronous recovery mechanism when the
    /// fallback itself needs to run a computation. On `Success`, the
    /// value passes through unchanged without invoking the function.
    /// Panics anywhere in the recovery chain resolve to `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::<i32, CaughtPanic>::from_future(async { panic!("boom") })
    ///     .recover_with(|_| TaskOutcome::pure(0));
    /// // resolves to Outcome::Success(0)
    /// ```
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> Self + Send + 'static,
    {
        Self::from_resolver(move || async move {
            match self.run_async().await {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(error) => {
                    let next = match catch_unwind(AssertUnwindSafe(move || function(error))) {
                        Ok(next) => next,
                        Err(payload) => {
                            return Outcome::Failure(E::from(CaughtPanic::from_payload(payload)));
                        }
                    };
                    match AssertUnwindSafe(next.run_async()).catch_unwind().await {
                        Ok(outcome) => outcome,
                        Err(payload) => {
                            Outcome::Failure(E::from(CaughtPanic::from_payload(payload)))
                        }
                    }
                }
            }
        })
    }
}

// =============================================================================
// Observation
// =============================================================================

impl<A: Send + 'static, E: Send + 'static> TaskOutcome<A, E> {
    /// Attaches a side-effect hook observing the success value.
    ///
    /// The hook receives a shared reference and the chain resolves to
    /// the same [`Outcome`] regardless of what the hook does - a panic
    /// inside the hook is swallowed, so observation can never corrupt
    /// or fail the chain. This is deliberately stricter than the
    /// synchronous [`Outcome::inspect`](crate::control::Outcome::inspect),
    /// which lets hook panics propagate.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::<i32, String>::pure(42)
    ///     .inspect(|value| println!("saw {value}"));
    /// // resolves to Outcome::Success(42) even if the hook panics
    /// ```
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&A) + Send + 'static,
    {
        Self::from_resolver(move || async move {
            let outcome = self.run_async().await;
            if let Outcome::Success(ref value) = outcome {
                // Hook panics are swallowed: observation never fails the chain.
                let _ = catch_unwind(AssertUnwindSafe(move || function(value)));
            }
            outcome
        })
    }

    /// Attaches a side-effect hook observing the failure payload.
    ///
    /// The hook receives a shared reference and the chain resolves to
    /// the same [`Outcome`] regardless of what the hook does - a panic
    /// inside the hook is swallowed.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::TaskOutcome;
    ///
    /// let task = TaskOutcome::<i32, String>::fail("boom".to_string())
    ///     .inspect_failure(|error| println!("failed: {error}"));
    /// // resolves to Outcome::Failure("boom")
    /// ```
    pub fn inspect_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        Self::from_resolver(move || async move {
            let outcome = self.run_async().await;
            if let Outcome::Failure(ref error) = outcome {
                // Hook panics are swallowed: observation never fails the chain.
                let _ = catch_unwind(AssertUnwindSafe(move || function(error)));
            }
            outcome
        })
    }
}

// =============================================================================
// Point-Free Forms
// =============================================================================

/// Point-free twin of [`TaskOutcome::fmap`]: binds the function now,
/// takes the task later.
///
/// # Examples
///
/// ```rust,ignore
/// use railway::effect::{TaskOutcome, task_outcome};
/// use railway::pipe;
///
/// let task = pipe!(
///     TaskOutcome::<i32, CaughtPanic>::pure(21),
///     task_outcome::fmap(|n: i32| n * 2),
/// );
/// ```
#[inline]
pub fn fmap<A, B, E, F>(function: F) -> impl FnOnce(TaskOutcome<A, E>) -> TaskOutcome<B, E>
where
    F: FnOnce(A) -> B + Send + 'static,
    A: Send + 'static,
    B: 'static,
    E: From<CaughtPanic> + Send + 'static,
{
    move |task| task.fmap(function)
}

/// Point-free twin of [`TaskOutcome::recover`].
#[inline]
pub fn recover<A, E, F>(function: F) -> impl FnOnce(TaskOutcome<A, E>) -> TaskOutcome<A, E>
where
    F: FnOnce(E) -> A + Send + 'static,
    A: Send + 'static,
    E: From<CaughtPanic> + Send + 'static,
{
    move |task| task.recover(function)
}

/// Point-free twin of [`TaskOutcome::flat_map`].
#[inline]
pub fn flat_map<A, B, E, F>(function: F) -> impl FnOnce(TaskOutcome<A, E>) -> TaskOutcome<B, E>
where
    F: FnOnce(A) -> TaskOutcome<B, E> + Send + 'static,
    A: Send + 'static,
    B: 'static,
    E: From<CaughtPanic> + Send + 'static,
{
    move |task| task.flat_map(function)
}

/// Point-free twin of [`TaskOutcome::recover_with`].
#[inline]
pub fn recover_with<A, E, F>(function: F) -> impl FnOnce(TaskOutcome<A, E>) -> TaskOutcome<A, E>
where
    F: FnOnce(E) -> TaskOutcome<A, E> + Send + 'static,
    A: Send + 'static,
    E: From<CaughtPanic> + Send + 'static,
{
    move |task| task.recover_with(function)
}

/// Point-free twin of [`TaskOutcome::inspect`].
#[inline]
pub fn inspect<A, E, F>(function: F) -> impl FnOnce(TaskOutcome<A, E>) -> TaskOutcome<A, E>
where
    F: FnOnce(&A) + Send + 'static,
    A: Send + 'static,
    E: Send + 'static,
{
    move |task| task.inspect(function)
}

/// Point-free twin of [`TaskOutcome::inspect_failure`].
#[inline]
pub fn inspect_failure<A, E, F>(function: F) -> impl FnOnce(TaskOutcome<A, E>) -> TaskOutcome<A, E>
where
    F: FnOnce(&E) + Send + 'static,
    A: Send + 'static,
    E: Send + 'static,
{
    move |task| task.inspect_failure(function)
}

/// Point-free twin of [`TaskOutcome::run_async`].
pub async fn run_async<A: 'static, E: 'static>(task: TaskOutcome<A, E>) -> Outcome<A, E> {
    task.run_async().await
}

// A task must be able to cross a spawn boundary.
assert_impl_all!(TaskOutcome<i32, String>: Send);
