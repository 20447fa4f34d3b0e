//! Task - a deferred asynchronous computation.
//!
//! The `Task` type wraps an asynchronous computation producing a value.
//! Nothing runs until `run_async` is awaited; every transformation
//! derives a new `Task` whose underlying computation is a continuation
//! of the prior one, so the original computation is never restarted and
//! chained side effects run in chain order.
//!
//! `Task` has no failure channel of its own: a failing computation
//! surfaces as an ordinary unwinding panic unless it is explicitly
//! converted with [`Task::run_outcome`], which resolves to an
//! [`Outcome`] with the panic captured as a
//! [`CaughtPanic`] payload.
//!
//! # Examples
//!
//! ```rust,ignore
//! use railway::effect::Task;
//!
//! #[tokio::main]
//! async fn main() {
//!     let task = Task::pure(10)
//!         .fmap(|n| n * 2)
//!         .flat_map(|n| Task::pure(n + 1));
//!     assert_eq!(task.run_async().await, 21);
//! }
//! ```
//!
//! # Deferral
//!
//! ```rust,ignore
//! use railway::effect::Task;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! #[tokio::main]
//! async fn main() {
//!     let executed = Arc::new(AtomicBool::new(false));
//!     let executed_clone = executed.clone();
//!
//!     let task = Task::new(move || {
//!         let flag = executed_clone.clone();
//!         async move {
//!             flag.store(true, Ordering::SeqCst);
//!             42
//!         }
//!     });
//!
//!     // Not executed yet
//!     assert!(!executed.load(Ordering::SeqCst));
//!
//!     assert_eq!(task.run_async().await, 42);
//!     assert!(executed.load(Ordering::SeqCst));
//! }
//! ```

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::time::Duration;

use futures::FutureExt;
use static_assertions::assert_impl_all;

use crate::control::{CaughtPanic, Maybe, Outcome};

/// A deferred asynchronous computation producing a value of type `A`.
///
/// `Task<A>` wraps an asynchronous computation. The computation is not
/// executed until [`run_async`](Self::run_async) is awaited, and every
/// transformation returns a new `Task` derived from the prior one by
/// continuation.
///
/// # Type Parameters
///
/// - `A`: The type of the value produced by the computation.
///
/// # Monad Laws
///
/// `Task` satisfies the monad laws:
///
/// 1. **Left Identity**: `Task::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Task::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # Examples
///
/// ```rust,ignore
/// use railway::effect::Task;
///
/// #[tokio::main]
/// async fn main() {
///     let task = Task::pure(42);
///     assert_eq!(task.run_async().await, 42);
/// }
/// ```
pub struct Task<A> {
    /// The wrapped computation producing a value of type `A`.
    run_task: Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = A> + Send>> + Send>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> Task<A> {
    /// Creates a new `Task` from an async closure.
    ///
    /// The closure will not be executed until `run_async` is awaited.
    ///
    /// # Arguments
    ///
    /// * `action` - A closure that returns a Future producing a value of type `A`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// let task = Task::new(|| async {
    ///     tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    ///     42
    /// });
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            run_task: Box::new(move || Box::pin(action())),
        }
    }

    /// Creates a `Task` from an existing Future.
    ///
    /// The Future should not have been polled yet; it is driven only
    /// when the task is awaited.
    ///
    /// # Arguments
    ///
    /// * `future` - A Future producing a value of type `A`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// let task = Task::from_future(async { 42 });
    /// ```
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            run_task: Box::new(move || Box::pin(future)),
        }
    }
}

impl<A: Send + 'static> Task<A> {
    /// Wraps an immediate value as an already-computed `Task`.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to wrap.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// let task = Task::pure(42);
    /// // run_async().await will immediately return 42
    /// ```
    pub fn pure(value: A) -> Self {
        Self {
            run_task: Box::new(move || Box::pin(async move { value })),
        }
    }
}

// =============================================================================
// Execution Methods
// =============================================================================

impl<A: 'static> Task<A> {
    /// Executes the computation and returns its value.
    ///
    /// This is the terminal consumer of a `Task`: it hands the
    /// underlying pending computation to the caller for awaiting. A
    /// panicking computation unwinds through this method; use
    /// [`run_outcome`](Self::run_outcome) to capture it instead.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let task = Task::pure(42);
    ///     assert_eq!(task.run_async().await, 42);
    /// }
    /// ```
    pub async fn run_async(self) -> A {
        (self.run_task)().await
    }

    /// Executes the computation, converting an unwinding panic into a
    /// `Failure`.
    ///
    /// Resolves to `Success` with the computed value, or `Failure` with
    /// a [`CaughtPanic`] if the computation panics - the bridge from a
    /// `Task` chain into an [`Outcome`] chain without switching wrapper
    /// types mid-stream.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let fine = Task::pure(42).run_outcome().await;
    ///     assert_eq!(fine.unwrap_success(), 42);
    ///
    ///     let caught = Task::new(|| async { panic!("boom") }).run_outcome().await;
    ///     assert!(caught.is_failure());
    /// }
    /// ```
    pub async fn run_outcome(self) -> Outcome<A, CaughtPanic> {
        match AssertUnwindSafe(self.run_async()).catch_unwind().await {
            Ok(value) => Outcome::Success(value),
            Err(payload) => Outcome::Failure(CaughtPanic::from_payload(payload)),
        }
    }
}

// =============================================================================
// Functor Operations
// =============================================================================

impl<A: 'static> Task<A> {
    /// Transforms the result of the computation using a function.
    ///
    /// This is the `fmap` operation from Functor. If the function itself
    /// returns a future or a `Task`, the outer task resolves to that
    /// nested value as-is - one level shallower than
    /// [`flat_map`](Self::flat_map), which flattens. This mirrors
    /// conventional map-over-async semantics; the type system makes the
    /// nesting explicit.
    ///
    /// # Arguments
    ///
    /// * `function` - A function to apply to the result.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// let task = Task::pure(21).fmap(|x| x * 2);
    /// assert_eq!(task.run_async().await, 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Task<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: 'static,
    {
        Task::new(move || async move {
            let value = self.run_async().await;
            function(value)
        })
    }
}

// =============================================================================
// Monad Operations
// =============================================================================

impl<A: 'static> Task<A> {
    /// Chains tasks, passing the result of the first to a function that
    /// produces the second.
    ///
    /// This is the `bind` operation from Monad: the outer task resolves
    /// directly to the eventual value of the task returned by the
    /// function.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the result and returns a new `Task`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// let task = Task::pure(10).flat_map(|x| Task::pure(x * 2));
    /// assert_eq!(task.run_async().await, 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Task<B>
    where
        F: FnOnce(A) -> Task<B> + Send + 'static,
        B: 'static,
    {
        Task::new(move || async move {
            let value = self.run_async().await;
            let task_b = function(value);
            task_b.run_async().await
        })
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// let task = Task::pure(10).and_then(|x| Task::pure(x + 5));
    /// assert_eq!(task.run_async().await, 15);
    /// ```
    pub fn and_then<B, F>(self, function: F) -> Task<B>
    where
        F: FnOnce(A) -> Task<B> + Send + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two tasks, discarding the result of the first.
    ///
    /// The first computation still runs for its side effects.
    ///
    /// # Arguments
    ///
    /// * `next` - The task to execute after this one.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// let task = Task::pure(10).then(Task::pure(20));
    /// assert_eq!(task.run_async().await, 20);
    /// ```
    #[must_use]
    pub fn then<B>(self, next: Task<B>) -> Task<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Attaches a side-effect continuation that observes the resolved
    /// value.
    ///
    /// The hook receives a shared reference and the original value
    /// passes through unchanged downstream. A panic inside the hook is
    /// not caught.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// let task = Task::pure(42).inspect(|value| println!("saw {value}"));
    /// assert_eq!(task.run_async().await, 42);
    /// ```
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&A) + Send + 'static,
    {
        Task::new(move || async move {
            let value = self.run_async().await;
            function(&value);
            value
        })
    }
}

// =============================================================================
// Applicative Operations
// =============================================================================

impl<A: 'static> Task<A> {
    /// Combines two tasks using a function.
    ///
    /// Both computations run sequentially and their results are combined
    /// with the provided function.
    ///
    /// # Arguments
    ///
    /// * `other` - The second task.
    /// * `function` - A function to combine the results.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// let combined = Task::pure(10).map2(Task::pure(20), |a, b| a + b);
    /// assert_eq!(combined.run_async().await, 30);
    /// ```
    pub fn map2<B, C, F>(self, other: Task<B>, function: F) -> Task<C>
    where
        A: Send,
        F: FnOnce(A, B) -> C + Send + 'static,
        B: Send + 'static,
        C: 'static,
    {
        Task::new(move || async move {
            let value_a = self.run_async().await;
            let value_b = other.run_async().await;
            function(value_a, value_b)
        })
    }
}

impl<A: Send + 'static> Task<A> {
    /// Combines two tasks into a tuple.
    ///
    /// # Arguments
    ///
    /// * `other` - The second task.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::effect::Task;
    ///
    /// let pair = Task::pure(10).product(Task::pure(20));
    /// assert_eq!(pair.run_async().await, (10, 20));
    /// ```
    #[must_use]
    pub fn product<B>(self, other: Task<B>) -> Task<(A, B)>
    where
        B: Send + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Timeout
// =============================================================================

impl<A: 'static> Task<A> {
    /// Resolves to `Just` with the value if the computation completes
    /// within the duration, otherwise `Nothing`.
    ///
    /// # Arguments
    ///
    /// * `duration` - The maximum time to wait.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use railway::control::Maybe;
    /// use railway::effect::Task;
    /// use std::time::Duration;
    ///
    /// let fast = Task::pure(42).timeout(Duration::from_millis(100));
    /// assert_eq!(fast.run_async().await, Maybe::Just(42));
    /// ```
    #[must_use]
    pub fn timeout(self, duration: Duration) -> Task<Maybe<A>>
    where
        A: Send,
    {
        Task::new(move || async move {
            match tokio::time::timeout(duration, self.run_async()).await {
                Ok(value) => Maybe::Just(value),
                Err(_) => Maybe::Nothing,
            }
        })
    }
}

// =============================================================================
// Point-Free Forms
// =============================================================================

/// Point-free twin of [`Task::fmap`]: binds the function now, takes the
/// task later.
///
/// # Examples
///
/// ```rust,ignore
/// use railway::effect::{Task, task};
/// use railway::pipe;
///
/// let doubled = pipe!(Task::pure(21), task::fmap(|n: i32| n * 2));
/// assert_eq!(doubled.run_async().await, 42);
/// ```
#[inline]
pub fn fmap<A, B, F>(function: F) -> impl FnOnce(Task<A>) -> Task<B>
where
    F: FnOnce(A) -> B + Send + 'static,
    A: 'static,
    B: 'static,
{
    move |task| task.fmap(function)
}

/// Point-free twin of [`Task::flat_map`].
#[inline]
pub fn flat_map<A, B, F>(function: F) -> impl FnOnce(Task<A>) -> Task<B>
where
    F: FnOnce(A) -> Task<B> + Send + 'static,
    A: 'static,
    B: 'static,
{
    move |task| task.flat_map(function)
}

/// Point-free twin of [`Task::then`].
#[inline]
pub fn then<A, B>(next: Task<B>) -> impl FnOnce(Task<A>) -> Task<B>
where
    A: 'static,
    B: 'static,
{
    move |task| task.then(next)
}

/// Point-free twin of [`Task::inspect`].
#[inline]
pub fn inspect<A, F>(function: F) -> impl FnOnce(Task<A>) -> Task<A>
where
    F: FnOnce(&A) + Send + 'static,
    A: 'static,
{
    move |task| task.inspect(function)
}

/// Point-free twin of [`Task::run_async`].
pub async fn run_async<A: 'static>(task: Task<A>) -> A {
    task.run_async().await
}

/// Point-free twin of [`Task::run_outcome`].
pub async fn run_outcome<A: 'static>(task: Task<A>) -> Outcome<A, CaughtPanic> {
    task.run_outcome().await
}

// A task must be able to cross a spawn boundary.
assert_impl_all!(Task<i32>: Send);
