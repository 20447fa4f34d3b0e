//! Helper functions (combinators) for pipeline composition.
//!
//! This module provides fundamental combinators that are commonly used
//! when building railway pipelines:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`compute`]: Invokes a niladic closure, scoping temporary bindings

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition.
/// In a pipeline it serves as a no-op stage, which is occasionally
/// useful when a stage is chosen conditionally.
///
/// # Examples
///
/// ```
/// use railway::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
///
/// # As a pipeline stage
///
/// ```
/// use railway::compose::identity;
/// use railway::pipe;
///
/// let result = pipe!(21, identity, |n: i32| n * 2);
/// assert_eq!(result, 42);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// Also known as the K combinator. Useful for replacing whatever rides
/// the pipeline with a fixed value.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Examples
///
/// ```
/// use railway::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given a function `f(a, b)`, returns a new function `g(b, a)` such
/// that `g(b, a) = f(a, b)`. Useful for partial application when the
/// second argument should be fixed instead of the first.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use railway::compose::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped_divide = flip(divide);
/// assert!((flipped_divide(2.0, 10.0) - 5.0).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Invokes a niladic closure and returns its result.
///
/// This is the named-block helper: it scopes temporary bindings to the
/// closure body without leaking them into the surrounding function. An
/// async closure works unchanged - the returned future is the result,
/// to be awaited by the caller.
///
/// # Examples
///
/// ```
/// use railway::compose::compute;
///
/// let total = compute(|| {
///     let base = 40;
///     let bump = 2;
///     base + bump
/// });
/// assert_eq!(total, 42);
/// ```
///
/// # With an asynchronous body
///
/// ```rust,ignore
/// use railway::compose::compute;
///
/// #[tokio::main]
/// async fn main() {
///     let future = compute(|| async { 6 * 7 });
///     assert_eq!(future.await, 42);
/// }
/// ```
#[inline]
pub fn compute<R, F>(function: F) -> R
where
    F: FnOnce() -> R,
{
    function()
}
