//! The `Pipe` chain object - method-call form of [`pipe!`](crate::pipe).
//!
//! Where the macro applies a fixed list of functions at once, `Pipe`
//! carries a value through `chain` calls that can be split across
//! statements, stored, or built up conditionally.

/// A value being carried through a left-to-right transformation chain.
///
/// `Pipe::of(x).chain(f).chain(g).value()` is equivalent to
/// `pipe!(x, f, g)`. The wrapper holds no state beyond the current
/// value; every `chain` consumes the pipe and returns a new one
/// wrapping the function's output.
///
/// # Examples
///
/// ```rust
/// use railway::compose::Pipe;
///
/// let result = Pipe::of(5)
///     .chain(|n| n * 2)
///     .chain(|n| n + 1)
///     .value();
/// assert_eq!(result, 11);
/// ```
///
/// With the point-free wrapper forms:
///
/// ```rust
/// use railway::compose::Pipe;
/// use railway::control::{Maybe, maybe};
///
/// let result = Pipe::of(Maybe::Just(21))
///     .chain(maybe::map(|n: i32| n * 2))
///     .chain(maybe::unwrap_or(0))
///     .value();
/// assert_eq!(result, 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pipe<A> {
    current: A,
}

impl<A> Pipe<A> {
    /// Starts a chain with the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::compose::Pipe;
    ///
    /// assert_eq!(Pipe::of(42).value(), 42);
    /// ```
    #[inline]
    pub const fn of(value: A) -> Self {
        Self { current: value }
    }

    /// Applies a function to the current value, returning a new chain
    /// wrapping the output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::compose::Pipe;
    ///
    /// let chained = Pipe::of(5).chain(|n| n * 2);
    /// assert_eq!(chained.value(), 10);
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Pipe<B>
    where
        F: FnOnce(A) -> B,
    {
        Pipe::of(function(self.current))
    }

    /// Unwraps the chain, returning the current value.
    #[inline]
    pub fn value(self) -> A {
        self.current
    }
}
