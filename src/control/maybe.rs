//! Maybe type - a value that is present or absent.
//!
//! This module provides the `Maybe<A>` type, which represents a value that
//! is either `Just(value)` or `Nothing`. Absence carries no reason; when a
//! computation can fail *with* a payload, use
//! [`Outcome`](crate::control::Outcome) instead.
//!
//! A `Nothing` short-circuits every remaining transformation in a chain,
//! which is what makes `Maybe` useful for railway-oriented pipelines: the
//! absent value rides the failure track to the end of the chain without
//! any explicit branching.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Maybe;
//!
//! fn first_even(values: &[i32]) -> Maybe<i32> {
//!     match values.iter().find(|value| *value % 2 == 0) {
//!         Some(value) => Maybe::Just(*value),
//!         None => Maybe::Nothing,
//!     }
//! }
//!
//! let result = first_even(&[1, 4, 5])
//!     .map(|n| n * 10)
//!     .unwrap_or(0);
//! assert_eq!(result, 40);
//!
//! let missing = first_even(&[1, 3, 5])
//!     .map(|n| n * 10)
//!     .unwrap_or(0);
//! assert_eq!(missing, 0);
//! ```
//!
//! # Point-Free Composition
//!
//! Every instance method has a module-level twin that takes its
//! configuration first and the `Maybe` last, for use inside
//! [`pipe!`](crate::pipe) chains:
//!
//! ```rust
//! use railway::control::{Maybe, maybe};
//! use railway::pipe;
//!
//! let result = pipe!(
//!     Maybe::Just(4),
//!     maybe::map(|n: i32| n + 1),
//!     maybe::unwrap_or(0),
//! );
//! assert_eq!(result, 5);
//! ```

use std::fmt;

use static_assertions::assert_impl_all;

/// A value that is present or absent.
///
/// `Maybe<A>` represents a value that is either `Just(value)` or
/// `Nothing`. Unlike [`Outcome`](crate::control::Outcome), absence never
/// carries a reason.
///
/// A `Just` always holds an actual value: the constructor takes the value
/// by ownership, so there is no absent payload that could masquerade as
/// presence. Absence is only ever constructed as `Nothing`. At a dynamic
/// boundary, convert from [`Option`] instead - `None` becomes `Nothing`.
///
/// # Type Parameters
///
/// * `A` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use railway::control::Maybe;
///
/// let present: Maybe<i32> = Maybe::Just(42);
/// assert!(present.is_just());
///
/// let absent: Maybe<i32> = Maybe::Nothing;
/// assert!(absent.is_nothing());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// The absent value.
    Nothing,
}

impl<A> Maybe<A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert!(present.is_just());
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(!absent.is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(absent.is_nothing());
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert!(!present.is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the wrapped value, consuming the maybe.
    ///
    /// Callers are expected to check [`is_just`](Self::is_just) /
    /// [`is_nothing`](Self::is_nothing) first, or to prefer
    /// [`unwrap_or`](Self::unwrap_or) when a fallback exists.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let present = Maybe::Just(42);
    /// assert_eq!(present.unwrap_just(), 42);
    /// ```
    #[inline]
    pub fn unwrap_just(self) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!(
                "called `Maybe::unwrap_just()` on a `Nothing` value; check `is_just` first"
            ),
        }
    }

    /// Converts the `Maybe` into an [`Option`], consuming the maybe.
    ///
    /// Returns `Some(value)` if this is `Just(value)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).just(), Some(42));
    /// assert_eq!(Maybe::<i32>::Nothing.just(), None);
    /// ```
    #[inline]
    pub fn just(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns a reference to the wrapped value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let present = Maybe::Just(42);
    /// assert_eq!(present.just_ref(), Some(&42));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.just_ref(), None);
    /// ```
    #[inline]
    pub const fn just_ref(&self) -> Option<&A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the wrapped value if present.
    ///
    /// If this is `Just(value)`, returns `Just(function(value))`.
    /// If this is `Nothing`, returns `Nothing` without invoking the
    /// function. The closure's return value is wrapped as `Just`
    /// unconditionally; a closure that needs to produce absence should be
    /// used with [`flat_map`](Self::flat_map) instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let present = Maybe::Just(21);
    /// assert_eq!(present.map(|n| n * 2), Maybe::Just(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.map(|n| n * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a function that itself returns a `Maybe`, flattening the
    /// result.
    ///
    /// If this is `Just(value)`, returns `function(value)` directly.
    /// If this is `Nothing`, returns `Nothing` without invoking the
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// fn checked_half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
    /// }
    ///
    /// assert_eq!(Maybe::Just(42).flat_map(checked_half), Maybe::Just(21));
    /// assert_eq!(Maybe::Just(21).flat_map(checked_half), Maybe::Nothing);
    /// assert_eq!(Maybe::Nothing.flat_map(checked_half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let result = Maybe::Just(10).and_then(|n| Maybe::Just(n + 5));
    /// assert_eq!(result, Maybe::Just(15));
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.flat_map(function)
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Invokes a side-effect hook on the wrapped value if present.
    ///
    /// The hook receives a shared reference and cannot change the wrapped
    /// value; the original `Maybe` is returned unchanged for further
    /// chaining. A panic inside the hook is not caught and propagates to
    /// the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let result = Maybe::Just(42).inspect(|value| seen.push(*value));
    /// assert_eq!(result, Maybe::Just(42));
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Just(ref value) = self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Returns the wrapped value if present, otherwise the fallback.
    ///
    /// The fallback is evaluated eagerly; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) when computing it is
    /// expensive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).unwrap_or(0), 42);
    /// assert_eq!(Maybe::<i32>::Nothing.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback,
        }
    }

    /// Returns the wrapped value if present, otherwise invokes the
    /// function lazily for a fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).unwrap_or_else(|| 0), 42);
    /// assert_eq!(Maybe::<i32>::Nothing.unwrap_or_else(|| 6 * 7), 42);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => function(),
        }
    }

    // =========================================================================
    // Fold and Filter
    // =========================================================================

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let present = Maybe::Just(42);
    /// assert_eq!(present.fold(|| "absent".to_string(), |n| n.to_string()), "42");
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.fold(|| "absent".to_string(), |n| n.to_string()), "absent");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_nothing: F, on_just: G) -> T
    where
        F: FnOnce() -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Keeps the wrapped value only if it satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).filter(|n| n % 2 == 0), Maybe::Just(42));
    /// assert_eq!(Maybe::Just(21).filter(|n| n % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug> fmt::Debug for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    /// Converts an [`Option`] to a `Maybe`.
    ///
    /// `Some(value)` becomes `Just(value)`, and `None` becomes `Nothing`.
    /// This is the dynamic boundary: an absent payload can never be
    /// smuggled into a `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let present: Maybe<i32> = Some(42).into();
    /// assert_eq!(present, Maybe::Just(42));
    ///
    /// let absent: Maybe<i32> = None.into();
    /// assert_eq!(absent, Maybe::Nothing);
    /// ```
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    /// Converts a `Maybe` to an [`Option`].
    ///
    /// `Just(value)` becomes `Some(value)`, and `Nothing` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let option: Option<i32> = Maybe::Just(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

// =============================================================================
// Point-Free Forms
// =============================================================================

/// Wraps a value as `Just`.
///
/// Point-free twin of the `Just` variant constructor.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Maybe, maybe};
///
/// assert_eq!(maybe::just(42), Maybe::Just(42));
/// ```
#[inline]
pub fn just<A>(value: A) -> Maybe<A> {
    Maybe::Just(value)
}

/// Produces the absent value.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Maybe, maybe};
///
/// assert_eq!(maybe::nothing::<i32>(), Maybe::Nothing);
/// ```
#[inline]
#[must_use]
pub fn nothing<A>() -> Maybe<A> {
    Maybe::Nothing
}

/// Point-free twin of [`Maybe::is_just`].
///
/// # Examples
///
/// ```rust
/// use railway::control::{Maybe, maybe};
/// use railway::pipe;
///
/// assert!(pipe!(Maybe::Just(42), maybe::is_just));
/// ```
#[inline]
pub fn is_just<A>(maybe: Maybe<A>) -> bool {
    maybe.is_just()
}

/// Point-free twin of [`Maybe::is_nothing`].
#[inline]
pub fn is_nothing<A>(maybe: Maybe<A>) -> bool {
    maybe.is_nothing()
}

/// Point-free twin of [`Maybe::unwrap_just`].
///
/// # Panics
///
/// Panics if the maybe is `Nothing`.
#[inline]
pub fn unwrap_just<A>(maybe: Maybe<A>) -> A {
    maybe.unwrap_just()
}

/// Point-free twin of [`Maybe::map`]: binds the function now, takes the
/// maybe later.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Maybe, maybe};
/// use railway::pipe;
///
/// let result = pipe!(Maybe::Just(21), maybe::map(|n: i32| n * 2));
/// assert_eq!(result, Maybe::Just(42));
/// ```
#[inline]
pub fn map<A, B, F>(function: F) -> impl FnOnce(Maybe<A>) -> Maybe<B>
where
    F: FnOnce(A) -> B,
{
    move |maybe| maybe.map(function)
}

/// Point-free twin of [`Maybe::flat_map`].
///
/// # Examples
///
/// ```rust
/// use railway::control::{Maybe, maybe};
/// use railway::pipe;
///
/// let result = pipe!(
///     Maybe::Just(42),
///     maybe::flat_map(|n: i32| if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }),
/// );
/// assert_eq!(result, Maybe::Just(21));
/// ```
#[inline]
pub fn flat_map<A, B, F>(function: F) -> impl FnOnce(Maybe<A>) -> Maybe<B>
where
    F: FnOnce(A) -> Maybe<B>,
{
    move |maybe| maybe.flat_map(function)
}

/// Point-free twin of [`Maybe::inspect`].
#[inline]
pub fn inspect<A, F>(function: F) -> impl FnOnce(Maybe<A>) -> Maybe<A>
where
    F: FnOnce(&A),
{
    move |maybe| maybe.inspect(function)
}

/// Point-free twin of [`Maybe::unwrap_or`].
///
/// # Examples
///
/// ```rust
/// use railway::control::{Maybe, maybe};
/// use railway::pipe;
///
/// let result = pipe!(
///     Maybe::<i32>::Nothing,
///     maybe::map(|n: i32| n * 2),
///     maybe::unwrap_or(0),
/// );
/// assert_eq!(result, 0);
/// ```
#[inline]
pub fn unwrap_or<A>(fallback: A) -> impl FnOnce(Maybe<A>) -> A {
    move |maybe| maybe.unwrap_or(fallback)
}

/// Point-free twin of [`Maybe::unwrap_or_else`].
#[inline]
pub fn unwrap_or_else<A, F>(function: F) -> impl FnOnce(Maybe<A>) -> A
where
    F: FnOnce() -> A,
{
    move |maybe| maybe.unwrap_or_else(function)
}

/// Point-free twin of [`Maybe::fold`].
#[inline]
pub fn fold<A, T, F, G>(on_nothing: F, on_just: G) -> impl FnOnce(Maybe<A>) -> T
where
    F: FnOnce() -> T,
    G: FnOnce(A) -> T,
{
    move |maybe| maybe.fold(on_nothing, on_just)
}

/// Point-free twin of [`Maybe::filter`].
#[inline]
pub fn filter<A, P>(predicate: P) -> impl FnOnce(Maybe<A>) -> Maybe<A>
where
    P: FnOnce(&A) -> bool,
{
    move |maybe| maybe.filter(predicate)
}

// Auto-trait surface: a Maybe is as cheap to share as its payload.
assert_impl_all!(Maybe<i32>: Clone, Copy, Send, Sync);
assert_impl_all!(Maybe<String>: Clone, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_just_construction() {
        let value = Maybe::Just(42);
        assert!(value.is_just());
        assert!(!value.is_nothing());
    }

    #[rstest]
    fn test_nothing_construction() {
        let value: Maybe<i32> = Maybe::Nothing;
        assert!(value.is_nothing());
        assert!(!value.is_just());
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let present: Maybe<i32> = Some(42).into();
        let option: Option<i32> = present.into();
        assert_eq!(option, Some(42));

        let absent: Maybe<i32> = None.into();
        let option: Option<i32> = absent.into();
        assert_eq!(option, None);
    }

    #[rstest]
    fn test_debug_rendering() {
        assert_eq!(format!("{:?}", Maybe::Just(42)), "Just(42)");
        assert_eq!(format!("{:?}", Maybe::<i32>::Nothing), "Nothing");
    }
}
