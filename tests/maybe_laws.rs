//! Property-based tests for the Maybe<A> laws.
//!
//! These verify the algebraic structure of `Maybe` across randomly
//! generated inputs:
//!
//! - **Functor Identity**: `m.map(|x| x) == m`
//! - **Functor Composition**: `m.map(f).map(g) == m.map(|x| g(f(x)))`
//! - **Monad Left Identity**: `Just(a).flat_map(f) == f(a)`
//! - **Monad Right Identity**: `m.flat_map(Just) == m`
//! - **Monad Associativity**:
//!   `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

#![cfg(feature = "control")]

use proptest::prelude::*;
use railway::control::Maybe;

fn checked_double(n: i32) -> Maybe<i32> {
    match n.checked_mul(2) {
        Some(doubled) => Maybe::Just(doubled),
        None => Maybe::Nothing,
    }
}

fn checked_increment(n: i32) -> Maybe<i32> {
    match n.checked_add(1) {
        Some(incremented) => Maybe::Just(incremented),
        None => Maybe::Nothing,
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: mapping the identity function returns an equivalent maybe
    #[test]
    fn prop_maybe_functor_identity_law(value in any::<Option<i32>>()) {
        let maybe: Maybe<i32> = value.into();
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    /// Composition Law: mapping composed functions equals composing maps
    #[test]
    fn prop_maybe_functor_composition_law(value in any::<Option<i32>>()) {
        let maybe: Maybe<i32> = value.into();
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = maybe.map(function1).map(function2);
        let right = maybe.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Identity Law over an owning payload type
    #[test]
    fn prop_maybe_string_functor_identity_law(value in any::<Option<String>>()) {
        let maybe: Maybe<String> = value.into();
        prop_assert_eq!(maybe.clone().map(|x| x), maybe);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity: wrapping then binding equals applying directly
    #[test]
    fn prop_maybe_monad_left_identity_law(value in any::<i32>()) {
        let left = Maybe::Just(value).flat_map(checked_double);
        let right = checked_double(value);
        prop_assert_eq!(left, right);
    }

    /// Right Identity: binding the constructor changes nothing
    #[test]
    fn prop_maybe_monad_right_identity_law(value in any::<Option<i32>>()) {
        let maybe: Maybe<i32> = value.into();
        prop_assert_eq!(maybe.flat_map(Maybe::Just), maybe);
    }

    /// Associativity: nesting of binds does not matter
    #[test]
    fn prop_maybe_monad_associativity_law(value in any::<Option<i32>>()) {
        let maybe: Maybe<i32> = value.into();

        let left = maybe.flat_map(checked_double).flat_map(checked_increment);
        let right = maybe.flat_map(|x| checked_double(x).flat_map(checked_increment));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Fallback Properties
// =============================================================================

proptest! {
    /// unwrap_or returns the wrapped value for Just and the fallback for Nothing
    #[test]
    fn prop_maybe_unwrap_or_total(value in any::<Option<i32>>(), fallback in any::<i32>()) {
        let maybe: Maybe<i32> = value.into();
        let expected = value.unwrap_or(fallback);
        prop_assert_eq!(maybe.unwrap_or(fallback), expected);
    }

    /// Conversion to and from Option is lossless
    #[test]
    fn prop_maybe_option_roundtrip(value in any::<Option<String>>()) {
        let maybe: Maybe<String> = value.clone().into();
        let roundtripped: Option<String> = maybe.into();
        prop_assert_eq!(roundtripped, value);
    }
}
