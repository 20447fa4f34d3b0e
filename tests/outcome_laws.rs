//! Property-based tests for the Outcome<A, E> laws.
//!
//! These verify the algebraic structure of `Outcome` across randomly
//! generated inputs, including the railway short-circuit property: a
//! failure anywhere in a chain rides untouched to the end.

#![cfg(feature = "control")]

use proptest::prelude::*;
use railway::control::Outcome;

fn checked_double(n: i32) -> Outcome<i32, String> {
    match n.checked_mul(2) {
        Some(doubled) => Outcome::Success(doubled),
        None => Outcome::Failure("overflow".to_string()),
    }
}

fn checked_increment(n: i32) -> Outcome<i32, String> {
    match n.checked_add(1) {
        Some(incremented) => Outcome::Success(incremented),
        None => Outcome::Failure("overflow".to_string()),
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: mapping the identity function returns an equivalent outcome
    #[test]
    fn prop_outcome_functor_identity_law(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>())
    ) {
        let outcome: Outcome<i32, String> = value.into();
        prop_assert_eq!(outcome.clone().map(|x| x), outcome);
    }

    /// Composition Law: mapping composed functions equals composing maps
    #[test]
    fn prop_outcome_functor_composition_law(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>())
    ) {
        let outcome: Outcome<i32, String> = value.into();
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = outcome.clone().map(function1).map(function2);
        let right = outcome.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity: wrapping then binding equals applying directly
    #[test]
    fn prop_outcome_monad_left_identity_law(value in any::<i32>()) {
        let left = Outcome::<i32, String>::Success(value).flat_map(checked_double);
        let right = checked_double(value);
        prop_assert_eq!(left, right);
    }

    /// Right Identity: binding the constructor changes nothing
    #[test]
    fn prop_outcome_monad_right_identity_law(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>())
    ) {
        let outcome: Outcome<i32, String> = value.into();
        prop_assert_eq!(outcome.clone().flat_map(Outcome::Success), outcome);
    }

    /// Associativity: nesting of binds does not matter
    #[test]
    fn prop_outcome_monad_associativity_law(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>())
    ) {
        let outcome: Outcome<i32, String> = value.into();

        let left = outcome.clone().flat_map(checked_double).flat_map(checked_increment);
        let right = outcome.flat_map(|x| checked_double(x).flat_map(checked_increment));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Railway Properties
// =============================================================================

proptest! {
    /// A failure at the head of a chain survives any sequence of
    /// success-track transformations untouched.
    #[test]
    fn prop_outcome_failure_rides_to_the_end(error in any::<String>(), fallback in any::<i32>()) {
        let result = Outcome::<i32, String>::Failure(error.clone())
            .map(|n| n.wrapping_mul(2))
            .flat_map(checked_increment)
            .map(|n| n.wrapping_sub(3));

        prop_assert_eq!(result.clone().unwrap_failure(), error);
        prop_assert_eq!(result.unwrap_or(fallback), fallback);
    }

    /// recover always lands on the success track
    #[test]
    fn prop_outcome_recover_is_success(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>())
    ) {
        let outcome: Outcome<i32, String> = value.into();
        let recovered = outcome.recover(|error| error.len() as i32);
        prop_assert!(recovered.is_success());
    }

    /// Conversion to and from Result is lossless
    #[test]
    fn prop_outcome_result_roundtrip(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>())
    ) {
        let outcome: Outcome<i32, String> = value.clone().into();
        let roundtripped: Result<i32, String> = outcome.into();
        prop_assert_eq!(roundtripped, value);
    }
}
