//! Integration tests for the Task<A> type.
//!
//! Task wraps a deferred asynchronous computation: nothing runs until
//! `run_async` is awaited, transformations derive new tasks by
//! continuation, and chained side effects run in chain order.
//!
//! Test coverage:
//! - deferral: the computation does not start before the await
//! - fmap / flat_map / then / inspect composition and ordering
//! - run_outcome: a panicking computation resolves to Failure
//! - timeout: completion maps to Just, elapse maps to Nothing

#![cfg(feature = "async")]

use railway::control::Maybe;
use railway::effect::Task;
use rstest::rstest;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

// =============================================================================
// Construction and Execution
// =============================================================================

#[rstest]
#[tokio::test]
async fn task_pure_resolves_to_value() {
    let task = Task::pure(42);
    assert_eq!(task.run_async().await, 42);
}

#[rstest]
#[tokio::test]
async fn task_from_future_resolves_to_output() {
    let task = Task::from_future(async { 6 * 7 });
    assert_eq!(task.run_async().await, 42);
}

#[rstest]
#[tokio::test]
async fn task_new_defers_execution_until_awaited() {
    let executed = Arc::new(AtomicBool::new(false));
    let executed_clone = executed.clone();

    let task = Task::new(move || {
        let flag = executed_clone.clone();
        async move {
            flag.store(true, Ordering::SeqCst);
            42
        }
    });

    // Not executed yet
    assert!(!executed.load(Ordering::SeqCst));

    assert_eq!(task.run_async().await, 42);
    assert!(executed.load(Ordering::SeqCst));
}

// =============================================================================
// Functor and Monad Operations
// =============================================================================

#[rstest]
#[tokio::test]
async fn task_fmap_transforms_value() {
    let task = Task::pure(21).fmap(|x| x * 2);
    assert_eq!(task.run_async().await, 42);
}

#[rstest]
#[tokio::test]
async fn task_flat_map_flattens() {
    let task = Task::pure(10).flat_map(|x| Task::pure(x * 2));
    assert_eq!(task.run_async().await, 20);
}

#[rstest]
#[tokio::test]
async fn task_and_then_is_flat_map() {
    let task = Task::pure(10).and_then(|x| Task::pure(x + 5));
    assert_eq!(task.run_async().await, 15);
}

#[rstest]
#[tokio::test]
async fn task_then_discards_first_value() {
    let task = Task::pure(10).then(Task::pure(20));
    assert_eq!(task.run_async().await, 20);
}

#[rstest]
#[tokio::test]
async fn task_map2_combines_results() {
    let combined = Task::pure(10).map2(Task::pure(20), |a, b| a + b);
    assert_eq!(combined.run_async().await, 30);
}

#[rstest]
#[tokio::test]
async fn task_product_pairs_results() {
    let pair = Task::pure(10).product(Task::pure(20));
    assert_eq!(pair.run_async().await, (10, 20));
}

/// Continuations run in the order they were chained, exactly once each.
#[rstest]
#[tokio::test]
async fn task_chain_runs_in_order_exactly_once() {
    let trace: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let trace_f1 = trace.clone();
    let trace_f2 = trace.clone();
    let trace_f3 = trace.clone();

    let result = Task::pure(1)
        .fmap(move |n| {
            trace_f1.lock().unwrap().push("f1");
            n + 1
        })
        .flat_map(move |n| {
            trace_f2.lock().unwrap().push("f2");
            Task::pure(n * 10)
        })
        .inspect(move |_| {
            trace_f3.lock().unwrap().push("f3");
        })
        .run_async()
        .await;

    assert_eq!(result, 20);
    assert_eq!(*trace.lock().unwrap(), vec!["f1", "f2", "f3"]);
}

// =============================================================================
// Observation
// =============================================================================

#[rstest]
#[tokio::test]
async fn task_inspect_passes_value_through() {
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_clone = seen.clone();

    let result = Task::pure(42usize)
        .inspect(move |value| seen_clone.store(*value, Ordering::SeqCst))
        .run_async()
        .await;

    assert_eq!(result, 42);
    assert_eq!(seen.load(Ordering::SeqCst), 42);
}

// =============================================================================
// Outcome Bridge
// =============================================================================

#[rstest]
#[tokio::test]
async fn task_run_outcome_wraps_value_as_success() {
    let outcome = Task::pure(42).run_outcome().await;
    assert_eq!(outcome.unwrap_success(), 42);
}

#[rstest]
#[tokio::test]
async fn task_run_outcome_captures_panic_as_failure() {
    let task = Task::<i32>::new(|| async { panic!("boom") });
    let outcome = task.run_outcome().await;
    assert!(outcome.is_failure());
    assert_eq!(outcome.unwrap_failure().message, "boom");
}

#[rstest]
#[tokio::test]
async fn task_run_outcome_captures_panic_in_continuation() {
    let task = Task::pure(21).fmap(|_: i32| -> i32 { panic!("continuation exploded") });
    let outcome = task.run_outcome().await;
    assert_eq!(outcome.unwrap_failure().message, "continuation exploded");
}

// =============================================================================
// Timeout
// =============================================================================

#[rstest]
#[tokio::test]
async fn task_timeout_resolves_just_when_fast() {
    let task = Task::pure(42).timeout(Duration::from_millis(200));
    assert_eq!(task.run_async().await, Maybe::Just(42));
}

#[rstest]
#[tokio::test]
async fn task_timeout_resolves_nothing_when_elapsed() {
    let slow = Task::new(|| async {
        tokio::time::sleep(Duration::from_secs(10)).await;
        1
    });
    let task = slow.timeout(Duration::from_millis(20));
    assert_eq!(task.run_async().await, Maybe::Nothing);
}
