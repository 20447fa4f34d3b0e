//! Integration tests for the point-free forms of the effect types.
//!
//! The synchronous point-free forms are covered alongside the compose
//! module; these verify that the `task` / `task_outcome` twins slot
//! into `pipe!` chains the same way.

#![cfg(all(feature = "async", feature = "compose"))]

use railway::control::{CaughtPanic, Maybe, Outcome, maybe, outcome};
use railway::effect::{Task, TaskOutcome, task, task_outcome};
use railway::pipe;
use rstest::rstest;

// =============================================================================
// Task Point-Free Forms
// =============================================================================

#[rstest]
#[tokio::test]
async fn pipe_task_fmap_and_flat_map() {
    let chained = pipe!(
        Task::pure(10),
        task::fmap(|n: i32| n + 1),
        task::flat_map(|n: i32| Task::pure(n * 2)),
    );
    assert_eq!(chained.run_async().await, 22);
}

#[rstest]
#[tokio::test]
async fn pipe_task_then_and_inspect() {
    let chained = pipe!(
        Task::pure(1),
        task::then(Task::pure(42)),
        task::inspect(|_: &i32| {}),
    );
    assert_eq!(task::run_async(chained).await, 42);
}

#[rstest]
#[tokio::test]
async fn task_run_outcome_point_free() {
    let task = Task::<i32>::new(|| async { panic!("boom") });
    let outcome = task::run_outcome(task).await;
    assert!(outcome.is_failure());
}

// =============================================================================
// TaskOutcome Point-Free Forms
// =============================================================================

#[rstest]
#[tokio::test]
async fn pipe_task_outcome_success_track() {
    let chained: TaskOutcome<i32, CaughtPanic> = pipe!(
        TaskOutcome::pure(10),
        task_outcome::fmap(|n: i32| n + 1),
        task_outcome::flat_map(|n: i32| TaskOutcome::pure(n * 2)),
        task_outcome::inspect(|_: &i32| {}),
    );
    assert_eq!(chained.run_async().await, Outcome::Success(22));
}

#[rstest]
#[tokio::test]
async fn pipe_task_outcome_failure_track() {
    let chained: TaskOutcome<i32, CaughtPanic> = pipe!(
        TaskOutcome::from_future(async { panic!("boom") }),
        task_outcome::inspect_failure(|_: &CaughtPanic| {}),
        task_outcome::recover(|caught: CaughtPanic| caught.message.len() as i32),
    );
    assert_eq!(task_outcome::run_async(chained).await, Outcome::Success(4));
}

#[rstest]
#[tokio::test]
async fn pipe_task_outcome_recover_with() {
    let chained: TaskOutcome<i32, CaughtPanic> = pipe!(
        TaskOutcome::from_future(async { panic!("boom") }),
        task_outcome::recover_with(|_: CaughtPanic| TaskOutcome::pure(0)),
    );
    assert_eq!(chained.run_async().await, Outcome::Success(0));
}

// =============================================================================
// Mixed Sync/Async Railway
// =============================================================================

/// A full railway: an async stage resolves to an Outcome, then the
/// synchronous point-free forms finish the pipeline.
#[rstest]
#[tokio::test]
async fn pipe_mixed_task_and_outcome_stages() {
    let resolved: Outcome<i32, CaughtPanic> =
        TaskOutcome::from_future(async { 40 }).run_async().await;

    let result = pipe!(
        resolved,
        outcome::map(|n: i32| n + 2),
        outcome::fold(|_: CaughtPanic| Maybe::Nothing, |n: i32| Maybe::Just(n)),
        maybe::unwrap_or(0),
    );
    assert_eq!(result, 42);
}
