//! Deferred asynchronous computations with railway semantics.
//!
//! This module provides the asynchronous wrapper types:
//!
//! - [`Task`]: A deferred asynchronous computation producing a value.
//!   Failure surfaces as the normal unwinding of the underlying
//!   computation unless explicitly converted via
//!   [`Task::run_outcome`].
//! - [`TaskOutcome`]: A deferred asynchronous computation that always
//!   resolves to an [`Outcome`](crate::control::Outcome) and never
//!   escapes a panic - the union of `Task` and `Outcome` semantics in
//!   one composable type.
//!
//! Both types wrap the host runtime's native primitive (a boxed
//! [`Future`](std::future::Future)); nothing runs until the task is
//! awaited, every transformation derives a new task by continuation,
//! and continuations run in the order they were chained.
//!
//! # Examples
//!
//! ```rust,ignore
//! use railway::effect::{Task, TaskOutcome};
//! use railway::control::{CaughtPanic, Outcome};
//!
//! #[tokio::main]
//! async fn main() {
//!     let value = Task::pure(10)
//!         .fmap(|n| n * 2)
//!         .flat_map(|n| Task::pure(n + 1))
//!         .run_async()
//!         .await;
//!     assert_eq!(value, 21);
//!
//!     // A panicking step resolves to Failure instead of unwinding
//!     let outcome: Outcome<i32, CaughtPanic> = TaskOutcome::pure(10)
//!         .fmap(|_| panic!("boom"))
//!         .run_async()
//!         .await;
//!     assert!(outcome.is_failure());
//! }
//! ```

pub mod task;
pub mod task_outcome;

pub use task::Task;
pub use task_outcome::TaskOutcome;
