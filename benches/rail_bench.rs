//! Benchmark for the railway wrapper types: Maybe, Outcome, and Pipe.
//!
//! Measures the overhead of the wrapper chains against hand-written
//! branching over the same workload.

use criterion::{Criterion, criterion_group, criterion_main};
use railway::compose::Pipe;
use railway::control::{Maybe, Outcome};
use std::hint::black_box;

// =============================================================================
// Maybe Benchmarks
// =============================================================================

fn benchmark_maybe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    group.bench_function("success_track", |bencher| {
        bencher.iter(|| {
            let result = Maybe::Just(black_box(21))
                .map(|n| n * 2)
                .flat_map(|n| if n > 0 { Maybe::Just(n + 1) } else { Maybe::Nothing })
                .unwrap_or(0);
            black_box(result)
        });
    });

    group.bench_function("short_circuit", |bencher| {
        bencher.iter(|| {
            let result = Maybe::<i32>::Nothing
                .map(|n| n * 2)
                .flat_map(|n| Maybe::Just(n + 1))
                .unwrap_or(black_box(0));
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Outcome Benchmarks
// =============================================================================

fn benchmark_outcome_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_chain");

    group.bench_function("success_track", |bencher| {
        bencher.iter(|| {
            let result = Outcome::<i32, String>::Success(black_box(21))
                .map(|n| n * 2)
                .flat_map(|n| Outcome::Success(n + 1))
                .unwrap_or(0);
            black_box(result)
        });
    });

    group.bench_function("failure_track_recovery", |bencher| {
        bencher.iter(|| {
            let result = Outcome::<i32, String>::Failure(black_box("boom".to_string()))
                .map(|n| n * 2)
                .recover(|error| error.len() as i32)
                .unwrap_or(0);
            black_box(result)
        });
    });

    group.bench_function("baseline_match", |bencher| {
        bencher.iter(|| {
            let input: Result<i32, String> = Ok(black_box(21));
            let result = match input {
                Ok(n) => (n * 2) + 1,
                Err(_) => 0,
            };
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Pipe Benchmarks
// =============================================================================

fn benchmark_pipe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipe_chain");

    group.bench_function("chain_object", |bencher| {
        bencher.iter(|| {
            let result = Pipe::of(black_box(3))
                .chain(|n| n * n)
                .chain(|n| n * 2)
                .chain(|n| n + 1)
                .value();
            black_box(result)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_maybe_chain,
    benchmark_outcome_chain,
    benchmark_pipe_chain
);
criterion_main!(benches);
