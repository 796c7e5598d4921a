//! Benchmark for control structures: Try, Either and the lazy iterators.
//!
//! Measures the cost of capturing failures, chaining combinators and
//! iterating containers as zero-or-one element sequences.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use slang::compose::{and_then, compose};
use slang::control::{Cause, Either, Try, iterator};
use std::hint::black_box;
use std::sync::Once;

static QUIET_PANICS: Once = Once::new();

/// Captured panics would otherwise print a message per iteration.
fn silence_panic_hook() {
    QUIET_PANICS.call_once(|| std::panic::set_hook(Box::new(|_| {})));
}

// =============================================================================
// Try Benchmarks
// =============================================================================

fn benchmark_try_construction(criterion: &mut Criterion) {
    silence_panic_hook();
    let mut group = criterion.benchmark_group("try_construction");

    group.bench_function("catching_success", |bencher| {
        bencher.iter(|| Try::catching(|| black_box(10) / black_box(2)));
    });

    group.bench_function("catching_panic", |bencher| {
        bencher.iter(|| Try::catching(|| black_box(10) / black_box(0)));
    });

    group.bench_function("of_error", |bencher| {
        bencher.iter(|| {
            Try::<i32>::of(|| black_box("x").parse::<i32>().map_err(|error| Cause::from_error(&error)))
        });
    });

    group.finish();
}

fn benchmark_try_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("try_chain");

    for length in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("flat_map", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut outcome: Try<i64, String> = Try::Success(black_box(1));
                for _ in 0..length {
                    outcome = outcome.flat_map(|n| {
                        n.checked_add(1)
                            .map_or_else(|| Try::Failure("overflow".to_string()), Try::Success)
                    });
                }
                outcome
            });
        });
    }

    group.finish();
}

// =============================================================================
// Either Benchmarks
// =============================================================================

fn benchmark_either(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either");

    group.bench_function("bimap_right", |bencher| {
        bencher.iter(|| {
            let value: Either<String, i32> = Either::Right(black_box(5));
            value.bimap(|s| s.len(), |n| n * 2)
        });
    });

    group.bench_function("swap_twice", |bencher| {
        bencher.iter(|| {
            let value: Either<i32, String> = Either::Left(black_box(5));
            value.swap().swap()
        });
    });

    group.finish();
}

// =============================================================================
// Iterator Benchmarks
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    let outcomes: Vec<Try<i32, &str>> = (0..1000)
        .map(|index| if index % 3 == 0 { Try::Failure("skip") } else { Try::Success(index) })
        .collect();

    group.bench_function("flatten_tries", |bencher| {
        bencher.iter(|| black_box(&outcomes).iter().flatten().sum::<i32>());
    });

    group.bench_function("single_with", |bencher| {
        bencher.iter(|| iterator::of_lazy(|| black_box(21) * 2).next());
    });

    group.finish();
}

// =============================================================================
// Composition Benchmarks
// =============================================================================

fn benchmark_composition(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("composition");

    let add_one = |x: i64| x + 1;
    let double = |x: i64| x * 2;
    let composed = compose(add_one, double);
    let chained = and_then(add_one, double);

    group.bench_function("compose", |bencher| bencher.iter(|| composed(black_box(7))));
    group.bench_function("and_then", |bencher| bencher.iter(|| chained(black_box(7))));
    group.bench_function("direct", |bencher| bencher.iter(|| add_one(double(black_box(7)))));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_try_construction,
    benchmark_try_chain,
    benchmark_either,
    benchmark_iteration,
    benchmark_composition,
);

criterion_main!(benches);
