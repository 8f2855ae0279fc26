use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use dac::geometry::closest_pair;
use dac::sort::{merge_sort, quick_sort};
use dac::{patterns, select, Metrics, Sort};

fn batch_size(test_size: usize) -> BatchSize {
    if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    }
}

fn run_count(test_size: usize) -> usize {
    if test_size <= 20 {
        100_000
    } else if test_size < 10_000 {
        3000
    } else if test_size < 100_000 {
        1000
    } else {
        100
    }
}

fn measure_counters(
    name: &str,
    test_size: usize,
    mut instrumented_func: impl FnMut(&mut Metrics),
) {
    // Average how many comparisons and swaps are performed by a specific algorithm and input
    // combination. Depth is the worst seen across all runs.
    let run_count = run_count(test_size);

    let mut total = Metrics::new();
    for _ in 0..run_count {
        let mut metrics = Metrics::new();
        instrumented_func(&mut metrics);

        total.comparisons += metrics.comparisons;
        total.swaps += metrics.swaps;
        total.allocations += metrics.allocations;
        total.max_recursion_depth = total.max_recursion_depth.max(metrics.max_recursion_depth);
    }

    let runs = run_count as u64;
    println!(
        "{name}: mean comparisons: {} mean swaps: {} mean allocations: {} max depth: {}",
        total.comparisons / runs,
        total.swaps / runs,
        total.allocations / runs,
        total.max_recursion_depth
    );
}

#[inline(never)]
fn bench_sort<S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    let bench_name = format!("{}-{pattern_name}-{test_size}", S::name());

    if env::var("MEASURE_COMP").is_ok() {
        measure_counters(&bench_name, test_size, |metrics| {
            let mut test_data = pattern_provider(test_size);
            S::sort(black_box(test_data.as_mut_slice()), metrics);
        });
        return;
    }

    c.bench_function(&bench_name, |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |mut test_data| {
                let mut metrics = Metrics::new();
                S::sort(black_box(test_data.as_mut_slice()), &mut metrics);
                metrics
            },
            batch_size(test_size),
        )
    });
}

#[inline(never)]
fn bench_select(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    if test_size == 0 {
        return;
    }

    let bench_name = format!("deterministic_select-{pattern_name}-{test_size}");
    let k = test_size / 2;

    if env::var("MEASURE_COMP").is_ok() {
        measure_counters(&bench_name, test_size, |metrics| {
            let mut test_data = pattern_provider(test_size);
            let _ = select::select_in_place(black_box(test_data.as_mut_slice()), k, metrics);
        });
        return;
    }

    c.bench_function(&bench_name, |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |mut test_data| {
                let mut metrics = Metrics::new();
                select::select_in_place(black_box(test_data.as_mut_slice()), k, &mut metrics)
            },
            batch_size(test_size),
        )
    });
}

#[inline(never)]
fn bench_closest(c: &mut Criterion, test_size: usize, pattern_name: &str, side: f64) {
    if test_size < 2 {
        return;
    }

    let bench_name = format!("closest_pair-{pattern_name}-{test_size}");
    let points = patterns::random_points(test_size, side);

    if env::var("MEASURE_COMP").is_ok() {
        measure_counters(&bench_name, test_size, |metrics| {
            let _ = closest_pair::closest(black_box(points.as_slice()), metrics);
        });
        return;
    }

    c.bench_function(&bench_name, |b| {
        b.iter(|| {
            let mut metrics = Metrics::new();
            closest_pair::closest(black_box(points.as_slice()), &mut metrics)
        })
    });
}

fn bench_patterns(c: &mut Criterion, test_size: usize) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("random_z1", |size| patterns::random_zipf(size, 1.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers {
        if test_size < 3 && pattern_name != "random" {
            continue;
        }

        bench_sort::<merge_sort::SortImpl>(c, test_size, pattern_name, pattern_provider);

        // Lomuto partitioning goes quadratic with few distinct values.
        let few_distinct = matches!(pattern_name, "random_dense" | "random_binary");
        if !(few_distinct && test_size > 10_000) {
            bench_sort::<quick_sort::SortImpl>(c, test_size, pattern_name, pattern_provider);
        }
        bench_select(c, test_size, pattern_name, pattern_provider);
    }

    bench_closest(c, test_size, "uniform", 1000.0);
    bench_closest(c, test_size, "dense", 1.0);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [
        0, 1, 2, 3, 5, 8, 16, 17, 24, 25, 32, 33, 50, 101, 200, 500, 1_000, 2_048, 10_000,
        100_000,
    ];

    for test_size in test_sizes {
        bench_patterns(c, test_size);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
