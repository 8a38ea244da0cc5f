use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use parqsort::patterns;

fn bench_sort(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut [i32]),
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{bench_name}-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |mut test_data| sort_func(black_box(test_data.as_mut_slice())),
            batch_size,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    // Fresh inputs per sample, a fixed seed would bench one fixed input.
    patterns::disable_fixed_seed();

    let test_sizes = [1_000, 100_000, 1_000_000];

    let test_patterns: [(&str, fn(usize) -> Vec<i32>); 4] = [
        ("random", patterns::random),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saw_mixed", |size| {
            patterns::saw_mixed(size, (size as f64 / 22.0).round() as usize)
        }),
    ];

    for test_size in test_sizes {
        for (pattern_name, pattern_provider) in test_patterns {
            bench_sort(
                c,
                test_size,
                pattern_name,
                pattern_provider,
                "rust_std_unstable",
                |v| v.sort_unstable(),
            );

            bench_sort(
                c,
                test_size,
                pattern_name,
                pattern_provider,
                "parqsort_seq",
                |v| parqsort::sort_seq(v),
            );

            bench_sort(
                c,
                test_size,
                pattern_name,
                pattern_provider,
                "parqsort_par",
                |v| parqsort::sort(v),
            );
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
