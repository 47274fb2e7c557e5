//! Report rendering benchmarks
//!
//! Measures combined and per-source rendering across growing configuration sets.

use confparse_benchmarks::{create_config_set, criterion_config};
use confparse_core::report::{produce_report, sanitize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Benchmark both report modes over an increasing number of sources
fn bench_produce_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("produce_report");

    for source_count in [1, 10, 50].iter() {
        group.throughput(Throughput::Elements(*source_count as u64));
        let set = create_config_set(*source_count, 20);

        group.bench_with_input(BenchmarkId::new("per_source", source_count), &set, |b, set| {
            b.iter(|| black_box(produce_report(set, false).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("combined", source_count), &set, |b, set| {
            b.iter(|| black_box(produce_report(set, true).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the carriage-return sanitation pass on its own
fn bench_sanitize(c: &mut Criterion) {
    let text = produce_report(&create_config_set(10, 50), true).unwrap();

    c.bench_function("sanitize_combined_report", |b| {
        b.iter(|| black_box(sanitize(&text)));
    });
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_produce_report, bench_sanitize
}
criterion_main!(benches);
