//! Benchmarks for mdmend repair performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks repair synthetic pasted reports of varying size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic pasted report with the given number of sections.
fn create_test_report(section_count: usize) -> String {
    let mut report = String::from("Benchmark Report\n\n");

    for i in 1..=section_count {
        report.push_str(&format!("{}.0 Section {}\n", i, i));
        report.push_str("Some introductory prose for this section of the report.\n");
        report.push_str(&format!("{}.1 Details\n", i));
        report.push_str(&format!(
            "Table {}: Results | Metric | Value | | :--- | :--- | | rows | {} | | cols | 2 |\n",
            i,
            i * 10
        ));
        report.push('\n');
    }

    report
}

/// Benchmark single-document repair at various sizes.
fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");

    for section_count in [1, 10, 100].iter() {
        let report = create_test_report(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| mdmend::repair(black_box(report.as_str())));
        });
    }

    group.finish();
}

/// Benchmark repair with statistics collection.
fn bench_repair_with_stats(c: &mut Criterion) {
    let report = create_test_report(50);
    let options = mdmend::RepairOptions::new().with_stats(true);

    c.bench_function("repair_with_stats", |b| {
        b.iter(|| mdmend::repair_with_options(black_box(report.as_str()), &options));
    });
}

/// Benchmark parallel batch repair.
fn bench_repair_batch(c: &mut Criterion) {
    let reports: Vec<String> = (0..64).map(|_| create_test_report(10)).collect();
    let options = mdmend::RepairOptions::default();

    c.bench_function("repair_batch_64", |b| {
        b.iter(|| mdmend::repair_batch(black_box(&reports), &options));
    });
}

criterion_group!(
    benches,
    bench_repair,
    bench_repair_with_stats,
    bench_repair_batch,
);
criterion_main!(benches);
