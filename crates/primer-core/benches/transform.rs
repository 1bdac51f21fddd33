//! Transformer throughput, ASCII vs. multi-byte input

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use primer_core::{Reverser, Transformer, Uppercaser};

fn inputs() -> Vec<(&'static str, String)> {
    vec![
        ("ascii", "John".repeat(256)),
        ("latin1", "Dînah".repeat(256)),
        ("cjk", "日本語".repeat(256)),
    ]
}

fn bench_transformers(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for (label, data) in inputs() {
        let reverser = Reverser::new(data.clone());
        let uppercaser = Uppercaser::new(data);

        group.bench_with_input(BenchmarkId::new("reverse", label), &reverser, |b, t| {
            b.iter(|| black_box(t.transform()))
        });
        group.bench_with_input(BenchmarkId::new("uppercase", label), &uppercaser, |b, t| {
            b.iter(|| black_box(t.transform()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transformers);
criterion_main!(benches);
