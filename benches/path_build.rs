use criterion::{black_box, criterion_group, criterion_main, Criterion};
use path2d::path::{Path, WindingRule};

fn build_path(n: usize) -> Path {
    let mut p = Path::new();
    p.move_to(0.0, 0.0).unwrap();
    for i in 0..n {
        p.line_to(i as f64, (i % 17) as f64).unwrap();
    }
    p
}

fn bench_incremental_build(c: &mut Criterion) {
    c.bench_function("build_10k_segments_grown", |b| {
        b.iter(|| build_path(black_box(10_000)))
    });
    c.bench_function("build_10k_segments_presized", |b| {
        b.iter(|| {
            let mut p = Path::with_capacity(WindingRule::NonZero, 10_001);
            p.move_to(0.0, 0.0).unwrap();
            for i in 0..black_box(10_000) {
                p.line_to(i as f64, (i % 17) as f64).unwrap();
            }
            p
        })
    });
}

fn bench_bounds(c: &mut Criterion) {
    let p = build_path(10_000);
    c.bench_function("bounds_10k_segments", |b| b.iter(|| black_box(&p).bounds()));
}

criterion_group!(benches, bench_incremental_build, bench_bounds);
criterion_main!(benches);
