use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genset::{EnvParam, Set};

static SIZE: EnvParam<usize> = EnvParam::new("GENSET_BENCH_SIZE", "10000");
static LOG_LEVEL: EnvParam<tracing::Level> = EnvParam::new("GENSET_LOG", "warn");

fn generate_set(size: usize) -> Set<usize> {
    let mut s = Set::new();
    for i in 0..size {
        s.add(i);
    }
    s
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt().with_max_level(LOG_LEVEL.get()).try_init();

    let n = SIZE.get();
    let full = generate_set(n);
    let other = generate_set(n);
    // partial overlap with `full`
    let half = generate_set(n / 2);

    c.bench_function(&format!("union-{n}x{n}"), |b| {
        b.iter(|| black_box(&full).union(black_box(&other)))
    });
    c.bench_function(&format!("inter-{}x{}", n, n / 2), |b| {
        b.iter(|| black_box(&full).inter(black_box(&half)))
    });
    c.bench_function(&format!("diff-{}x{}", n, n / 2), |b| {
        b.iter(|| black_box(&full).diff(black_box(&half)))
    });
    c.bench_function(&format!("sym-diff-{}x{}", n, n / 2), |b| {
        b.iter(|| black_box(&full).sym_diff(black_box(&half)))
    });
    c.bench_function(&format!("is-subset-{}x{}", n / 2, n), |b| {
        b.iter(|| black_box(&half).is_subset(black_box(&full)))
    });
}

criterion_group!(benches, criterion_benchmark);

criterion_main!(benches);
