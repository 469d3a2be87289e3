use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant fixtures, well away from singular
// ---------------------------------------------------------------------------

fn entry(i: usize, j: usize) -> f64 {
    ((i + 1) * (j + 2) % 7) as f64 + if i == j { 10.0 } else { 0.0 }
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul_3x3(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_3x3");

    g.bench_function("fixmat", |b| {
        let a = fixmat::Matrix3::from_fn(|i, j| (i * 3 + j + 1) as f64);
        let m = fixmat::Matrix3::from_fn(|i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix3::from_fn(|i, j| (i * 3 + j + 1) as f64);
        let m = nalgebra::Matrix3::from_fn(|i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

fn matmul_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_6x6");

    g.bench_function("fixmat", |b| {
        let a = fixmat::Matrix6::from_fn(|i, j| (i * 6 + j + 1) as f64);
        let m = fixmat::Matrix6::from_fn(|i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix6::from_fn(|i, j| (i * 6 + j + 1) as f64);
        let m = nalgebra::Matrix6::from_fn(|i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Determinant
// ---------------------------------------------------------------------------

fn det_3x3(c: &mut Criterion) {
    let mut g = c.benchmark_group("det_3x3");

    g.bench_function("fixmat", |b| {
        let a = fixmat::Matrix3::from_fn(entry);
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix3::from_fn(entry);
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.finish();
}

fn det_5x5(c: &mut Criterion) {
    let mut g = c.benchmark_group("det_5x5");

    g.bench_function("fixmat", |b| {
        let a = fixmat::Matrix5::from_fn(entry);
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix5::from_fn(entry);
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Inverse
// ---------------------------------------------------------------------------

fn inverse_3x3(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse_3x3");

    g.bench_function("fixmat", |b| {
        let a = fixmat::Matrix3::from_fn(entry);
        b.iter(|| std::hint::black_box(&a).inverse())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix3::from_fn(entry);
        b.iter(|| std::hint::black_box(&a).try_inverse())
    });

    g.finish();
}

fn inverse_4x4(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse_4x4");

    g.bench_function("fixmat", |b| {
        let a = fixmat::Matrix4::from_fn(entry);
        b.iter(|| std::hint::black_box(&a).inverse())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix4::from_fn(entry);
        b.iter(|| std::hint::black_box(&a).try_inverse())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

fn rank_4x4(c: &mut Criterion) {
    let mut g = c.benchmark_group("rank_4x4");

    g.bench_function("fixmat", |b| {
        let a = fixmat::Matrix4::from_fn(|i, j| ((i + 1) * (j + 1)) as f64);
        b.iter(|| std::hint::black_box(&a).rank())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix4::from_fn(|i, j| ((i + 1) * (j + 1)) as f64);
        b.iter(|| std::hint::black_box(&a).rank(1e-12))
    });

    g.finish();
}

criterion_group!(
    benches,
    matmul_3x3,
    matmul_6x6,
    det_3x3,
    det_5x5,
    inverse_3x3,
    inverse_4x4,
    rank_4x4,
);
criterion_main!(benches);
