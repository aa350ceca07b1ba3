use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rowmat::{ops, RowMatrix, Shape};

fn square(n: usize, seed: usize) -> RowMatrix<f64> {
    RowMatrix::from_fn(Shape::new(n, n), |i, j| (((i * n + j + seed) % 1000) as f64) * 0.01)
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_f64");
    group.sample_size(20);

    for size in [32, 64, 128, 256].iter() {
        let n = *size;
        let a = square(n, 0);
        let b = square(n, 500);

        group.throughput(Throughput::Elements((n * n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(ops::multiply(a.clone(), b.clone())))
        });
    }

    group.finish();
}

fn bench_gemm(c: &mut Criterion) {
    let mut group = c.benchmark_group("gemm_f64");
    group.sample_size(20);

    for size in [32, 64, 128, 256].iter() {
        let n = *size;
        let a = square(n, 0);
        let b = square(n, 500);
        let acc = square(n, 250);

        group.throughput(Throughput::Elements((n * n * n) as u64));
        group.bench_with_input(BenchmarkId::new("corrected", n), &n, |bench, _| {
            bench.iter(|| black_box(ops::gemm(a.clone(), b.clone(), acc.clone())))
        });
        group.bench_with_input(BenchmarkId::new("in_place", n), &n, |bench, _| {
            let mut c = acc.clone();
            bench.iter(|| black_box(ops::gemm_in_place(a.clone(), b.clone(), &mut c)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply, bench_gemm);
criterion_main!(benches);
