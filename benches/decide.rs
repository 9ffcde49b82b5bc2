use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tur_palindrome::{decide, Workload, WorkloadConfig};

fn bench_decide(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide");

    for n in [0x5_u64, 0xffff, 0xffff_ffff, u64::MAX] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| decide(black_box(n)))
        });
    }

    group.finish();
}

fn bench_workload(c: &mut Criterion) {
    let workload = Workload::generate(&WorkloadConfig {
        cases: 10_000,
        ..WorkloadConfig::default()
    });

    c.bench_function("workload/10000", |b| b.iter(|| workload.verify(1)));
}

criterion_group!(benches, bench_decide, bench_workload);
criterion_main!(benches);
