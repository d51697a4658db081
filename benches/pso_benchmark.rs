use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fastrand::Rng;
use murmuration::core::Bounds;
use murmuration::swarm::PSO;
use murmuration::test_functions::Ackley;

fn pso_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("PSO");
    for n in [2, 3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("Ackley", n), &n, |b, ndim| {
            let problem = Ackley::default();
            let bounds: Bounds = vec![(-10.0, 10.0); *ndim].into();
            let x0 = vec![5.0; *ndim];
            b.iter(|| {
                let mut pso = PSO::new(15, 30, Rng::with_seed(0));
                let summary = pso.minimize(&problem, &x0, &bounds, &mut ()).unwrap();
                black_box(&summary);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, pso_benchmark);
criterion_main!(benches);
