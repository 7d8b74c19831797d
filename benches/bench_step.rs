use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evolab::algorithm::{create, Algorithm, AlgorithmId};
use evolab::problem::benchmarks::ProblemId;
use evolab::problem::Problem;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_step");
    for id in AlgorithmId::ALL {
        group.bench_function(id.as_id(), |b| {
            let problem = Problem::benchmark(ProblemId::Sphere, 10);
            let mut engine = create(id, problem, None).unwrap();
            engine.initialize_population().unwrap();
            b.iter(|| {
                black_box(&mut engine).step().unwrap();
            })
        });
    }
    group.finish();
}

fn bench_run_to_convergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_run");
    group.sample_size(10);
    for id in [AlgorithmId::Genetic, AlgorithmId::DifferentialEvolution] {
        group.bench_function(id.as_id(), |b| {
            b.iter(|| {
                let problem = Problem::benchmark(ProblemId::Sphere, 10);
                let mut engine = create(id, problem, None).unwrap();
                engine.run().unwrap();
                black_box(engine.best_raw())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step, bench_run_to_convergence);
criterion_main!(benches);
