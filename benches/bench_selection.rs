use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use genetics::{
    candidate::EvaluatedCandidate,
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, RouletteWheelSelection, Selector},
};
use rand::Rng;

fn population(size: usize) -> Vec<EvaluatedCandidate<usize, f64>> {
    let mut rng = RandomNumberGenerator::from_seed(5);
    (0..size)
        .map(|idx| {
            let score: f64 = rng.gen_range(0.1..100.0);
            let mut candidate = EvaluatedCandidate::new(idx);
            candidate.evaluate(&|_: &usize| score);
            candidate
        })
        .collect()
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    for size in [100, 1000, 10000].iter() {
        let base = population(*size);
        let keep = size / 10;

        let mut elitist = ElitistSelection::minimizing();
        group.bench_function(&format!("elitist_{}", size), |b| {
            b.iter_batched(
                || base.clone(),
                |mut population| {
                    elitist.select(black_box(&mut population), keep).unwrap();
                    population
                },
                BatchSize::SmallInput,
            )
        });

        let mut roulette = RouletteWheelSelection::new(RandomNumberGenerator::from_seed(6));
        group.bench_function(&format!("roulette_{}", size), |b| {
            b.iter_batched(
                || base.clone(),
                |mut population| {
                    roulette.select(black_box(&mut population), keep).unwrap();
                    population
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
