use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genetics::{
    evolution::{EngineOptions, Generator, GeneticAlgorithm},
    permutation::{EdgeRecombination, Permutation, PermutationGenerator},
    rng::RandomNumberGenerator,
    selection::ElitistSelection,
};

fn bench_edge_recombination(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_recombination");
    for size in [10, 100, 1000, 10000].iter() {
        let mut generator = PermutationGenerator::new(*size, RandomNumberGenerator::from_seed(1));
        let lhs = generator.generate();
        let rhs = generator.generate();
        let mut crossover = EdgeRecombination::new(RandomNumberGenerator::from_seed(2));

        group.bench_function(&format!("edge_recombination_{}", size), |b| {
            b.iter(|| crossover.recombine(black_box(&lhs), black_box(&rhs)))
        });
    }
    group.finish();
}

fn bench_salesman_run(c: &mut Criterion) {
    let cities = 50;
    let matrix: Vec<Vec<u64>> = (0..cities)
        .map(|i: u64| (0..cities).map(|j: u64| (i * 7 + j * 13) % 97 + 1).collect())
        .collect();

    c.bench_function("salesman_run_50_cities", |b| {
        b.iter(|| {
            let matrix = matrix.clone();
            let mut algorithm = GeneticAlgorithm::<Permutation, u64>::builder()
                .options(EngineOptions::new(100, 15, 10))
                .generator(PermutationGenerator::new(
                    cities as usize,
                    RandomNumberGenerator::from_seed(3),
                ))
                .evaluator(move |tour: &Permutation| {
                    let closing = matrix[tour[tour.len() - 1]][tour[0]];
                    tour.windows(2).map(|pair| matrix[pair[0]][pair[1]]).sum::<u64>() + closing
                })
                .selector(ElitistSelection::minimizing())
                .breeder(EdgeRecombination::new(RandomNumberGenerator::from_seed(4)))
                .build()
                .unwrap();

            black_box(algorithm.run().unwrap())
        })
    });
}

criterion_group!(benches, bench_edge_recombination, bench_salesman_run);
criterion_main!(benches);
