use std::f64::consts::PI;

use genetics::{
    breeding::MutatingBreeder,
    candidate::EvaluatedCandidate,
    evolution::{EngineOptions, Evaluator, GeneticAlgorithm, Stage},
    mutation::{MutateWithProbability, MutationChain},
    permutation::{
        is_permutation, EdgeRecombination, Permutation, PermutationGenerator, RelocateMutation,
        SwapMutation,
    },
    rng::{RandomNumberGenerator, ThreadSafeRng},
    selection::{ElitistSelection, RouletteWheelSelection},
};

/// Length of the closed tour through a distance matrix.
struct PathEvaluator {
    matrix: Vec<Vec<i64>>,
}

impl PathEvaluator {
    /// Cities evenly spaced on a circle, so visiting them in index order
    /// (or its reverse) is the shortest tour.
    fn circle(cities: usize) -> Self {
        let points: Vec<(f64, f64)> = (0..cities)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / cities as f64;
                (angle.cos() * 1000.0, angle.sin() * 1000.0)
            })
            .collect();

        let matrix = points
            .iter()
            .map(|&(x1, y1)| {
                points
                    .iter()
                    .map(|&(x2, y2)| ((x1 - x2).hypot(y1 - y2)).round() as i64)
                    .collect()
            })
            .collect();

        Self { matrix }
    }
}

impl Evaluator<Permutation, i64> for PathEvaluator {
    fn evaluate(&self, tour: &Permutation) -> i64 {
        let closing = self.matrix[tour[tour.len() - 1]][tour[0]];
        tour.windows(2)
            .map(|pair| self.matrix[pair[0]][pair[1]])
            .sum::<i64>()
            + closing
    }
}

#[test]
fn test_path_evaluator() {
    let evaluator = PathEvaluator::circle(4);
    // A square of radius 1000 has sides of about 1414.
    assert_eq!(evaluator.evaluate(&vec![0, 1, 2, 3]), 4 * 1414);
    assert_eq!(evaluator.evaluate(&vec![3, 2, 1, 0]), 4 * 1414);
    assert_eq!(evaluator.evaluate(&vec![0, 2, 1, 3]), 2 * 2000 + 2 * 1414);
}

#[test]
fn test_salesman_improves_on_initial_tours() {
    let cities = 12;
    let rng = ThreadSafeRng::from_seed(2018);

    let mutation: MutationChain<Permutation> = MutationChain::new()
        .with(MutateWithProbability::new(rng.clone(), 0.2, SwapMutation::new(rng.clone())).unwrap())
        .with(
            MutateWithProbability::new(rng.clone(), 0.2, RelocateMutation::new(rng.clone()))
                .unwrap(),
        );

    let mut algorithm = GeneticAlgorithm::<Permutation, i64>::builder()
        .options(EngineOptions::new(60, 12, 30))
        .generator(PermutationGenerator::new(cities, rng.clone()))
        .evaluator(PathEvaluator::circle(cities))
        .selector(ElitistSelection::minimizing())
        .breeder(MutatingBreeder::new(EdgeRecombination::new(rng.clone()), mutation))
        .build()
        .unwrap();

    let mut best_initial = i64::MAX;
    let mut record_initial =
        |_: &EngineOptions, stage: Stage, population: &[EvaluatedCandidate<Permutation, i64>]| {
            if stage == Stage::Generated {
                for candidate in population {
                    best_initial = best_initial.min(*candidate.fitness().unwrap());
                }
            }
        };

    let best = algorithm.run_observed(&mut [&mut record_initial]).unwrap();

    assert!(is_permutation(best.genome()));
    assert_eq!(best.genome().len(), cities);
    assert!(*best.fitness().unwrap() <= best_initial);
}

#[test]
fn test_salesman_with_roulette_selection() {
    let cities = 10;
    let rng = ThreadSafeRng::from_seed(77);

    let mut algorithm = GeneticAlgorithm::<Permutation, i64>::builder()
        .options(EngineOptions::new(30, 8, 5))
        .generator(PermutationGenerator::new(cities, rng.clone()))
        .evaluator(PathEvaluator::circle(cities))
        .selector(RouletteWheelSelection::with_probability_function(
            RandomNumberGenerator::from_seed(78),
            |length: f64| length / 1_000.0,
        ))
        .breeder(EdgeRecombination::new(rng.clone()))
        .build()
        .unwrap();

    let best = algorithm.run().unwrap();

    assert!(is_permutation(best.genome()));
    assert_eq!(best.genome().len(), cities);
}

#[test]
fn test_edge_recombination_of_optimal_tours_stays_optimal() {
    let cities = 20;
    let evaluator = PathEvaluator::circle(cities);
    let forward: Permutation = (0..cities).collect();
    let mut rotated = forward.clone();
    rotated.rotate_left(7);
    rotated.reverse();

    let mut crossover = EdgeRecombination::new(RandomNumberGenerator::from_seed(1));
    let child = crossover.recombine(&forward, &rotated);

    assert_eq!(evaluator.evaluate(&child), evaluator.evaluate(&forward));
}
