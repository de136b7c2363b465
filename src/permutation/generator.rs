use rand::seq::SliceRandom;
use rand::Rng;

use crate::evolution::Generator;
use crate::permutation::Permutation;

/// Generates uniformly shuffled permutations of `0..size`.
///
/// ```rust
/// use genetics::evolution::Generator;
/// use genetics::permutation::{is_permutation, PermutationGenerator};
/// use genetics::rng::RandomNumberGenerator;
///
/// let mut generator = PermutationGenerator::new(8, RandomNumberGenerator::from_seed(3));
/// let genome = generator.generate();
/// assert_eq!(genome.len(), 8);
/// assert!(is_permutation(&genome));
/// ```
#[derive(Debug, Clone)]
pub struct PermutationGenerator<R> {
    size: usize,
    rng: R,
}

impl<R: Rng> PermutationGenerator<R> {
    pub fn new(size: usize, rng: R) -> Self {
        Self { size, rng }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl<R: Rng> Generator<Permutation> for PermutationGenerator<R> {
    fn generate(&mut self) -> Permutation {
        let mut genome: Permutation = (0..self.size).collect();
        genome.shuffle(&mut self.rng);
        genome
    }
}
