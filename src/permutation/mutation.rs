//! Mutation operators for permutations.
//!
//! Both operators move at most a couple of elements, so the mutated genome
//! is still a permutation of the same indices.

use rand::seq::index;
use rand::Rng;

use crate::mutation::Mutator;
use crate::permutation::Permutation;

/// Swaps the elements at two distinct random positions.
///
/// Genomes shorter than two elements are left untouched.
#[derive(Debug, Clone)]
pub struct SwapMutation<R> {
    rng: R,
}

impl<R: Rng> SwapMutation<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Mutator<Permutation> for SwapMutation<R> {
    fn mutate(&mut self, genome: &mut Permutation) {
        if genome.len() < 2 {
            return;
        }

        let positions = index::sample(&mut self.rng, genome.len(), 2);
        genome.swap(positions.index(0), positions.index(1));
    }
}

/// Moves one element to a different position, shifting the elements in
/// between by one.
///
/// Two cut points are drawn in `0..=n`. When the left one comes first, the
/// element at it moves to just before the right one; otherwise the element
/// just before the left cut moves to the right cut.
///
/// ```rust
/// use genetics::mutation::Mutator;
/// use genetics::permutation::{is_permutation, RelocateMutation};
/// use genetics::rng::RandomNumberGenerator;
///
/// let mut relocate = RelocateMutation::new(RandomNumberGenerator::from_seed(9));
/// let mut genome = vec![0, 1, 2, 3, 4, 5];
/// relocate.mutate(&mut genome);
/// assert!(is_permutation(&genome));
/// ```
#[derive(Debug, Clone)]
pub struct RelocateMutation<R> {
    rng: R,
}

impl<R: Rng> RelocateMutation<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Mutator<Permutation> for RelocateMutation<R> {
    fn mutate(&mut self, genome: &mut Permutation) {
        let size = genome.len();
        let left = self.rng.gen_range(0..=size);
        let right = self.rng.gen_range(0..=size);

        if left < right {
            genome[left..right].rotate_left(1);
        } else if right < left {
            genome[right..left].rotate_right(1);
        }
    }
}
