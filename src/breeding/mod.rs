//! # Breeding
//!
//! A `Breeder` produces one child genome from two parent genomes. The engine
//! applies it to every unordered pair of the breeding population, see
//! [`breed_all_pairs`].
//!
//! Any `FnMut(&G, &G) -> G` is a breeder:
//!
//! ```rust
//! use genetics::breeding::Breeder;
//!
//! let mut average = |a: &f64, b: &f64| (a + b) / 2.0;
//! assert_eq!(average.breed(&1.0, &3.0), 2.0);
//! ```
pub mod mutating;

use crate::candidate::EvaluatedCandidate;

pub use mutating::MutatingBreeder;

/// Trait for crossover operators.
pub trait Breeder<G> {
    /// Combines two parents into a new, unevaluated child genome.
    fn breed(&mut self, father: &G, mother: &G) -> G;
}

impl<G, F> Breeder<G> for F
where
    F: FnMut(&G, &G) -> G,
{
    fn breed(&mut self, father: &G, mother: &G) -> G {
        self(father, mother)
    }
}

/// Breeds every unordered pair of distinct members exactly once.
///
/// For a population of size `k` this yields `k * (k - 1) / 2` unevaluated
/// children. The father is always the member with the lower index, and
/// children come out ordered by father, then by mother.
pub fn breed_all_pairs<G, R, B>(
    breeder: &mut B,
    population: &[EvaluatedCandidate<G, R>],
) -> Vec<EvaluatedCandidate<G, R>>
where
    B: Breeder<G> + ?Sized,
{
    let k = population.len();
    let mut children = Vec::with_capacity(k * k.saturating_sub(1) / 2);

    for (idx, father) in population.iter().enumerate() {
        for mother in &population[idx + 1..] {
            let child = breeder.breed(father.genome(), mother.genome());
            children.push(EvaluatedCandidate::new(child));
        }
    }

    children
}
