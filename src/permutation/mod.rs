//! # Permutation genomes
//!
//! Strategies for genomes that are orderings of the indices `0..n`, as used by
//! tour problems such as the travelling salesman. Every operator here keeps
//! the invariant that each index in `0..n` appears exactly once.
pub mod disjoint_set;
pub mod edge_recombination;
pub mod generator;
pub mod mutation;

pub use disjoint_set::DisjointSet;
pub use edge_recombination::EdgeRecombination;
pub use generator::PermutationGenerator;
pub use mutation::{RelocateMutation, SwapMutation};

/// An ordering of the indices `0..n`.
pub type Permutation = Vec<usize>;

/// Returns `true` if `values` holds every index in `0..values.len()` exactly once.
pub fn is_permutation(values: &[usize]) -> bool {
    let mut seen = vec![false; values.len()];
    values.iter().all(|&value| {
        value < seen.len() && !std::mem::replace(&mut seen[value], true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[0]));
        assert!(is_permutation(&[2, 0, 1]));
        assert!(!is_permutation(&[1]));
        assert!(!is_permutation(&[0, 0, 1]));
        assert!(!is_permutation(&[0, 1, 3]));
    }
}
