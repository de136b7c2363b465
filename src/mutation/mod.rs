//! # Mutation
//!
//! A `Mutator` perturbs a genome in place. Mutators compose: wrap one in
//! [`MutateWithProbability`] to apply it only sometimes, or collect several
//! into a [`MutationChain`].
pub mod chain;
pub mod probability;

pub use chain::MutationChain;
pub use probability::MutateWithProbability;

/// Trait for in-place mutation operators.
pub trait Mutator<G> {
    fn mutate(&mut self, genome: &mut G);
}

impl<G, F> Mutator<G> for F
where
    F: FnMut(&mut G),
{
    fn mutate(&mut self, genome: &mut G) {
        self(genome)
    }
}
