use std::fmt;

use crate::mutation::Mutator;

/// Applies a sequence of mutators in order.
pub struct MutationChain<G> {
    mutations: Vec<Box<dyn Mutator<G>>>,
}

impl<G> MutationChain<G> {
    pub fn new() -> Self {
        Self {
            mutations: Vec::new(),
        }
    }

    /// Appends a mutator, builder style.
    pub fn with(mut self, mutator: impl Mutator<G> + 'static) -> Self {
        self.push(mutator);
        self
    }

    pub fn push(&mut self, mutator: impl Mutator<G> + 'static) {
        self.mutations.push(Box::new(mutator));
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }
}

impl<G> fmt::Debug for MutationChain<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationChain")
            .field("mutations", &self.mutations.len())
            .finish()
    }
}

impl<G> Default for MutationChain<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> Mutator<G> for MutationChain<G> {
    fn mutate(&mut self, genome: &mut G) {
        for mutation in self.mutations.iter_mut() {
            mutation.mutate(genome);
        }
    }
}
