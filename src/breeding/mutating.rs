use crate::breeding::Breeder;
use crate::mutation::Mutator;

/// Applies a mutation to every child produced by an inner breeder.
///
/// ```rust
/// use genetics::breeding::{Breeder, MutatingBreeder};
///
/// let mut breeder = MutatingBreeder::new(
///     |a: &Vec<u8>, b: &Vec<u8>| [&a[..1], &b[1..]].concat(),
///     |child: &mut Vec<u8>| child.reverse(),
/// );
/// assert_eq!(breeder.breed(&vec![1, 2, 3], &vec![4, 5, 6]), vec![6, 5, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct MutatingBreeder<B, M> {
    breeder: B,
    mutator: M,
}

impl<B, M> MutatingBreeder<B, M> {
    pub fn new(breeder: B, mutator: M) -> Self {
        Self { breeder, mutator }
    }

    pub fn breeder(&self) -> &B {
        &self.breeder
    }

    pub fn mutator(&self) -> &M {
        &self.mutator
    }
}

impl<G, B, M> Breeder<G> for MutatingBreeder<B, M>
where
    B: Breeder<G>,
    M: Mutator<G>,
{
    fn breed(&mut self, father: &G, mother: &G) -> G {
        let mut child = self.breeder.breed(father, mother);
        self.mutator.mutate(&mut child);
        child
    }
}
