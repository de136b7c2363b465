use rand::Rng;

use crate::error::{GeneticError, Result};
use crate::mutation::Mutator;

/// Applies the inner mutator with a fixed probability.
///
/// # Examples
///
/// ```rust
/// use genetics::mutation::{MutateWithProbability, Mutator};
/// use genetics::rng::RandomNumberGenerator;
///
/// let mut always = MutateWithProbability::new(
///     RandomNumberGenerator::from_seed(1),
///     1.0,
///     |x: &mut i32| *x += 1,
/// )?;
/// let mut value = 0;
/// always.mutate(&mut value);
/// assert_eq!(value, 1);
/// # Ok::<(), genetics::error::GeneticError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MutateWithProbability<Rn, M> {
    rng: Rn,
    probability: f64,
    mutator: M,
}

impl<Rn, M> MutateWithProbability<Rn, M>
where
    Rn: Rng,
{
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `probability` is outside `[0, 1]`.
    pub fn new(rng: Rn, probability: f64, mutator: M) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must be within [0, 1], got {}",
                probability
            )));
        }

        Ok(Self {
            rng,
            probability,
            mutator,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl<G, Rn, M> Mutator<G> for MutateWithProbability<Rn, M>
where
    Rn: Rng,
    M: Mutator<G>,
{
    fn mutate(&mut self, genome: &mut G) {
        if self.rng.gen_bool(self.probability) {
            self.mutator.mutate(genome);
        }
    }
}
