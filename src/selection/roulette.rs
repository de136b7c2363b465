use rand::Rng;
use rand_distr::{Distribution, Exp};

use crate::candidate::EvaluatedCandidate;
use crate::error::{Result, ResultExt};
use crate::selection::selection_strategy::{ensure_selectable, retain_indices, Selector};

/// A selection strategy that samples individuals proportionally to fitness,
/// without replacement.
///
/// Every candidate draws a key from an exponential distribution whose rate is
/// `probability_function(fitness)`, and the candidates with the largest keys
/// survive. A smaller rate means a larger expected key, so the probability
/// function should map better fitness to smaller rates. The default is the
/// identity; for "lower is better" problems `|x| x` already favours small
/// fitness, while `|x| (-x).exp()` or `|x| 1.0 / x` favour large fitness.
///
/// Every candidate with a finite, positive rate keeps a non-zero chance of
/// surviving. A negative or NaN rate is an error.
///
/// # Examples
///
/// ```
/// use genetics::candidate::EvaluatedCandidate;
/// use genetics::rng::RandomNumberGenerator;
/// use genetics::selection::{RouletteWheelSelection, Selector};
///
/// let mut population: Vec<EvaluatedCandidate<f64, f64>> =
///     vec![0.5, 0.8, 0.3, 0.9, 0.1].into_iter().map(EvaluatedCandidate::new).collect();
/// for candidate in population.iter_mut() {
///     candidate.evaluate(&|x: &f64| *x);
/// }
///
/// let mut selection = RouletteWheelSelection::with_probability_function(
///     RandomNumberGenerator::from_seed(42),
///     |x: f64| (-x).exp(),
/// );
/// selection.select(&mut population, 3)?;
/// assert_eq!(population.len(), 3);
/// # Ok::<(), genetics::error::GeneticError>(())
/// ```
/// Fitness values that can be read as a sampling rate.
///
/// Implemented for the primitive numeric types by a plain `as f64` cast, so
/// large integers lose precision but never fail to convert.
pub trait SamplingRate {
    fn as_rate(&self) -> f64;
}

macro_rules! impl_sampling_rate {
    ($($ty:ty),*) => {
        $(
            impl SamplingRate for $ty {
                fn as_rate(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_sampling_rate!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[derive(Debug, Clone)]
pub struct RouletteWheelSelection<Rn, P = fn(f64) -> f64> {
    rng: Rn,
    probability_function: P,
}

fn identity(rate: f64) -> f64 {
    rate
}

impl<Rn: Rng> RouletteWheelSelection<Rn> {
    /// Creates a roulette wheel whose sampling rate is the fitness itself.
    pub fn new(rng: Rn) -> Self {
        Self {
            rng,
            probability_function: identity,
        }
    }
}

impl<Rn, P> RouletteWheelSelection<Rn, P>
where
    Rn: Rng,
    P: Fn(f64) -> f64,
{
    /// Creates a roulette wheel with a custom mapping from fitness to rate.
    ///
    /// # Arguments
    ///
    /// * `rng` - The generator the sampling keys are drawn from.
    /// * `probability_function` - Maps a fitness value, read as `f64`, to the
    ///   rate of its exponential key. Better candidates need smaller rates.
    ///
    /// # Returns
    ///
    /// A new `RouletteWheelSelection` instance.
    pub fn with_probability_function(rng: Rn, probability_function: P) -> Self {
        Self {
            rng,
            probability_function,
        }
    }

    /// Draws one sampling key per fitness value.
    fn sample_keys(&mut self, fitness: &[f64]) -> Result<Vec<f64>> {
        fitness
            .iter()
            .map(|&score| {
                let rate = (self.probability_function)(score);
                let distribution = Exp::new(rate)
                    .context(format!("Invalid sampling rate {} for fitness {}", rate, score))?;
                Ok(distribution.sample(&mut self.rng))
            })
            .collect()
    }
}

impl<G, R, Rn, P> Selector<G, R> for RouletteWheelSelection<Rn, P>
where
    R: SamplingRate,
    Rn: Rng,
    P: Fn(f64) -> f64,
{
    fn select(
        &mut self,
        population: &mut Vec<EvaluatedCandidate<G, R>>,
        num_to_select: usize,
    ) -> Result<()> {
        ensure_selectable(population.len(), num_to_select)?;

        let fitness: Vec<f64> = population
            .iter()
            .map(|candidate| candidate.fitness().map(SamplingRate::as_rate))
            .collect::<Result<_>>()?;
        let keys = self.sample_keys(&fitness)?;

        let mut order: Vec<usize> = (0..population.len()).collect();
        if num_to_select < order.len() {
            order.select_nth_unstable_by(num_to_select, |&a, &b| keys[b].total_cmp(&keys[a]));
        }
        order.truncate(num_to_select);

        retain_indices(population, &order);
        Ok(())
    }
}
