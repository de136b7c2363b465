use crate::candidate::EvaluatedCandidate;
use crate::error::Result;
use crate::evolution::{Comparator, Maximize, Minimize};
use crate::selection::selection_strategy::{ensure_selectable, retain_indices, Selector};

/// A selection strategy that keeps the best individuals based on fitness.
///
/// The population is partitioned so that the `n` best candidates per the
/// comparator come first, without sorting either side of the partition, and
/// the rest is dropped. Elitism guarantees that no discarded candidate is
/// strictly better than a kept one.
///
/// # Examples
///
/// ```
/// use genetics::candidate::EvaluatedCandidate;
/// use genetics::evolution::Maximize;
/// use genetics::selection::{ElitistSelection, Selector};
///
/// let fitness = [0.5, 0.8, 0.3];
/// let mut population: Vec<EvaluatedCandidate<usize, f64>> =
///     (0..3).map(EvaluatedCandidate::new).collect();
/// for candidate in population.iter_mut() {
///     candidate.evaluate(&|idx: &usize| fitness[*idx]);
/// }
///
/// // For maximization problems, higher fitness is better
/// let mut selection = ElitistSelection::new(Maximize);
/// selection.select(&mut population, 2)?;
///
/// let mut kept: Vec<usize> = population.iter().map(|c| *c.genome()).collect();
/// kept.sort();
/// assert_eq!(kept, vec![0, 1]);
/// # Ok::<(), genetics::error::GeneticError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ElitistSelection<C = Minimize> {
    comparator: C,
}

impl<C> ElitistSelection<C> {
    pub fn new(comparator: C) -> Self {
        Self { comparator }
    }
}

impl ElitistSelection<Minimize> {
    /// Lower fitness is better.
    pub fn minimizing() -> Self {
        Self::new(Minimize)
    }
}

impl ElitistSelection<Maximize> {
    /// Higher fitness is better.
    pub fn maximizing() -> Self {
        Self::new(Maximize)
    }
}

impl Default for ElitistSelection<Minimize> {
    fn default() -> Self {
        Self::minimizing()
    }
}

impl<G, R, C> Selector<G, R> for ElitistSelection<C>
where
    C: Comparator<R>,
{
    fn select(
        &mut self,
        population: &mut Vec<EvaluatedCandidate<G, R>>,
        num_to_select: usize,
    ) -> Result<()> {
        ensure_selectable(population.len(), num_to_select)?;

        let fitness: Vec<&R> = population
            .iter()
            .map(EvaluatedCandidate::fitness)
            .collect::<Result<_>>()?;

        let mut order: Vec<usize> = (0..population.len()).collect();
        if num_to_select < order.len() {
            order.select_nth_unstable_by(num_to_select, |&a, &b| {
                self.comparator.best_first(fitness[a], fitness[b])
            });
        }
        order.truncate(num_to_select);

        retain_indices(population, &order);
        Ok(())
    }
}
