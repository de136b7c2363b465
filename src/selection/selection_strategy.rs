use crate::candidate::EvaluatedCandidate;
use crate::error::{GeneticError, Result};

/// Trait for selection strategies.
///
/// A selector reduces the population in place to `num_to_select` members.
/// The order of the survivors is unspecified.
///
/// # Examples
///
/// ```
/// use genetics::candidate::EvaluatedCandidate;
/// use genetics::selection::{ElitistSelection, Selector};
///
/// let mut population: Vec<EvaluatedCandidate<f64, f64>> =
///     vec![1.0, 2.0, 3.0].into_iter().map(EvaluatedCandidate::new).collect();
/// for candidate in population.iter_mut() {
///     candidate.evaluate(&|x: &f64| *x);
/// }
///
/// let mut selection = ElitistSelection::minimizing();
/// selection.select(&mut population, 2)?;
/// assert_eq!(population.len(), 2);
/// # Ok::<(), genetics::error::GeneticError>(())
/// ```
pub trait Selector<G, R> {
    /// # Errors
    ///
    /// Returns an error if:
    /// - `num_to_select` exceeds the population size
    /// - A candidate has not been evaluated
    /// - The strategy's own sampling fails
    fn select(
        &mut self,
        population: &mut Vec<EvaluatedCandidate<G, R>>,
        num_to_select: usize,
    ) -> Result<()>;
}

impl<G, R, F> Selector<G, R> for F
where
    F: FnMut(&mut Vec<EvaluatedCandidate<G, R>>, usize) -> Result<()>,
{
    fn select(
        &mut self,
        population: &mut Vec<EvaluatedCandidate<G, R>>,
        num_to_select: usize,
    ) -> Result<()> {
        self(population, num_to_select)
    }
}

pub(crate) fn ensure_selectable(population_size: usize, num_to_select: usize) -> Result<()> {
    if num_to_select > population_size {
        return Err(GeneticError::SelectionSize {
            requested: num_to_select,
            available: population_size,
        });
    }
    Ok(())
}

/// Keeps exactly the candidates at `indices` (distinct, in bounds), in that order.
pub(crate) fn retain_indices<G, R>(
    population: &mut Vec<EvaluatedCandidate<G, R>>,
    indices: &[usize],
) {
    let mut slots: Vec<Option<EvaluatedCandidate<G, R>>> =
        population.drain(..).map(Some).collect();
    population.extend(indices.iter().filter_map(|&idx| slots[idx].take()));
}
