use tracing::{debug, info};

use super::{
    builder::GeneticAlgorithmBuilder,
    challenge::{Evaluator, Generator},
    comparator::Comparator,
    observer::{Observer, Stage},
    options::EngineOptions,
};
use crate::{
    breeding::{breed_all_pairs, Breeder},
    candidate::EvaluatedCandidate,
    error::{GeneticError, OptionExt, Result},
    selection::Selector,
};

/// A population: evaluated candidates in no meaningful order.
pub type Population<G, R> = Vec<EvaluatedCandidate<G, R>>;

/// The generational engine.
///
/// Each run generates and evaluates an initial population, then performs
/// `max_iterations` rounds of selection, all-pairs breeding and evaluation,
/// and finally returns the best candidate per the comparator.
///
/// # Example
///
/// ```rust
/// use genetics::evolution::{EngineOptions, GeneticAlgorithm};
/// use genetics::selection::ElitistSelection;
///
/// let mut next = 0.0;
/// let mut algorithm = GeneticAlgorithm::<f64, f64>::builder()
///     .options(EngineOptions::new(20, 5, 10))
///     .generator(move || {
///         next += 1.0;
///         next
///     })
///     .evaluator(|x: &f64| (x - 3.0).powi(2))
///     .selector(ElitistSelection::minimizing())
///     .breeder(|a: &f64, b: &f64| (a + b) / 2.0)
///     .build()?;
///
/// let best = algorithm.run()?;
/// assert!(*best.fitness()? < 1.0);
/// # Ok::<(), genetics::error::GeneticError>(())
/// ```
pub struct GeneticAlgorithm<G, R> {
    options: EngineOptions,
    generator: Box<dyn Generator<G>>,
    evaluator: Box<dyn Evaluator<G, R>>,
    selector: Box<dyn Selector<G, R>>,
    breeder: Box<dyn Breeder<G>>,
    comparator: Box<dyn Comparator<R>>,
}

impl<G, R> GeneticAlgorithm<G, R> {
    pub fn builder() -> GeneticAlgorithmBuilder<G, R> {
        GeneticAlgorithmBuilder::new()
    }

    pub(crate) fn from_parts(
        options: EngineOptions,
        generator: Box<dyn Generator<G>>,
        evaluator: Box<dyn Evaluator<G, R>>,
        selector: Box<dyn Selector<G, R>>,
        breeder: Box<dyn Breeder<G>>,
        comparator: Box<dyn Comparator<R>>,
    ) -> Self {
        Self {
            options,
            generator,
            evaluator,
            selector,
            breeder,
            comparator,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Runs the algorithm without observers.
    pub fn run(&mut self) -> Result<EvaluatedCandidate<G, R>> {
        self.run_observed(&mut [])
    }

    /// Runs the algorithm, notifying every observer at each stage checkpoint.
    ///
    /// # Arguments
    ///
    /// * `observers` - Notified in order after the initial population is
    ///   evaluated, after every selection and after every bred generation is
    ///   evaluated.
    ///
    /// # Returns
    ///
    /// A `Result` containing the best candidate of the final population, or a
    /// `GeneticError` if the run fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The selector cannot keep `breeding_population_size` candidates
    ///   (e.g. `GeneticError::SelectionSize`)
    /// - The final population is empty (`GeneticError::EmptyPopulation`)
    pub fn run_observed(
        &mut self,
        observers: &mut [&mut dyn Observer<G, R>],
    ) -> Result<EvaluatedCandidate<G, R>> {
        info!(
            initial_population = self.options.get_initial_population_size(),
            breeding_population = self.options.get_breeding_population_size(),
            iterations = self.options.get_max_iterations(),
            "Starting genetic algorithm"
        );

        let mut population: Population<G, R> = (0..self.options.get_initial_population_size())
            .map(|_| EvaluatedCandidate::new(self.generator.generate()))
            .collect();
        self.evaluate(&mut population);
        self.communicate_stage(Stage::Generated, &population, observers);

        for generation in 0..self.options.get_max_iterations() {
            self.selector
                .select(&mut population, self.options.get_breeding_population_size())?;
            debug!(generation, population = population.len(), "Selected breeding population");
            self.communicate_stage(Stage::Selected, &population, observers);

            population = breed_all_pairs(self.breeder.as_mut(), &population);
            self.evaluate(&mut population);
            debug!(generation, population = population.len(), "Bred new generation");
            self.communicate_stage(Stage::Bred, &population, observers);
        }

        let best = self.best(population)?;
        info!("Genetic algorithm finished");
        Ok(best)
    }

    fn evaluate(&self, population: &mut [EvaluatedCandidate<G, R>]) {
        for candidate in population.iter_mut() {
            candidate.evaluate(self.evaluator.as_ref());
        }
    }

    fn communicate_stage(
        &self,
        stage: Stage,
        population: &[EvaluatedCandidate<G, R>],
        observers: &mut [&mut dyn Observer<G, R>],
    ) {
        for observer in observers.iter_mut() {
            observer.observe(&self.options, stage, population);
        }
    }

    /// First maximal candidate under the comparator.
    fn best(&self, population: Population<G, R>) -> Result<EvaluatedCandidate<G, R>> {
        let mut candidates = population.into_iter();
        let mut best = candidates
            .next()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        for candidate in candidates {
            if self.comparator.is_worse(best.fitness()?, candidate.fitness()?) {
                best = candidate;
            }
        }

        Ok(best)
    }
}
