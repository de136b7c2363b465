use crate::{
    breeding::Breeder,
    error::{GeneticError, Result},
    selection::Selector,
};

use super::{
    challenge::{Evaluator, Generator},
    comparator::{Comparator, Minimize},
    launcher::GeneticAlgorithm,
    options::EngineOptions,
};

/// Collects the options and strategies of a [`GeneticAlgorithm`].
///
/// The generator, evaluator, selector and breeder are required. Options
/// default to `EngineOptions::default()` and the comparator to [`Minimize`].
pub struct GeneticAlgorithmBuilder<G, R> {
    options: EngineOptions,
    generator: Option<Box<dyn Generator<G>>>,
    evaluator: Option<Box<dyn Evaluator<G, R>>>,
    selector: Option<Box<dyn Selector<G, R>>>,
    breeder: Option<Box<dyn Breeder<G>>>,
    comparator: Option<Box<dyn Comparator<R>>>,
}

impl<G, R> GeneticAlgorithmBuilder<G, R> {
    pub fn new() -> Self {
        Self {
            options: EngineOptions::default(),
            generator: None,
            evaluator: None,
            selector: None,
            breeder: None,
            comparator: None,
        }
    }

    pub fn options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn generator(mut self, generator: impl Generator<G> + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    pub fn evaluator(mut self, evaluator: impl Evaluator<G, R> + 'static) -> Self {
        self.evaluator = Some(Box::new(evaluator));
        self
    }

    pub fn selector(mut self, selector: impl Selector<G, R> + 'static) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    pub fn breeder(mut self, breeder: impl Breeder<G> + 'static) -> Self {
        self.breeder = Some(Box::new(breeder));
        self
    }

    pub fn comparator(mut self, comparator: impl Comparator<R> + 'static) -> Self {
        self.comparator = Some(Box::new(comparator));
        self
    }

    pub fn build(self) -> Result<GeneticAlgorithm<G, R>>
    where
        R: PartialOrd,
    {
        let generator = self
            .generator
            .ok_or_else(|| GeneticError::Configuration("Generator not specified".to_string()))?;

        let evaluator = self
            .evaluator
            .ok_or_else(|| GeneticError::Configuration("Evaluator not specified".to_string()))?;

        let selector = self
            .selector
            .ok_or_else(|| GeneticError::Configuration("Selector not specified".to_string()))?;

        let breeder = self
            .breeder
            .ok_or_else(|| GeneticError::Configuration("Breeder not specified".to_string()))?;

        let comparator = self
            .comparator
            .unwrap_or_else(|| Box::new(Minimize) as Box<dyn Comparator<R>>);

        Ok(GeneticAlgorithm::from_parts(
            self.options,
            generator,
            evaluator,
            selector,
            breeder,
            comparator,
        ))
    }
}

impl<G, R> Default for GeneticAlgorithmBuilder<G, R> {
    fn default() -> Self {
        Self::new()
    }
}
